//! Template layers and their application order.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::feature::{Feature, FeatureSet};

/// A template directory, relative to the template root, applied as one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemplateLayer(&'static str);

impl TemplateLayer {
    pub const BASE: TemplateLayer = TemplateLayer("base");
    pub const ESLINT: TemplateLayer = TemplateLayer("eslint");
    pub const TSCONFIG: TemplateLayer = TemplateLayer("tsconfig");
    pub const ROUTER_DEFAULT: TemplateLayer = TemplateLayer("router/default");
    pub const ROUTER_UNPLUGIN: TemplateLayer = TemplateLayer("router/unplugin");
    pub const GIT_HOOKS: TemplateLayer = TemplateLayer("git-hooks");
    pub const VITEST: TemplateLayer = TemplateLayer("vitest");

    pub fn name(&self) -> &'static str {
        self.0
    }

    /// Location of the layer below `template_root`.
    pub fn dir(&self, template_root: &Path) -> PathBuf {
        self.0.split('/').fold(template_root.to_path_buf(), |dir, part| dir.join(part))
    }
}

impl fmt::Display for TemplateLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Optional layers, in the order they are applied when enabled.
const OPTIONAL_LAYERS: [(Feature, TemplateLayer); 2] = [
    (Feature::SimpleGitHooks, TemplateLayer::GIT_HOOKS),
    (Feature::Vitest, TemplateLayer::VITEST),
];

/// Resolves the ordered layer sequence for a feature set.
///
/// The shared layers come first, then exactly one routing variant, then the optional layers
/// in a fixed order that does not depend on the order features were selected in.
pub fn resolve_layers(features: &FeatureSet) -> Vec<TemplateLayer> {
    let mut layers = vec![TemplateLayer::BASE, TemplateLayer::ESLINT, TemplateLayer::TSCONFIG];

    layers.push(if features.contains(Feature::UnpluginVueRouter) {
        TemplateLayer::ROUTER_UNPLUGIN
    } else {
        TemplateLayer::ROUTER_DEFAULT
    });

    layers.extend(
        OPTIONAL_LAYERS
            .iter()
            .filter(|(feature, _)| features.contains(*feature))
            .map(|(_, layer)| *layer),
    );
    layers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(layers: &[TemplateLayer]) -> Vec<&'static str> {
        layers.iter().map(TemplateLayer::name).collect()
    }

    #[test]
    fn no_features_uses_default_router() {
        let layers = resolve_layers(&FeatureSet::new());
        assert_eq!(names(&layers), vec!["base", "eslint", "tsconfig", "router/default"]);
    }

    #[test]
    fn auto_router_replaces_default_router() {
        let features = FeatureSet::parse(["unplugin-vue-router"]).unwrap();
        let layers = resolve_layers(&features);
        assert!(layers.contains(&TemplateLayer::ROUTER_UNPLUGIN));
        assert!(!layers.contains(&TemplateLayer::ROUTER_DEFAULT));
    }

    #[test]
    fn optional_layers_follow_fixed_order() {
        let features = FeatureSet::parse(["vitest", "simple-git-hooks"]).unwrap();
        let layers = resolve_layers(&features);
        assert_eq!(
            names(&layers),
            vec!["base", "eslint", "tsconfig", "router/default", "git-hooks", "vitest"]
        );
    }

    #[test]
    fn nested_layer_dir_is_joined_per_component() {
        let dir = TemplateLayer::ROUTER_UNPLUGIN.dir(Path::new("templates"));
        assert_eq!(dir, Path::new("templates").join("router").join("unplugin"));
    }
}
