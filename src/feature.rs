//! The closed set of optional features a scaffold can be built with.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexSet;
use serde::Serialize;

use crate::error::Error;

/// An optional feature selectable when creating a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    /// File-based routing via `unplugin-vue-router`.
    UnpluginVueRouter,
    /// Commit checks via `simple-git-hooks`.
    SimpleGitHooks,
    /// Unit testing via `vitest`.
    Vitest,
}

impl Feature {
    /// Every feature, in the order they are offered to the user.
    pub const ALL: [Feature; 3] =
        [Feature::UnpluginVueRouter, Feature::SimpleGitHooks, Feature::Vitest];

    /// Identifier used on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            Feature::UnpluginVueRouter => "unplugin-vue-router",
            Feature::SimpleGitHooks => "simple-git-hooks",
            Feature::Vitest => "vitest",
        }
    }

    /// Human readable label shown in the feature prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Feature::UnpluginVueRouter => "Unplugin Vue Router (file-based routing)",
            Feature::SimpleGitHooks => "Simple Git Hooks (commit checks)",
            Feature::Vitest => "Vitest (unit testing)",
        }
    }

    fn expected() -> String {
        Feature::ALL.iter().map(Feature::id).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Feature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .into_iter()
            .find(|feature| feature.id() == s.trim())
            .ok_or_else(|| Error::InvalidFeature {
                feature: s.to_string(),
                expected: Feature::expected(),
            })
    }
}

/// Selected features, deduplicated and kept in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureSet(IndexSet<Feature>);

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses feature identifiers, rejecting anything outside the known set.
    pub fn parse<I, S>(ids: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ids.into_iter().map(|id| id.as_ref().parse::<Feature>()).collect()
    }

    pub fn insert(&mut self, feature: Feature) -> bool {
        self.0.insert(feature)
    }

    pub fn contains(&self, feature: Feature) -> bool {
        self.0.contains(&feature)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.0.iter()
    }
}

impl FromIterator<Feature> for FeatureSet {
    fn from_iter<T: IntoIterator<Item = Feature>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Boolean flags derived from a [`FeatureSet`], as seen by placeholder templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    pub needs_auto_router: bool,
    pub needs_git_hooks: bool,
    pub needs_vitest: bool,
}

impl From<&FeatureSet> for FeatureFlags {
    fn from(features: &FeatureSet) -> Self {
        Self {
            needs_auto_router: features.contains(Feature::UnpluginVueRouter),
            needs_git_hooks: features.contains(Feature::SimpleGitHooks),
            needs_vitest: features.contains(Feature::Vitest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_identifiers() {
        assert_eq!("vitest".parse::<Feature>().unwrap(), Feature::Vitest);
        assert_eq!(" simple-git-hooks ".parse::<Feature>().unwrap(), Feature::SimpleGitHooks);
    }

    #[test]
    fn rejects_unknown_identifier() {
        let err = "jest".parse::<Feature>().unwrap_err();
        match err {
            Error::InvalidFeature { feature, expected } => {
                assert_eq!(feature, "jest");
                assert_eq!(expected, "unplugin-vue-router, simple-git-hooks, vitest");
            }
            other => panic!("expected InvalidFeature, got: {other}"),
        }
    }

    #[test]
    fn feature_set_dedupes_and_keeps_order() {
        let set = FeatureSet::parse(["vitest", "unplugin-vue-router", "vitest"]).unwrap();
        let ids: Vec<_> = set.iter().map(Feature::id).collect();
        assert_eq!(ids, vec!["vitest", "unplugin-vue-router"]);
    }

    #[test]
    fn feature_set_parse_fails_on_first_unknown() {
        assert!(FeatureSet::parse(["vitest", "storybook"]).is_err());
    }

    #[test]
    fn flags_follow_membership() {
        let set: FeatureSet = [Feature::SimpleGitHooks].into_iter().collect();
        let flags = FeatureFlags::from(&set);
        assert!(!flags.needs_auto_router);
        assert!(flags.needs_git_hooks);
        assert!(!flags.needs_vitest);
        assert_eq!(
            serde_json::to_value(flags).unwrap(),
            serde_json::json!({
                "needsAutoRouter": false,
                "needsGitHooks": true,
                "needsVitest": false
            })
        );
    }
}
