//! Scaffolding orchestration.
//!
//! Runs a confirmed [`ProjectSpec`] through the stages
//! `Idle -> Preparing -> Composing -> FinalizingManifest -> Rendering -> Done`.
//! Once `Preparing` starts the run either completes or fails; nothing is rolled back.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde_json::{json, Value};

use crate::composer::{Composer, FileOperation};
use crate::config::KitsConfig;
use crate::constants::{ENV_FILE, MANIFEST_FILE, REFERENCE_FILE};
use crate::error::{Error, Result};
use crate::feature::{Feature, FeatureSet};
use crate::layer::{resolve_layers, TemplateLayer};
use crate::manifest::{deep_merge, manifest_stub, read_document, sort_dependencies, write_document};
use crate::output::{can_skip_confirmation, empty_dir};
use crate::placeholder::render_all;
use crate::project::ProjectSpec;
use crate::renderer::TemplateRenderer;

/// Progress of a scaffolding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Preparing,
    Composing,
    FinalizingManifest,
    Rendering,
    Done,
}

/// What a completed run produced.
#[derive(Debug)]
pub struct ScaffoldReport {
    /// Root of the generated project.
    pub root: PathBuf,
    /// Layers applied, in order.
    pub layers: Vec<TemplateLayer>,
    /// File operations performed while composing.
    pub operations: Vec<FileOperation>,
    /// Files produced from placeholders.
    pub rendered: Vec<PathBuf>,
    /// The target already had a `.git` directory, which was kept.
    pub has_git_directory: bool,
}

/// References added to the reference-list file per enabled feature, in layer order.
const FEATURE_REFERENCES: [(Feature, &str); 1] = [(Feature::Vitest, "./tsconfig.vitest.json")];

/// Drives a scaffolding run from an empty or confirmed target to the finished project.
pub struct Bootstrapper<'a> {
    template_root: &'a Path,
    config: &'a KitsConfig,
    engine: &'a dyn TemplateRenderer,
    stage: Stage,
}

impl<'a> Bootstrapper<'a> {
    pub fn new(
        template_root: &'a Path,
        config: &'a KitsConfig,
        engine: &'a dyn TemplateRenderer,
    ) -> Self {
        Self { template_root, config, engine, stage: Stage::Idle }
    }

    /// Stage reached by the last call to [`Bootstrapper::run`].
    pub fn stage(&self) -> Stage {
        self.stage
    }

    fn enter(&mut self, stage: Stage) {
        debug!("Stage {:?} -> {:?}", self.stage, stage);
        self.stage = stage;
    }

    /// Scaffolds `spec` below `cwd` and returns what was produced.
    ///
    /// # Errors
    /// * `Error::LayerNotFound` if a resolved layer is missing from the template root
    /// * `Error::OverwriteNotConfirmed` if the target holds files and overwriting was not
    ///   confirmed
    /// * Any filesystem, manifest or rendering error, possibly leaving a partial project
    ///
    /// The target is left untouched when one of the first two is returned.
    pub fn run(&mut self, spec: &ProjectSpec, cwd: &Path) -> Result<ScaffoldReport> {
        let root = spec.root(cwd);
        let ignored = self.config.ignore_set()?;
        let context = spec.template_context()?;
        let layers = resolve_layers(&spec.features);
        let composer = Composer::new(self.template_root, &ignored);
        composer.check_layers(&layers)?;

        self.enter(Stage::Preparing);
        let has_git_directory = prepare_target(&root, spec.should_overwrite)?;
        debug!("Scaffolding project in {}", root.display());
        write_document(root.join(MANIFEST_FILE), &manifest_stub(&spec.package_name))?;

        self.enter(Stage::Composing);
        let operations = composer.apply(&layers, &root)?;

        self.enter(Stage::FinalizingManifest);
        finalize_manifest(&root, &spec.package_name)?;
        write_document(root.join(REFERENCE_FILE), &reference_list(&spec.features))?;
        fs::write(root.join(ENV_FILE), env_file(&self.config.env_key, &spec.package_name))?;

        self.enter(Stage::Rendering);
        let rendered = render_all(&root, &self.config.placeholder_suffix, self.engine, &context)?;

        self.enter(Stage::Done);
        Ok(ScaffoldReport { root, layers, operations, rendered, has_git_directory })
    }
}

/// Makes `root` ready to receive layers and reports whether it holds a `.git` directory.
///
/// An existing directory is emptied when `should_overwrite` is set. Without confirmation it
/// is only used when the overwrite gate lets it through.
pub fn prepare_target(root: &Path, should_overwrite: bool) -> Result<bool> {
    if !root.exists() {
        debug!("Creating {}", root.display());
        fs::create_dir_all(root)?;
        return Ok(false);
    }

    if should_overwrite {
        return Ok(empty_dir(root)?.has_reserved_entry);
    }

    let decision = can_skip_confirmation(root)?;
    if !decision.can_skip {
        return Err(Error::OverwriteNotConfirmed { target_dir: root.display().to_string() });
    }
    Ok(decision.has_reserved_entry)
}

/// Re-asserts the package name and sorts the dependency sections of the composed manifest.
pub fn finalize_manifest(root: &Path, package_name: &str) -> Result<Value> {
    let path = root.join(MANIFEST_FILE);
    let mut manifest = read_document(&path)?;
    deep_merge(&mut manifest, &json!({ "name": package_name }));
    let manifest = sort_dependencies(&manifest);
    write_document(&path, &manifest)?;
    Ok(manifest)
}

/// Builds the root reference-list document for the enabled features.
pub fn reference_list(features: &FeatureSet) -> Value {
    let mut document = json!({
        "files": [],
        "references": [
            { "path": "./tsconfig.node.json" },
            { "path": "./tsconfig.app.json" }
        ]
    });
    for (feature, reference) in FEATURE_REFERENCES {
        if features.contains(feature) {
            deep_merge(&mut document, &json!({ "references": [{ "path": reference }] }));
        }
    }
    document
}

/// Content of the generated environment file.
pub fn env_file(key: &str, package_name: &str) -> String {
    format!("{key} = {package_name}\n")
}
