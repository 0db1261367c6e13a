//! The resolved description of the project to scaffold.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::feature::{FeatureFlags, FeatureSet};

static VALID_PACKAGE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:@[a-z\d\-*~][a-z\d\-*._~]*/)?[a-z\d\-~][a-z\d\-._~]*$")
        .expect("valid package name pattern")
});
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));
static INVALID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z\d\-~]+").expect("valid character pattern"));

/// Whether `name` can be used as a package name as is.
pub fn is_valid_package_name(name: &str) -> bool {
    VALID_PACKAGE_NAME.is_match(name)
}

/// Derives a package name from a project name.
///
/// Valid names are kept. Otherwise the name is lowercased, whitespace runs become `-`, a
/// leading `.` or `_` is dropped and remaining invalid characters become `-`.
pub fn to_valid_package_name(project_name: &str) -> String {
    let trimmed = project_name.trim();
    if is_valid_package_name(trimmed) {
        return trimmed.to_string();
    }
    let lowered = trimmed.to_lowercase();
    let dashed = WHITESPACE.replace_all(&lowered, "-").into_owned();
    let stripped = dashed.strip_prefix(['.', '_']).unwrap_or(&dashed);
    INVALID_CHARS.replace_all(stripped, "-").into_owned()
}

/// Checks a project name typed by the user.
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::ValidationError("project name must not be empty".to_string()));
    }
    Ok(())
}

/// Everything the scaffolder needs to know about the project, fixed before any file is touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSpec {
    pub project_name: String,
    pub package_name: String,
    #[serde(skip)]
    pub target_dir: PathBuf,
    #[serde(skip)]
    pub should_overwrite: bool,
    #[serde(skip)]
    pub features: FeatureSet,
}

impl ProjectSpec {
    /// Builds a spec for `project_name`, created in `target_dir`.
    pub fn new<S: Into<String>, P: Into<PathBuf>>(project_name: S, target_dir: P) -> Self {
        let project_name = project_name.into().trim().to_string();
        let package_name = to_valid_package_name(&project_name);
        Self {
            project_name,
            package_name,
            target_dir: target_dir.into(),
            should_overwrite: false,
            features: FeatureSet::new(),
        }
    }

    pub fn with_features(mut self, features: FeatureSet) -> Self {
        self.features = features;
        self
    }

    pub fn with_overwrite(mut self, should_overwrite: bool) -> Self {
        self.should_overwrite = should_overwrite;
        self
    }

    /// Absolute location of the project, resolved against `cwd`.
    pub fn root(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.target_dir)
    }

    pub fn flags(&self) -> FeatureFlags {
        FeatureFlags::from(&self.features)
    }

    /// Context handed to placeholder templates: the feature flags plus the project names.
    pub fn template_context(&self) -> Result<serde_json::Value> {
        let mut context = serde_json::to_value(self.flags())?;
        crate::manifest::deep_merge(&mut context, &serde_json::to_value(self)?);
        Ok(context)
    }
}
