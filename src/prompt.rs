//! User input and interaction handling.
//! Every prompt can be cancelled; [`unwrap_prompt`] turns a cancelled prompt into
//! [`Error::UserCancelled`] so call sites only deal with values.

use std::io;
use std::path::Path;

use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use log::debug;

use crate::error::{Error, Result};
use crate::feature::{Feature, FeatureSet};
use crate::output::can_skip_confirmation;
use crate::project::{validate_project_name, ProjectSpec};

/// Answer of a single prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompted<T> {
    Value(T),
    Cancelled,
}

/// Returns the prompted value, or [`Error::UserCancelled`] if the user backed out.
pub fn unwrap_prompt<T>(prompted: Result<Prompted<T>>) -> Result<T> {
    match prompted? {
        Prompted::Value(value) => Ok(value),
        Prompted::Cancelled => Err(Error::UserCancelled),
    }
}

/// Interactive prompt service.
pub trait Prompter {
    /// Asks for a line of text. `validate` rejections are reported and asked again.
    fn text(
        &self,
        message: &str,
        default: &str,
        validate: &dyn Fn(&str) -> Result<()>,
    ) -> Result<Prompted<String>>;

    /// Asks a yes/no question.
    fn confirm(&self, message: &str, default: bool) -> Result<Prompted<bool>>;

    /// Lets the user pick any number of `items`; returns the picked indices.
    fn multi_select(&self, message: &str, items: &[&str]) -> Result<Prompted<Vec<usize>>>;

    /// Lets the user pick exactly one of `items`; returns its index.
    fn select(&self, message: &str, items: &[&str], default: usize) -> Result<Prompted<usize>>;
}

/// Terminal prompts backed by `dialoguer`.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self { theme: ColorfulTheme::default() }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

fn from_dialoguer<T>(result: dialoguer::Result<Option<T>>) -> Result<Prompted<T>> {
    match result {
        Ok(Some(value)) => Ok(Prompted::Value(value)),
        Ok(None) => Ok(Prompted::Cancelled),
        Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => {
            Ok(Prompted::Cancelled)
        }
        Err(e) => Err(Error::IoError(io::Error::other(e))),
    }
}

impl Prompter for DialoguerPrompter {
    fn text(
        &self,
        message: &str,
        default: &str,
        validate: &dyn Fn(&str) -> Result<()>,
    ) -> Result<Prompted<String>> {
        let input = Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .default(default.to_string())
            .validate_with(|value: &String| validate(value))
            .interact_text()
            .map(Some);
        from_dialoguer(input)
    }

    fn confirm(&self, message: &str, default: bool) -> Result<Prompted<bool>> {
        from_dialoguer(
            Confirm::with_theme(&self.theme)
                .with_prompt(message)
                .default(default)
                .interact_opt(),
        )
    }

    fn multi_select(&self, message: &str, items: &[&str]) -> Result<Prompted<Vec<usize>>> {
        from_dialoguer(
            MultiSelect::with_theme(&self.theme)
                .with_prompt(message)
                .items(items)
                .interact_opt(),
        )
    }

    fn select(&self, message: &str, items: &[&str], default: usize) -> Result<Prompted<usize>> {
        from_dialoguer(
            Select::with_theme(&self.theme)
                .with_prompt(message)
                .items(items)
                .default(default)
                .interact_opt(),
        )
    }
}

/// Answers already known before prompting, typically from the command line.
#[derive(Debug, Clone, Default)]
pub struct PresetAnswers {
    /// Target directory; doubles as the project name.
    pub target_dir: Option<String>,
    /// Overwrite a non-empty target without asking.
    pub force: bool,
    /// Features; skips the feature prompt when set.
    pub features: Option<FeatureSet>,
}

/// Collects a complete [`ProjectSpec`], prompting for whatever `preset` leaves open.
///
/// Nothing is written to disk. Declining to overwrite a non-empty target cancels the run.
pub fn collect_project_spec(
    prompt: &dyn Prompter,
    preset: PresetAnswers,
    default_project_name: &str,
    cwd: &Path,
) -> Result<ProjectSpec> {
    let target_dir = match preset.target_dir {
        Some(dir) => dir,
        None => unwrap_prompt(prompt.text(
            "Project name:",
            default_project_name,
            &validate_project_name,
        ))?
        .trim()
        .to_string(),
    };
    validate_project_name(&target_dir)?;

    let mut should_overwrite = preset.force;
    if !should_overwrite && !can_skip_confirmation(cwd.join(&target_dir))?.can_skip {
        let location = if target_dir == "." {
            "Current directory".to_string()
        } else {
            format!("Target directory \"{target_dir}\"")
        };
        should_overwrite = unwrap_prompt(prompt.confirm(
            &format!("{location} is not empty. Remove existing files and continue?"),
            false,
        ))?;
        if !should_overwrite {
            return Err(Error::UserCancelled);
        }
    }

    let features = match preset.features {
        Some(features) => features,
        None => {
            let labels: Vec<&str> = Feature::ALL.iter().map(Feature::label).collect();
            let picked = unwrap_prompt(prompt.multi_select(
                "Select features to include (space to toggle, enter to confirm):",
                &labels,
            ))?;
            picked.into_iter().filter_map(|index| Feature::ALL.get(index).copied()).collect()
        }
    };

    let project_name = if target_dir == "." {
        cwd.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| default_project_name.to_string())
    } else {
        target_dir.clone()
    };
    debug!("Collected project '{}' in '{}'", project_name, target_dir);

    Ok(ProjectSpec::new(project_name, target_dir)
        .with_overwrite(should_overwrite)
        .with_features(features))
}
