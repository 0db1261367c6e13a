//! Command-line interface implementation for kits.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::constants::{BUNDLED_TEMPLATE_DIR, TEMPLATE_DIR_ENV};
use crate::feature::{Feature, FeatureSet};

/// Command-line arguments structure for kits.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Scaffold a new project from layered templates",
    long_about = None
)]
pub struct Args {
    /// Directory to create the project in; asked for interactively when omitted
    #[arg(value_name = "TARGET_DIR")]
    pub target_dir: Option<String>,

    /// Remove existing files in a non-empty target directory without asking
    #[arg(short, long)]
    pub force: bool,

    /// Comma separated features to include; skips the feature prompt
    #[arg(long, value_delimiter = ',', value_name = "FEATURES")]
    pub features: Option<Vec<Feature>>,

    /// Directory holding the template layers
    #[arg(long, env = TEMPLATE_DIR_ENV, value_name = "DIR", default_value = BUNDLED_TEMPLATE_DIR)]
    pub template_dir: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Features given on the command line, if any.
    pub fn feature_set(&self) -> Option<FeatureSet> {
        self.features.as_ref().map(|features| features.iter().copied().collect())
    }
}

/// Parses command line arguments, exiting with clap's error handling on failure.
pub fn get_args() -> Args {
    Args::parse()
}
