//! kits scaffolds new projects from layered templates.
//! Layers selected by feature flags are copied onto a target directory in a fixed order,
//! package manifests are deep-merged, and placeholder files are expanded at the end.

/// Scaffolding orchestration and its stages
pub mod bootstrap;

/// Command-line interface module for the kits application
pub mod cli;

/// Layer composition onto the target directory
pub mod composer;

/// Configuration handling for template roots
/// Supports JSON and YAML formats (kits.json, kits.yml, kits.yaml)
pub mod config;

pub mod constants;

/// Error types and handling for the kits application
pub mod error;

/// The closed set of selectable features
pub mod feature;

/// Template layers and their order
pub mod layer;

pub mod logger;

/// JSON deep merge and dependency sorting
pub mod manifest;

/// Next-step instructions for the generated project
pub mod outro;

/// Overwrite gate and directory emptying
pub mod output;

/// Placeholder file expansion
pub mod placeholder;

pub mod project;

/// User input and interaction handling
pub mod prompt;

/// Template rendering functionality
pub mod renderer;

/// Pre-order and post-order directory traversal
pub mod walker;
