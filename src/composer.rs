//! Layer composition: copies template layers onto the target directory in order.
//!
//! Later layers overwrite files of earlier ones, except for mergeable JSON documents
//! (`package.json`, `extensions.json`), which are deep-merged.

use std::fs;
use std::path::{Path, PathBuf};

use globset::GlobSet;
use log::debug;

use crate::constants::MERGEABLE_FILES;
use crate::error::{Error, Result};
use crate::layer::TemplateLayer;
use crate::manifest::merge_document_file;
use crate::walker::pre_order;

/// How a layer file reached the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOperation {
    /// Copied verbatim, replacing any earlier file.
    Copy { target: PathBuf },
    /// Deep-merged into a document written by an earlier layer.
    Merge { target: PathBuf },
}

impl FileOperation {
    pub fn target(&self) -> &Path {
        match self {
            FileOperation::Copy { target } | FileOperation::Merge { target } => target,
        }
    }
}

/// Applies template layers found below a template root.
pub struct Composer<'a> {
    template_root: &'a Path,
    ignored: &'a GlobSet,
}

impl<'a> Composer<'a> {
    pub fn new(template_root: &'a Path, ignored: &'a GlobSet) -> Self {
        Self { template_root, ignored }
    }

    /// Fails with `Error::LayerNotFound` for the first layer missing from the template root.
    pub fn check_layers(&self, layers: &[TemplateLayer]) -> Result<()> {
        match layers.iter().find(|layer| !layer.dir(self.template_root).is_dir()) {
            Some(layer) => Err(Error::LayerNotFound {
                layer: layer.to_string(),
                template_root: self.template_root.display().to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Applies `layers` onto `target_root` in order and returns every file operation.
    pub fn apply(
        &self,
        layers: &[TemplateLayer],
        target_root: &Path,
    ) -> Result<Vec<FileOperation>> {
        self.check_layers(layers)?;
        let mut operations = Vec::new();
        for layer in layers {
            debug!("Applying layer '{}'", layer);
            operations.extend(self.apply_dir(&layer.dir(self.template_root), target_root)?);
        }
        Ok(operations)
    }

    /// Copies one layer directory onto `target_root`.
    pub fn apply_dir(&self, layer_dir: &Path, target_root: &Path) -> Result<Vec<FileOperation>> {
        let mut operations = Vec::new();
        fs::create_dir_all(target_root)?;

        // Target directories only come into existence through `place_file`.
        pre_order(
            layer_dir,
            |_| Ok(()),
            |file| {
                let relative = relative_path(layer_dir, file)?;
                if self.is_ignored(relative) {
                    debug!("Skipping ignored file {}", relative.display());
                    return Ok(());
                }
                let target = resolve_target_path(relative, target_root);
                operations.push(place_file(file, target)?);
                Ok(())
            },
        )?;

        Ok(operations)
    }

    fn is_ignored(&self, relative: &Path) -> bool {
        self.ignored.is_match(relative)
    }
}

fn relative_path<'p>(root: &Path, path: &'p Path) -> Result<&'p Path> {
    path.strip_prefix(root).map_err(|e| {
        Error::ConfigError(format!("{} is outside {}: {e}", path.display(), root.display()))
    })
}

/// Maps a layer-relative file path to its place in the target directory.
///
/// A leading `_` in the file name becomes a `.`, so `_gitignore` is written as `.gitignore`.
pub fn resolve_target_path<P: AsRef<Path>, Q: AsRef<Path>>(
    relative: P,
    target_root: Q,
) -> PathBuf {
    let relative = relative.as_ref();
    let target = target_root.as_ref().join(relative);
    match relative.file_name().and_then(|n| n.to_str()).and_then(|n| n.strip_prefix('_')) {
        Some(rest) => target.with_file_name(format!(".{rest}")),
        None => target,
    }
}

/// Whether collisions on `path` are resolved by deep-merging.
pub fn is_mergeable<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| MERGEABLE_FILES.contains(&name))
}

fn place_file(source: &Path, target: PathBuf) -> Result<FileOperation> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    if is_mergeable(&target) && target.exists() {
        debug!("Merging file: {}", target.display());
        merge_document_file(&target, source)?;
        Ok(FileOperation::Merge { target })
    } else {
        debug!("Copying file: {}", target.display());
        fs::copy(source, &target)?;
        Ok(FileOperation::Copy { target })
    }
}
