//! Pre-order and post-order directory traversal.
//!
//! Each directory level is read into a sorted snapshot before any callback runs, so callbacks
//! are free to delete what they are handed.

use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::constants::RESERVED_ENTRY;
use crate::error::{Error, Result};

/// Kind of a traversed filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File,
}

/// Traversal-time view of a filesystem entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    pub path: PathBuf,
    pub kind: NodeKind,
}

impl FileNode {
    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    /// Whether this entry is the version-control metadata entry.
    pub fn is_reserved(&self) -> bool {
        self.path.file_name().is_some_and(|name| name == RESERVED_ENTRY)
    }
}

/// What a post-order walk observed besides the entries it visited.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkSummary {
    /// A `.git` entry was found (and left untouched) somewhere in the tree.
    pub has_reserved_entry: bool,
}

/// Lists the direct children of `dir`, sorted by file name.
///
/// Symlinks are reported as files and never followed.
pub fn read_entries<P: AsRef<Path>>(dir: P) -> Result<Vec<FileNode>> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(dir.as_ref()).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        let kind = if entry.file_type().is_dir() { NodeKind::Directory } else { NodeKind::File };
        entries.push(FileNode { path: entry.into_path(), kind });
    }
    Ok(entries)
}

/// Walks `dir`, calling `on_dir` for a directory before descending into it.
///
/// The `.git` entry is skipped. A directory removed by `on_dir` is not descended into.
pub fn pre_order<P, D, F>(dir: P, mut on_dir: D, mut on_file: F) -> Result<()>
where
    P: AsRef<Path>,
    D: FnMut(&Path) -> Result<()>,
    F: FnMut(&Path) -> Result<()>,
{
    pre_order_inner(dir.as_ref(), &mut on_dir, &mut on_file)
}

fn pre_order_inner<D, F>(dir: &Path, on_dir: &mut D, on_file: &mut F) -> Result<()>
where
    D: FnMut(&Path) -> Result<()>,
    F: FnMut(&Path) -> Result<()>,
{
    for node in read_entries(dir)? {
        if node.is_reserved() {
            continue;
        }
        match node.kind {
            NodeKind::Directory => {
                on_dir(&node.path)?;
                if node.path.exists() {
                    pre_order_inner(&node.path, on_dir, on_file)?;
                } else {
                    debug!("Directory removed during walk: {}", node.path.display());
                }
            }
            NodeKind::File => on_file(&node.path)?,
        }
    }
    Ok(())
}

/// Walks `dir`, calling `on_dir` for a directory after all of its contents.
///
/// The `.git` entry is neither visited nor descended into; its presence is reported in the
/// returned [`WalkSummary`].
pub fn post_order<P, D, F>(dir: P, mut on_dir: D, mut on_file: F) -> Result<WalkSummary>
where
    P: AsRef<Path>,
    D: FnMut(&Path) -> Result<()>,
    F: FnMut(&Path) -> Result<()>,
{
    let mut summary = WalkSummary::default();
    post_order_inner(dir.as_ref(), &mut on_dir, &mut on_file, &mut summary)?;
    Ok(summary)
}

fn post_order_inner<D, F>(
    dir: &Path,
    on_dir: &mut D,
    on_file: &mut F,
    summary: &mut WalkSummary,
) -> Result<()>
where
    D: FnMut(&Path) -> Result<()>,
    F: FnMut(&Path) -> Result<()>,
{
    for node in read_entries(dir)? {
        if node.is_reserved() {
            summary.has_reserved_entry = true;
            continue;
        }
        match node.kind {
            NodeKind::Directory => {
                post_order_inner(&node.path, on_dir, on_file, summary)?;
                on_dir(&node.path)?;
            }
            NodeKind::File => on_file(&node.path)?,
        }
    }
    Ok(())
}
