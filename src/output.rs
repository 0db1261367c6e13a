//! Target directory preparation: the overwrite gate and the emptier.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::walker::{post_order, read_entries, WalkSummary};

/// Outcome of checking whether a target directory may be populated without asking.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GateDecision {
    /// No confirmation is needed before writing into the directory.
    pub can_skip: bool,
    /// The directory holds a `.git` entry that will be preserved.
    pub has_reserved_entry: bool,
}

/// Returns whether `dir` can be populated without an overwrite confirmation.
///
/// That is the case when it does not exist, is empty, or only contains `.git`.
pub fn can_skip_confirmation<P: AsRef<Path>>(dir: P) -> Result<GateDecision> {
    let dir = dir.as_ref();
    if !dir.exists() {
        return Ok(GateDecision { can_skip: true, has_reserved_entry: false });
    }

    let entries = read_entries(dir)?;
    let decision = match entries.as_slice() {
        [] => GateDecision { can_skip: true, has_reserved_entry: false },
        [only] if only.is_reserved() => {
            GateDecision { can_skip: true, has_reserved_entry: true }
        }
        _ => GateDecision {
            can_skip: false,
            has_reserved_entry: entries.iter().any(|node| node.is_reserved()),
        },
    };
    debug!("Overwrite gate for {}: {:?}", dir.display(), decision);
    Ok(decision)
}

/// Deletes everything inside `dir` except `.git`, leaving `dir` itself in place.
///
/// A `.git` found deeper in the tree is kept too, along with the directories leading to it.
/// Does nothing when `dir` does not exist.
pub fn empty_dir<P: AsRef<Path>>(dir: P) -> Result<WalkSummary> {
    let dir = dir.as_ref();
    if !dir.exists() {
        return Ok(WalkSummary::default());
    }

    debug!("Emptying {}", dir.display());
    post_order(
        dir,
        |d| {
            if fs::read_dir(d)?.next().is_some() {
                debug!("Keeping {}, it still holds a .git entry", d.display());
                return Ok(());
            }
            fs::remove_dir(d)?;
            Ok(())
        },
        |f| {
            fs::remove_file(f)?;
            Ok(())
        },
    )
}
