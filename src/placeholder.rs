//! Placeholder expansion over a composed project tree.
//!
//! A placeholder is any file whose name ends with the placeholder suffix, e.g.
//! `vite.config.ts.j2`. It is rendered to its sibling without the suffix and then removed.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;
use crate::renderer::TemplateRenderer;
use crate::walker::pre_order;

/// Returns the output path for a placeholder file, or `None` if `path` is not one.
///
/// A file named just like the suffix (`.j2`) is not a placeholder.
pub fn rendered_path<P: AsRef<Path>>(path: P, suffix: &str) -> Option<PathBuf> {
    let path = path.as_ref();
    let file_name = path.file_name()?.to_str()?;
    let stripped = file_name.strip_suffix(suffix)?;
    if stripped.is_empty() {
        return None;
    }
    Some(path.with_file_name(stripped))
}

/// Renders every placeholder below `target_root` and deletes the placeholders.
///
/// Returns the paths of the rendered files.
pub fn render_all<P: AsRef<Path>>(
    target_root: P,
    suffix: &str,
    engine: &dyn TemplateRenderer,
    context: &serde_json::Value,
) -> Result<Vec<PathBuf>> {
    let mut rendered = Vec::new();

    pre_order(
        target_root.as_ref(),
        |_| Ok(()),
        |file| {
            let Some(dest) = rendered_path(file, suffix) else {
                return Ok(());
            };
            debug!("Rendering placeholder: {}", file.display());
            let template = fs::read_to_string(file)?;
            let content = engine.render(&template, context)?;
            fs::write(&dest, content)?;
            fs::remove_file(file)?;
            rendered.push(dest);
            Ok(())
        },
    )?;

    Ok(rendered)
}
