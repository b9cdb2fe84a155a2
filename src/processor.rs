//! Materialization: writing a generation plan to disk.
//!
//! Works strictly in plan order and performs no existence or emptiness
//! checks; the caller is responsible for ensuring the target directory is
//! safe to write into. There is no rollback of partially written files.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;
use crate::plan::GenerationPlan;
use crate::renderer::TemplateRenderer;

/// Converts a forward-slash relative path into a native path below `base`.
fn to_native_path(base: &Path, relative_path: &str) -> PathBuf {
    let mut path = base.to_path_buf();
    for part in relative_path.split('/') {
        path.push(part);
    }
    path
}

/// Writes every planned file to the target directory.
///
/// Template files are read as text, rendered against the context, and
/// written; all other files are copied byte for byte. Parent directories are
/// created as needed, which makes re-running against an already-created but
/// empty target idempotent.
pub fn materialize(
    plan: &GenerationPlan,
    context: &serde_json::Value,
    engine: &dyn TemplateRenderer,
) -> Result<()> {
    fs::create_dir_all(&plan.target_dir)?;

    for file in &plan.files {
        let destination = to_native_path(&plan.target_dir, &file.output_relative_path);

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }

        if file.is_template {
            debug!("Rendering {}", file.template_relative_path);
            let template = fs::read_to_string(&file.source_path)?;
            let rendered = engine.render(&template, context)?;
            fs::write(&destination, rendered)?;
        } else {
            debug!("Copying {}", file.template_relative_path);
            fs::copy(&file.source_path, &destination)?;
        }
    }

    Ok(())
}
