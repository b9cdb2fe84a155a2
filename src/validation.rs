//! Input validation: project names and target-directory safety.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Validates a project name, returning the error message when invalid.
///
/// The name must be non-empty after trimming, must not be `.` or `..`, must
/// be a bare folder name (no path separators), and may only contain letters,
/// digits, `.`, `_`, and `-`.
pub fn validate_project_name(project_name: &str) -> Option<String> {
    let trimmed = project_name.trim();

    if trimmed.is_empty() {
        return Some("Project name is required.".to_string());
    }

    if trimmed == "." || trimmed == ".." {
        return Some("Project name cannot be \".\" or \"..\".".to_string());
    }

    if trimmed.contains('/') || trimmed.contains('\\') {
        return Some("Project name must be a folder name, not a path.".to_string());
    }

    let valid_chars = trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-');

    if !valid_chars {
        return Some(
            "Project name can only include letters, numbers, \".\", \"_\", and \"-\"."
                .to_string(),
        );
    }

    None
}

/// Checks that the target directory is safe to generate into.
///
/// A missing path is fine (it will be created); an existing path must be an
/// empty directory. Anything else is a fatal precondition failure, raised
/// before any template root is resolved.
pub fn ensure_safe_target_dir(target_dir: &Path) -> Result<()> {
    if !target_dir.exists() {
        return Ok(());
    }

    if !target_dir.is_dir() {
        return Err(Error::TargetDirError(format!(
            "Target path already exists and is not a directory: {}",
            target_dir.display()
        )));
    }

    let mut entries = fs::read_dir(target_dir)?;
    if entries.next().is_some() {
        let name = target_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| target_dir.display().to_string());
        return Err(Error::TargetDirError(format!(
            "Target directory \"{name}\" already exists and is not empty."
        )));
    }

    Ok(())
}
