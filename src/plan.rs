//! Generation planning: template root resolution and plan building.
//!
//! Planning fully completes before any file is written. The resulting
//! `GenerationPlan` is a pure value: building it twice from identical
//! configuration and identical on-disk templates yields identical ordered
//! file lists, which is what dry-run mode relies on.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::debug;
use walkdir::WalkDir;

use crate::config::{DatabaseMode, Language, TemplateConfig};
use crate::error::{Error, Result};

/// Suffix marking a file as a substitution template. Stripped from the
/// output path during planning.
pub const TEMPLATE_SUFFIX: &str = ".j2";

/// One file slated for output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Absolute path of the source file inside its owning template root.
    pub source_path: PathBuf,
    /// Path relative to the template root, forward-slash separated.
    pub template_relative_path: String,
    /// Output path relative to the target directory, template suffix
    /// stripped.
    pub output_relative_path: String,
    /// Whether the file requires substitution rather than a byte copy.
    pub is_template: bool,
}

/// An ordered, deduplicated set of planned files for one target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    pub target_dir: PathBuf,
    pub files: Vec<PlannedFile>,
    /// Human-readable action descriptions for summaries.
    pub actions: Vec<String>,
}

/// Locates the bundled `templates/` directory.
///
/// Tried in order: next to the executable, one level above the executable
/// (cargo layouts put binaries in `target/<profile>/`), the crate manifest
/// directory, and the current working directory.
pub fn resolve_templates_dir() -> Result<PathBuf> {
    let mut candidates: Vec<PathBuf> = Vec::new();

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.push(exe_dir.join("templates"));
            if let Some(parent) = exe_dir.parent() {
                candidates.push(parent.join("templates"));
            }
        }
    }

    candidates.push(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates"));

    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join("templates"));
    }

    candidates
        .into_iter()
        .find(|candidate| candidate.is_dir())
        .ok_or(Error::TemplatesDirNotFound)
}

/// Determines the template roots supplying source files, in base-to-overlay
/// order. TypeScript projects layer an architecture-specific root over a
/// shared base; JavaScript projects use a single flat root.
///
/// A missing root is fatal and aborts generation before any output is
/// touched.
pub fn resolve_template_roots(
    templates_dir: &Path,
    config: &TemplateConfig,
) -> Result<Vec<PathBuf>> {
    let roots = match config.language {
        Language::Ts => vec![
            templates_dir.join("ts").join("shared"),
            templates_dir.join("ts").join(config.architecture.dir_name()),
        ],
        Language::Js => vec![templates_dir
            .join("js")
            .join(config.architecture.dir_name())],
    };

    for root in &roots {
        if !root.is_dir() {
            return Err(Error::TemplateRootNotFound {
                path: root.display().to_string(),
            });
        }
    }

    Ok(roots)
}

/// Enumerates all files under a template root as forward-slash relative
/// paths, in deterministic order.
fn list_files(root: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root).sort_by_file_name();
    for entry in walker {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|e| Error::IoError(std::io::Error::other(e)))?;
        let relative = relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        files.push(relative);
    }

    Ok(files)
}

/// Per-file inclusion predicate, keyed on the template-relative path.
///
/// The compose file ships only in Docker mode, the creation script only in
/// psql mode (Docker provisions the database itself), and everything under
/// the database prefixes only when a real database is configured.
fn should_include(relative_path: &str, config: &TemplateConfig) -> bool {
    if relative_path == "compose.yaml.j2" {
        return config.database_mode == DatabaseMode::PostgresDocker;
    }

    if relative_path == "scripts/dbCreate.js.j2" {
        return config.database_mode == DatabaseMode::PostgresPsql;
    }

    if relative_path.starts_with("scripts/")
        || relative_path.starts_with("db/")
        || relative_path.starts_with("src/db/")
    {
        return config.database_mode.is_postgres();
    }

    true
}

/// Whether a relative path carries the template-marker suffix.
pub fn is_template_path(relative_path: &str) -> bool {
    relative_path.ends_with(TEMPLATE_SUFFIX)
}

/// Strips the template-marker suffix, if present.
pub fn strip_template_suffix(relative_path: &str) -> &str {
    relative_path
        .strip_suffix(TEMPLATE_SUFFIX)
        .unwrap_or(relative_path)
}

fn from_relative(root: &Path, relative_path: &str) -> PathBuf {
    let mut path = root.to_path_buf();
    for part in relative_path.split('/') {
        path.push(part);
    }
    path
}

/// Builds the generation plan for a configuration and target directory.
///
/// Files from later roots silently overlay earlier roots' files at the same
/// relative path; the merged set is sorted lexicographically, filtered by
/// the inclusion predicate, and mapped to output paths.
pub fn build_plan(
    templates_dir: &Path,
    config: &TemplateConfig,
    target_dir: &Path,
) -> Result<GenerationPlan> {
    let roots = resolve_template_roots(templates_dir, config)?;

    // Last write wins: an overlay root replaces the base entry for the same
    // relative path without duplicating unrelated files.
    let mut merged: IndexMap<String, PathBuf> = IndexMap::new();

    for root in &roots {
        for relative_path in list_files(root)? {
            let source_path = from_relative(root, &relative_path);
            merged.insert(relative_path, source_path);
        }
    }

    let mut relative_paths: Vec<String> = merged.keys().cloned().collect();
    relative_paths.sort();

    let files: Vec<PlannedFile> = relative_paths
        .into_iter()
        .filter(|relative_path| {
            let included = should_include(relative_path, config);
            if !included {
                debug!("Excluding {relative_path} for {:?}", config.database_mode);
            }
            included
        })
        .map(|relative_path| {
            let source_path = merged[&relative_path].clone();
            PlannedFile {
                source_path,
                output_relative_path: strip_template_suffix(&relative_path).to_string(),
                is_template: is_template_path(&relative_path),
                template_relative_path: relative_path,
            }
        })
        .collect();

    let actions = vec![
        format!("Create project directory: {}", target_dir.display()),
        format!("Write {} files", files.len()),
    ];

    Ok(GenerationPlan { target_dir: target_dir.to_path_buf(), files, actions })
}
