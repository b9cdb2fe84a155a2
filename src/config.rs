//! Configuration data model for a generation run.
//! Holds the option enums with their wire names and human-readable labels,
//! the fully resolved `UserSelections`, and the `TemplateConfig` projection
//! that drives planning and rendering.

use serde::Serialize;

/// Fallback project name used when no positional argument is supplied and the
/// user accepts the prompt default.
pub const DEFAULT_PROJECT_NAME: &str = "my-api";

/// Target language variant of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Js,
    Ts,
}

impl Language {
    /// Directory name under `templates/`.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Language::Js => "js",
            Language::Ts => "ts",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::Js => "JavaScript",
            Language::Ts => "TypeScript",
        }
    }
}

/// Module system for JavaScript projects. TypeScript projects always compile
/// to CommonJS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleSystem {
    #[default]
    CommonJs,
    Esm,
}

impl ModuleSystem {
    pub fn label(&self) -> &'static str {
        match self {
            ModuleSystem::CommonJs => "CommonJS",
            ModuleSystem::Esm => "ES Modules",
        }
    }
}

/// File watcher used by the `dev` script of JavaScript projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum JsDevWatcher {
    #[default]
    NodeWatch,
    Nodemon,
}

impl JsDevWatcher {
    pub fn label(&self) -> &'static str {
        match self {
            JsDevWatcher::NodeWatch => "node --watch",
            JsDevWatcher::Nodemon => "nodemon",
        }
    }
}

/// Architecture style of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    #[default]
    Simple,
    Mvc,
}

impl Architecture {
    /// Directory name of the architecture-specific template root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Architecture::Simple => "simple",
            Architecture::Mvc => "mvc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Architecture::Simple => "Simple",
            Architecture::Mvc => "MVC",
        }
    }
}

/// Database backend of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatabaseMode {
    #[default]
    Memory,
    PostgresPsql,
    PostgresDocker,
}

impl DatabaseMode {
    pub fn label(&self) -> &'static str {
        match self {
            DatabaseMode::Memory => "In-memory",
            DatabaseMode::PostgresPsql => "Postgres (psql)",
            DatabaseMode::PostgresDocker => "Postgres (Docker)",
        }
    }

    /// Whether the mode needs a Postgres server at all.
    pub fn is_postgres(&self) -> bool {
        !matches!(self, DatabaseMode::Memory)
    }
}

/// Package manager used for dependency installation and next-step commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
}

impl PackageManager {
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
        }
    }

    pub fn label(&self) -> &'static str {
        self.command()
    }
}

/// The fully resolved configuration for one generation run.
///
/// Constructed once by the selection resolver, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSelections {
    pub project_name: String,
    pub language: Language,
    pub module_system: ModuleSystem,
    pub js_dev_watcher: JsDevWatcher,
    pub architecture: Architecture,
    pub database_mode: DatabaseMode,
    pub educational: bool,
    pub install_deps: bool,
    pub init_git: bool,
    pub package_manager: PackageManager,
    pub dry_run: bool,
}

/// The subset of `UserSelections` that is relevant to file generation.
/// Install/git/package-manager/dry-run choices never influence which files
/// are planned or how they render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    pub project_name: String,
    pub language: Language,
    pub module_system: ModuleSystem,
    pub js_dev_watcher: JsDevWatcher,
    pub architecture: Architecture,
    pub database_mode: DatabaseMode,
    pub educational: bool,
}

impl From<&UserSelections> for TemplateConfig {
    fn from(selections: &UserSelections) -> Self {
        Self {
            project_name: selections.project_name.clone(),
            language: selections.language,
            module_system: selections.module_system,
            js_dev_watcher: selections.js_dev_watcher,
            architecture: selections.architecture,
            database_mode: selections.database_mode,
            educational: selections.educational,
        }
    }
}
