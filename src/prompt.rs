//! Selection resolution: merging parsed arguments, defaults, and interactive
//! prompt answers into one fully populated `UserSelections`.
//!
//! Prompts run in a fixed order and individual steps are skipped whenever
//! the command line already answered them; explicitly provided flags always
//! win over interactive defaults, never the reverse. Any cancellation aborts
//! the whole run with `Error::Cancelled` and no partial selections.

use console::style;
use dialoguer::{Confirm, Input, Select};

use crate::args::ParsedArgs;
use crate::config::{
    Architecture, DatabaseMode, JsDevWatcher, Language, ModuleSystem, PackageManager,
    UserSelections, DEFAULT_PROJECT_NAME,
};
use crate::error::{Error, Result};
use crate::validation::validate_project_name;

fn prompt_error(err: dialoguer::Error) -> Error {
    Error::PromptError(err.to_string())
}

/// Unwraps an `interact_opt` result, mapping Esc/q to cancellation.
fn unwrap_prompt<T>(value: Option<T>) -> Result<T> {
    value.ok_or(Error::Cancelled)
}

fn prompt_project_name() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Project name")
        .default(DEFAULT_PROJECT_NAME.to_string())
        .validate_with(|value: &String| match validate_project_name(value) {
            Some(message) => Err(message),
            None => Ok(()),
        })
        .interact_text()
        .map_err(prompt_error)?;

    Ok(input)
}

fn prompt_language() -> Result<Language> {
    let selection = Select::new()
        .with_prompt("Language")
        .items(&[Language::Js.label(), Language::Ts.label()])
        .default(0)
        .interact_opt()
        .map_err(prompt_error)?;

    Ok(match unwrap_prompt(selection)? {
        1 => Language::Ts,
        _ => Language::Js,
    })
}

fn prompt_module_system() -> Result<ModuleSystem> {
    let selection = Select::new()
        .with_prompt("Module system")
        .items(&[ModuleSystem::CommonJs.label(), ModuleSystem::Esm.label()])
        .default(0)
        .interact_opt()
        .map_err(prompt_error)?;

    Ok(match unwrap_prompt(selection)? {
        1 => ModuleSystem::Esm,
        _ => ModuleSystem::CommonJs,
    })
}

fn prompt_js_dev_watcher() -> Result<JsDevWatcher> {
    let selection = Select::new()
        .with_prompt("Dev watcher (JavaScript)")
        .items(&["node --watch (built-in)", "nodemon"])
        .default(0)
        .interact_opt()
        .map_err(prompt_error)?;

    Ok(match unwrap_prompt(selection)? {
        1 => JsDevWatcher::Nodemon,
        _ => JsDevWatcher::NodeWatch,
    })
}

fn prompt_architecture() -> Result<Architecture> {
    let selection = Select::new()
        .with_prompt("Architecture")
        .items(&[Architecture::Simple.label(), Architecture::Mvc.label()])
        .default(0)
        .interact_opt()
        .map_err(prompt_error)?;

    Ok(match unwrap_prompt(selection)? {
        1 => Architecture::Mvc,
        _ => Architecture::Simple,
    })
}

fn prompt_database_mode() -> Result<DatabaseMode> {
    let selection = Select::new()
        .with_prompt("Database")
        .items(&[
            DatabaseMode::Memory.label(),
            DatabaseMode::PostgresPsql.label(),
            DatabaseMode::PostgresDocker.label(),
        ])
        .default(0)
        .interact_opt()
        .map_err(prompt_error)?;

    Ok(match unwrap_prompt(selection)? {
        1 => DatabaseMode::PostgresPsql,
        2 => DatabaseMode::PostgresDocker,
        _ => DatabaseMode::Memory,
    })
}

fn prompt_package_manager() -> Result<PackageManager> {
    let selection = Select::new()
        .with_prompt("Package manager")
        .items(&[PackageManager::Npm.label(), PackageManager::Yarn.label()])
        .default(0)
        .interact_opt()
        .map_err(prompt_error)?;

    Ok(match unwrap_prompt(selection)? {
        1 => PackageManager::Yarn,
        _ => PackageManager::Npm,
    })
}

fn prompt_confirm(message: &str, default: bool) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(default)
        .interact_opt()
        .map_err(prompt_error)?;

    unwrap_prompt(confirmed)
}

/// Resolves the full configuration for one run.
///
/// With `--yes`, or when no interactive input stream is attached, every
/// unset field takes its default and no prompt is shown. Otherwise the
/// prompt sequence runs: project name, language, module system and dev
/// watcher (JavaScript only), architecture, database, educational toggle,
/// package manager, install confirm, git confirm.
pub fn resolve_selections(args: &ParsedArgs, interactive: bool) -> Result<UserSelections> {
    if args.flags.yes || !interactive {
        return Ok(UserSelections {
            project_name: args
                .project_name
                .clone()
                .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string()),
            language: Language::default(),
            module_system: ModuleSystem::default(),
            js_dev_watcher: JsDevWatcher::default(),
            architecture: Architecture::default(),
            database_mode: DatabaseMode::default(),
            educational: true,
            install_deps: args.flags.install,
            init_git: args.flags.git,
            package_manager: args.flags.package_manager,
            dry_run: args.flags.dry_run,
        });
    }

    println!(
        "{}\n{}",
        style("Create Express API Starter").cyan().bold(),
        style("Scaffold an Express backend with practical defaults.").dim()
    );

    let project_name = match &args.project_name {
        Some(project_name) => project_name.clone(),
        None => prompt_project_name()?,
    };

    let language = prompt_language()?;

    // TypeScript output always targets CommonJS, so the module-system and
    // watcher questions only apply to JavaScript projects.
    let module_system = if language == Language::Js {
        prompt_module_system()?
    } else {
        ModuleSystem::CommonJs
    };

    let js_dev_watcher = if language == Language::Js {
        prompt_js_dev_watcher()?
    } else {
        JsDevWatcher::default()
    };

    let architecture = prompt_architecture()?;
    let database_mode = prompt_database_mode()?;
    let educational = prompt_confirm("Add educational comments", true)?;

    let package_manager = if args.provided.package_manager {
        args.flags.package_manager
    } else {
        prompt_package_manager()?
    };

    let install_deps = if args.provided.install {
        args.flags.install
    } else {
        prompt_confirm("Install dependencies now", true)?
    };

    let init_git = if args.provided.git {
        args.flags.git
    } else {
        prompt_confirm("Initialize git repository", true)?
    };

    println!("{}", style("Scaffolding project files...").cyan());

    Ok(UserSelections {
        project_name,
        language,
        module_system,
        js_dev_watcher,
        architecture,
        database_mode,
        educational,
        install_deps,
        init_git,
        package_manager,
        dry_run: args.flags.dry_run,
    })
}
