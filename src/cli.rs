//! Top-level orchestration: argv through to filesystem side effects.
//!
//! Data flows strictly forward: parsed args, resolved selections, template
//! config, generation plan, materialized files. Planning always completes
//! before the first write, and dry-run mode stops right after planning.

use std::io::IsTerminal;

use console::style;
use log::warn;

use crate::args::ParsedArgs;
use crate::config::{DatabaseMode, TemplateConfig};
use crate::context::build_context;
use crate::error::{Error, Result};
use crate::exec::{ensure_psql_available, init_git_repo, install_dependencies};
use crate::output::{print_dry_run, print_next_steps};
use crate::plan::{build_plan, resolve_templates_dir};
use crate::processor::materialize;
use crate::prompt::resolve_selections;
use crate::renderer::MiniJinjaRenderer;
use crate::validation::{ensure_safe_target_dir, validate_project_name};

/// Runs one full scaffolding invocation.
pub fn run(parsed: ParsedArgs) -> Result<()> {
    for unknown_flag in &parsed.unknown_flags {
        warn!("Unknown flag \"{unknown_flag}\" was ignored.");
    }

    let interactive = std::io::stdin().is_terminal();
    let selections = resolve_selections(&parsed, interactive)?;

    if let Some(message) = validate_project_name(&selections.project_name) {
        return Err(Error::ValidationError(message));
    }

    let target_dir = std::env::current_dir()?.join(&selections.project_name);

    // Target safety comes before template-root resolution: a bad target must
    // never get as far as planning.
    ensure_safe_target_dir(&target_dir)?;

    if selections.database_mode == DatabaseMode::PostgresPsql {
        ensure_psql_available()?;
    }

    let config = TemplateConfig::from(&selections);
    let templates_dir = resolve_templates_dir()?;
    let plan = build_plan(&templates_dir, &config, &target_dir)?;

    if selections.dry_run {
        print_dry_run(&selections, &plan);
        return Ok(());
    }

    let engine = MiniJinjaRenderer::new();
    let context = build_context(&config)?;
    materialize(&plan, &context, &engine)?;

    println!(
        "{}",
        style(format!("Project created at {}", target_dir.display())).green()
    );

    if selections.install_deps {
        println!(
            "Installing dependencies with {}...",
            selections.package_manager.command()
        );
        install_dependencies(&target_dir, selections.package_manager, parsed.flags.verbose)?;
    } else {
        println!("Skipped dependency installation.");
    }

    if selections.init_git {
        println!("Initializing git repository...");
        init_git_repo(&target_dir)?;
    } else {
        println!("Skipped git initialization.");
    }

    println!("{}", style("Scaffolding complete.").green());
    print_next_steps(&selections);

    Ok(())
}
