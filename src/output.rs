//! Terminal summaries: dry-run plan display, completion summary, and
//! next-step guidance. Consumes plan data only; nothing here feeds back
//! into planning.

use console::style;

use crate::config::{DatabaseMode, Language, PackageManager, UserSelections};
use crate::context::to_database_name;
use crate::plan::GenerationPlan;

fn print_heading(title: &str) {
    println!();
    println!("{}", style(title).cyan().bold());
}

fn print_key_values(rows: &[(&str, String)]) {
    let key_width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);

    for (key, value) in rows {
        // Pad before styling so ANSI escapes don't skew the column width.
        let padded = format!("{key:key_width$}");
        println!("  {}  {}", style(padded).bold(), style(value).cyan());
    }
}

fn print_commands(commands: &[String]) {
    for command in commands {
        println!("  {}", style(command).cyan().bold());
    }
}

fn language_value(selections: &UserSelections) -> String {
    match selections.language {
        Language::Js => format!(
            "{} ({})",
            selections.language.label(),
            selections.module_system.label()
        ),
        Language::Ts => selections.language.label().to_string(),
    }
}

fn install_command(selections: &UserSelections) -> String {
    format!("{} install", selections.package_manager.command())
}

fn script_command(selections: &UserSelections, script: &str) -> String {
    match selections.package_manager {
        PackageManager::Yarn => format!("yarn {script}"),
        PackageManager::Npm if script == "test" => "npm test".to_string(),
        PackageManager::Npm => format!("npm run {script}"),
    }
}

fn next_step_commands(selections: &UserSelections) -> Vec<String> {
    let mut commands = vec![format!("cd {}", selections.project_name)];

    if !selections.install_deps {
        commands.push(install_command(selections));
    }

    commands.push("cp .env.example .env".to_string());

    match selections.database_mode {
        DatabaseMode::PostgresPsql => {
            commands.push(script_command(selections, "db:create"));
            commands.push(script_command(selections, "db:setup"));
            commands.push(script_command(selections, "db:seed"));
        }
        DatabaseMode::PostgresDocker => {
            commands.push(script_command(selections, "db:up"));
            commands.push(script_command(selections, "db:setup"));
            commands.push(script_command(selections, "db:seed"));
        }
        DatabaseMode::Memory => {}
    }

    commands.push(script_command(selections, "dev"));

    if selections.language == Language::Ts {
        commands.push(script_command(selections, "build"));
    }

    commands.push(script_command(selections, "test"));

    commands
}

/// First-time Postgres role setup hints for psql mode, per platform.
fn psql_setup_lines(selections: &UserSelections, platform: &str) -> Vec<String> {
    let database_name = to_database_name(&selections.project_name);

    match platform {
        "windows" => vec![
            "# Edit .env and use the role/password from the PostgreSQL installer".to_string(),
            format!("DATABASE_URL=postgres://postgres:<your-password>@localhost:5432/{database_name}"),
            "# Then run the db scripts:".to_string(),
            script_command(selections, "db:create"),
        ],
        "macos" => vec![
            "# Homebrew installs often already create a role for your OS user".to_string(),
            "# Run these only if you get a role/auth error".to_string(),
            "createuser --createdb \"$USER\"".to_string(),
            "psql -d postgres -c \"ALTER USER \\\"$USER\\\" WITH PASSWORD 'postgres';\"".to_string(),
        ],
        _ => vec![
            "# Create a Postgres role matching your OS user".to_string(),
            "sudo -u postgres createuser --createdb \"$USER\"".to_string(),
            "sudo -u postgres psql -c \"ALTER USER \\\"$USER\\\" WITH PASSWORD 'postgres';\"".to_string(),
        ],
    }
}

/// Prints the dry-run configuration summary and the planned output paths.
/// Nothing is written to disk in dry-run mode.
pub fn print_dry_run(selections: &UserSelections, plan: &GenerationPlan) {
    let mut rows: Vec<(&str, String)> = vec![
        ("Target", plan.target_dir.display().to_string()),
        ("Language", language_value(selections)),
        ("Architecture", selections.architecture.label().to_string()),
        ("Database", selections.database_mode.label().to_string()),
    ];

    if selections.language == Language::Js {
        rows.push(("Dev watcher", selections.js_dev_watcher.label().to_string()));
    }

    rows.push(("Educational", if selections.educational { "On" } else { "Off" }.to_string()));
    rows.push(("Install deps", if selections.install_deps { "Yes" } else { "No" }.to_string()));
    rows.push(("Package manager", selections.package_manager.label().to_string()));
    rows.push(("Init git", if selections.init_git { "Yes" } else { "No" }.to_string()));

    print_heading("Dry Run: Configuration");
    print_key_values(&rows);

    print_heading(&format!("Dry Run: Files ({})", plan.files.len()));
    for file in &plan.files {
        println!("  {} {}", style("-").dim(), file.output_relative_path);
    }
}

/// Prints the completion summary and ordered next-step commands.
pub fn print_next_steps(selections: &UserSelections) {
    let stack = [
        language_value(selections),
        selections.architecture.label().to_string(),
        selections.database_mode.label().to_string(),
    ]
    .join(" | ");

    let mut rows: Vec<(&str, String)> = vec![
        ("Project", selections.project_name.clone()),
        ("Stack", stack),
        ("Educational", if selections.educational { "On" } else { "Off" }.to_string()),
        ("Package manager", selections.package_manager.label().to_string()),
    ];

    if selections.language == Language::Js {
        rows.push(("Dev watcher", selections.js_dev_watcher.label().to_string()));
    }

    print_heading("Project Ready");
    print_key_values(&rows);

    print_heading("Next Steps");
    print_commands(&next_step_commands(selections));

    if selections.database_mode == DatabaseMode::PostgresPsql {
        print_heading("Postgres Setup (run once if needed)");
        for line in psql_setup_lines(selections, std::env::consts::OS) {
            if line.starts_with('#') {
                println!("  {}", style(line).dim());
            } else {
                println!("  {}", style(line).cyan().bold());
            }
        }
    }

    println!();
}
