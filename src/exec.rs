//! External process invocation: tool probes, dependency installation, and
//! git initialization. All of these run only after materialization has
//! succeeded; a failure here leaves the generated files on disk.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::config::PackageManager;
use crate::error::{Error, Result};

/// Checks whether a named external tool responds to a version query.
pub fn command_exists(command: &str) -> bool {
    Command::new(command)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Fatal precondition for psql mode: the local client tool must be present.
pub fn ensure_psql_available() -> Result<()> {
    if command_exists("psql") {
        return Ok(());
    }

    Err(Error::MissingCommand {
        command: "psql".to_string(),
        hint: "Postgres (psql) mode requires the `psql` client tool, but it was not found. \
               Install Postgres client tools and make sure `psql --version` works, or rerun \
               and choose Postgres (Docker)."
            .to_string(),
    })
}

fn run_command(command: &str, args: &[&str], cwd: &Path) -> Result<()> {
    let status = Command::new(command).args(args).current_dir(cwd).status()?;

    if !status.success() {
        return Err(Error::CommandFailed {
            command: command.to_string(),
            status: status.to_string(),
        });
    }

    Ok(())
}

/// Installs dependencies with the chosen package manager. Installer output
/// is quieted unless verbose mode is on.
pub fn install_dependencies(
    cwd: &Path,
    package_manager: PackageManager,
    verbose: bool,
) -> Result<()> {
    let mut args: Vec<&str> = match package_manager {
        PackageManager::Npm => vec!["install", "--no-audit", "--no-fund"],
        PackageManager::Yarn => vec!["install"],
    };

    if !verbose {
        args.push("--silent");
    }

    run_command(package_manager.command(), &args, cwd)
}

/// Initializes a git repository in the generated project.
pub fn init_git_repo(cwd: &Path) -> Result<()> {
    run_command("git", &["init"], cwd)
}
