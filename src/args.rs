//! Command-line argument parsing.
//!
//! The parser is a pure function over the raw token list and never fails:
//! unrecognized or malformed flags are collected into `unknown_flags` so the
//! caller can warn about them and continue with defaults. Alongside each
//! resolved flag value the parser records whether the user supplied the flag
//! explicitly, because the selection resolver must know when a flag beats an
//! interactive prompt.

use crate::config::PackageManager;

/// Literal values accepted as boolean "true" after trim + lowercase.
const TRUE_VALUES: [&str; 4] = ["1", "true", "yes", "on"];

/// Literal values accepted as boolean "false" after trim + lowercase.
const FALSE_VALUES: [&str; 4] = ["0", "false", "no", "off"];

/// Resolved flag values, always fully populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliFlags {
    pub yes: bool,
    pub dry_run: bool,
    pub install: bool,
    pub git: bool,
    pub verbose: bool,
    pub package_manager: PackageManager,
}

impl Default for CliFlags {
    fn default() -> Self {
        Self {
            yes: false,
            dry_run: false,
            install: true,
            git: true,
            verbose: false,
            package_manager: PackageManager::Npm,
        }
    }
}

/// Tracks which flags the user supplied explicitly, as opposed to their
/// defaults. `provided.install == true` means `--no-install` (in some form)
/// literally appeared on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagPresence {
    pub yes: bool,
    pub dry_run: bool,
    pub install: bool,
    pub git: bool,
    pub verbose: bool,
    pub package_manager: bool,
}

/// Result of parsing one invocation's argument tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    /// First positional token, if any.
    pub project_name: Option<String>,
    /// All non-flag tokens, in input order.
    pub positionals: Vec<String>,
    /// Flag-looking tokens that matched no recognized flag or carried an
    /// invalid value.
    pub unknown_flags: Vec<String>,
    pub flags: CliFlags,
    pub provided: FlagPresence,
}

fn parse_boolean_value(value: &str) -> Option<bool> {
    let normalized = value.trim().to_lowercase();

    if TRUE_VALUES.contains(&normalized.as_str()) {
        return Some(true);
    }

    if FALSE_VALUES.contains(&normalized.as_str()) {
        return Some(false);
    }

    None
}

fn parse_package_manager_value(value: &str) -> Option<PackageManager> {
    match value.trim().to_lowercase().as_str() {
        "npm" => Some(PackageManager::Npm),
        "yarn" => Some(PackageManager::Yarn),
        _ => None,
    }
}

/// Splits a `--name` or `--name=value` token on the first `=`.
fn split_flag(token: &str) -> (&str, Option<&str>) {
    let without_prefix = &token[2..];

    match without_prefix.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (without_prefix, None),
    }
}

/// Parses raw argument tokens into a `ParsedArgs`.
///
/// Tokenization rules, in priority order:
/// 1. A literal `--` switches to positional-only mode for the rest.
/// 2. A token not starting with `-`, or exactly `-`, is a positional.
/// 3. A short flag (`-x`) is always unrecognized.
/// 4. `--name[=value]` is matched case-sensitively against the known set.
///
/// A boolean flag without `=value` means "true". Explicit values outside the
/// accepted literal sets make the whole token unknown without touching any
/// state, so one malformed flag never suppresses detection of another.
pub fn parse(argv: &[String]) -> ParsedArgs {
    let mut flags = CliFlags::default();
    let mut provided = FlagPresence::default();
    let mut unknown_flags: Vec<String> = Vec::new();
    let mut positionals: Vec<String> = Vec::new();

    let mut positional_only = false;
    let mut index = 0;

    while index < argv.len() {
        let token = &argv[index];
        index += 1;

        if positional_only {
            positionals.push(token.clone());
            continue;
        }

        if token == "--" {
            positional_only = true;
            continue;
        }

        if !token.starts_with('-') || token == "-" {
            positionals.push(token.clone());
            continue;
        }

        if !token.starts_with("--") {
            unknown_flags.push(token.clone());
            continue;
        }

        let (name, value) = split_flag(token);

        match name {
            "yes" | "dry-run" | "no-install" | "no-git" | "verbose" | "yarn" => {
                let parsed_value = match value {
                    Some(raw) => match parse_boolean_value(raw) {
                        Some(parsed) => parsed,
                        None => {
                            unknown_flags.push(token.clone());
                            continue;
                        }
                    },
                    // Flag presence alone means activation.
                    None => true,
                };

                match name {
                    "yes" => {
                        flags.yes = parsed_value;
                        provided.yes = true;
                    }
                    "dry-run" => {
                        flags.dry_run = parsed_value;
                        provided.dry_run = true;
                    }
                    "no-install" => {
                        flags.install = !parsed_value;
                        provided.install = true;
                    }
                    "no-git" => {
                        flags.git = !parsed_value;
                        provided.git = true;
                    }
                    "verbose" => {
                        flags.verbose = parsed_value;
                        provided.verbose = true;
                    }
                    "yarn" => {
                        flags.package_manager = if parsed_value {
                            PackageManager::Yarn
                        } else {
                            PackageManager::Npm
                        };
                        provided.package_manager = true;
                    }
                    _ => unreachable!(),
                }
            }
            "package-manager" | "pm" => {
                let mut package_manager = value.and_then(parse_package_manager_value);

                // Without `=value`, consume the next token as the value only
                // if it is not flag-like and parses as a valid choice.
                // An invalid next token stays untouched as a positional
                // candidate.
                if value.is_none() {
                    if let Some(next_token) = argv.get(index) {
                        if !next_token.starts_with('-') {
                            if let Some(parsed) = parse_package_manager_value(next_token) {
                                package_manager = Some(parsed);
                                index += 1;
                            }
                        }
                    }
                }

                match package_manager {
                    Some(package_manager) => {
                        flags.package_manager = package_manager;
                        provided.package_manager = true;
                    }
                    None => unknown_flags.push(token.clone()),
                }
            }
            _ => unknown_flags.push(token.clone()),
        }
    }

    ParsedArgs {
        project_name: positionals.first().cloned(),
        positionals,
        unknown_flags,
        flags,
        provided,
    }
}
