//! create-express-api scaffolds a ready-to-run Express API backend from a
//! short set of selections: language variant, module system, architecture
//! style, database backend, and an educational-comments toggle. Planning is
//! a pure step over the bundled template trees; materialization writes the
//! plan to disk.

/// Command-line argument parsing (never fails; collects unknown flags)
pub mod args;

/// Top-level orchestration of one scaffolding run
pub mod cli;

/// Option enums, resolved selections, and the template configuration
pub mod config;

/// Template data context computation (names, labels, connection strings)
pub mod context;

/// Error types and handling
pub mod error;

/// External process invocation (tool probes, installs, git init)
pub mod exec;

/// Logger setup
pub mod logger;

/// Terminal summaries and next-step guidance
pub mod output;

/// Template root resolution and generation planning
pub mod plan;

/// Materialization of a generation plan to disk
pub mod processor;

/// Interactive selection resolution
pub mod prompt;

/// Template rendering via MiniJinja
pub mod renderer;

/// Project-name and target-directory validation
pub mod validation;
