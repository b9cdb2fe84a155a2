//! Template data context computation.
//!
//! Derives the substitution values fed into every template: normalized
//! package and database names, human-readable labels, convenience booleans,
//! the dev-run command, and the database connection string. The context is a
//! pure function of the template configuration and is recomputed fresh per
//! invocation.

use serde_json::{json, Map, Value};
use url::Url;

use crate::config::{DatabaseMode, JsDevWatcher, Language, ModuleSystem, TemplateConfig};
use crate::error::Result;

/// Package name used when normalization leaves nothing usable.
const FALLBACK_PACKAGE_NAME: &str = "express-api";

/// Database name used when normalization leaves nothing usable.
const FALLBACK_DATABASE_NAME: &str = "express_api";

/// Normalizes a project name into an npm-safe package name: lowercased, runs
/// of characters outside `[a-z0-9._-]` collapsed to a single `-`, leading
/// and trailing `-` trimmed.
pub fn to_package_name(project_name: &str) -> String {
    let mut cleaned = String::new();

    for c in project_name.trim().to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '_' || c == '-' {
            cleaned.push(c);
        } else if !cleaned.ends_with('-') {
            cleaned.push('-');
        }
    }

    let cleaned = cleaned.trim_matches('-');

    if cleaned.is_empty() {
        FALLBACK_PACKAGE_NAME.to_string()
    } else {
        cleaned.to_string()
    }
}

/// Normalizes a project name into a Postgres database name, suffixed with
/// the development environment marker.
pub fn to_database_name(project_name: &str) -> String {
    let mut cleaned = String::new();

    for c in project_name.trim().to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            cleaned.push(c);
        } else if !cleaned.ends_with('_') {
            cleaned.push('_');
        }
    }

    let cleaned = cleaned.trim_matches('_');

    if cleaned.is_empty() {
        format!("{FALLBACK_DATABASE_NAME}_dev")
    } else {
        format!("{cleaned}_dev")
    }
}

/// Current OS username, used as the connecting role in psql mode.
fn os_username() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "postgres".to_string())
}

/// Builds a Postgres connection string. The `url` crate percent-encodes the
/// userinfo, which matters for OS usernames with special characters.
fn postgres_url(
    username: &str,
    password: &str,
    port: u16,
    database_name: &str,
) -> Result<String> {
    let mut url = Url::parse("postgres://localhost")?;
    let _ = url.set_username(username);
    let _ = url.set_password(Some(password));
    let _ = url.set_port(Some(port));
    url.set_path(database_name);
    Ok(url.to_string())
}

/// Computes the substitution context for one generation run.
pub fn build_context(config: &TemplateConfig) -> Result<Value> {
    let is_type_script = config.language == Language::Ts;
    let is_java_script = config.language == Language::Js;
    let is_esm = config.module_system == ModuleSystem::Esm;
    let use_nodemon = is_java_script && config.js_dev_watcher == JsDevWatcher::Nodemon;
    let is_postgres = config.database_mode.is_postgres();
    let is_docker = config.database_mode == DatabaseMode::PostgresDocker;
    let is_psql = config.database_mode == DatabaseMode::PostgresPsql;

    let database_name = to_database_name(&config.project_name);
    let username = if is_postgres { os_username() } else { String::new() };

    // Docker mode uses a fixed service credential on a non-default port so it
    // never collides with a locally installed Postgres.
    let database_url = if is_docker {
        postgres_url("postgres", "postgres", 5433, &database_name)?
    } else {
        postgres_url(&username, "postgres", 5432, &database_name)?
    };

    let mut context = match serde_json::to_value(config)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    context.insert("isTypeScript".into(), json!(is_type_script));
    context.insert("isEsm".into(), json!(is_esm));
    context.insert("isCommonJs".into(), json!(!is_esm));
    context.insert("isPostgres".into(), json!(is_postgres));
    context.insert("isDocker".into(), json!(is_docker));
    context.insert("isPsql".into(), json!(is_psql));
    context.insert("useNodemon".into(), json!(use_nodemon));
    context.insert("packageName".into(), json!(to_package_name(&config.project_name)));
    context.insert("databaseName".into(), json!(database_name));
    context.insert(
        "educationalLabel".into(),
        json!(if config.educational { "On" } else { "Off" }),
    );
    context.insert("languageLabel".into(), json!(config.language.label()));
    context.insert("moduleSystemLabel".into(), json!(config.module_system.label()));
    context.insert("architectureLabel".into(), json!(config.architecture.label()));
    context.insert("databaseLabel".into(), json!(config.database_mode.label()));
    context.insert("jsDevWatcherLabel".into(), json!(config.js_dev_watcher.label()));
    context.insert(
        "jsDevCommand".into(),
        json!(if use_nodemon {
            "nodemon src/server.js"
        } else {
            "node --watch src/server.js"
        }),
    );
    context.insert("databaseUrl".into(), json!(database_url));
    context.insert("osUsername".into(), json!(username));

    Ok(Value::Object(context))
}
