use create_express_api::args::parse;
use create_express_api::config::{
    Architecture, DatabaseMode, JsDevWatcher, Language, ModuleSystem, PackageManager,
};
use create_express_api::prompt::resolve_selections;

fn argv(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_yes_flag_short_circuits_to_defaults() {
    let parsed = parse(&argv(&["my-api", "--yes"]));

    let selections = resolve_selections(&parsed, true).unwrap();

    assert_eq!(selections.project_name, "my-api");
    assert_eq!(selections.language, Language::Js);
    assert_eq!(selections.module_system, ModuleSystem::CommonJs);
    assert_eq!(selections.js_dev_watcher, JsDevWatcher::NodeWatch);
    assert_eq!(selections.architecture, Architecture::Simple);
    assert_eq!(selections.database_mode, DatabaseMode::Memory);
    assert!(selections.educational);
    assert!(selections.install_deps);
    assert!(selections.init_git);
    assert!(!selections.dry_run);
}

#[test]
fn test_non_interactive_stream_behaves_like_yes() {
    let parsed = parse(&argv(&[]));

    let selections = resolve_selections(&parsed, false).unwrap();

    assert_eq!(selections.project_name, "my-api");
    assert_eq!(selections.package_manager, PackageManager::Npm);
}

#[test]
fn test_flags_flow_into_non_interactive_selections() {
    let parsed = parse(&argv(&[
        "my-api",
        "--yes",
        "--no-install",
        "--no-git",
        "--dry-run",
        "--yarn",
    ]));

    let selections = resolve_selections(&parsed, true).unwrap();

    assert!(!selections.install_deps);
    assert!(!selections.init_git);
    assert!(selections.dry_run);
    assert_eq!(selections.package_manager, PackageManager::Yarn);
}

#[test]
fn test_default_project_name_when_no_positional() {
    let parsed = parse(&argv(&["--yes"]));

    let selections = resolve_selections(&parsed, true).unwrap();

    assert_eq!(selections.project_name, "my-api");
}
