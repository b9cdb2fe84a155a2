use create_express_api::args::parse;
use create_express_api::config::PackageManager;

fn argv(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_parsing_is_pure() {
    let tokens = argv(&["my-api", "--yes", "--unknown", "--pm", "yarn"]);

    let first = parse(&tokens);
    let second = parse(&tokens);

    assert_eq!(first, second);
}

#[test]
fn test_mixed_ordering_for_project_name_and_flags() {
    let cases = [
        argv(&["my-api", "--yes", "--dry-run"]),
        argv(&["--yes", "--dry-run", "my-api"]),
        argv(&["--dry-run", "my-api", "--yes"]),
    ];

    for tokens in cases {
        let parsed = parse(&tokens);
        assert_eq!(parsed.project_name.as_deref(), Some("my-api"));
        assert!(parsed.flags.yes);
        assert!(parsed.flags.dry_run);
    }
}

#[test]
fn test_collects_unknown_flags_without_failing() {
    let parsed = parse(&argv(&["my-api", "--unknown", "-x", "--yes"]));

    assert_eq!(parsed.project_name.as_deref(), Some("my-api"));
    assert!(parsed.flags.yes);
    assert_eq!(parsed.unknown_flags, vec!["--unknown", "-x"]);
}

#[test]
fn test_double_dash_separator_forces_positionals() {
    let parsed = parse(&argv(&["--yes", "--", "--dry-run", "my-api"]));

    assert!(parsed.flags.yes);
    assert!(!parsed.flags.dry_run);
    assert_eq!(parsed.positionals, vec!["--dry-run", "my-api"]);
    assert_eq!(parsed.project_name.as_deref(), Some("--dry-run"));
}

#[test]
fn test_explicit_value_syntax_for_booleans() {
    let parsed = parse(&argv(&["my-api", "--yes=true", "--dry-run=1", "--no-git=false"]));

    assert!(parsed.flags.yes);
    assert!(parsed.flags.dry_run);
    assert!(parsed.flags.git);
    assert!(parsed.unknown_flags.is_empty());
}

#[test]
fn test_no_install_and_no_git_semantics() {
    let parsed = parse(&argv(&["my-api", "--no-install", "--no-git=false"]));

    assert!(!parsed.flags.install);
    assert!(parsed.provided.install);
    assert!(parsed.flags.git);
    assert!(parsed.provided.git);
}

#[test]
fn test_invalid_boolean_value_makes_token_unknown() {
    let parsed = parse(&argv(&["my-api", "--yes=maybe"]));

    assert!(!parsed.flags.yes);
    assert!(!parsed.provided.yes);
    assert_eq!(parsed.unknown_flags, vec!["--yes=maybe"]);
}

#[test]
fn test_boolean_value_normalization() {
    let parsed = parse(&argv(&["--yes= TRUE ", "--dry-run=Off"]));

    assert!(parsed.flags.yes);
    assert!(!parsed.flags.dry_run);
    assert!(parsed.provided.dry_run);
    assert!(parsed.unknown_flags.is_empty());
}

#[test]
fn test_verbose_flag() {
    let parsed = parse(&argv(&["my-api", "--verbose"]));

    assert!(parsed.flags.verbose);
    assert!(parsed.unknown_flags.is_empty());
}

#[test]
fn test_package_manager_via_equals_and_value_token() {
    let with_equals = parse(&argv(&["my-api", "--package-manager=yarn"]));
    let with_value_token = parse(&argv(&["my-api", "--pm", "yarn"]));

    assert_eq!(with_equals.flags.package_manager, PackageManager::Yarn);
    assert!(with_equals.provided.package_manager);
    assert_eq!(with_value_token.flags.package_manager, PackageManager::Yarn);
    assert!(with_value_token.provided.package_manager);
    assert_eq!(with_value_token.positionals, vec!["my-api"]);
}

#[test]
fn test_yarn_shortcut() {
    let parsed = parse(&argv(&["my-api", "--yarn"]));
    let parsed_false = parse(&argv(&["my-api", "--yarn=false"]));

    assert_eq!(parsed.flags.package_manager, PackageManager::Yarn);
    assert!(parsed.provided.package_manager);
    assert_eq!(parsed_false.flags.package_manager, PackageManager::Npm);
    assert!(parsed_false.provided.package_manager);
}

#[test]
fn test_invalid_package_manager_values_are_unknown() {
    let parsed = parse(&argv(&["my-api", "--package-manager=pnpm", "--pm"]));

    assert_eq!(parsed.flags.package_manager, PackageManager::Npm);
    assert!(!parsed.provided.package_manager);
    assert_eq!(parsed.unknown_flags, vec!["--package-manager=pnpm", "--pm"]);
}

#[test]
fn test_invalid_pm_value_does_not_consume_next_token() {
    let parsed = parse(&argv(&["--pm", "my-api"]));

    assert_eq!(parsed.project_name.as_deref(), Some("my-api"));
    assert_eq!(parsed.unknown_flags, vec!["--pm"]);
}

#[test]
fn test_pm_does_not_consume_flag_like_token() {
    let parsed = parse(&argv(&["--pm", "--yes", "my-api"]));

    assert_eq!(parsed.unknown_flags, vec!["--pm"]);
    assert!(parsed.flags.yes);
    assert_eq!(parsed.project_name.as_deref(), Some("my-api"));
}

#[test]
fn test_bare_dash_is_positional() {
    let parsed = parse(&argv(&["-", "--yes"]));

    assert_eq!(parsed.project_name.as_deref(), Some("-"));
    assert!(parsed.flags.yes);
    assert!(parsed.unknown_flags.is_empty());
}

#[test]
fn test_defaults_with_no_arguments() {
    let parsed = parse(&[]);

    assert_eq!(parsed.project_name, None);
    assert!(parsed.positionals.is_empty());
    assert!(parsed.unknown_flags.is_empty());
    assert!(!parsed.flags.yes);
    assert!(!parsed.flags.dry_run);
    assert!(parsed.flags.install);
    assert!(parsed.flags.git);
    assert!(!parsed.flags.verbose);
    assert_eq!(parsed.flags.package_manager, PackageManager::Npm);
    assert!(!parsed.provided.yes);
    assert!(!parsed.provided.package_manager);
}
