use std::path::Path;

use clap::Parser;
use toolkit_catalog::AccessLevel;
use toolkit_cli::{run, App, Cli, CommandError, OutputFormat, ToolkitConfig};
use toolkit_content::NoticeKind;
use toolkit_theme::ThemeCategory;

fn config_in(dir: &Path) -> ToolkitConfig {
    let mut config = ToolkitConfig::default();
    config.storage.state_dir = dir.to_path_buf();
    config
}

fn exec(app: &mut App, args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::parse_from(std::iter::once("toolkit").chain(args.iter().copied()));
    let format = cli.format.unwrap_or(OutputFormat::Text);
    run(&cli.command, app, format)
}

#[test]
fn category_change_persists_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = App::open(config_in(dir.path())).unwrap();
    let out = exec(&mut app, &["theme", "set-category", "delivery"]).unwrap();
    assert_eq!(out, "category: Delivery\n");

    let app = App::open(config_in(dir.path())).unwrap();
    assert_eq!(app.theme.category(), ThemeCategory::Delivery);
    assert!(dir.path().join("local_storage.json").exists());
}

#[test]
fn toggle_twice_restores_the_mode() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = App::open(config_in(dir.path())).unwrap();
    let before = app.theme.mode();
    exec(&mut app, &["theme", "toggle"]).unwrap();
    assert_ne!(app.theme.mode(), before);
    exec(&mut app, &["theme", "toggle"]).unwrap();
    assert_eq!(app.theme.mode(), before);
}

#[test]
fn invalid_category_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = App::open(config_in(dir.path())).unwrap();
    let err = exec(&mut app, &["theme", "set-category", "marketing"]).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CommandError>(),
        Some(CommandError::UnknownCategory(_))
    ));
    assert_eq!(app.theme.category(), ThemeCategory::Sales);
}

#[test]
fn resolve_prints_css_values() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = App::open(config_in(dir.path())).unwrap();
    let out = exec(&mut app, &["theme", "resolve", "spacing.content.blockGap"]).unwrap();
    assert_eq!(out, "16px\n");

    let err = exec(&mut app, &["theme", "resolve", "colors.nope"]).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CommandError>(),
        Some(CommandError::UnknownPath(_))
    ));
}

#[test]
fn show_unknown_item_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = App::open(config_in(dir.path())).unwrap();
    let err = exec(&mut app, &["show", "missing"]).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CommandError>(),
        Some(CommandError::UnknownItem(id)) if id == "missing"
    ));
}

#[test]
fn show_respects_the_session_access_level() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(dir.path());
    config.session.email = Some("analyst@example.com".to_string());
    let mut app = App::open(config).unwrap();
    assert_eq!(app.access_level(), AccessLevel::Restricted);

    let restricted = exec(&mut app, &["show", "qa-regression-suite"]).unwrap();
    assert!(!restricted.contains("Coverage:"));

    let full = exec(&mut app, &["show", "qa-regression-suite", "--full"]).unwrap();
    assert!(full.contains("Coverage:"));
    assert!(full.contains("• Domestic instant payments"));
}

#[test]
fn list_filters_and_renders_html() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = App::open(config_in(dir.path())).unwrap();
    let html = exec(&mut app, &["--format", "html", "list", "--theme", "qa"]).unwrap();
    assert!(html.contains("data-item-id=\"qa-regression-suite\""));
    assert!(!html.contains("data-item-id=\"sales-discovery-playbook\""));
    assert!(html.contains("data-theme-category=\"sales\""));

    let none = exec(&mut app, &["list", "--query", "zzz-no-match"]).unwrap();
    assert!(none.contains("No items match."));

    let categories = exec(&mut app, &["list", "--categories", "--theme", "sales"]).unwrap();
    assert_eq!(categories, "Playbooks\nBusiness Cases\n");
}

#[test]
fn request_access_shows_the_submission_notice() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = App::open(config_in(dir.path())).unwrap();
    let out = exec(&mut app, &["request-access"]).unwrap();
    assert!(out.contains(NoticeKind::Submission.default_message()));

    let out = exec(&mut app, &["feedback"]).unwrap();
    assert!(out.contains(NoticeKind::Feedback.default_message()));
}

#[test]
fn theme_overrides_are_applied() {
    let dir = tempfile::tempdir().unwrap();
    let overrides = dir.path().join("overrides.toml");
    std::fs::write(
        &overrides,
        "[light.shared.spacing.content]\nblockGap = \"20px\"\n",
    )
    .unwrap();
    let mut config = config_in(dir.path());
    config.theme.overrides = Some(overrides);
    let mut app = App::open(config).unwrap();
    if app.theme.mode() != toolkit_theme::ColorScheme::Light {
        exec(&mut app, &["theme", "set-mode", "light"]).unwrap();
    }
    let out = exec(&mut app, &["theme", "resolve", "spacing.content.blockGap"]).unwrap();
    assert_eq!(out, "20px\n");
}
