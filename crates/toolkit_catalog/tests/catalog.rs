use pretty_assertions::assert_eq;
use toolkit_catalog::{view, AccessLevel, Catalog, CatalogError, MaterialKind, Query, Session};
use toolkit_content::{ContentBlock, NumberedItem};
use toolkit_theme::{ColorScheme, ThemeCategory, ThemeResolver};

fn ids<'a>(items: impl IntoIterator<Item = &'a toolkit_catalog::ToolkitItem>) -> Vec<&'a str> {
    items.into_iter().map(|i| i.id.as_str()).collect()
}

#[test]
fn search_by_theme_keeps_catalog_order() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(
        ids(catalog.search(&Query::new().theme(ThemeCategory::QualityAssurance))),
        vec!["qa-regression-suite", "qa-test-strategy"]
    );
}

#[test]
fn search_combines_text_and_tags() {
    let catalog = Catalog::builtin().unwrap();
    let query = Query::new().text("payment").tag("automation");
    assert_eq!(ids(catalog.search(&query)), vec!["qa-regression-suite"]);

    let query = Query::new().text("payment");
    assert_eq!(
        ids(catalog.search(&query)),
        vec!["delivery-api-accelerator", "qa-regression-suite"]
    );
}

#[test]
fn empty_query_returns_everything() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(catalog.search(&Query::new()).len(), catalog.len());
}

#[test]
fn unknown_id_is_not_found() {
    let catalog = Catalog::builtin().unwrap();
    assert!(catalog.item("does-not-exist").is_none());
    assert!(catalog.detailed_description("does-not-exist").is_none());
    assert!(catalog.code_examples("does-not-exist").is_none());
    assert!(catalog.detail_blocks("does-not-exist").is_none());

    let resolver = ThemeResolver::builtin();
    let theme = resolver.scoped(ColorScheme::Light, ThemeCategory::Sales);
    assert!(view::detail(&catalog, "does-not-exist", AccessLevel::Full, &theme).is_none());
}

#[test]
fn items_without_structured_detail_use_the_long_description() {
    let catalog = Catalog::builtin().unwrap();
    assert!(catalog.detailed_description("sales-value-calculator").is_none());
    assert_eq!(
        catalog.detail_blocks("sales-value-calculator").unwrap().into_owned(),
        vec![
            ContentBlock::header("Inputs needed:"),
            ContentBlock::numbered([
                NumberedItem::new("Monthly branch transactions"),
                NumberedItem::new("Digital adoption rate").with_sub_bullets(["Current and target"]),
                NumberedItem::new("Average handling cost"),
            ]),
        ]
    );
}

#[test]
fn materials_and_code_examples_load() {
    let catalog = Catalog::builtin().unwrap();
    let item = catalog.item("delivery-api-accelerator").unwrap();
    assert_eq!(item.materials[0].kind, MaterialKind::Code);
    let examples = catalog.code_examples("delivery-api-accelerator").unwrap();
    assert_eq!(examples[0].language, "rust");
}

#[test]
fn detail_view_branches_on_access_level() {
    let catalog = Catalog::builtin().unwrap();
    let resolver = ThemeResolver::builtin();
    let theme = resolver.scoped(ColorScheme::Dark, ThemeCategory::Delivery);
    let mut session = Session::sign_in("analyst@example.com").unwrap();

    let restricted = view::detail(
        &catalog,
        "delivery-migration-runbook",
        session.access_level(),
        &theme,
    )
    .unwrap();
    let text = restricted.to_text();
    assert!(text.contains(view::REQUEST_ACCESS_NOTE));
    assert!(!text.contains("Rollback checkpoints:"));

    session.grant_full_access();
    let full = view::detail(
        &catalog,
        "delivery-migration-runbook",
        session.access_level(),
        &theme,
    )
    .unwrap();
    let text = full.to_text();
    assert!(text.contains("Rollback checkpoints:"));
    assert!(text.contains("1. Rehearsal"));
    assert!(text.contains("Runbook"));
    assert!(!text.contains(view::REQUEST_ACCESS_NOTE));
}

#[test]
fn full_view_includes_code_examples() {
    let catalog = Catalog::builtin().unwrap();
    let resolver = ThemeResolver::builtin();
    let theme = resolver.scoped(ColorScheme::Light, ThemeCategory::Delivery);
    let html = view::detail(&catalog, "delivery-api-accelerator", AccessLevel::Full, &theme)
        .unwrap()
        .to_html();
    assert!(html.contains("class=\"language-rust\""));
    assert!(html.contains("balances(&amp;account_id)"));
}

#[test]
fn loads_catalog_from_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.yaml");
    std::fs::write(
        &path,
        "items:\n  - { id: x, title: X, theme: delivery, category: C, short_description: s, version: \"1\", last_updated: \"2024-01-01\" }\n",
    )
    .unwrap();
    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.item("x").unwrap().theme, ThemeCategory::Delivery);

    let missing = Catalog::load(dir.path().join("missing.yaml"));
    assert!(matches!(missing, Err(CatalogError::Io { .. })));
}

#[test]
fn detail_for_unknown_item_is_an_error() {
    let src = "items: []\ndetailed_descriptions:\n  ghost:\n    - { type: paragraph, text: Boo }\n";
    assert!(matches!(
        Catalog::from_yaml_str(src),
        Err(CatalogError::UnknownDetailId(id)) if id == "ghost"
    ));
}

#[test]
fn material_kind_is_read_from_the_type_key() {
    let item = "{ id: x, title: X, theme: sales, category: C, short_description: s, version: \"1\", last_updated: \"2024-01-01\", materials: [ { MATERIAL, url: /materials/sample.pdf, title: Deck } ] }";
    let catalog =
        Catalog::from_yaml_str(&format!("items:\n  - {}\n", item.replace("MATERIAL", "type: presentation")))
            .unwrap();
    assert_eq!(catalog.item("x").unwrap().materials[0].kind, MaterialKind::Presentation);

    let legacy = format!("items:\n  - {}\n", item.replace("MATERIAL", "kind: presentation"));
    assert!(matches!(Catalog::from_yaml_str(&legacy), Err(CatalogError::Yaml(_))));
}
