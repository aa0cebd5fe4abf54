use pretty_assertions::assert_eq;
use toolkit_content::blocks::to_source;
use toolkit_content::{parse, render_blocks, BlockRenderer, ContentBlock, NumberedItem, RenderConfig};
use toolkit_theme::{ColorScheme, Resolve, ThemeCategory, ThemePath, ThemeResolver};

const SAMPLE: &str = "Engagement model:\n\n\
Our approach: • Discovery workshop • Target architecture • Roadmap\n\n\
1. Assess current state\nInterview stakeholders\nReview systems\n2. Design the target\n\n\
All phases are delivered jointly with the client team.";

#[test]
fn sample_parses_into_expected_blocks() {
    assert_eq!(
        parse(SAMPLE),
        vec![
            ContentBlock::header("Engagement model:"),
            ContentBlock::header("Our approach:"),
            ContentBlock::bullets(["Discovery workshop", "Target architecture", "Roadmap"]),
            ContentBlock::numbered([
                NumberedItem::new("Assess current state")
                    .with_sub_bullets(["Interview stakeholders", "Review systems"]),
                NumberedItem::new("Design the target"),
            ]),
            ContentBlock::paragraph("All phases are delivered jointly with the client team."),
        ]
    );
}

#[test]
fn parsing_is_deterministic() {
    assert_eq!(parse(SAMPLE), parse(SAMPLE));
}

#[test]
fn paragraph_text_reparses_to_itself() {
    for block in parse(SAMPLE) {
        if let ContentBlock::Paragraph { text } = &block {
            assert_eq!(parse(text), vec![block.clone()]);
        }
    }
}

#[test]
fn source_form_reparses_to_the_same_blocks() {
    let blocks = vec![
        ContentBlock::header("Key Features:"),
        ContentBlock::bullets(["One", "Two"]),
        ContentBlock::numbered([NumberedItem::new("Plan").with_sub_bullets(["agree scope"])]),
        ContentBlock::paragraph("Closing words."),
    ];
    assert_eq!(parse(&to_source(&blocks)), blocks);
}

#[test]
fn rendering_is_idempotent() {
    let resolver = ThemeResolver::builtin();
    let theme = resolver.scoped(ColorScheme::Light, ThemeCategory::QualityAssurance);
    let blocks = parse(SAMPLE);
    let renderer = BlockRenderer::new(&theme);
    assert_eq!(renderer.render(&blocks), renderer.render(&blocks));
    assert_eq!(
        renderer.render(&blocks).to_html(),
        render_blocks(&blocks, &theme).to_html()
    );
}

#[test]
fn markers_follow_the_active_category() {
    let resolver = ThemeResolver::builtin();
    let blocks = parse(SAMPLE);
    let mut seen = Vec::new();
    for category in ThemeCategory::all() {
        let theme = resolver.scoped(ColorScheme::Light, *category);
        let html = render_blocks(&blocks, &theme).to_html();
        let marker = theme.css(ThemePath::ContentBulletMarker);
        assert!(html.contains(&format!("background: {marker}")), "{category}");
        seen.push(marker);
    }
    seen.dedup();
    assert_eq!(seen.len(), ThemeCategory::all().len());
}

#[test]
fn dark_mode_changes_text_color() {
    let resolver = ThemeResolver::builtin();
    let blocks = vec![ContentBlock::paragraph("Body")];
    let light = render_blocks(&blocks, &resolver.scoped(ColorScheme::Light, ThemeCategory::Sales));
    let dark = render_blocks(&blocks, &resolver.scoped(ColorScheme::Dark, ThemeCategory::Sales));
    assert_ne!(light.to_html(), dark.to_html());
}

#[test]
fn custom_config_overrides_sizes() {
    let resolver = ThemeResolver::builtin();
    let theme = resolver.scoped(ColorScheme::Light, ThemeCategory::Sales);
    let config = RenderConfig::from_theme(&theme).body_size(11.0);
    let tree = BlockRenderer::with_config(config).render(&[ContentBlock::paragraph("Small")]);
    let paragraph = tree.find_all("p")[0];
    assert_eq!(paragraph.get_style("font-size"), Some("11px"));
}

#[test]
fn plain_text_of_the_sample() {
    let resolver = ThemeResolver::builtin();
    let theme = resolver.scoped(ColorScheme::Dark, ThemeCategory::Delivery);
    assert_eq!(
        render_blocks(&parse(SAMPLE), &theme).to_text(),
        "Engagement model:\n\n\
Our approach:\n\n\
• Discovery workshop\n• Target architecture\n• Roadmap\n\n\
1. Assess current state\n  ◦ Interview stakeholders\n  ◦ Review systems\n2. Design the target\n\n\
All phases are delivered jointly with the client team.\n"
    );
}

#[test]
fn empty_input_renders_an_empty_container() {
    let resolver = ThemeResolver::builtin();
    let theme = resolver.scoped(ColorScheme::Light, ThemeCategory::Sales);
    let tree = render_blocks(&parse(""), &theme);
    assert_eq!(tree.child_nodes().count(), 0);
    assert_eq!(tree.to_text(), "\n");
}
