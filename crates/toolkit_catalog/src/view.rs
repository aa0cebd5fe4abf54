//! Card and detail views
//!
//! Views branch on [`AccessLevel`] only. Restricted viewers get the summary
//! card with a request-access note; full viewers get the long description,
//! materials, and code examples.

use toolkit_content::node::{div, el, span};
use toolkit_content::{BlockRenderer, Node, RenderConfig};
use toolkit_theme::{Resolve, ThemePath};

use crate::access::AccessLevel;
use crate::item::{CodeExample, Material, ToolkitItem};
use crate::store::Catalog;

pub const APP_TITLE: &str = "Banking Transformation Toolkit";
pub const REQUEST_ACCESS_NOTE: &str = "Request full access to view materials and details.";

/// Page header with the feedback button
pub fn page_header(theme: &dyn Resolve, signed_in_as: Option<&str>) -> Node {
    let mut header = el("header")
        .class("toolkit-header")
        .style("display", "flex")
        .style("justify-content", "space-between")
        .style("align-items", "center")
        .style("padding", "16px 24px")
        .style("background", theme.css(ThemePath::HeaderBg))
        .style("color", theme.css(ThemePath::HeaderText))
        .child(el("h1").style("margin", "0").text(APP_TITLE));

    if let Some(email) = signed_in_as {
        header = header.child(span().class("signed-in").text(email));
    }

    header.child(
        el("button")
            .class("feedback-button")
            .attr("type", "button")
            .style("background", theme.css(ThemePath::HeaderFeedbackButtonBg))
            .style("color", theme.css(ThemePath::HeaderFeedbackButtonText))
            .style("--hover-bg", theme.css(ThemePath::HeaderFeedbackButtonHoverBg))
            .style("border-radius", theme.css(ThemePath::RadiiButton))
            .text("Feedback"),
    )
}

/// Summary card for the grid
pub fn card(item: &ToolkitItem, level: AccessLevel, theme: &dyn Resolve) -> Node {
    let mut node = card_frame(item, level, theme)
        .child(card_heading(item, theme))
        .child(
            el("p")
                .style("color", theme.css(ThemePath::ColorsTextSecondary))
                .text(&item.short_description),
        )
        .child(tag_row(&item.tags, theme));

    if level == AccessLevel::Restricted {
        node = node.child(restricted_note(theme));
    }
    node
}

/// Full view of one item, `None` for unknown ids.
///
/// Restricted viewers get the card. Items without authored detail blocks
/// render their parsed long description.
pub fn detail(catalog: &Catalog, id: &str, level: AccessLevel, theme: &dyn Resolve) -> Option<Node> {
    let item = catalog.item(id)?;
    if level == AccessLevel::Restricted {
        return Some(card(item, level, theme));
    }

    let blocks = catalog.detail_blocks(id)?;
    let renderer = BlockRenderer::with_config(RenderConfig::from_theme(theme));

    let mut node = card_frame(item, level, theme)
        .child(card_heading(item, theme))
        .child(
            div()
                .class("item-meta")
                .style("color", theme.css(ThemePath::ColorsTextMuted))
                .text(format!(
                    "{} · v{} · updated {}",
                    item.category, item.version, item.last_updated
                )),
        )
        .child(renderer.render(&blocks));

    if !item.materials.is_empty() {
        node = node.child(materials(&item.materials, theme));
    }
    if let Some(examples) = catalog.code_examples(id) {
        node = node.children(examples.iter().map(|ex| code_example(ex, theme)));
    }
    node = node.child(tag_row(&item.tags, theme));
    Some(node)
}

fn card_frame(item: &ToolkitItem, level: AccessLevel, theme: &dyn Resolve) -> Node {
    let mut frame = el("article")
        .class(match level {
            AccessLevel::Restricted => "toolkit-card restricted",
            AccessLevel::Full => "toolkit-card",
        })
        .attr("data-item-id", item.id.as_str())
        .attr("data-theme-category", item.theme.id())
        .style("background", theme.css(ThemePath::CardBg))
        .style("border", format!("1px solid {}", theme.css(ThemePath::CardBorder)))
        .style("border-radius", theme.css(ThemePath::RadiiCard))
        .style("box-shadow", theme.css(ThemePath::CardShadow))
        .style("--hover-shadow", theme.css(ThemePath::CardHoverShadow))
        .style("padding", "20px");
    if level == AccessLevel::Restricted {
        frame = frame.style("opacity", theme.css(ThemePath::CardRestrictedOpacity));
    }
    frame
}

fn card_heading(item: &ToolkitItem, theme: &dyn Resolve) -> Node {
    div()
        .class("card-heading")
        .child(
            el("h3")
                .style("margin", "0")
                .style("color", theme.css(ThemePath::ColorsTextPrimary))
                .text(&item.title),
        )
        .child(badge(item.theme.display_name(), theme))
}

fn badge(label: &str, theme: &dyn Resolve) -> Node {
    span()
        .class("badge")
        .style("background", theme.css(ThemePath::BadgeBg))
        .style("color", theme.css(ThemePath::BadgeText))
        .style("border-radius", theme.css(ThemePath::RadiiButton))
        .style("padding", "2px 8px")
        .text(label)
}

fn tag_row(tags: &[String], theme: &dyn Resolve) -> Node {
    let mut row = div().class("tags");
    for (i, tag) in tags.iter().enumerate() {
        if i > 0 {
            row = row.text(" ");
        }
        row = row.child(badge(&format!("#{tag}"), theme));
    }
    row
}

fn restricted_note(theme: &dyn Resolve) -> Node {
    el("p")
        .class("restricted-note")
        .style("color", theme.css(ThemePath::ColorsTextMuted))
        .style("font-style", "italic")
        .text(REQUEST_ACCESS_NOTE)
}

fn materials(materials: &[Material], theme: &dyn Resolve) -> Node {
    div()
        .class("materials")
        .child(
            el("h4")
                .style("color", theme.css(ThemePath::ContentHeaderText))
                .text("Materials"),
        )
        .child(el("ul").children(materials.iter().map(|m| {
            el("li").child(
                el("a")
                    .attr("href", m.url.as_str())
                    .style("color", theme.css(ThemePath::ColorsPrimaryMain))
                    .text(format!("{}: {}", m.kind, m.title)),
            )
        })))
}

fn code_example(example: &CodeExample, theme: &dyn Resolve) -> Node {
    div()
        .class("code-example")
        .child(
            el("h4")
                .style("color", theme.css(ThemePath::ContentHeaderText))
                .text(format!("{} ({})", example.title, example.language)),
        )
        .child(
            el("pre")
                .style("background", theme.css(ThemePath::ColorsBackgroundPaper))
                .style("border", format!("1px solid {}", theme.css(ThemePath::ColorsBorderLight)))
                .style("border-radius", theme.css(ThemePath::RadiiButton))
                .style("padding", "12px")
                .child(
                    el("code")
                        .class(format!("language-{}", example.language))
                        .text(example.code.trim_end()),
                ),
        )
}
