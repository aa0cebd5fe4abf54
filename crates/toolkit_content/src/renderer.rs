//! Content blocks to render tree

use toolkit_theme::Resolve;

use crate::blocks::{BulletItem, ContentBlock, NumberedItem};
use crate::config::RenderConfig;
use crate::node::{div, el, span, Node};
use crate::parser::parse;

/// Renders block sequences into a [`Node`] tree.
///
/// The renderer holds only its [`RenderConfig`]; rendering the same blocks
/// twice yields identical trees.
#[derive(Clone, Debug)]
pub struct BlockRenderer {
    config: RenderConfig,
}

impl BlockRenderer {
    /// Create a renderer styled by the given theme
    pub fn new(theme: &dyn Resolve) -> Self {
        Self {
            config: RenderConfig::from_theme(theme),
        }
    }

    /// Create a renderer with custom configuration
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render blocks, in order, into a container div
    pub fn render(&self, blocks: &[ContentBlock]) -> Node {
        let cfg = &self.config;
        div()
            .class("content-blocks")
            .style("display", "flex")
            .style("flex-direction", "column")
            .style("gap", px(cfg.block_gap))
            .children(blocks.iter().map(|block| self.render_block(block)))
    }

    fn render_block(&self, block: &ContentBlock) -> Node {
        match block {
            ContentBlock::Paragraph { text } => self.paragraph(text),
            ContentBlock::Header { text } => self.header(text),
            ContentBlock::BulletList { items } => self.bullet_list(items),
            ContentBlock::NumberedList { items } => self.numbered_list(items),
        }
    }

    fn paragraph(&self, text: &str) -> Node {
        let cfg = &self.config;
        el("p")
            .style("margin", "0")
            .style("white-space", "pre-line")
            .style("color", cfg.text_color.to_css())
            .style("font-size", px(cfg.body_size))
            .text(text)
    }

    fn header(&self, text: &str) -> Node {
        let cfg = &self.config;
        el("h4")
            .style("margin", "0")
            .style("font-weight", "600")
            .style("color", cfg.header_color.to_css())
            .style("font-size", px(cfg.header_size))
            .text(text)
    }

    fn bullet_list(&self, items: &[BulletItem]) -> Node {
        let cfg = &self.config;
        list("ul").children(items.iter().map(|item| {
            let marker = round_marker(cfg.marker_size, &cfg.bullet_color.to_css()).text_alt("• ");
            self.list_item()
                .child(marker)
                .child(self.item_text(&item.text))
        }))
    }

    fn numbered_list(&self, items: &[NumberedItem]) -> Node {
        list("ol").children(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| self.numbered_item(i + 1, item)),
        )
    }

    fn numbered_item(&self, number: usize, item: &NumberedItem) -> Node {
        let cfg = &self.config;
        let diameter = cfg.number_size * 2.0;
        let marker = span()
            .class("number-marker")
            .style("display", "inline-flex")
            .style("align-items", "center")
            .style("justify-content", "center")
            .style("flex-shrink", "0")
            .style("width", px(diameter))
            .style("height", px(diameter))
            .style("border-radius", "50%")
            .style("background", cfg.number_bg.to_css())
            .style("color", cfg.number_text.to_css())
            .style("font-size", px(cfg.number_size))
            .text(number.to_string())
            .text_alt(format!("{number}. "));

        let mut body = span()
            .class("numbered-body")
            .style("display", "flex")
            .style("flex-direction", "column")
            .child(self.item_text(&item.text));
        if !item.sub_bullets.is_empty() {
            body = body.child(self.sub_bullets(&item.sub_bullets));
        }

        self.list_item().child(marker).child(body)
    }

    fn sub_bullets(&self, subs: &[String]) -> Node {
        let cfg = &self.config;
        list("ul")
            .class("sub-bullets")
            .style("padding-left", px(cfg.list_indent))
            .style("margin-top", px(cfg.marker_gap))
            .children(subs.iter().map(|sub| {
                let marker =
                    round_marker(cfg.sub_marker_size, &cfg.sub_bullet_color.to_css()).text_alt("◦ ");
                self.list_item().child(marker).child(self.item_text(sub))
            }))
    }

    fn list_item(&self) -> Node {
        el("li")
            .style("display", "flex")
            .style("align-items", "baseline")
            .style("gap", px(self.config.marker_gap))
    }

    fn item_text(&self, text: &str) -> Node {
        let cfg = &self.config;
        span()
            .style("color", cfg.text_color.to_css())
            .style("font-size", px(cfg.body_size))
            .text(text)
    }
}

fn list(tag: &'static str) -> Node {
    el(tag)
        .style("list-style", "none")
        .style("margin", "0")
        .style("padding", "0")
}

fn round_marker(size: f32, color: &str) -> Node {
    span()
        .class("marker")
        .style("display", "inline-block")
        .style("flex-shrink", "0")
        .style("width", px(size))
        .style("height", px(size))
        .style("border-radius", "50%")
        .style("background", color)
}

fn px(value: f32) -> String {
    format!("{value}px")
}

/// Render blocks with a renderer built from `theme`
///
/// # Example
///
/// ```rust
/// use toolkit_content::{render_blocks, ContentBlock};
/// use toolkit_theme::{ColorScheme, ThemeCategory, ThemeResolver};
///
/// let resolver = ThemeResolver::builtin();
/// let theme = resolver.scoped(ColorScheme::Dark, ThemeCategory::Delivery);
/// let tree = render_blocks(&[ContentBlock::header("Scope:")], &theme);
/// assert_eq!(tree.to_text(), "Scope:\n");
/// ```
pub fn render_blocks(blocks: &[ContentBlock], theme: &dyn Resolve) -> Node {
    BlockRenderer::new(theme).render(blocks)
}

/// Parse freeform text and render the result
pub fn render_text(raw: &str, theme: &dyn Resolve) -> Node {
    render_blocks(&parse(raw), theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use toolkit_theme::{ColorScheme, ThemeCategory, ThemePath, ThemeResolver};

    #[test]
    fn bullet_markers_use_theme_color() {
        let resolver = ThemeResolver::builtin();
        let theme = resolver.scoped(ColorScheme::Light, ThemeCategory::Delivery);
        let tree = render_blocks(&[ContentBlock::bullets(["One", "Two"])], &theme);

        let markers = tree.find_all("span");
        let expected = theme.css(ThemePath::ContentBulletMarker);
        let themed: Vec<_> = markers
            .iter()
            .filter(|n| n.get_attr("class") == Some("marker"))
            .collect();
        assert_eq!(themed.len(), 2);
        for marker in themed {
            assert_eq!(marker.get_style("background"), Some(expected.as_str()));
        }
    }

    #[test]
    fn numbered_items_count_from_one() {
        let resolver = ThemeResolver::builtin();
        let theme = resolver.scoped(ColorScheme::Light, ThemeCategory::Sales);
        let tree = render_blocks(
            &[ContentBlock::numbered([
                NumberedItem::new("Plan"),
                NumberedItem::new("Execute"),
            ])],
            &theme,
        );
        let numbers: Vec<String> = tree
            .find_all("span")
            .into_iter()
            .filter(|n| n.get_attr("class") == Some("number-marker"))
            .map(Node::text_content)
            .collect();
        assert_eq!(numbers, vec!["1", "2"]);
    }

    #[test]
    fn plain_text_layout() {
        let resolver = ThemeResolver::builtin();
        let theme = resolver.scoped(ColorScheme::Light, ThemeCategory::Sales);
        let tree = render_text(
            "Key Features:\n\n• One\n• Two\n\n1. Plan\nagree scope\n2. Execute",
            &theme,
        );
        assert_eq!(
            tree.to_text(),
            "Key Features:\n\n• One\n• Two\n\n1. Plan\n  ◦ agree scope\n2. Execute\n"
        );
    }
}
