//! Page assembly for the two output formats

use toolkit_content::Node;
use toolkit_theme::ThemeState;

use crate::config::OutputFormat;

/// Join rendered nodes into one page.
///
/// HTML output is wrapped in a root element carrying the theme marker and
/// every CSS custom property of the active theme.
pub fn render_page(nodes: &[Node], theme: &ThemeState, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => nodes
            .iter()
            .map(Node::to_text)
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Html => {
            let mut root = Node::new("div");
            for (name, value) in theme.root_marker().attributes() {
                root = root.attr(name, value);
            }
            let vars: Vec<String> = theme
                .to_css_variable_map()
                .into_iter()
                .map(|(name, value)| format!("--{name}: {value}"))
                .collect();
            root = root.attr("style", vars.join("; "));
            let mut html = nodes
                .iter()
                .cloned()
                .fold(root, |root, node| root.child(node))
                .to_html();
            html.push('\n');
            html
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use toolkit_content::node::el;
    use toolkit_theme::{MemoryStorage, ThemeCategory, ThemeResolver};

    fn state() -> ThemeState {
        let mut theme = ThemeState::load(
            Arc::new(ThemeResolver::builtin()),
            Box::new(MemoryStorage::new()),
            None,
        );
        theme.set_category(ThemeCategory::QualityAssurance);
        theme
    }

    #[test]
    fn html_root_carries_the_theme_marker() {
        let html = render_page(&[el("p").text("hi")], &state(), OutputFormat::Html);
        assert!(html.starts_with("<div class=\"light\" data-theme-category=\"qualityAssurance\""));
        assert!(html.contains("--colors-primary-main: #"));
        assert!(html.ends_with("<p>hi</p></div>\n"));
    }

    #[test]
    fn text_joins_nodes() {
        let page = render_page(
            &[el("p").text("one"), el("p").text("two")],
            &state(),
            OutputFormat::Text,
        );
        assert_eq!(page, "one\n\ntwo\n");
    }
}
