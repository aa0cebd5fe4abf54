//! Configuration for block rendering

use toolkit_core::Color;
use toolkit_theme::{Resolve, ThemePath};

/// Colors and metrics used by [`BlockRenderer`](crate::BlockRenderer)
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    // Typography sizes
    /// Header text size
    pub header_size: f32,
    /// Body text size
    pub body_size: f32,
    /// Size of the digit inside a numbered marker
    pub number_size: f32,

    // Colors
    /// Header text color
    pub header_color: Color,
    /// Paragraph and list item text color
    pub text_color: Color,
    /// Round bullet marker fill
    pub bullet_color: Color,
    /// Numbered marker circle fill
    pub number_bg: Color,
    /// Numbered marker digit color
    pub number_text: Color,
    /// Sub-bullet marker fill
    pub sub_bullet_color: Color,

    // Spacing
    /// Gap between consecutive blocks
    pub block_gap: f32,
    /// Left indent of sub-bullets under a numbered item
    pub list_indent: f32,
    /// Bullet marker diameter
    pub marker_size: f32,
    /// Sub-bullet marker diameter
    pub sub_marker_size: f32,
    /// Space between a marker and its text
    pub marker_gap: f32,
}

impl RenderConfig {
    /// Build a config from the active theme
    pub fn from_theme(theme: &dyn Resolve) -> Self {
        let marker_size = theme.number(ThemePath::SpacingMarkerSize);
        Self {
            header_size: 17.0,
            body_size: 15.0,
            number_size: 12.0,

            header_color: theme.color(ThemePath::ContentHeaderText),
            text_color: theme.color(ThemePath::ContentParagraphText),
            bullet_color: theme.color(ThemePath::ContentBulletMarker),
            number_bg: theme.color(ThemePath::ContentNumberMarkerBg),
            number_text: theme.color(ThemePath::ContentNumberMarkerText),
            sub_bullet_color: theme.color(ThemePath::ContentSubBulletMarker),

            block_gap: theme.number(ThemePath::SpacingBlockGap),
            list_indent: theme.number(ThemePath::SpacingListIndent),
            marker_size,
            sub_marker_size: theme.number(ThemePath::SpacingSubMarkerSize),
            marker_gap: marker_size.max(4.0),
        }
    }

    /// Tighter variant for cards and other dense surfaces
    pub fn compact(theme: &dyn Resolve) -> Self {
        Self::from_theme(theme)
            .header_size(15.0)
            .body_size(13.0)
            .block_gap(8.0)
    }

    /// Set the header text size
    pub fn header_size(mut self, size: f32) -> Self {
        self.header_size = size;
        self
    }

    /// Set the body text size
    pub fn body_size(mut self, size: f32) -> Self {
        self.body_size = size;
        self
    }

    /// Set the gap between blocks
    pub fn block_gap(mut self, gap: f32) -> Self {
        self.block_gap = gap;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use toolkit_theme::{ColorScheme, ThemeCategory, ThemeResolver};

    #[test]
    fn colors_follow_the_category_accent() {
        let resolver = ThemeResolver::builtin();
        let sales = RenderConfig::from_theme(&resolver.scoped(ColorScheme::Light, ThemeCategory::Sales));
        let delivery =
            RenderConfig::from_theme(&resolver.scoped(ColorScheme::Light, ThemeCategory::Delivery));
        assert_ne!(sales.bullet_color, delivery.bullet_color);
        assert_eq!(sales.block_gap, 16.0);
        assert_eq!(sales.marker_size, 8.0);
    }

    #[test]
    fn compact_keeps_theme_colors() {
        let resolver = ThemeResolver::builtin();
        let theme = resolver.scoped(ColorScheme::Dark, ThemeCategory::QualityAssurance);
        let compact = RenderConfig::compact(&theme);
        assert_eq!(compact.body_size, 13.0);
        assert_eq!(compact.number_bg, theme.color(ThemePath::ContentNumberMarkerBg));
    }
}
