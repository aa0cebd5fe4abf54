//! Built-in theme tables.
//!
//! The shared table for each scheme defines every path with neutral,
//! category-agnostic values. Each category contributes an accent table that
//! overrides the accent-bearing paths only.

use toolkit_core::{Color, LinearGradient, Shadow};

use crate::path::{ThemePath as P, ThemeTable, ThemeValue};
use crate::theme::{ColorScheme, ThemeCategory};

#[derive(Clone, Copy)]
struct NeutralPalette {
    background: Color,
    paper: Color,
    text_primary: Color,
    text_secondary: Color,
    text_muted: Color,
    border: Color,
    border_light: Color,
    success: Color,
    warning: Color,
    error: Color,
    info: Color,
}

#[derive(Clone, Copy)]
struct AccentPalette {
    main: Color,
    light: Color,
    dark: Color,
    contrast: Color,
    secondary: Color,
}

/// Shared table for a scheme, complete over every [`ThemePath`].
pub fn shared_table(scheme: ColorScheme) -> ThemeTable {
    let n = neutral(scheme);
    // Slate accent for surfaces that no category has claimed.
    let slate = AccentPalette {
        main: Color::from_hex(0x455A64),
        light: Color::from_hex(0x718792),
        dark: Color::from_hex(0x1C313A),
        contrast: Color::WHITE,
        secondary: Color::from_hex(0x607D8B),
    };
    let shadow_base = match scheme {
        ColorScheme::Light => Color::BLACK.with_alpha(0.08),
        ColorScheme::Dark => Color::BLACK.with_alpha(0.4),
    };

    accent_entries(slate, scheme)
        .with(P::ColorsBackgroundDefault, n.background)
        .with(P::ColorsBackgroundPaper, n.paper)
        .with(P::ColorsTextPrimary, n.text_primary)
        .with(P::ColorsTextSecondary, n.text_secondary)
        .with(P::ColorsTextMuted, n.text_muted)
        .with(P::ColorsTextInverse, n.paper)
        .with(P::ColorsBorderMain, n.border)
        .with(P::ColorsBorderLight, n.border_light)
        .with(P::ColorsStatusSuccess, n.success)
        .with(P::ColorsStatusWarning, n.warning)
        .with(P::ColorsStatusError, n.error)
        .with(P::ColorsStatusInfo, n.info)
        .with(P::CardBg, n.paper)
        .with(P::CardBorder, n.border_light)
        .with(P::CardShadow, Shadow::new(0.0, 2.0, 8.0, 0.0, shadow_base))
        .with(P::CardRestrictedOpacity, ThemeValue::Number(0.72))
        .with(P::ContentHeaderText, n.text_primary)
        .with(P::ContentParagraphText, n.text_secondary)
        .with(P::NoticeBg, n.paper)
        .with(P::NoticeText, n.text_primary)
        .with(
            P::NoticeShadow,
            Shadow::new(0.0, 8.0, 24.0, 0.0, shadow_base.with_alpha(shadow_base.a * 1.5)),
        )
        .with(P::SpacingBlockGap, ThemeValue::Length(16.0))
        .with(P::SpacingListIndent, ThemeValue::Length(24.0))
        .with(P::SpacingMarkerSize, ThemeValue::Length(8.0))
        .with(P::SpacingSubMarkerSize, ThemeValue::Length(5.0))
        .with(P::RadiiCard, ThemeValue::Length(12.0))
        .with(P::RadiiButton, ThemeValue::Length(8.0))
}

/// Accent table for a (scheme, category) pair.
pub fn category_table(scheme: ColorScheme, category: ThemeCategory) -> ThemeTable {
    accent_entries(accent(scheme, category), scheme)
}

fn accent_entries(a: AccentPalette, scheme: ColorScheme) -> ThemeTable {
    let (gradient_to, hover_mix, glow_alpha, badge_alpha) = match scheme {
        ColorScheme::Light => (a.light, 0.12, 0.18, 0.12),
        ColorScheme::Dark => (a.dark, 0.10, 0.30, 0.22),
    };
    let state_target = match scheme {
        ColorScheme::Light => Color::BLACK,
        ColorScheme::Dark => Color::WHITE,
    };

    ThemeTable::new()
        .with(P::ColorsPrimaryMain, a.main)
        .with(P::ColorsPrimaryLight, a.light)
        .with(P::ColorsPrimaryDark, a.dark)
        .with(P::ColorsPrimaryContrastText, a.contrast)
        .with(P::ColorsSecondaryMain, a.secondary)
        .with(P::ColorsSecondaryLight, blend(a.secondary, Color::WHITE, 0.35))
        .with(
            P::ColorsBackgroundGradient,
            LinearGradient::two_stop(135.0, a.main.with_alpha(0.08), gradient_to.with_alpha(0.02)),
        )
        .with(P::HeaderBg, LinearGradient::two_stop(90.0, a.dark, a.main))
        .with(P::HeaderText, a.contrast)
        .with(P::HeaderFeedbackButtonBg, a.light)
        .with(P::HeaderFeedbackButtonText, a.dark)
        .with(
            P::HeaderFeedbackButtonHoverBg,
            blend(a.light, state_target, hover_mix),
        )
        .with(
            P::CardHoverShadow,
            Shadow::new(0.0, 8.0, 24.0, 0.0, a.main.with_alpha(glow_alpha)),
        )
        .with(P::BadgeBg, a.main.with_alpha(badge_alpha))
        .with(P::BadgeText, a.main)
        .with(P::ContentBulletMarker, a.main)
        .with(P::ContentNumberMarkerBg, a.main)
        .with(P::ContentNumberMarkerText, a.contrast)
        .with(P::ContentSubBulletMarker, a.light)
        .with(P::NoticeBorder, a.main)
}

fn neutral(scheme: ColorScheme) -> NeutralPalette {
    match scheme {
        ColorScheme::Light => NeutralPalette {
            background: Color::from_hex(0xF5F7FA),
            paper: Color::WHITE,
            text_primary: Color::from_hex(0x1A202C),
            text_secondary: Color::from_hex(0x4A5568),
            text_muted: Color::from_hex(0x718096),
            border: Color::from_hex(0xCBD5E0),
            border_light: Color::from_hex(0xE2E8F0),
            success: Color::from_hex(0x2F855A),
            warning: Color::from_hex(0xC05621),
            error: Color::from_hex(0xC53030),
            info: Color::from_hex(0x2B6CB0),
        },
        ColorScheme::Dark => NeutralPalette {
            background: Color::from_hex(0x0F1419),
            paper: Color::from_hex(0x1A202C),
            text_primary: Color::from_hex(0xF7FAFC),
            text_secondary: Color::from_hex(0xCBD5E0),
            text_muted: Color::from_hex(0xA0AEC0),
            border: Color::from_hex(0x4A5568),
            border_light: Color::from_hex(0x2D3748),
            success: Color::from_hex(0x68D391),
            warning: Color::from_hex(0xF6AD55),
            error: Color::from_hex(0xFC8181),
            info: Color::from_hex(0x63B3ED),
        },
    }
}

fn accent(scheme: ColorScheme, category: ThemeCategory) -> AccentPalette {
    match (scheme, category) {
        (ColorScheme::Light, ThemeCategory::Sales) => AccentPalette {
            main: Color::from_hex(0x1565C0),
            light: Color::from_hex(0x5E92F3),
            dark: Color::from_hex(0x003C8F),
            contrast: Color::WHITE,
            secondary: Color::from_hex(0x00838F),
        },
        (ColorScheme::Dark, ThemeCategory::Sales) => AccentPalette {
            main: Color::from_hex(0x64B5F6),
            light: Color::from_hex(0x9BE7FF),
            dark: Color::from_hex(0x2286C3),
            contrast: Color::from_hex(0x0D1B2A),
            secondary: Color::from_hex(0x4DD0E1),
        },
        (ColorScheme::Light, ThemeCategory::Delivery) => AccentPalette {
            main: Color::from_hex(0x2E7D32),
            light: Color::from_hex(0x60AD5E),
            dark: Color::from_hex(0x005005),
            contrast: Color::WHITE,
            secondary: Color::from_hex(0x827717),
        },
        (ColorScheme::Dark, ThemeCategory::Delivery) => AccentPalette {
            main: Color::from_hex(0x81C784),
            light: Color::from_hex(0xB2FAB4),
            dark: Color::from_hex(0x519657),
            contrast: Color::from_hex(0x0B1F0C),
            secondary: Color::from_hex(0xDCE775),
        },
        (ColorScheme::Light, ThemeCategory::QualityAssurance) => AccentPalette {
            main: Color::from_hex(0x6A1B9A),
            light: Color::from_hex(0x9C4DCC),
            dark: Color::from_hex(0x38006B),
            contrast: Color::WHITE,
            secondary: Color::from_hex(0xAD1457),
        },
        (ColorScheme::Dark, ThemeCategory::QualityAssurance) => AccentPalette {
            main: Color::from_hex(0xBA68C8),
            light: Color::from_hex(0xEE98FB),
            dark: Color::from_hex(0x883997),
            contrast: Color::from_hex(0x1E0A24),
            secondary: Color::from_hex(0xF06292),
        },
    }
}

fn blend(a: Color, b: Color, t: f32) -> Color {
    Color::lerp(&a, &b, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_tables_cover_every_path() {
        for scheme in ColorScheme::all() {
            let table = shared_table(*scheme);
            for path in P::ALL {
                assert!(table.contains(*path), "shared {scheme} is missing {path}");
            }
        }
    }

    #[test]
    fn category_values_match_declared_kinds() {
        for scheme in ColorScheme::all() {
            for category in ThemeCategory::all() {
                for (path, value) in category_table(*scheme, *category).iter() {
                    assert_eq!(value.kind(), path.kind(), "{scheme}/{category}: {path}");
                }
            }
            for (path, value) in shared_table(*scheme).iter() {
                assert_eq!(value.kind(), path.kind(), "{scheme}/shared: {path}");
            }
        }
    }
}
