//! Typed theme paths, values, and tables
//!
//! Every themable value is addressed by a [`ThemePath`]. Each path has a
//! canonical dotted form (e.g. `components.header.feedbackButton.bg`) and a
//! [`ValueKind`] that override files are validated against.

use rustc_hash::FxHashMap;
use toolkit_core::{Color, LinearGradient, Shadow};

use crate::ThemeError;

/// The kind of value stored at a path
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Color,
    Gradient,
    Shadow,
    /// Pixel length (spacing, radii, marker sizes)
    Length,
    /// Unitless number (opacity)
    Number,
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Gradient => "gradient",
            Self::Shadow => "shadow",
            Self::Length => "length",
            Self::Number => "number",
        }
    }
}

/// A resolved theme value
#[derive(Clone, Debug, PartialEq)]
pub enum ThemeValue {
    Color(Color),
    Gradient(LinearGradient),
    Shadow(Shadow),
    Length(f32),
    Number(f32),
}

impl ThemeValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Color(_) => ValueKind::Color,
            Self::Gradient(_) => ValueKind::Gradient,
            Self::Shadow(_) => ValueKind::Shadow,
            Self::Length(_) => ValueKind::Length,
            Self::Number(_) => ValueKind::Number,
        }
    }

    /// CSS text for this value (`#rrggbb`, `linear-gradient(...)`, `16px`, ...)
    pub fn to_css(&self) -> String {
        match self {
            Self::Color(c) => c.to_css(),
            Self::Gradient(g) => g.to_css(),
            Self::Shadow(s) => s.to_css(),
            Self::Length(v) => format!("{}px", v),
            Self::Number(v) => format!("{}", v),
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f32> {
        match self {
            Self::Length(v) | Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Neutral placeholder for a kind, used when a table is missing an entry.
    pub fn neutral(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Color => Self::Color(Color::TRANSPARENT),
            ValueKind::Gradient => Self::Gradient(LinearGradient::two_stop(
                0.0,
                Color::TRANSPARENT,
                Color::TRANSPARENT,
            )),
            ValueKind::Shadow => Self::Shadow(Shadow::none()),
            ValueKind::Length => Self::Length(0.0),
            ValueKind::Number => Self::Number(1.0),
        }
    }

    /// Numeric value for a length or number path.
    ///
    /// Values must be finite; lengths must also be non-negative.
    pub fn from_number(kind: ValueKind, n: f32) -> Result<Self, ThemeError> {
        let invalid = |reason: String| ThemeError::InvalidValue {
            path: String::new(),
            reason,
        };
        if !n.is_finite() {
            return Err(invalid(format!("`{n}` is not a finite {}", kind.name())));
        }
        match kind {
            ValueKind::Length if n < 0.0 => Err(invalid(format!("length `{n}` is negative"))),
            ValueKind::Length => Ok(Self::Length(n)),
            ValueKind::Number => Ok(Self::Number(n)),
            other => Err(invalid(format!("expected a {}, found a number", other.name()))),
        }
    }

    /// Parse a textual value for a path of the given kind.
    pub fn parse(kind: ValueKind, src: &str) -> Result<Self, ThemeError> {
        let value = match kind {
            ValueKind::Color => Self::Color(Color::parse_css(src)?),
            ValueKind::Gradient => Self::Gradient(LinearGradient::parse_css(src)?),
            ValueKind::Shadow => Self::Shadow(Shadow::parse_css(src)?),
            ValueKind::Length | ValueKind::Number => {
                let trimmed = src.trim();
                let num = match kind {
                    ValueKind::Length => trimmed.strip_suffix("px").unwrap_or(trimmed),
                    _ => trimmed,
                };
                let n: f32 = num.trim().parse().map_err(|_| ThemeError::InvalidValue {
                    path: String::new(),
                    reason: format!("`{src}` is not a {}", kind.name()),
                })?;
                Self::from_number(kind, n)?
            }
        };
        Ok(value)
    }
}

impl From<Color> for ThemeValue {
    fn from(c: Color) -> Self {
        Self::Color(c)
    }
}

impl From<LinearGradient> for ThemeValue {
    fn from(g: LinearGradient) -> Self {
        Self::Gradient(g)
    }
}

impl From<Shadow> for ThemeValue {
    fn from(s: Shadow) -> Self {
        Self::Shadow(s)
    }
}

macro_rules! theme_paths {
    ($( $(#[$meta:meta])* $variant:ident => ($path:literal, $kind:ident), )*) => {
        /// Every legal theme path
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ThemePath {
            $( $(#[$meta])* $variant, )*
        }

        impl ThemePath {
            /// All paths, in declaration order
            pub const ALL: &'static [ThemePath] = &[ $( ThemePath::$variant, )* ];

            /// Canonical dotted form
            pub fn as_str(self) -> &'static str {
                match self {
                    $( ThemePath::$variant => $path, )*
                }
            }

            pub fn kind(self) -> ValueKind {
                match self {
                    $( ThemePath::$variant => ValueKind::$kind, )*
                }
            }

            /// Look up a path by its dotted form
            pub fn from_dotted(s: &str) -> Option<Self> {
                match s.trim() {
                    $( $path => Some(ThemePath::$variant), )*
                    _ => None,
                }
            }
        }
    };
}

theme_paths! {
    // Accent colors
    ColorsPrimaryMain => ("colors.primary.main", Color),
    ColorsPrimaryLight => ("colors.primary.light", Color),
    ColorsPrimaryDark => ("colors.primary.dark", Color),
    ColorsPrimaryContrastText => ("colors.primary.contrastText", Color),
    ColorsSecondaryMain => ("colors.secondary.main", Color),
    ColorsSecondaryLight => ("colors.secondary.light", Color),

    // Surfaces
    ColorsBackgroundDefault => ("colors.background.default", Color),
    ColorsBackgroundPaper => ("colors.background.paper", Color),
    ColorsBackgroundGradient => ("colors.background.gradient", Gradient),

    // Text
    ColorsTextPrimary => ("colors.text.primary", Color),
    ColorsTextSecondary => ("colors.text.secondary", Color),
    ColorsTextMuted => ("colors.text.muted", Color),
    ColorsTextInverse => ("colors.text.inverse", Color),

    // Borders
    ColorsBorderMain => ("colors.border.main", Color),
    ColorsBorderLight => ("colors.border.light", Color),

    // Status
    ColorsStatusSuccess => ("colors.status.success", Color),
    ColorsStatusWarning => ("colors.status.warning", Color),
    ColorsStatusError => ("colors.status.error", Color),
    ColorsStatusInfo => ("colors.status.info", Color),

    // Header
    HeaderBg => ("components.header.bg", Gradient),
    HeaderText => ("components.header.text", Color),
    HeaderFeedbackButtonBg => ("components.header.feedbackButton.bg", Color),
    HeaderFeedbackButtonText => ("components.header.feedbackButton.text", Color),
    HeaderFeedbackButtonHoverBg => ("components.header.feedbackButton.hoverBg", Color),

    // Cards
    CardBg => ("components.card.bg", Color),
    CardBorder => ("components.card.border", Color),
    CardShadow => ("components.card.shadow", Shadow),
    CardHoverShadow => ("components.card.hoverShadow", Shadow),
    CardRestrictedOpacity => ("components.card.restrictedOpacity", Number),

    // Badges and tags
    BadgeBg => ("components.badge.bg", Color),
    BadgeText => ("components.badge.text", Color),

    // Structured content
    ContentHeaderText => ("components.content.headerText", Color),
    ContentParagraphText => ("components.content.paragraphText", Color),
    ContentBulletMarker => ("components.content.bulletMarker", Color),
    ContentNumberMarkerBg => ("components.content.numberMarker.bg", Color),
    ContentNumberMarkerText => ("components.content.numberMarker.text", Color),
    ContentSubBulletMarker => ("components.content.subBulletMarker", Color),

    // Notices
    NoticeBg => ("components.notice.bg", Color),
    NoticeText => ("components.notice.text", Color),
    NoticeBorder => ("components.notice.border", Color),
    NoticeShadow => ("components.notice.shadow", Shadow),

    // Spacing and radii
    SpacingBlockGap => ("spacing.content.blockGap", Length),
    SpacingListIndent => ("spacing.content.listIndent", Length),
    SpacingMarkerSize => ("spacing.content.markerSize", Length),
    SpacingSubMarkerSize => ("spacing.content.subMarkerSize", Length),
    RadiiCard => ("radii.card", Length),
    RadiiButton => ("radii.button", Length),
}

impl ThemePath {
    /// CSS custom-property name: `components.header.feedbackButton.bg`
    /// becomes `components-header-feedback-button-bg`.
    pub fn css_variable(self) -> String {
        let mut out = String::with_capacity(self.as_str().len() + 8);
        for c in self.as_str().chars() {
            match c {
                '.' => out.push('-'),
                c if c.is_ascii_uppercase() => {
                    out.push('-');
                    out.push(c.to_ascii_lowercase());
                }
                c => out.push(c),
            }
        }
        out
    }
}

impl std::fmt::Display for ThemePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A (partial) mapping from paths to values
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThemeTable {
    values: FxHashMap<ThemePath, ThemeValue>,
}

impl ThemeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: ThemePath) -> Option<&ThemeValue> {
        self.values.get(&path)
    }

    pub fn insert(&mut self, path: ThemePath, value: impl Into<ThemeValue>) {
        self.values.insert(path, value.into());
    }

    /// Builder-style insert
    pub fn with(mut self, path: ThemePath, value: impl Into<ThemeValue>) -> Self {
        self.insert(path, value);
        self
    }

    pub fn contains(&self, path: ThemePath) -> bool {
        self.values.contains_key(&path)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ThemePath, &ThemeValue)> {
        self.values.iter().map(|(p, v)| (*p, v))
    }

    /// Lay `self` over `base`; entries of `self` win.
    pub fn merged_over(&self, base: &ThemeTable) -> ThemeTable {
        let mut values = base.values.clone();
        for (path, value) in &self.values {
            values.insert(*path, value.clone());
        }
        ThemeTable { values }
    }

    /// Copy every entry of `other` into `self`, replacing existing entries.
    pub fn extend_from(&mut self, other: &ThemeTable) {
        for (path, value) in &other.values {
            self.values.insert(*path, value.clone());
        }
    }
}
