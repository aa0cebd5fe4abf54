//! Color scheme and theme category

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ThemeError;

/// Light or dark color scheme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Stored and CSS-class form (`light` / `dark`)
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn all() -> &'static [ColorScheme] {
        const SCHEMES: [ColorScheme; 2] = [ColorScheme::Light, ColorScheme::Dark];
        &SCHEMES
    }
}

impl Display for ColorScheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorScheme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ThemeError::UnknownScheme(s.to_string())),
        }
    }
}

/// Theme category driving the accent colors of the UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThemeCategory {
    /// Documented fallback for unrecognized input.
    #[default]
    Sales,
    Delivery,
    QualityAssurance,
}

impl ThemeCategory {
    /// Stable id used by tables, override files and root markers.
    pub fn id(self) -> &'static str {
        match self {
            Self::Sales => "sales",
            Self::Delivery => "delivery",
            Self::QualityAssurance => "qualityAssurance",
        }
    }

    /// User-facing name, also the stored form.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Sales => "Sales",
            Self::Delivery => "Delivery",
            Self::QualityAssurance => "Quality Assurance",
        }
    }

    pub fn all() -> &'static [ThemeCategory] {
        const CATEGORIES: [ThemeCategory; 3] = [
            ThemeCategory::Sales,
            ThemeCategory::Delivery,
            ThemeCategory::QualityAssurance,
        ];
        &CATEGORIES
    }

    /// Parse a category name, ignoring case, spaces, `_` and `-`.
    ///
    /// `"Quality Assurance"`, `"qualityAssurance"` and `"quality_assurance"`
    /// all map to [`ThemeCategory::QualityAssurance`].
    pub fn parse(s: &str) -> Option<Self> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "sales" => Some(Self::Sales),
            "delivery" => Some(Self::Delivery),
            "qualityassurance" | "qa" => Some(Self::QualityAssurance),
            _ => None,
        }
    }

    /// Parse a category name, falling back to the default category.
    pub fn parse_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            tracing::debug!("unrecognized theme category {:?}, using {}", s, Self::default());
            Self::default()
        })
    }
}

impl Display for ThemeCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Serialize for ThemeCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_name())
    }
}

impl<'de> Deserialize<'de> for ThemeCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown theme category `{raw}`")))
    }
}
