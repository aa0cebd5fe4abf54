//! Catalog item model

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use toolkit_theme::ThemeCategory;

/// One piece of collateral in the catalog
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolkitItem {
    /// Unique, stable identifier
    pub id: String,
    pub title: String,
    /// Theme category, drives the accent colors of the item's views
    pub theme: ThemeCategory,
    /// Free-form category label ("Playbooks", "Test Automation", ...)
    pub category: String,
    pub short_description: String,
    /// Plain-text description, parsed into blocks when no structured detail
    /// exists for the item
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub materials: Vec<Material>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub version: String,
    /// ISO date (`YYYY-MM-DD`)
    pub last_updated: String,
}

impl ToolkitItem {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// A downloadable or linked resource attached to an item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    #[serde(rename = "type")]
    pub kind: MaterialKind,
    pub url: String,
    pub title: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    Document,
    Presentation,
    Code,
    Video,
    Link,
}

impl MaterialKind {
    pub fn label(self) -> &'static str {
        match self {
            MaterialKind::Document => "Document",
            MaterialKind::Presentation => "Presentation",
            MaterialKind::Code => "Code",
            MaterialKind::Video => "Video",
            MaterialKind::Link => "Link",
        }
    }
}

impl Display for MaterialKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Source snippet shown with an item's full view
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeExample {
    pub title: String,
    pub language: String,
    pub code: String,
}
