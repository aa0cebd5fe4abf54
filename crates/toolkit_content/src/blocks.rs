//! Content block model

use serde::{Deserialize, Serialize};

/// One structural unit of descriptive text.
///
/// Sequences are ordered and rendered in order; blocks carry no identity
/// beyond their position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentBlock {
    Paragraph { text: String },
    Header { text: String },
    BulletList { items: Vec<BulletItem> },
    NumberedList { items: Vec<NumberedItem> },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletItem {
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberedItem {
    pub text: String,
    #[serde(default)]
    pub sub_bullets: Vec<String>,
}

impl NumberedItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sub_bullets: Vec::new(),
        }
    }

    pub fn with_sub_bullets<S: Into<String>>(mut self, subs: impl IntoIterator<Item = S>) -> Self {
        self.sub_bullets.extend(subs.into_iter().map(Into::into));
        self
    }
}

impl ContentBlock {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    pub fn header(text: impl Into<String>) -> Self {
        Self::Header { text: text.into() }
    }

    pub fn bullets<S: Into<String>>(items: impl IntoIterator<Item = S>) -> Self {
        Self::BulletList {
            items: items
                .into_iter()
                .map(|text| BulletItem { text: text.into() })
                .collect(),
        }
    }

    pub fn numbered(items: impl IntoIterator<Item = NumberedItem>) -> Self {
        Self::NumberedList {
            items: items.into_iter().collect(),
        }
    }

    /// Authoring-format text for this block. Parsing the output yields the
    /// block back.
    pub fn to_source(&self) -> String {
        match self {
            Self::Paragraph { text } | Self::Header { text } => text.clone(),
            Self::BulletList { items } => items
                .iter()
                .map(|i| format!("• {}", i.text))
                .collect::<Vec<_>>()
                .join("\n"),
            Self::NumberedList { items } => {
                let mut lines = Vec::new();
                for (n, item) in items.iter().enumerate() {
                    lines.push(format!("{}. {}", n + 1, item.text));
                    lines.extend(item.sub_bullets.iter().cloned());
                }
                lines.join("\n")
            }
        }
    }
}

/// Authoring-format text for a block sequence, paragraphs separated by a
/// blank line.
pub fn to_source(blocks: &[ContentBlock]) -> String {
    blocks
        .iter()
        .map(ContentBlock::to_source)
        .collect::<Vec<_>>()
        .join("\n\n")
}
