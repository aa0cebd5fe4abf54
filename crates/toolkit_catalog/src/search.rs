//! Search and filter queries

use toolkit_theme::ThemeCategory;

use crate::item::ToolkitItem;

/// Conjunctive item filter. An empty query matches everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    text: Option<String>,
    theme: Option<ThemeCategory>,
    category: Option<String>,
    tags: Vec<String>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring over title, descriptions, and tags.
    /// Blank text is ignored.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into().trim().to_lowercase();
        self.text = (!text.is_empty()).then_some(text);
        self
    }

    pub fn theme(mut self, theme: ThemeCategory) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Exact category label, compared case-insensitively
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Require a tag; repeated calls require all of them
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.theme.is_none() && self.category.is_none() && self.tags.is_empty()
    }

    pub fn matches(&self, item: &ToolkitItem) -> bool {
        if self.theme.is_some_and(|t| t != item.theme) {
            return false;
        }
        if let Some(category) = &self.category {
            if !item.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if !self.tags.iter().all(|t| item.has_tag(t)) {
            return false;
        }
        match &self.text {
            Some(needle) => text_matches(item, needle),
            None => true,
        }
    }
}

fn text_matches(item: &ToolkitItem, needle: &str) -> bool {
    [
        item.title.as_str(),
        item.short_description.as_str(),
        item.long_description.as_str(),
    ]
    .into_iter()
    .chain(item.tags.iter().map(String::as_str))
    .any(|field| field.to_lowercase().contains(needle))
}
