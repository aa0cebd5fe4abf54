//! Read-only catalog store
//!
//! The catalog is a YAML document with three top-level keys:
//!
//! ```yaml
//! items:                  # list of ToolkitItem, in display order
//!   - id: sales-playbook
//!     ...
//! detailed_descriptions:  # item id -> authored content blocks
//!   sales-playbook:
//!     - { type: header, text: "Key Features:" }
//! code_examples:          # item id -> code snippets
//!   sales-playbook: [...]
//! ```
//!
//! Everything is validated on load and immutable afterwards.

use std::borrow::Cow;
use std::path::Path;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use toolkit_content::{parse, ContentBlock};
use toolkit_theme::ThemeCategory;

use crate::error::CatalogError;
use crate::item::{CodeExample, ToolkitItem};
use crate::search::Query;

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.yaml");

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    items: Vec<ToolkitItem>,
    #[serde(default)]
    detailed_descriptions: IndexMap<String, Vec<ContentBlock>>,
    #[serde(default)]
    code_examples: IndexMap<String, Vec<CodeExample>>,
}

#[derive(Clone, Debug)]
pub struct Catalog {
    items: IndexMap<String, ToolkitItem>,
    details: FxHashMap<String, Vec<ContentBlock>>,
    code_examples: FxHashMap<String, Vec<CodeExample>>,
}

impl Catalog {
    /// The catalog shipped with the crate
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_yaml_str(BUILTIN_CATALOG)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&src)
    }

    pub fn from_yaml_str(src: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_yaml::from_str(src)?;

        let mut items = IndexMap::with_capacity(doc.items.len());
        for item in doc.items {
            if item.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(item.title));
            }
            if items.contains_key(&item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
            items.insert(item.id.clone(), item);
        }

        let mut details = FxHashMap::default();
        for (id, blocks) in doc.detailed_descriptions {
            if !items.contains_key(&id) {
                return Err(CatalogError::UnknownDetailId(id));
            }
            details.insert(id, blocks);
        }

        let mut code_examples = FxHashMap::default();
        for (id, examples) in doc.code_examples {
            if !items.contains_key(&id) {
                return Err(CatalogError::UnknownCodeExampleId(id));
            }
            code_examples.insert(id, examples);
        }

        tracing::debug!(
            items = items.len(),
            details = details.len(),
            code_examples = code_examples.len(),
            "catalog loaded"
        );

        Ok(Self {
            items,
            details,
            code_examples,
        })
    }

    /// All items in catalog order
    pub fn items(&self) -> impl Iterator<Item = &ToolkitItem> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, id: &str) -> Option<&ToolkitItem> {
        self.items.get(id)
    }

    /// Authored content blocks for an item, if any were provided
    pub fn detailed_description(&self, id: &str) -> Option<&[ContentBlock]> {
        self.details.get(id).map(Vec::as_slice)
    }

    pub fn code_examples(&self, id: &str) -> Option<&[CodeExample]> {
        self.code_examples.get(id).map(Vec::as_slice)
    }

    /// Blocks for an item's full view.
    ///
    /// Authored blocks win; otherwise the item's `long_description` is parsed.
    /// `None` only for unknown ids.
    pub fn detail_blocks(&self, id: &str) -> Option<Cow<'_, [ContentBlock]>> {
        if let Some(blocks) = self.detailed_description(id) {
            return Some(Cow::Borrowed(blocks));
        }
        let item = self.item(id)?;
        tracing::trace!(id, "no structured detail, parsing long description");
        Some(Cow::Owned(parse(&item.long_description)))
    }

    /// Items matching every filter in `query`, in catalog order
    pub fn search(&self, query: &Query) -> Vec<&ToolkitItem> {
        self.items().filter(|item| query.matches(item)).collect()
    }

    /// Distinct category labels in catalog order, optionally limited to one
    /// theme
    pub fn categories(&self, theme: Option<ThemeCategory>) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for item in self.items() {
            if theme.is_some_and(|t| t != item.theme) {
                continue;
            }
            if !seen.contains(&item.category.as_str()) {
                seen.push(&item.category);
            }
        }
        seen
    }
}
