//! TOML theme overrides
//!
//! An override document is keyed by scheme, then by section (`shared` or a
//! category id), then by the nested segments of a [`ThemePath`]:
//!
//! ```toml
//! [light.shared.colors.text]
//! primary = "#111111"
//!
//! [dark.delivery.components.header.feedbackButton]
//! bg = "#1b5e20"
//!
//! [light.sales.spacing.content]
//! blockGap = 20
//! ```
//!
//! Every leaf must name a known path and carry a value of that path's kind.

use std::path::Path;

use rustc_hash::FxHashMap;

use crate::path::{ThemePath, ThemeTable, ThemeValue, ValueKind};
use crate::theme::{ColorScheme, ThemeCategory};
use crate::ThemeError;

/// Target table of an override section
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverrideSection {
    Shared,
    Category(ThemeCategory),
}

/// Parsed and validated override tables
#[derive(Clone, Debug, Default)]
pub struct ThemeOverrides {
    tables: FxHashMap<(ColorScheme, OverrideSection), ThemeTable>,
}

impl ThemeOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and parse an override file
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let src = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&src)
    }

    pub fn parse(src: &str) -> Result<Self, ThemeError> {
        let root: toml::Table = toml::from_str(src)?;
        let mut overrides = Self::new();

        for (scheme_key, sections) in &root {
            let scheme: ColorScheme = scheme_key.parse()?;
            let sections = sections
                .as_table()
                .ok_or_else(|| ThemeError::UnknownScheme(scheme_key.clone()))?;

            for (section_key, tree) in sections {
                let section = if section_key == "shared" {
                    OverrideSection::Shared
                } else {
                    ThemeCategory::parse(section_key)
                        .map(OverrideSection::Category)
                        .ok_or_else(|| ThemeError::UnknownSection(section_key.clone()))?
                };
                let table = overrides.tables.entry((scheme, section)).or_default();
                collect_leaves(String::new(), tree, table)?;
            }
        }

        tracing::debug!("loaded {} theme override entries", overrides.len());
        Ok(overrides)
    }

    pub fn table(&self, scheme: ColorScheme, section: OverrideSection) -> Option<&ThemeTable> {
        self.tables.get(&(scheme, section))
    }

    /// Insert a single override
    pub fn set(
        &mut self,
        scheme: ColorScheme,
        section: OverrideSection,
        path: ThemePath,
        value: ThemeValue,
    ) {
        self.tables
            .entry((scheme, section))
            .or_default()
            .insert(path, value);
    }

    /// Total number of overridden entries
    pub fn len(&self) -> usize {
        self.tables.values().map(ThemeTable::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn collect_leaves(
    prefix: String,
    value: &toml::Value,
    table: &mut ThemeTable,
) -> Result<(), ThemeError> {
    match value {
        toml::Value::Table(children) => {
            for (key, child) in children {
                let dotted = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                collect_leaves(dotted, child, table)?;
            }
            Ok(())
        }
        leaf => {
            let path =
                ThemePath::from_dotted(&prefix).ok_or_else(|| ThemeError::UnknownPath(prefix.clone()))?;
            let parsed = leaf_value(path, leaf).map_err(|e| match e {
                ThemeError::InvalidValue { reason, .. } => ThemeError::InvalidValue {
                    path: prefix.clone(),
                    reason,
                },
                other => ThemeError::InvalidValue {
                    path: prefix.clone(),
                    reason: other.to_string(),
                },
            })?;
            table.insert(path, parsed);
            Ok(())
        }
    }
}

fn leaf_value(path: ThemePath, leaf: &toml::Value) -> Result<ThemeValue, ThemeError> {
    let kind = path.kind();
    match (kind, leaf) {
        (_, toml::Value::String(s)) => ThemeValue::parse(kind, s),
        (ValueKind::Length | ValueKind::Number, toml::Value::Integer(i)) => {
            ThemeValue::from_number(kind, *i as f32)
        }
        (ValueKind::Length | ValueKind::Number, toml::Value::Float(f)) => {
            ThemeValue::from_number(kind, *f as f32)
        }
        (kind, other) => Err(ThemeError::InvalidValue {
            path: path.as_str().to_string(),
            reason: format!("expected a {}, found {}", kind.name(), other.type_str()),
        }),
    }
}
