//! Theme resolution
//!
//! [`ThemeResolver`] owns the merged table for every (scheme, category) pair.
//! Typed lookups are total; the string entry point validates the path and
//! reports misses as `None` with a warning.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use toolkit_core::Color;

use crate::overrides::{OverrideSection, ThemeOverrides};
use crate::path::{ThemePath, ThemeTable, ThemeValue};
use crate::tables::{category_table, shared_table};
use crate::theme::{ColorScheme, ThemeCategory};

/// Anything that can answer typed theme lookups for a fixed scheme and
/// category. Renderers take `&dyn Resolve` so they stay pure.
pub trait Resolve {
    fn resolve(&self, path: ThemePath) -> ThemeValue;

    /// Color at `path`, transparent if the path holds another kind
    fn color(&self, path: ThemePath) -> Color {
        self.resolve(path).as_color().unwrap_or(Color::TRANSPARENT)
    }

    /// Numeric value at `path`, `0.0` if the path holds another kind
    fn number(&self, path: ThemePath) -> f32 {
        self.resolve(path).as_number().unwrap_or(0.0)
    }

    fn css(&self, path: ThemePath) -> String {
        self.resolve(path).to_css()
    }
}

/// Merged theme tables for every scheme and category
#[derive(Clone, Debug)]
pub struct ThemeResolver {
    shared: FxHashMap<ColorScheme, ThemeTable>,
    categories: FxHashMap<(ColorScheme, ThemeCategory), ThemeTable>,
    merged: FxHashMap<(ColorScheme, ThemeCategory), ThemeTable>,
}

impl ThemeResolver {
    /// Resolver over the built-in tables
    pub fn builtin() -> Self {
        let mut shared = FxHashMap::default();
        let mut categories = FxHashMap::default();
        for scheme in ColorScheme::all() {
            shared.insert(*scheme, shared_table(*scheme));
            for category in ThemeCategory::all() {
                categories.insert((*scheme, *category), category_table(*scheme, *category));
            }
        }

        let mut resolver = Self {
            shared,
            categories,
            merged: FxHashMap::default(),
        };
        resolver.rebuild();
        resolver
    }

    /// Lay override tables over the current tables and re-merge.
    pub fn with_overrides(mut self, overrides: &ThemeOverrides) -> Self {
        for scheme in ColorScheme::all() {
            if let Some(table) = overrides.table(*scheme, OverrideSection::Shared) {
                self.shared.entry(*scheme).or_default().extend_from(table);
            }
            for category in ThemeCategory::all() {
                if let Some(table) =
                    overrides.table(*scheme, OverrideSection::Category(*category))
                {
                    self.categories
                        .entry((*scheme, *category))
                        .or_default()
                        .extend_from(table);
                }
            }
        }
        self.rebuild();
        self
    }

    fn rebuild(&mut self) {
        self.merged.clear();
        for scheme in ColorScheme::all() {
            let empty = ThemeTable::new();
            let shared = self.shared.get(scheme).unwrap_or(&empty);
            for category in ThemeCategory::all() {
                let merged = match self.categories.get(&(*scheme, *category)) {
                    Some(table) => table.merged_over(shared),
                    None => shared.clone(),
                };
                self.merged.insert((*scheme, *category), merged);
            }
        }
    }

    /// Look up a typed path without falling back.
    pub fn lookup(
        &self,
        scheme: ColorScheme,
        category: ThemeCategory,
        path: ThemePath,
    ) -> Option<&ThemeValue> {
        self.merged.get(&(scheme, category))?.get(path)
    }

    /// Resolve a typed path. Category entries win over shared entries.
    pub fn resolve(
        &self,
        scheme: ColorScheme,
        category: ThemeCategory,
        path: ThemePath,
    ) -> ThemeValue {
        match self.lookup(scheme, category, path) {
            Some(value) => value.clone(),
            None => {
                tracing::warn!("theme {scheme}/{} has no value for {path}", category.id());
                ThemeValue::neutral(path.kind())
            }
        }
    }

    /// Resolve against an explicit category, independent of any active one.
    pub fn resolve_for_category(
        &self,
        scheme: ColorScheme,
        category: ThemeCategory,
        path: ThemePath,
    ) -> ThemeValue {
        self.resolve(scheme, category, path)
    }

    /// Resolve a dotted path for a category name.
    ///
    /// The category is normalized and unknown names fall back to
    /// [`ThemeCategory::Sales`]. Unknown paths yield `None`.
    pub fn resolve_str(&self, scheme: ColorScheme, category: &str, path: &str) -> Option<ThemeValue> {
        let category = ThemeCategory::parse_or_default(category);
        let Some(path) = ThemePath::from_dotted(path) else {
            tracing::warn!("unresolved theme path {:?}", path);
            return None;
        };
        self.lookup(scheme, category, path).cloned()
    }

    /// Every (scheme, category, path) triple that fails to resolve
    pub fn validate(&self) -> Vec<(ColorScheme, ThemeCategory, ThemePath)> {
        let mut missing = Vec::new();
        for scheme in ColorScheme::all() {
            for category in ThemeCategory::all() {
                for path in ThemePath::ALL {
                    match self.lookup(*scheme, *category, *path) {
                        Some(value) if value.kind() == path.kind() => {}
                        _ => missing.push((*scheme, *category, *path)),
                    }
                }
            }
        }
        missing
    }

    /// CSS custom properties for a scheme and category, keyed by variable
    /// name without the `--` prefix.
    pub fn css_variables(
        &self,
        scheme: ColorScheme,
        category: ThemeCategory,
    ) -> BTreeMap<String, String> {
        ThemePath::ALL
            .iter()
            .map(|path| {
                (
                    path.css_variable(),
                    self.resolve(scheme, category, *path).to_css(),
                )
            })
            .collect()
    }

    /// Fix the scheme and category for a render pass
    pub fn scoped(&self, scheme: ColorScheme, category: ThemeCategory) -> ScopedTheme<'_> {
        ScopedTheme {
            resolver: self,
            scheme,
            category,
        }
    }
}

impl Default for ThemeResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

/// A resolver pinned to one scheme and category
#[derive(Clone, Copy, Debug)]
pub struct ScopedTheme<'a> {
    resolver: &'a ThemeResolver,
    scheme: ColorScheme,
    category: ThemeCategory,
}

impl ScopedTheme<'_> {
    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn category(&self) -> ThemeCategory {
        self.category
    }
}

impl Resolve for ScopedTheme<'_> {
    fn resolve(&self, path: ThemePath) -> ThemeValue {
        self.resolver.resolve(self.scheme, self.category, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_tables_resolve_every_path() {
        assert_eq!(ThemeResolver::builtin().validate(), vec![]);
    }

    #[test]
    fn string_paths_resolve_like_typed_paths() {
        let resolver = ThemeResolver::builtin();
        assert_eq!(
            resolver.resolve_str(ColorScheme::Dark, "Quality Assurance", "colors.primary.main"),
            Some(resolver.resolve(
                ColorScheme::Dark,
                ThemeCategory::QualityAssurance,
                ThemePath::ColorsPrimaryMain
            ))
        );
        assert_eq!(
            resolver.resolve_str(ColorScheme::Light, "sales", "colors.primary.nope"),
            None
        );
    }

    #[test]
    fn overrides_replace_builtin_values() {
        let mut overrides = ThemeOverrides::new();
        overrides.set(
            ColorScheme::Light,
            OverrideSection::Category(ThemeCategory::Delivery),
            ThemePath::HeaderText,
            ThemeValue::Color(Color::from_hex(0x123456)),
        );
        let resolver = ThemeResolver::builtin().with_overrides(&overrides);

        assert_eq!(
            resolver.resolve(ColorScheme::Light, ThemeCategory::Delivery, ThemePath::HeaderText),
            ThemeValue::Color(Color::from_hex(0x123456))
        );
        assert_ne!(
            resolver.resolve(ColorScheme::Light, ThemeCategory::Sales, ThemePath::HeaderText),
            ThemeValue::Color(Color::from_hex(0x123456))
        );
        assert!(resolver.validate().is_empty());
    }

    #[test]
    fn css_variables_cover_every_path() {
        let vars = ThemeResolver::builtin().css_variables(ColorScheme::Light, ThemeCategory::Sales);
        assert_eq!(vars.len(), ThemePath::ALL.len());
        assert_eq!(vars["colors-primary-main"], "#1565c0");
        assert_eq!(vars["spacing-content-block-gap"], "16px");
    }
}
