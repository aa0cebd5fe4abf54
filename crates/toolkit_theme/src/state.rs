//! Theme state holder
//!
//! ThemeState carries the active color scheme and category for one session.
//! It is an explicit value handed to whoever renders, not a process global:
//! - Startup reads both from [`Storage`], falling back to the system scheme
//!   and the default category
//! - Every change persists both keys, recomputes the root marker, and
//!   notifies change listeners

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::path::{ThemePath, ThemeValue};
use crate::platform::detect_system_color_scheme;
use crate::resolver::{Resolve, ThemeResolver};
use crate::storage::Storage;
use crate::theme::{ColorScheme, ThemeCategory};

/// Storage key holding `light` or `dark`
pub const MODE_STORAGE_KEY: &str = "theme";

/// Storage key holding the category display name
pub const CATEGORY_STORAGE_KEY: &str = "themeCategory";

/// Root-level style marker mirrored onto the document root
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RootMarker {
    pub scheme: ColorScheme,
    pub category: ThemeCategory,
}

impl RootMarker {
    /// `class` value for the root element
    pub fn class(&self) -> &'static str {
        self.scheme.as_str()
    }

    /// Attributes to set on the root element
    pub fn attributes(&self) -> [(&'static str, &'static str); 2] {
        [
            ("class", self.class()),
            ("data-theme-category", self.category.id()),
        ]
    }
}

/// What changed in a state transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeChange {
    pub previous: RootMarker,
    pub current: RootMarker,
}

type ChangeListener = Box<dyn Fn(&ThemeChange)>;

/// Session theme state
pub struct ThemeState {
    resolver: Arc<ThemeResolver>,
    storage: Box<dyn Storage>,
    scheme: ColorScheme,
    category: ThemeCategory,
    listeners: Vec<ChangeListener>,
}

impl ThemeState {
    /// Build state from storage.
    ///
    /// The scheme comes from the `theme` key, else `system`, else light.
    /// The category comes from the `themeCategory` key, else Sales. Stored
    /// values that do not parse are ignored.
    pub fn load(
        resolver: Arc<ThemeResolver>,
        storage: Box<dyn Storage>,
        system: Option<ColorScheme>,
    ) -> Self {
        let stored_scheme = storage
            .get(MODE_STORAGE_KEY)
            .and_then(|raw| raw.parse::<ColorScheme>().ok());
        let scheme = stored_scheme.or(system).unwrap_or_default();

        let category = storage
            .get(CATEGORY_STORAGE_KEY)
            .and_then(|raw| ThemeCategory::parse(&raw))
            .unwrap_or_default();

        tracing::debug!(
            "ThemeState::load - scheme={} (stored={:?}, system={:?}), category={}",
            scheme,
            stored_scheme,
            system,
            category
        );

        Self {
            resolver,
            storage,
            scheme,
            category,
            listeners: Vec::new(),
        }
    }

    /// Build state using the detected system color scheme
    pub fn init_default(resolver: Arc<ThemeResolver>, storage: Box<dyn Storage>) -> Self {
        Self::load(resolver, storage, detect_system_color_scheme())
    }

    // ========== Scheme / Category ==========

    /// Current color scheme
    pub fn mode(&self) -> ColorScheme {
        self.scheme
    }

    /// Current theme category
    pub fn category(&self) -> ThemeCategory {
        self.category
    }

    pub fn set_mode(&mut self, scheme: ColorScheme) {
        if self.scheme != scheme {
            let previous = self.root_marker();
            self.scheme = scheme;
            self.commit(previous);
        }
    }

    /// Flip between light and dark
    pub fn toggle_mode(&mut self) {
        self.set_mode(self.scheme.toggle());
    }

    pub fn set_category(&mut self, category: ThemeCategory) {
        if self.category != category {
            let previous = self.root_marker();
            self.category = category;
            self.commit(previous);
        }
    }

    fn commit(&mut self, previous: RootMarker) {
        let current = self.root_marker();
        tracing::debug!(
            "ThemeState - {}/{} -> {}/{}",
            previous.scheme,
            previous.category.id(),
            current.scheme,
            current.category.id()
        );
        self.persist();

        let change = ThemeChange { previous, current };
        for listener in &self.listeners {
            listener(&change);
        }
    }

    fn persist(&mut self) {
        let writes = [
            (MODE_STORAGE_KEY, self.scheme.as_str()),
            (CATEGORY_STORAGE_KEY, self.category.display_name()),
        ];
        for (key, value) in writes {
            if let Err(e) = self.storage.set(key, value) {
                tracing::warn!("failed to persist {}: {}", key, e);
            }
        }
    }

    /// Register a callback run after every scheme or category change
    pub fn on_change(&mut self, listener: impl Fn(&ThemeChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn root_marker(&self) -> RootMarker {
        RootMarker {
            scheme: self.scheme,
            category: self.category,
        }
    }

    // ========== Resolution ==========

    /// Resolve a path against another category under the current scheme
    pub fn resolve_for_category(&self, category: ThemeCategory, path: ThemePath) -> ThemeValue {
        self.resolver
            .resolve_for_category(self.scheme, category, path)
    }

    /// Resolve a dotted path under the current scheme and category
    pub fn resolve_str(&self, path: &str) -> Option<ThemeValue> {
        self.resolver
            .resolve_str(self.scheme, self.category.id(), path)
    }

    /// CSS custom properties for the current scheme and category
    pub fn to_css_variable_map(&self) -> BTreeMap<String, String> {
        self.resolver.css_variables(self.scheme, self.category)
    }

    pub fn resolver(&self) -> &Arc<ThemeResolver> {
        &self.resolver
    }

    /// Release the storage, e.g. to reload state from it
    pub fn into_storage(self) -> Box<dyn Storage> {
        self.storage
    }
}

impl Resolve for ThemeState {
    fn resolve(&self, path: ThemePath) -> ThemeValue {
        self.resolver.resolve(self.scheme, self.category, path)
    }
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("scheme", &self.scheme)
            .field("category", &self.category)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
