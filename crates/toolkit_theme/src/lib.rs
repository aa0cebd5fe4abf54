//! Toolkit Theme System
//!
//! Resolves every themable value of the toolkit browser from a small set of
//! static tables: one shared table per color scheme, laid under one accent
//! table per (scheme, category) pair.
//!
//! # Overview
//!
//! - **Typed paths**: [`ThemePath`] enumerates every legal dotted path, so a
//!   lookup through the typed API can never miss
//! - **Resolver**: [`ThemeResolver`] merges category tables over the shared
//!   table and answers `(scheme, category, path)` queries
//! - **Overrides**: TOML documents can replace built-in values, validated
//!   against the path set
//! - **State**: [`ThemeState`] carries the active scheme and category, reads
//!   them from [`Storage`] at startup, and persists every change
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use toolkit_theme::{
//!     ColorScheme, MemoryStorage, Resolve, ThemeCategory, ThemePath, ThemeResolver, ThemeState,
//! };
//!
//! let resolver = Arc::new(ThemeResolver::builtin());
//! let mut theme = ThemeState::load(resolver, Box::new(MemoryStorage::new()), None);
//!
//! theme.set_category(ThemeCategory::Delivery);
//! theme.toggle_mode();
//! assert_eq!(theme.mode(), ColorScheme::Dark);
//!
//! let accent = theme.css(ThemePath::ColorsPrimaryMain);
//! assert!(accent.starts_with('#'));
//! ```

pub mod error;
pub mod overrides;
pub mod path;
pub mod platform;
pub mod resolver;
pub mod state;
pub mod storage;
pub mod tables;
pub mod theme;

pub use error::{StorageError, ThemeError};
pub use overrides::ThemeOverrides;
pub use path::{ThemePath, ThemeTable, ThemeValue, ValueKind};
pub use platform::detect_system_color_scheme;
pub use resolver::{Resolve, ScopedTheme, ThemeResolver};
pub use state::{RootMarker, ThemeChange, ThemeState, CATEGORY_STORAGE_KEY, MODE_STORAGE_KEY};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use theme::{ColorScheme, ThemeCategory};
