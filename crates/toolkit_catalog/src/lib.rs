//! Toolkit catalog
//!
//! A read-only store of transformation collateral loaded from YAML, with
//! search and filtering, a stub access gate, and themed card/detail views.
//!
//! ```rust
//! use toolkit_catalog::{view, AccessLevel, Catalog, Query};
//! use toolkit_theme::{ColorScheme, ThemeCategory, ThemeResolver};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let hits = catalog.search(&Query::new().theme(ThemeCategory::Delivery));
//! assert!(!hits.is_empty());
//!
//! let resolver = ThemeResolver::builtin();
//! let theme = resolver.scoped(ColorScheme::Light, ThemeCategory::Delivery);
//! let card = view::card(hits[0], AccessLevel::Restricted, &theme);
//! assert!(card.to_html().starts_with("<article"));
//! ```

pub mod access;
pub mod error;
pub mod item;
pub mod search;
pub mod store;
pub mod view;

pub use access::{AccessLevel, Session};
pub use error::{AccessError, CatalogError};
pub use item::{CodeExample, Material, MaterialKind, ToolkitItem};
pub use search::Query;
pub use store::Catalog;
