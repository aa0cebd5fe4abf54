//! Structured content for the toolkit browser
//!
//! Catalog descriptions arrive either as authored [`ContentBlock`] sequences
//! or as freeform text. Freeform text goes through [`parse`], a small
//! line-oriented grammar (headers ending in `:`, `•` bullets, `1.` numbered
//! items). Blocks are rendered into a [`Node`] tree by [`BlockRenderer`],
//! styled entirely through a theme [`Resolve`](toolkit_theme::Resolve)r.
//!
//! ```rust
//! use toolkit_content::{parse, render_blocks, ContentBlock};
//! use toolkit_theme::{ColorScheme, ThemeCategory, ThemeResolver};
//!
//! let blocks = parse("Key Features:\n\n• One\n• Two");
//! assert_eq!(blocks[0], ContentBlock::header("Key Features:"));
//!
//! let resolver = ThemeResolver::builtin();
//! let theme = resolver.scoped(ColorScheme::Light, ThemeCategory::Sales);
//! let html = render_blocks(&blocks, &theme).to_html();
//! assert!(html.contains("<ul"));
//! ```

pub mod blocks;
pub mod config;
pub mod node;
pub mod notice;
pub mod parser;
pub mod renderer;

pub use blocks::{BulletItem, ContentBlock, NumberedItem};
pub use config::RenderConfig;
pub use node::{Child, Node};
pub use notice::{render_notice, Notice, NoticeKind, NoticeQueue};
pub use parser::parse;
pub use renderer::{render_blocks, render_text, BlockRenderer};
