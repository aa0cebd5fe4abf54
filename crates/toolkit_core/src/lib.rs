//! Toolkit Core
//!
//! Foundational value types shared by the theming layer and the renderer:
//!
//! - **Color**: RGBA color with CSS parsing and formatting
//! - **LinearGradient**: angle plus color stops, rendered as `linear-gradient(...)`
//! - **Shadow**: a single box shadow layer
//!
//! # Example
//!
//! ```rust
//! use toolkit_core::Color;
//!
//! let navy = Color::from_hex(0x1A2B4C);
//! assert_eq!(navy.to_css(), "#1a2b4c");
//! assert_eq!(Color::parse_css("#1a2b4c").unwrap(), navy);
//! ```

pub mod color;

pub use color::{Color, ColorParseError, GradientStop, LinearGradient, Shadow};
