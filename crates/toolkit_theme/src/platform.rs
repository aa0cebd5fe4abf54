//! System color scheme detection
//!
//! Stands in for the OS "prefers dark" query. Checks, in order:
//! - `TOOLKIT_COLOR_SCHEME` (`light` / `dark`)
//! - `COLORFGBG` as exported by many terminals (`fg;bg`, dark when bg is
//!   one of the dark ANSI colors)

use crate::theme::ColorScheme;

/// Explicit preference variable
pub const SCHEME_ENV: &str = "TOOLKIT_COLOR_SCHEME";

/// Detect the system color scheme from the process environment.
pub fn detect_system_color_scheme() -> Option<ColorScheme> {
    scheme_from_env(|key| std::env::var(key).ok())
}

/// Detection over an arbitrary variable lookup.
pub fn scheme_from_env(lookup: impl Fn(&str) -> Option<String>) -> Option<ColorScheme> {
    if let Some(explicit) = lookup(SCHEME_ENV) {
        match explicit.parse() {
            Ok(scheme) => return Some(scheme),
            Err(_) => tracing::debug!("ignoring {}={:?}", SCHEME_ENV, explicit),
        }
    }

    let colorfgbg = lookup("COLORFGBG")?;
    let bg: u8 = colorfgbg.rsplit(';').next()?.trim().parse().ok()?;
    Some(if bg <= 6 || bg == 8 {
        ColorScheme::Dark
    } else {
        ColorScheme::Light
    })
}
