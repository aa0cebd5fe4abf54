//! Color and visual value types

use std::fmt;

use thiserror::Error;

/// Errors produced when parsing CSS color, gradient, or shadow strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color value")]
    Empty,

    #[error("invalid hex color `{0}` (expected #rgb, #rrggbb or #rrggbbaa)")]
    InvalidHex(String),

    #[error("invalid color function `{0}`")]
    InvalidFunction(String),

    #[error("invalid gradient `{0}`")]
    InvalidGradient(String),

    #[error("invalid shadow `{0}`")]
    InvalidShadow(String),

    #[error("unsupported color syntax `{0}`")]
    Unsupported(String),
}

/// RGBA color with components in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Linear interpolation between two colors
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    /// Format as a CSS color: `#rrggbb` when opaque, `rgba(...)` otherwise
    pub fn to_css(&self) -> String {
        let (r, g, b) = (channel(self.r), channel(self.g), channel(self.b));
        if self.a < 1.0 {
            format!("rgba({},{},{},{})", r, g, b, round_alpha(self.a))
        } else {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        }
    }

    /// Parse a CSS color string.
    ///
    /// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r,g,b)`, `rgba(r,g,b,a)`,
    /// and the keywords `white`, `black` and `transparent`.
    pub fn parse_css(src: &str) -> Result<Self, ColorParseError> {
        let s = src.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::InvalidHex(s.to_string()));
        }

        let lower = s.to_ascii_lowercase();
        match lower.as_str() {
            "white" => return Ok(Self::WHITE),
            "black" => return Ok(Self::BLACK),
            "transparent" => return Ok(Self::TRANSPARENT),
            _ => {}
        }

        if let Some(args) = function_args(&lower, "rgba").or_else(|| function_args(&lower, "rgb")) {
            return parse_rgb_args(args)
                .ok_or_else(|| ColorParseError::InvalidFunction(s.to_string()));
        }

        Err(ColorParseError::Unsupported(s.to_string()))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

fn channel(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn round_alpha(a: f32) -> f32 {
    (a.clamp(0.0, 1.0) * 100.0).round() / 100.0
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| v as f32 / 255.0);
    match hex.len() {
        3 => {
            let mut parts = hex.chars().map(|c| {
                let doubled: String = [c, c].iter().collect();
                byte(&doubled)
            });
            Some(Color::rgb(parts.next()??, parts.next()??, parts.next()??))
        }
        6 => Some(Color::rgb(byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?)),
        8 => Some(Color::rgba(
            byte(&hex[0..2])?,
            byte(&hex[2..4])?,
            byte(&hex[4..6])?,
            byte(&hex[6..8])?,
        )),
        _ => None,
    }
}

/// Return the text between `name(` and the closing `)`.
fn function_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_rgb_args(args: &str) -> Option<Color> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    let mut rgb = [0.0f32; 3];
    for (slot, part) in rgb.iter_mut().zip(&parts) {
        let v: f32 = part.parse().ok()?;
        if !(0.0..=255.0).contains(&v) {
            return None;
        }
        *slot = v / 255.0;
    }
    let a = match parts.get(3) {
        Some(part) => {
            let a: f32 = part.parse().ok()?;
            if !(0.0..=1.0).contains(&a) {
                return None;
            }
            a
        }
        None => 1.0,
    };
    Some(Color::rgba(rgb[0], rgb[1], rgb[2], a))
}

/// Gradient stop, `offset` in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// A linear gradient with an angle in degrees
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub angle: f32,
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    pub fn new(angle: f32, stops: Vec<GradientStop>) -> Self {
        Self { angle, stops }
    }

    /// Two-stop gradient from `from` at 0% to `to` at 100%
    pub fn two_stop(angle: f32, from: Color, to: Color) -> Self {
        Self::new(
            angle,
            vec![GradientStop::new(0.0, from), GradientStop::new(1.0, to)],
        )
    }

    pub fn to_css(&self) -> String {
        let stops: Vec<String> = self
            .stops
            .iter()
            .map(|s| format!("{} {}%", s.color.to_css(), (s.offset * 100.0).round()))
            .collect();
        format!("linear-gradient({}deg, {})", self.angle, stops.join(", "))
    }

    /// Parse `linear-gradient(<angle>deg, <color> <pct>%, ...)`
    pub fn parse_css(src: &str) -> Result<Self, ColorParseError> {
        let err = || ColorParseError::InvalidGradient(src.trim().to_string());
        let lower = src.trim().to_ascii_lowercase();
        let args = function_args(&lower, "linear-gradient").ok_or_else(err)?;

        let parts = split_top_level(args);
        let (angle_part, stop_parts) = parts.split_first().ok_or_else(err)?;
        let angle: f32 = angle_part
            .trim()
            .strip_suffix("deg")
            .and_then(|a| a.trim().parse().ok())
            .filter(|a: &f32| a.is_finite())
            .ok_or_else(err)?;

        let mut stops = Vec::with_capacity(stop_parts.len());
        for part in stop_parts {
            let part = part.trim();
            let (color, offset) = match part.rsplit_once(' ') {
                Some((c, pct)) if pct.ends_with('%') => {
                    let pct: f32 = pct.trim_end_matches('%').parse().map_err(|_| err())?;
                    if !(0.0..=100.0).contains(&pct) {
                        return Err(err());
                    }
                    (c, pct / 100.0)
                }
                _ => (part, if stops.is_empty() { 0.0 } else { 1.0 }),
            };
            let color = Color::parse_css(color).map_err(|_| err())?;
            stops.push(GradientStop::new(offset, color));
        }
        if stops.len() < 2 {
            return Err(err());
        }
        Ok(Self::new(angle, stops))
    }
}

/// A single box-shadow layer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
}

impl Shadow {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
        }
    }

    pub const fn none() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, Color::TRANSPARENT)
    }

    pub fn to_css(&self) -> String {
        format!(
            "{}px {}px {}px {}px {}",
            self.offset_x,
            self.offset_y,
            self.blur,
            self.spread,
            self.color.to_css()
        )
    }

    /// Parse `<x>px <y>px <blur>px [<spread>px] <color>`
    pub fn parse_css(src: &str) -> Result<Self, ColorParseError> {
        let err = || ColorParseError::InvalidShadow(src.trim().to_string());
        let s = src.trim();

        let mut lengths = Vec::with_capacity(4);
        let mut rest = s;
        while lengths.len() < 4 {
            let (token, tail) = match rest.split_once(' ') {
                Some((t, tail)) => (t, tail.trim_start()),
                None => (rest, ""),
            };
            let Some(v) = parse_length(token) else {
                break;
            };
            lengths.push(v);
            rest = tail;
        }
        if lengths.len() < 3 || lengths[2] < 0.0 || rest.is_empty() {
            return Err(err());
        }
        let color = Color::parse_css(rest).map_err(|_| err())?;
        Ok(Self::new(
            lengths[0],
            lengths[1],
            lengths[2],
            lengths.get(3).copied().unwrap_or(0.0),
            color,
        ))
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::none()
    }
}

fn parse_length(token: &str) -> Option<f32> {
    let num = token.strip_suffix("px").unwrap_or(token);
    if num != "0" && !token.ends_with("px") {
        return None;
    }
    num.parse().ok().filter(|v: &f32| v.is_finite())
}

/// Split on commas that are not nested inside parentheses.
fn split_top_level(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_color() {
        let c = Color::from_hex(0xFF5500);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 85.0 / 255.0).abs() < 0.001);
        assert_eq!(c.b, 0.0);

        let c2 = c.with_alpha(0.5);
        assert_eq!(c2.a, 0.5);
    }

    #[test]
    fn css_formatting_uses_hex_when_opaque() {
        assert_eq!(Color::from_hex(0x0B3D91).to_css(), "#0b3d91");
        assert_eq!(
            Color::from_hex(0x000000).with_alpha(0.25).to_css(),
            "rgba(0,0,0,0.25)"
        );
    }

    #[test]
    fn parses_css_color_syntaxes() {
        assert_eq!(Color::parse_css("#fff").unwrap(), Color::WHITE);
        assert_eq!(
            Color::parse_css(" #0B3D91 ").unwrap(),
            Color::from_hex(0x0B3D91)
        );
        assert_eq!(
            Color::parse_css("rgba(0, 0, 0, 0.5)").unwrap(),
            Color::BLACK.with_alpha(0.5)
        );
        assert_eq!(Color::parse_css("transparent").unwrap(), Color::TRANSPARENT);
    }

    #[test]
    fn rejects_malformed_colors() {
        assert_eq!(Color::parse_css(""), Err(ColorParseError::Empty));
        assert!(matches!(
            Color::parse_css("#12345"),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            Color::parse_css("rgb(300, 0, 0)"),
            Err(ColorParseError::InvalidFunction(_))
        ));
        assert!(matches!(
            Color::parse_css("hsl(10, 20%, 30%)"),
            Err(ColorParseError::Unsupported(_))
        ));
    }

    #[test]
    fn gradient_css_round_trips() {
        let g = LinearGradient::two_stop(135.0, Color::from_hex(0x0B3D91), Color::WHITE);
        assert_eq!(g.to_css(), "linear-gradient(135deg, #0b3d91 0%, #ffffff 100%)");
        assert_eq!(LinearGradient::parse_css(&g.to_css()).unwrap(), g);
    }

    #[test]
    fn gradient_requires_two_stops() {
        assert!(LinearGradient::parse_css("linear-gradient(90deg, #fff 0%)").is_err());
        assert!(LinearGradient::parse_css("radial-gradient(#fff, #000)").is_err());
    }

    #[test]
    fn shadow_parses_with_and_without_spread() {
        let s = Shadow::parse_css("0px 4px 12px rgba(0, 0, 0, 0.1)").unwrap();
        assert_eq!(s.offset_y, 4.0);
        assert_eq!(s.blur, 12.0);
        assert_eq!(s.spread, 0.0);
        assert_eq!(s.color, Color::BLACK.with_alpha(0.1));

        let s = Shadow::parse_css("0 2px 8px 1px #000000").unwrap();
        assert_eq!(s.spread, 1.0);
        assert_eq!(s.to_css(), "0px 2px 8px 1px #000000");
    }

    #[test]
    fn non_finite_and_negative_blur_are_rejected() {
        for src in [
            "0px NaNpx 8px #000000",
            "0px 2px infpx #000000",
            "0px 2px -4px #000000",
        ] {
            assert_eq!(
                Shadow::parse_css(src),
                Err(ColorParseError::InvalidShadow(src.to_string()))
            );
        }
        assert!(Shadow::parse_css("-2px -2px 4px #000000").is_ok());
        assert!(LinearGradient::parse_css("linear-gradient(NaNdeg, #fff 0%, #000 100%)").is_err());
        assert!(LinearGradient::parse_css("linear-gradient(90deg, #fff NaN%, #000 100%)").is_err());
    }
}
