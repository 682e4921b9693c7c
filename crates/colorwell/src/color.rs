//! Color value object and model conversions
//!
//! A [`Color`] carries the same color in three models at once so pickers can
//! read whichever they need without converting on every frame:
//!
//! - `hex`: `#rrggbb`, or `#rrggbbaa` when alpha is below 1
//! - `rgb`: channels in `[0, 255]` (rounded), alpha in `[0, 1]`
//! - `hsv`: hue in `[0, 360]`, saturation and value in `[0, 100]`, alpha in `[0, 1]`

use crate::{ColorwellError, Result};
use std::fmt;

/// RGB color with 8-bit-range channels and unit alpha
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Clamp channels into range and round r/g/b to whole numbers
    pub fn normalized(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 255.0).round(),
            g: self.g.clamp(0.0, 255.0).round(),
            b: self.b.clamp(0.0, 255.0).round(),
            a: self.a.clamp(0.0, 1.0),
        }
    }
}

/// HSV color: hue in degrees, saturation and value in percent
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
    pub a: f32,
}

impl Hsv {
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v, a: 1.0 }
    }

    pub const fn hsva(h: f32, s: f32, v: f32, a: f32) -> Self {
        Self { h, s, v, a }
    }

    /// Clamp every channel into its range
    pub fn normalized(self) -> Self {
        Self {
            h: self.h.clamp(0.0, 360.0),
            s: self.s.clamp(0.0, 100.0),
            v: self.v.clamp(0.0, 100.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }
}

/// Convert HSV to RGB
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let Hsv { h, s, v, a } = hsv.normalized();
    let s = s / 100.0;
    let v = v / 100.0;
    let sector = h / 60.0;

    let channel = |n: f32| {
        let k = (n + sector) % 6.0;
        let weight = k.min(4.0 - k).clamp(0.0, 1.0);
        (v - v * s * weight) * 255.0
    };

    Rgb::rgba(channel(5.0), channel(3.0), channel(1.0), a).normalized()
}

/// Convert RGB to HSV. The hue of a gray is 0.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let Rgb { r, g, b, a } = rgb.normalized();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let h = if h < 0.0 { h + 360.0 } else { h };

    let s = if max == 0.0 { 0.0 } else { delta / max * 100.0 };
    let v = max / 255.0 * 100.0;

    Hsv::hsva(h, s, v, a)
}

/// Format RGB as `#rrggbb`, or `#rrggbbaa` when alpha is below 1
pub fn rgb_to_hex(rgb: Rgb) -> String {
    let Rgb { r, g, b, a } = rgb.normalized();
    let mut hex = format!("#{:02x}{:02x}{:02x}", r as u8, g as u8, b as u8);
    if a < 1.0 {
        hex.push_str(&format!("{:02x}", (a * 255.0).round() as u8));
    }
    hex
}

/// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` (the `#` is optional)
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let invalid = || ColorwellError::InvalidHex(hex.to_string());
    let trimmed = hex.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let expanded: String = match digits.len() {
        3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => digits.to_string(),
        _ => return Err(invalid()),
    };

    let byte = |i: usize| {
        u8::from_str_radix(&expanded[i..i + 2], 16)
            .map(f32::from)
            .map_err(|_| invalid())
    };

    let alpha = if expanded.len() == 8 {
        byte(6)? / 255.0
    } else {
        1.0
    };

    Ok(Rgb::rgba(byte(0)?, byte(2)?, byte(4)?, alpha))
}

/// A color in hex, RGB and HSV at once
#[derive(Clone, Debug, PartialEq)]
pub struct Color {
    pub hex: String,
    pub rgb: Rgb,
    pub hsv: Hsv,
}

impl Color {
    pub fn from_hex(hex: &str) -> Result<Self> {
        Ok(Self::from_rgb(hex_to_rgb(hex)?))
    }

    pub fn from_rgb(rgb: Rgb) -> Self {
        let rgb = rgb.normalized();
        Self {
            hex: rgb_to_hex(rgb),
            rgb,
            hsv: rgb_to_hsv(rgb),
        }
    }

    /// Build from HSV, keeping the given hue and saturation exactly even
    /// where RGB loses them (grays, black)
    pub fn from_hsv(hsv: Hsv) -> Self {
        let hsv = hsv.normalized();
        let rgb = hsv_to_rgb(hsv);
        Self {
            hex: rgb_to_hex(rgb),
            rgb,
            hsv,
        }
    }

    /// Replace hue, saturation and value, keeping this color's alpha
    pub fn with_hsv(&self, h: f32, s: f32, v: f32) -> Self {
        Self::from_hsv(Hsv::hsva(h, s, v, self.hsv.a))
    }

    /// Replace alpha, keeping every other channel
    pub fn with_alpha(&self, alpha: f32) -> Self {
        let mut hsv = self.hsv;
        hsv.a = alpha;
        Self::from_hsv(hsv)
    }

    pub fn alpha(&self) -> f32 {
        self.rgb.a
    }

    /// Relative luminance (0.0 to 1.0), from gamma-decoded sRGB channels
    pub fn luminance(&self) -> f32 {
        fn linear(c: f32) -> f32 {
            let x = c / 255.0;
            if x <= 0.04045 {
                x / 12.92
            } else {
                ((x + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * linear(self.rgb.r) + 0.7152 * linear(self.rgb.g) + 0.0722 * linear(self.rgb.b)
    }

    /// Contrast ratio with another color (1.0 to 21.0)
    pub fn contrast_ratio(&self, other: &Color) -> f32 {
        let l1 = self.luminance();
        let l2 = other.luminance();
        let lighter = l1.max(l2);
        let darker = l1.min(l2);
        (lighter + 0.05) / (darker + 0.05)
    }

    /// Whether white text reads better on this color than black text
    pub fn is_dark(&self) -> bool {
        let l = self.luminance();
        // white/black contrast ratios cross at this luminance
        (1.05 / (l + 0.05)) > ((l + 0.05) / 0.05)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::from_rgb(Rgb::new(0.0, 0.0, 0.0))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

impl std::str::FromStr for Color {
    type Err = ColorwellError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 0.01, "{a} != {b}");
    }

    #[test]
    fn test_primary_colors() {
        let cases = [
            ("#ff0000", Hsv::new(0.0, 100.0, 100.0)),
            ("#00ff00", Hsv::new(120.0, 100.0, 100.0)),
            ("#0000ff", Hsv::new(240.0, 100.0, 100.0)),
            ("#ffffff", Hsv::new(0.0, 0.0, 100.0)),
            ("#000000", Hsv::new(0.0, 0.0, 0.0)),
        ];

        for (hex, hsv) in cases {
            let color = Color::from_hex(hex).unwrap();
            assert_eq!(color.hex, hex);
            assert_close(color.hsv.h, hsv.h);
            assert_close(color.hsv.s, hsv.s);
            assert_close(color.hsv.v, hsv.v);

            assert_eq!(Color::from_hsv(hsv).hex, hex);
        }
    }

    #[test]
    fn test_hex_forms() {
        assert_eq!(hex_to_rgb("#f80").unwrap(), Rgb::new(255.0, 136.0, 0.0));
        assert_eq!(hex_to_rgb("F80").unwrap(), Rgb::new(255.0, 136.0, 0.0));
        assert_eq!(hex_to_rgb("#123456").unwrap(), Rgb::new(18.0, 52.0, 86.0));

        let rgba = hex_to_rgb("#00000080").unwrap();
        assert_close(rgba.a, 128.0 / 255.0);
        assert_close(hex_to_rgb("#0008").unwrap().a, 136.0 / 255.0);
    }

    #[test]
    fn test_invalid_hex() {
        for bad in ["", "##fff", "#12", "#12345", "#gg0000", "#1234567", "red"] {
            assert_eq!(
                hex_to_rgb(bad),
                Err(ColorwellError::InvalidHex(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_hex_includes_alpha_below_one() {
        assert_eq!(rgb_to_hex(Rgb::rgba(255.0, 0.0, 0.0, 0.5)), "#ff000080");
        assert_eq!(rgb_to_hex(Rgb::rgba(255.0, 0.0, 0.0, 1.0)), "#ff0000");
    }

    #[test]
    fn test_from_hsv_keeps_hue_of_black() {
        let color = Color::from_hsv(Hsv::new(200.0, 80.0, 0.0));
        assert_eq!(color.hex, "#000000");
        assert_eq!(color.hsv.h, 200.0);
        assert_eq!(color.hsv.s, 80.0);
    }

    #[test]
    fn test_channels_are_clamped() {
        let color = Color::from_rgb(Rgb::rgba(300.0, -5.0, 127.6, 2.0));
        assert_eq!(color.rgb, Rgb::rgba(255.0, 0.0, 128.0, 1.0));

        let color = Color::from_hsv(Hsv::hsva(400.0, 120.0, -1.0, -1.0));
        assert_eq!(color.hsv, Hsv::hsva(360.0, 100.0, 0.0, 0.0));
    }

    #[test]
    fn test_with_alpha() {
        let color = Color::from_hex("#336699").unwrap().with_alpha(0.0);
        assert_eq!(color.hex, "#33669900");
        assert_eq!(color.alpha(), 0.0);
    }

    #[test]
    fn test_with_hsv_keeps_alpha() {
        let color = Color::from_hex("#ff000080").unwrap().with_hsv(240.0, 100.0, 100.0);
        assert_eq!(color.hex, "#0000ff80");
        assert_eq!(color.hsv.h, 240.0);
        assert_close(color.alpha(), 128.0 / 255.0);
    }

    #[test]
    fn test_is_dark() {
        assert!(Color::from_hex("#000").unwrap().is_dark());
        assert!(Color::from_hex("#1e1e2e").unwrap().is_dark());
        assert!(!Color::from_hex("#fff").unwrap().is_dark());
        assert!(!Color::from_hex("#f9e2af").unwrap().is_dark());
    }

    #[test]
    fn test_contrast_ratio() {
        let black = Color::from_hex("#000").unwrap();
        let white = Color::from_hex("#fff").unwrap();
        assert_close(black.contrast_ratio(&white), 21.0);
        assert_close(white.contrast_ratio(&white), 1.0);
    }

    #[test]
    fn test_parse_and_display() {
        let color: Color = "#abcdef".parse().unwrap();
        assert_eq!(color.to_string(), "#abcdef");
    }
}
