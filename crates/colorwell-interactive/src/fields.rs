//! Text fields for typing a color in directly
//!
//! Each field shows the current color in one model and parses what the user
//! typed back into a [`Color`].

use colorwell::{Color, ColorwellError, Hsv, Result, Rgb};

/// Which color model a text field edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorField {
    Hex,
    Rgb,
    Hsv,
}

impl ColorField {
    pub const ALL: [ColorField; 3] = [ColorField::Hex, ColorField::Rgb, ColorField::Hsv];

    pub fn label(self) -> &'static str {
        match self {
            ColorField::Hex => "HEX",
            ColorField::Rgb => "RGB",
            ColorField::Hsv => "HSV",
        }
    }

    /// Text shown in the field for `color`
    pub fn format(self, color: &Color) -> String {
        match self {
            ColorField::Hex => color.hex.clone(),
            ColorField::Rgb => {
                let Rgb { r, g, b, a } = color.rgb;
                join_channels(&[r, g, b], a)
            }
            ColorField::Hsv => {
                let Hsv { h, s, v, a } = color.hsv;
                join_channels(&[h.round(), s.round(), v.round()], a)
            }
        }
    }

    /// Parse the field's text into a color
    pub fn parse(self, text: &str) -> Result<Color> {
        match self {
            ColorField::Hex => parse_hex_field(text),
            ColorField::Rgb => parse_rgb_field(text),
            ColorField::Hsv => parse_hsv_field(text),
        }
    }
}

fn join_channels(channels: &[f32], alpha: f32) -> String {
    let mut parts: Vec<String> = channels.iter().map(|c| format!("{c}")).collect();
    if alpha < 1.0 {
        parts.push(
            format!("{:.2}", alpha)
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string(),
        );
    }
    parts.join(", ")
}

/// Parse `#rrggbb`-style text
pub fn parse_hex_field(text: &str) -> Result<Color> {
    Color::from_hex(text)
        .map_err(|_| ColorwellError::InvalidField(format!("`{text}` is not a hex color")))
}

/// Parse `r, g, b` or `r, g, b, a`
pub fn parse_rgb_field(text: &str) -> Result<Color> {
    let [r, g, b, a] = parse_channels(text, [255.0, 255.0, 255.0])?;
    Ok(Color::from_rgb(Rgb::rgba(r, g, b, a)))
}

/// Parse `h, s, v` or `h, s, v, a`
pub fn parse_hsv_field(text: &str) -> Result<Color> {
    let [h, s, v, a] = parse_channels(text, [360.0, 100.0, 100.0])?;
    Ok(Color::from_hsv(Hsv::hsva(h, s, v, a)))
}

/// Split three or four comma separated numbers and range check them
fn parse_channels(text: &str, max: [f32; 3]) -> Result<[f32; 4]> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if !(3..=4).contains(&parts.len()) {
        return Err(ColorwellError::InvalidField(format!(
            "expected 3 or 4 values, got {}",
            parts.len()
        )));
    }

    let mut values = [0.0, 0.0, 0.0, 1.0];
    for (i, part) in parts.iter().enumerate() {
        let value: f32 = part
            .parse()
            .map_err(|_| ColorwellError::InvalidField(format!("`{part}` is not a number")))?;
        let limit = max.get(i).copied().unwrap_or(1.0);
        if !(0.0..=limit).contains(&value) {
            return Err(ColorwellError::InvalidField(format!(
                "{value} is outside 0..={limit}"
            )));
        }
        values[i] = value;
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb() {
        let color = parse_rgb_field("255, 128, 0").unwrap();
        assert_eq!(color.hex, "#ff8000");

        let color = parse_rgb_field(" 0,0,0 , 0.5").unwrap();
        assert_eq!(color.rgb.a, 0.5);
    }

    #[test]
    fn test_parse_hsv() {
        let color = parse_hsv_field("240, 100, 100").unwrap();
        assert_eq!(color.hex, "#0000ff");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_rgb_field("1, 2"), Err(ColorwellError::InvalidField(_))));
        assert!(matches!(parse_rgb_field("1, 2, x"), Err(ColorwellError::InvalidField(_))));
        assert!(matches!(parse_rgb_field("256, 0, 0"), Err(ColorwellError::InvalidField(_))));
        assert!(matches!(parse_hsv_field("0, 101, 0"), Err(ColorwellError::InvalidField(_))));
        assert!(matches!(parse_hsv_field("0, 0, 0, 2"), Err(ColorwellError::InvalidField(_))));
        assert!(matches!(parse_hex_field("#zzz"), Err(ColorwellError::InvalidField(_))));
    }

    #[test]
    fn test_format() {
        let color = Color::from_hex("#ff8000").unwrap();
        assert_eq!(ColorField::Hex.format(&color), "#ff8000");
        assert_eq!(ColorField::Rgb.format(&color), "255, 128, 0");
        assert_eq!(ColorField::Hsv.format(&color), "30, 100, 100");

        let translucent = color.with_alpha(0.5);
        assert_eq!(ColorField::Rgb.format(&translucent), "255, 128, 0, 0.5");
    }

    #[test]
    fn test_field_parse_dispatch() {
        let color = Color::from_hex("#ff8000").unwrap();
        for field in ColorField::ALL {
            let text = field.format(&color);
            assert_eq!(field.parse(&text).unwrap().hex, "#ff8000", "{}", field.label());
        }
    }
}
