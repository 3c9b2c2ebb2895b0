use std::fmt;
use std::str::FromStr;

use crate::error::{ContrastError, ParseError};

/// An opaque sRGB color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from real-valued channels, clamped to [0,255] and
    /// rounded to the nearest integer.
    pub fn from_channels(r: f64, g: f64, b: f64) -> Result<Self, ContrastError> {
        Ok(Self {
            r: clamp_channel(r, "red")?,
            g: clamp_channel(g, "green")?,
            b: clamp_channel(b, "blue")?,
        })
    }
}

fn clamp_channel(value: f64, channel: &'static str) -> Result<u8, ContrastError> {
    if !value.is_finite() {
        return Err(ContrastError::NonFiniteChannel { channel });
    }
    Ok(value.clamp(0.0, 255.0).round() as u8)
}

/// Parse `#rgb` / `#rrggbb` (leading `#` optional, case-insensitive).
/// Anything else, surrounding whitespace included, is a [`ParseError`].
pub fn parse_hex(input: &str) -> Result<Color, ParseError> {
    let raw = input.strip_prefix('#').unwrap_or(input);

    if raw.is_empty() {
        return Err(ParseError::Empty);
    }
    if !raw.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ParseError::InvalidCharacters {
            input: input.to_string(),
        });
    }

    // All ASCII from here, so byte length == digit count.
    let expanded: String = match raw.len() {
        3 => raw.chars().flat_map(|c| [c, c]).collect(),
        6 => raw.to_string(),
        len if len < 6 => return Err(ParseError::TooShort { len }),
        len => return Err(ParseError::TooLong { len }),
    };

    let channel = |i: usize| {
        u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| ParseError::InvalidCharacters {
            input: input.to_string(),
        })
    };
    Ok(Color::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Canonical `#RRGGBB` form.
pub fn format_hex(color: Color) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b)
}

pub fn format_rgb(color: Color) -> String {
    format!("rgb({},{},{})", color.r, color.g, color.b)
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_hex(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_6digit_hex() {
        assert_eq!(parse_hex("#ff0000"), Ok(Color::new(255, 0, 0)));
        assert_eq!(parse_hex("#00ff00"), Ok(Color::new(0, 255, 0)));
        assert_eq!(parse_hex("#1e293b"), Ok(Color::new(30, 41, 59)));
    }

    #[test]
    fn hash_is_optional_and_case_insensitive() {
        assert_eq!(parse_hex("1E293B"), parse_hex("#1e293b"));
        assert_eq!(parse_hex("AbCdEf"), Ok(Color::new(0xab, 0xcd, 0xef)));
    }

    #[test]
    fn shorthand_expands_by_duplication() {
        assert_eq!(parse_hex("#f00"), parse_hex("#ff0000"));
        assert_eq!(parse_hex("#abc"), Ok(Color::new(0xaa, 0xbb, 0xcc)));
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse_hex(""), Err(ParseError::Empty));
        assert_eq!(parse_hex("#"), Err(ParseError::Empty));
    }

    #[test]
    fn whitespace_is_not_part_of_the_grammar() {
        assert!(matches!(parse_hex("   "), Err(ParseError::InvalidCharacters { .. })));
        assert!(matches!(parse_hex(" #fff "), Err(ParseError::InvalidCharacters { .. })));
        assert!(matches!(parse_hex("#fff\n"), Err(ParseError::InvalidCharacters { .. })));
    }

    #[test]
    fn invalid_characters() {
        assert!(matches!(parse_hex("#xyz"), Err(ParseError::InvalidCharacters { .. })));
        assert!(matches!(parse_hex("not-a-color"), Err(ParseError::InvalidCharacters { .. })));
        assert!(matches!(parse_hex("##fff"), Err(ParseError::InvalidCharacters { .. })));
        assert!(matches!(parse_hex("#ffé"), Err(ParseError::InvalidCharacters { .. })));
    }

    #[test]
    fn length_errors() {
        assert_eq!(parse_hex("#f"), Err(ParseError::TooShort { len: 1 }));
        assert_eq!(parse_hex("#ff"), Err(ParseError::TooShort { len: 2 }));
        assert_eq!(parse_hex("#ffff"), Err(ParseError::TooShort { len: 4 }));
        assert_eq!(parse_hex("#fffff"), Err(ParseError::TooShort { len: 5 }));
        assert_eq!(parse_hex("#ff000080"), Err(ParseError::TooLong { len: 8 }));
    }

    #[test]
    fn format_is_uppercase_canonical() {
        for input in ["#1e293b", "a1a1aa", "#FFFFFF", "#09090b"] {
            let color = parse_hex(input).unwrap();
            let expected = format!("#{}", input.trim_start_matches('#').to_uppercase());
            assert_eq!(format_hex(color), expected);
        }
    }

    #[test]
    fn format_rgb_lists_channels() {
        assert_eq!(format_rgb(Color::new(255, 0, 128)), "rgb(255,0,128)");
    }

    #[test]
    fn from_str_and_display() {
        let color: Color = "#f80".parse().unwrap();
        assert_eq!(color.to_string(), "#FF8800");
    }

    #[test]
    fn channels_clamp_and_round() {
        let c = Color::from_channels(-12.0, 127.5, 300.2).unwrap();
        assert_eq!(c, Color::new(0, 128, 255));
    }

    #[test]
    fn non_finite_channel_rejected() {
        let err = Color::from_channels(0.0, f64::NAN, 0.0).unwrap_err();
        assert!(matches!(err, ContrastError::NonFiniteChannel { channel: "green" }));
    }
}
