use csscolorparser::Color as CssColor;

use super::hex::{format_hex, parse_hex, Color};

/// Convert any opaque CSS color value to canonical `#RRGGBB`.
/// Handles: hex, rgb, hsl, oklch, named colors.
/// Returns None for: transparent, inherit, currentColor, translucent colors,
/// unrecognized input.
pub fn normalize_css_color(value: &str) -> Option<String> {
    let trimmed = value.trim();

    match trimmed.to_lowercase().as_str() {
        "transparent" | "inherit" | "currentcolor" | "initial" | "unset" => return None,
        _ => {}
    }

    // Hex goes through the engine's own grammar (3 or 6 digits only)
    if trimmed.starts_with('#') {
        return parse_hex(trimmed).ok().map(format_hex);
    }

    let [r, g, b, a] = trimmed.parse::<CssColor>().ok()?.to_rgba8();
    if a < 255 {
        return None;
    }
    Some(format_hex(Color::new(r, g, b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_canonicalized() {
        assert_eq!(normalize_css_color("#ff0000"), Some("#FF0000".to_string()));
        assert_eq!(normalize_css_color(" #1e293b "), Some("#1E293B".to_string()));
        assert_eq!(normalize_css_color("#f00"), Some("#FF0000".to_string()));
    }

    #[test]
    fn hex_with_alpha_rejected() {
        assert_eq!(normalize_css_color("#ff000080"), None);
        assert_eq!(normalize_css_color("#f008"), None);
    }

    #[test]
    fn rgb_comma_format() {
        assert_eq!(normalize_css_color("rgb(255, 0, 128)"), Some("#FF0080".to_string()));
    }

    #[test]
    fn rgb_space_format() {
        assert_eq!(normalize_css_color("rgb(255 0 0)"), Some("#FF0000".to_string()));
    }

    #[test]
    fn hsl_red() {
        assert_eq!(normalize_css_color("hsl(0, 100%, 50%)"), Some("#FF0000".to_string()));
    }

    #[test]
    fn named_color() {
        assert_eq!(normalize_css_color("red"), Some("#FF0000".to_string()));
        assert_eq!(normalize_css_color("White"), Some("#FFFFFF".to_string()));
    }

    #[test]
    fn translucent_rgba_rejected() {
        assert_eq!(normalize_css_color("rgba(0, 0, 0, 0.5)"), None);
    }

    #[test]
    fn keywords_return_none() {
        assert_eq!(normalize_css_color("transparent"), None);
        assert_eq!(normalize_css_color("inherit"), None);
        assert_eq!(normalize_css_color("currentColor"), None);
    }

    #[test]
    fn garbage_returns_none() {
        assert_eq!(normalize_css_color("not-a-color"), None);
    }
}
