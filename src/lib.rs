#[macro_use]
extern crate napi_derive;

pub mod engine;
pub mod error;
pub mod history;
pub mod math;
pub mod policy;
pub mod types;

use math::hex::{format_hex, format_rgb, parse_hex, Color};
use math::wcag::parse_color;
use types::{BatchOptions, BatchResult, ContrastReport, HistoryEntry, ParsedColor, PolicyOptions};

#[napi]
pub fn health_check() -> String {
    "contrast-engine-native ok".to_string()
}

/// Parse a hex color and return it in every supported format.
#[napi(js_name = "parseColor")]
pub fn parse_color_value(input: String) -> napi::Result<ParsedColor> {
    Ok(describe(parse_hex(&input)?))
}

/// Same as `parseColor` for numeric channels from a color picker; values are
/// clamped to [0,255] and rounded.
#[napi]
pub fn parse_channels(red: f64, green: f64, blue: f64) -> napi::Result<ParsedColor> {
    Ok(describe(Color::from_channels(red, green, blue)?))
}

fn describe(color: Color) -> ParsedColor {
    ParsedColor {
        hex: format_hex(color),
        rgb: format_rgb(color),
        hsl: math::hsl::format_hsl(color),
        red: u32::from(color.r),
        green: u32::from(color.g),
        blue: u32::from(color.b),
        luminance: math::wcag::relative_luminance(color),
    }
}

/// Validate a JSON policy document and return it with defaults filled in,
/// ready to pass as `policy` to `checkContrast` / `checkPairs`.
#[napi]
pub fn load_policy(json: String) -> napi::Result<PolicyOptions> {
    Ok(policy::ContrastPolicy::from_json(&json)?.into())
}

#[napi]
pub fn relative_luminance(hex: String) -> napi::Result<f64> {
    Ok(math::wcag::relative_luminance_hex(&hex)?)
}

#[napi]
pub fn contrast_ratio(foreground: String, background: String) -> napi::Result<f64> {
    Ok(math::wcag::contrast_ratio_hex(&foreground, &background)?)
}

/// Main entry point for the presentation layer: full report for one pair.
#[napi]
pub fn check_contrast(
    foreground: String,
    background: String,
    policy: Option<PolicyOptions>,
) -> napi::Result<ContrastReport> {
    let policy = policy::resolve(policy.as_ref())?;
    Ok(math::checker::check_contrast(&foreground, &background, &policy)?)
}

#[napi]
pub fn check_pairs(options: BatchOptions) -> napi::Result<BatchResult> {
    Ok(engine::check_pairs(&options)?)
}

/// Convert any opaque CSS color to `#RRGGBB`, or null.
#[napi]
pub fn normalize_color(value: String) -> Option<String> {
    math::color_parse::normalize_css_color(&value)
}

/// Suggest a foreground reaching `target` (default 4.5) against `background`.
#[napi]
pub fn suggest_foreground(
    foreground: String,
    background: String,
    target: Option<f64>,
) -> napi::Result<Option<String>> {
    let fg = parse_color(&foreground)?;
    let bg = parse_color(&background)?;
    let target = target.unwrap_or(policy::ContrastPolicy::default().aa_normal);
    Ok(math::suggest::suggest_foreground(fg, bg, target)?.map(format_hex))
}

/// JS handle on a bounded, de-duplicated color history.
#[napi(js_name = "ColorHistory")]
pub struct JsColorHistory {
    inner: history::ColorHistory,
}

#[napi]
impl JsColorHistory {
    #[napi(constructor)]
    pub fn new(capacity: Option<u32>) -> Self {
        let capacity = capacity.map_or(history::DEFAULT_CAPACITY, |c| c as usize);
        Self {
            inner: history::ColorHistory::with_capacity(capacity),
        }
    }

    #[napi]
    pub fn record(&mut self, foreground: String, background: String) -> napi::Result<()> {
        Ok(self.inner.record(&foreground, &background)?)
    }

    #[napi]
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.inner.entries().cloned().collect()
    }

    #[napi(getter)]
    pub fn length(&self) -> u32 {
        self.inner.len() as u32
    }

    #[napi]
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_color_reports_all_formats() {
        let parsed = parse_color_value("#f00".to_string()).unwrap();
        assert_eq!(parsed.hex, "#FF0000");
        assert_eq!(parsed.rgb, "rgb(255,0,0)");
        assert_eq!(parsed.hsl, "hsl(0,100%,50%)");
        assert_eq!((parsed.red, parsed.green, parsed.blue), (255, 0, 0));
        assert_eq!(parsed.luminance, 0.2126);
    }

    #[test]
    fn parse_errors_surface_as_invalid_arg() {
        let err = parse_color_value("#abcd".to_string()).unwrap_err();
        assert_eq!(err.status, napi::Status::InvalidArg);
        assert!(err.reason.starts_with("incomplete"), "{}", err.reason);
    }

    #[test]
    fn parse_channels_clamps_to_byte_range() {
        let parsed = parse_channels(-5.0, 127.6, 999.0).unwrap();
        assert_eq!(parsed.hex, "#0080FF");
        assert!(parse_channels(f64::NAN, 0.0, 0.0).is_err());
    }

    #[test]
    fn load_policy_fills_defaults() {
        let options = load_policy(r#"{"aaaNormal": 8}"#.to_string()).unwrap();
        assert_eq!(options.aaa_normal, Some(8.0));
        assert_eq!(options.aa_normal, Some(4.5));
        let err = load_policy("{not json".to_string()).unwrap_err();
        assert_eq!(err.status, napi::Status::InvalidArg);
    }

    #[test]
    fn suggest_rejects_nan_target() {
        let err = suggest_foreground("#777".to_string(), "#fff".to_string(), Some(f64::NAN))
            .unwrap_err();
        assert_eq!(err.status, napi::Status::InvalidArg);
    }

    #[test]
    fn check_contrast_with_policy_override() {
        let policy = PolicyOptions {
            aa_normal: Some(4.4),
            ..Default::default()
        };
        let report =
            check_contrast("#777777".to_string(), "#ffffff".to_string(), Some(policy)).unwrap();
        assert!(report.compliance.aa_normal);
        assert_eq!(report.grade, "B+");
    }

    #[test]
    fn suggest_defaults_to_aa_normal() {
        let hex = suggest_foreground("#777777".to_string(), "#ffffff".to_string(), None)
            .unwrap()
            .unwrap();
        assert!(contrast_ratio(hex, "#ffffff".to_string()).unwrap() >= 4.5);
    }

    #[test]
    fn history_handle_records_canonical_pairs() {
        let mut history = JsColorHistory::new(Some(2));
        history.record("#000".to_string(), "#fff".to_string()).unwrap();
        history.record("#111".to_string(), "#fff".to_string()).unwrap();
        history.record("#222".to_string(), "#fff".to_string()).unwrap();
        assert_eq!(history.length(), 2);
        assert_eq!(history.entries()[0].foreground, "#222222");
        assert!(history.record("nope".to_string(), "#fff".to_string()).is_err());
    }
}
