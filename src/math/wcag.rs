use std::fmt;

use super::hex::{parse_hex, Color};
use crate::error::ContrastError;
use crate::policy::ContrastPolicy;
use crate::types::ComplianceResult;

/// Round to `decimals` places. Used to pin luminance and ratio values so that
/// threshold comparisons are reproducible.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Convert sRGB channel (0-255) to linear light value.
/// sRGB -> linear: if V <= 0.04045: V/12.92, else ((V+0.055)/1.055)^2.4
pub fn srgb_to_linear(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Calculate relative luminance per WCAG 2.x, rounded to 6 decimals.
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn relative_luminance(color: Color) -> f64 {
    let l = 0.2126 * srgb_to_linear(color.r)
        + 0.7152 * srgb_to_linear(color.g)
        + 0.0722 * srgb_to_linear(color.b);
    round_to(l, 6)
}

/// Ratio of two luminances, lighter over darker, rounded to 3 decimals.
pub fn ratio_from_luminance(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    round_to((lighter + 0.05) / (darker + 0.05), 3)
}

/// Calculate WCAG contrast ratio between two colors.
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    ratio_from_luminance(relative_luminance(a), relative_luminance(b))
}

/// String-level entry point: both values must satisfy the hex grammar.
pub fn contrast_ratio_hex(hex1: &str, hex2: &str) -> Result<f64, ContrastError> {
    Ok(contrast_ratio(parse_color(hex1)?, parse_color(hex2)?))
}

pub fn relative_luminance_hex(hex: &str) -> Result<f64, ContrastError> {
    Ok(relative_luminance(parse_color(hex)?))
}

pub(crate) fn parse_color(input: &str) -> Result<Color, ContrastError> {
    parse_hex(input).map_err(|e| ContrastError::invalid_color(input, e))
}

/// The five WCAG contrast checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Check {
    AaNormal,
    AaLarge,
    AaaNormal,
    AaaLarge,
    UiComponents,
}

impl Check {
    pub const ALL: [Check; 5] = [
        Check::AaNormal,
        Check::AaLarge,
        Check::AaaNormal,
        Check::AaaLarge,
        Check::UiComponents,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Check::AaNormal => "aa-normal",
            Check::AaLarge => "aa-large",
            Check::AaaNormal => "aaa-normal",
            Check::AaaLarge => "aaa-large",
            Check::UiComponents => "ui-components",
        }
    }
}

/// Determine pass/fail for all WCAG thresholds (closed below: `ratio >= t`).
pub fn classify(ratio: f64, policy: &ContrastPolicy) -> ComplianceResult {
    let pass = |check| ratio >= policy.threshold(check);
    ComplianceResult {
        aa_normal: pass(Check::AaNormal),
        aa_large: pass(Check::AaLarge),
        aaa_normal: pass(Check::AaaNormal),
        aaa_large: pass(Check::AaaLarge),
        ui_components: pass(Check::UiComponents),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    APlus,
    BPlus,
    C,
    F,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Grade::APlus => "A+",
            Grade::BPlus => "B+",
            Grade::C => "C",
            Grade::F => "F",
        })
    }
}

/// Letter grade by priority: aaa-normal, then aa-normal, then aa-large.
pub fn grade(compliance: &ComplianceResult) -> Grade {
    if compliance.aaa_normal {
        Grade::APlus
    } else if compliance.aa_normal {
        Grade::BPlus
    } else if compliance.aa_large {
        Grade::C
    } else {
        Grade::F
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WcagLevel {
    Aaa,
    Aa,
    AaLarge,
    Fail,
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WcagLevel::Aaa => "AAA",
            WcagLevel::Aa => "AA",
            WcagLevel::AaLarge => "AA Large",
            WcagLevel::Fail => "Fail",
        })
    }
}

/// Highest level a ratio reaches for text.
pub fn wcag_level(ratio: f64, policy: &ContrastPolicy) -> WcagLevel {
    if ratio >= policy.aaa_normal {
        WcagLevel::Aaa
    } else if ratio >= policy.aa_normal {
        WcagLevel::Aa
    } else if ratio >= policy.aa_large {
        WcagLevel::AaLarge
    } else {
        WcagLevel::Fail
    }
}
