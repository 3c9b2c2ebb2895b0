use tracing::debug;

use super::hex::{format_hex, Color};
use super::wcag::{self, parse_color, Check, Grade, WcagLevel};
use crate::error::ContrastError;
use crate::policy::ContrastPolicy;
use crate::types::{CheckStatus, ComplianceResult, ContrastReport};

pub const IDENTICAL_MESSAGE: &str =
    "Critical failure: foreground and background are the same color, text is invisible";
pub const NEAR_IDENTICAL_MESSAGE: &str =
    "Critical failure: foreground and background are nearly identical, text is unreadable";

/// Check a hex foreground/background pair. Fails atomically if either value
/// does not parse.
pub fn check_contrast(
    foreground: &str,
    background: &str,
    policy: &ContrastPolicy,
) -> Result<ContrastReport, ContrastError> {
    let fg = parse_color(foreground)?;
    let bg = parse_color(background)?;
    Ok(check_colors(fg, bg, policy))
}

/// Run the whole pipeline on two parsed colors.
pub fn check_colors(fg: Color, bg: Color, policy: &ContrastPolicy) -> ContrastReport {
    let foreground_luminance = wcag::relative_luminance(fg);
    let background_luminance = wcag::relative_luminance(bg);
    let ratio = wcag::ratio_from_luminance(foreground_luminance, background_luminance);

    let is_identical = fg == bg;
    // Open band: a distinct pair whose ratio rounds to 1.000 is a plain failure.
    let is_near_identical = !is_identical && ratio > 1.0 && ratio < policy.near_identical_below;

    let compliance = wcag::classify(ratio, policy);
    let (grade, level) = if is_identical || is_near_identical {
        (Grade::F, WcagLevel::Fail)
    } else {
        (wcag::grade(&compliance), wcag::wcag_level(ratio, policy))
    };

    let message = if is_identical {
        IDENTICAL_MESSAGE.to_string()
    } else if is_near_identical {
        NEAR_IDENTICAL_MESSAGE.to_string()
    } else {
        level_message(level)
    };

    debug!(
        fg = %fg,
        bg = %bg,
        ratio,
        grade = %grade,
        is_identical,
        is_near_identical,
        "contrast checked"
    );

    ContrastReport {
        foreground_hex: format_hex(fg),
        background_hex: format_hex(bg),
        ratio,
        foreground_luminance,
        background_luminance,
        compliance,
        checks: check_statuses(&compliance, policy),
        grade: grade.to_string(),
        level: level.to_string(),
        is_identical,
        is_near_identical,
        message,
        announcement: format!("Contrast ratio updated to {ratio:.2} to 1"),
    }
}

fn check_statuses(compliance: &ComplianceResult, policy: &ContrastPolicy) -> Vec<CheckStatus> {
    Check::ALL
        .iter()
        .map(|&check| CheckStatus {
            name: check.name().to_string(),
            threshold: policy.threshold(check),
            passed: compliance.passes(check),
            status: compliance.status(check).to_string(),
        })
        .collect()
}

fn level_message(level: WcagLevel) -> String {
    match level {
        WcagLevel::Aaa => "Passes WCAG AAA for all text sizes".to_string(),
        WcagLevel::Aa => "Passes WCAG AA; AAA requires 7:1 for normal text".to_string(),
        WcagLevel::AaLarge => {
            "Passes WCAG AA for large text and UI components only".to_string()
        }
        WcagLevel::Fail => "Fails WCAG: below 3:1 for all text sizes".to_string(),
    }
}
