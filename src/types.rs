use napi_derive::napi;

use crate::math::wcag::Check;

/// Pass/fail per WCAG check, keyed in JS by check name (`"aa-normal"`, ...).
#[napi(object)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComplianceResult {
    #[napi(js_name = "aa-normal")]
    pub aa_normal: bool,
    #[napi(js_name = "aa-large")]
    pub aa_large: bool,
    #[napi(js_name = "aaa-normal")]
    pub aaa_normal: bool,
    #[napi(js_name = "aaa-large")]
    pub aaa_large: bool,
    #[napi(js_name = "ui-components")]
    pub ui_components: bool,
}

impl ComplianceResult {
    pub fn passes(&self, check: Check) -> bool {
        match check {
            Check::AaNormal => self.aa_normal,
            Check::AaLarge => self.aa_large,
            Check::AaaNormal => self.aaa_normal,
            Check::AaaLarge => self.aaa_large,
            Check::UiComponents => self.ui_components,
        }
    }

    /// "PASS" / "FAIL" label for one check.
    pub fn status(&self, check: Check) -> &'static str {
        if self.passes(check) {
            "PASS"
        } else {
            "FAIL"
        }
    }
}

/// One row of the compliance panel.
#[napi(object)]
#[derive(Debug, Clone, PartialEq)]
pub struct CheckStatus {
    /// "aa-normal" | "aa-large" | "aaa-normal" | "aaa-large" | "ui-components"
    pub name: String,
    pub threshold: f64,
    pub passed: bool,
    /// "PASS" | "FAIL"
    pub status: String,
}

/// Full result of checking one foreground/background pair.
#[napi(object)]
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastReport {
    /// Canonical `#RRGGBB` of the inputs
    pub foreground_hex: String,
    pub background_hex: String,
    pub ratio: f64,
    pub foreground_luminance: f64,
    pub background_luminance: f64,
    pub compliance: ComplianceResult,
    /// The five checks in fixed order, with thresholds and PASS/FAIL labels
    pub checks: Vec<CheckStatus>,
    /// "A+" | "B+" | "C" | "F"
    pub grade: String,
    /// "AAA" | "AA" | "AA Large" | "Fail"
    pub level: String,
    pub is_identical: bool,
    pub is_near_identical: bool,
    /// Human-readable verdict; identical and near-identical pairs get a
    /// critical-failure wording instead of the WCAG level.
    pub message: String,
    /// Screen-reader text, e.g. "Contrast ratio updated to 4.48 to 1"
    pub announcement: String,
}

impl ContrastReport {
    /// Identical or near-identical pair.
    pub fn is_critical(&self) -> bool {
        self.is_identical || self.is_near_identical
    }
}

/// A parsed color in every format the engine emits.
#[napi(object)]
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedColor {
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
    pub red: u32,
    pub green: u32,
    pub blue: u32,
    pub luminance: f64,
}

/// Policy overrides passed from JS to Rust. Unset fields keep WCAG defaults.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct PolicyOptions {
    pub aa_normal: Option<f64>,
    pub aa_large: Option<f64>,
    pub aaa_normal: Option<f64>,
    pub aaa_large: Option<f64>,
    pub ui_components: Option<f64>,
    pub near_identical_below: Option<f64>,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct ColorPairInput {
    /// Caller-chosen label, echoed back in the outcome
    pub id: Option<String>,
    pub foreground: String,
    pub background: String,
}

/// Batch audit input
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub pairs: Vec<ColorPairInput>,
    pub policy: Option<PolicyOptions>,
}

/// One pair of a batch audit: either a report or the reason it was rejected.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct PairOutcome {
    pub id: Option<String>,
    pub foreground: String,
    pub background: String,
    pub report: Option<ContrastReport>,
    pub error: Option<String>,
}

#[napi(object)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditSummary {
    pub total: u32,
    /// aa-normal passes
    pub passed: u32,
    pub failed: u32,
    /// identical or near-identical pairs (also counted in `failed`)
    pub critical: u32,
    pub invalid: u32,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchResult {
    pub outcomes: Vec<PairOutcome>,
    pub summary: AuditSummary,
}

#[napi(object)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub foreground: String,
    pub background: String,
}
