use serde::Deserialize;

use crate::error::ContrastError;
use crate::math::wcag::Check;
use crate::types::PolicyOptions;

/// Thresholds the classifier compares contrast ratios against.
///
/// The WCAG values are fixed by the guidelines; overriding them is meant for
/// stricter in-house rules. `near_identical_below` is an empirical UX band
/// with no standard behind it: distinct colors whose ratio lies strictly
/// between 1.0 and it are reported as a critical failure like identical ones.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ContrastPolicy {
    pub aa_normal: f64,
    pub aa_large: f64,
    pub aaa_normal: f64,
    pub aaa_large: f64,
    pub ui_components: f64,
    pub near_identical_below: f64,
}

impl Default for ContrastPolicy {
    fn default() -> Self {
        Self {
            aa_normal: 4.5,
            aa_large: 3.0,
            aaa_normal: 7.0,
            aaa_large: 4.5,
            ui_components: 3.0,
            near_identical_below: 1.1,
        }
    }
}

impl ContrastPolicy {
    pub fn threshold(&self, check: Check) -> f64 {
        match check {
            Check::AaNormal => self.aa_normal,
            Check::AaLarge => self.aa_large,
            Check::AaaNormal => self.aaa_normal,
            Check::AaaLarge => self.aaa_large,
            Check::UiComponents => self.ui_components,
        }
    }

    /// Load a (possibly partial) policy from JSON; missing keys keep defaults.
    pub fn from_json(json: &str) -> Result<Self, ContrastError> {
        let policy: Self = serde_json::from_str(json)?;
        policy.validate()
    }

    pub fn validate(self) -> Result<Self, ContrastError> {
        for check in Check::ALL {
            let t = self.threshold(check);
            if !(1.0..=21.0).contains(&t) {
                return Err(ContrastError::InvalidPolicy(format!(
                    "{} threshold {t} is outside [1, 21]",
                    check.name()
                )));
            }
        }
        if !(self.near_identical_below > 1.0 && self.near_identical_below <= 21.0) {
            return Err(ContrastError::InvalidPolicy(format!(
                "near-identical bound {} must be in (1, 21]",
                self.near_identical_below
            )));
        }
        Ok(self)
    }
}

impl TryFrom<&PolicyOptions> for ContrastPolicy {
    type Error = ContrastError;

    fn try_from(options: &PolicyOptions) -> Result<Self, Self::Error> {
        let defaults = Self::default();
        Self {
            aa_normal: options.aa_normal.unwrap_or(defaults.aa_normal),
            aa_large: options.aa_large.unwrap_or(defaults.aa_large),
            aaa_normal: options.aaa_normal.unwrap_or(defaults.aaa_normal),
            aaa_large: options.aaa_large.unwrap_or(defaults.aaa_large),
            ui_components: options.ui_components.unwrap_or(defaults.ui_components),
            near_identical_below: options
                .near_identical_below
                .unwrap_or(defaults.near_identical_below),
        }
        .validate()
    }
}

impl From<ContrastPolicy> for PolicyOptions {
    fn from(policy: ContrastPolicy) -> Self {
        Self {
            aa_normal: Some(policy.aa_normal),
            aa_large: Some(policy.aa_large),
            aaa_normal: Some(policy.aaa_normal),
            aaa_large: Some(policy.aaa_large),
            ui_components: Some(policy.ui_components),
            near_identical_below: Some(policy.near_identical_below),
        }
    }
}

/// Resolve optional JS-side options into a validated policy.
pub fn resolve(options: Option<&PolicyOptions>) -> Result<ContrastPolicy, ContrastError> {
    options.map_or_else(|| Ok(ContrastPolicy::default()), ContrastPolicy::try_from)
}
