use rayon::prelude::*;
use tracing::warn;

use crate::error::ContrastError;
use crate::math::checker::check_contrast;
use crate::policy::{self, ContrastPolicy};
use crate::types::{AuditSummary, BatchOptions, BatchResult, ColorPairInput, PairOutcome};

/// Check many color pairs in parallel for a batch accessibility audit.
///
/// Uses Rayon's `par_iter()`: each pair is an independent pure computation,
/// and outcomes come back in input order. A pair that fails to parse becomes
/// an outcome with `error` set instead of aborting the batch; only an invalid
/// policy fails the whole call.
pub fn check_pairs(options: &BatchOptions) -> Result<BatchResult, ContrastError> {
    let policy = policy::resolve(options.policy.as_ref())?;

    let outcomes: Vec<PairOutcome> = options
        .pairs
        .par_iter()
        .map(|pair| check_pair(pair, &policy))
        .collect();

    let summary = summarize(&outcomes);
    Ok(BatchResult { outcomes, summary })
}

fn check_pair(pair: &ColorPairInput, policy: &ContrastPolicy) -> PairOutcome {
    let (report, error) = match check_contrast(&pair.foreground, &pair.background, policy) {
        Ok(report) => (Some(report), None),
        Err(err) => {
            warn!(id = ?pair.id, %err, "skipping unparseable color pair");
            (None, Some(err.to_string()))
        }
    };
    PairOutcome {
        id: pair.id.clone(),
        foreground: pair.foreground.clone(),
        background: pair.background.clone(),
        report,
        error,
    }
}

fn summarize(outcomes: &[PairOutcome]) -> AuditSummary {
    let mut summary = AuditSummary {
        total: outcomes.len() as u32,
        ..Default::default()
    };
    for outcome in outcomes {
        match &outcome.report {
            None => summary.invalid += 1,
            Some(report) => {
                if report.is_critical() {
                    summary.critical += 1;
                }
                if report.compliance.aa_normal && !report.is_critical() {
                    summary.passed += 1;
                } else {
                    summary.failed += 1;
                }
            }
        }
    }
    summary
}
