//! # nereus-pipeline
//!
//! Per-ensemble correlation orchestration: pair predictor (`x`) and
//! response (`y`) scalar series by member identity, align each pair with
//! the configured lag and smoothing, run the autocorrelation-corrected
//! correlation test, and collect one [`CorrelationRecord`] per member.
//!
//! Members are independent, so the per-member work runs on a rayon thread
//! pool; the output preserves the response collection's member order
//! regardless of completion order, since downstream consumers reattach
//! member metadata positionally.
//!
//! A member whose pair cannot be aligned or whose statistics are
//! degenerate (zero variance after smoothing, say) is recorded with NaN
//! sentinels and the run continues: one bad member must not invalidate 33
//! good ones. Mismatched member sets, by contrast, are a configuration
//! error and abort the run.
//!
//! # Quick start
//!
//! ```
//! use nereus_ensemble::ScalarSeries;
//! use nereus_pipeline::{CorrelateConfig, correlate_ensemble};
//!
//! let xv = vec![0.0, 1.0, 0.5, 2.0, 1.5, 3.0];
//! let yv: Vec<f64> = xv.iter().map(|v| 2.0 * v).collect();
//! let x = ScalarSeries::new("000", "x", xv);
//! let y = ScalarSeries::new("000", "y", yv);
//!
//! let records = correlate_ensemble(&[x], &[y], &CorrelateConfig::new()).unwrap();
//! assert_eq!(records.len(), 1);
//! assert!(!records[0].is_missing());
//! assert!((records[0].slope() - 2.0).abs() < 1e-12);
//! ```

mod config;
mod error;
mod record;

use std::collections::BTreeMap;

use rayon::prelude::*;
use tracing::{debug, warn};

use nereus_align::{AlignConfig, align};
use nereus_ensemble::ScalarSeries;
use nereus_stats::{corrected_pearson, ols_slope};

pub use config::CorrelateConfig;
pub use error::PipelineError;
pub use record::CorrelationRecord;

/// Correlates predictor and response series member-by-member.
///
/// Records appear in the response collection's member order.
///
/// # Errors
///
/// Returns [`PipelineError::MemberCountMismatch`],
/// [`PipelineError::DuplicateMember`], or [`PipelineError::MissingMember`]
/// when the two collections do not describe the same ensemble. Per-member
/// statistical failures do not error; they produce NaN-sentinel records.
pub fn correlate_ensemble(
    xs: &[ScalarSeries],
    ys: &[ScalarSeries],
    config: &CorrelateConfig,
) -> Result<Vec<CorrelationRecord>, PipelineError> {
    if xs.len() != ys.len() {
        return Err(PipelineError::MemberCountMismatch {
            x: xs.len(),
            y: ys.len(),
        });
    }

    let mut by_member: BTreeMap<&str, &ScalarSeries> = BTreeMap::new();
    for x in xs {
        if by_member.insert(x.member(), x).is_some() {
            return Err(PipelineError::DuplicateMember {
                member: x.member().to_string(),
                location: "predictor".to_string(),
            });
        }
    }
    let mut seen: Vec<&str> = Vec::with_capacity(ys.len());
    for y in ys {
        if seen.contains(&y.member()) {
            return Err(PipelineError::DuplicateMember {
                member: y.member().to_string(),
                location: "response".to_string(),
            });
        }
        seen.push(y.member());
        if !by_member.contains_key(y.member()) {
            return Err(PipelineError::MissingMember {
                member: y.member().to_string(),
                location: "predictor".to_string(),
            });
        }
    }

    let align_config = config.align_config();
    let records: Vec<CorrelationRecord> = ys
        .par_iter()
        .map(|y| correlate_member(by_member[y.member()], y, &align_config))
        .collect();

    Ok(records)
}

/// Aligns and correlates one member's pair.
fn correlate_member(
    x: &ScalarSeries,
    y: &ScalarSeries,
    align_config: &AlignConfig,
) -> CorrelationRecord {
    let pair = match align(x.values(), y.values(), align_config) {
        Ok(pair) => pair,
        Err(e) => {
            warn!(member = %y.member(), error = %e, "alignment failed, recording missing member");
            return CorrelationRecord::missing(y.member());
        }
    };

    match (
        ols_slope(pair.x(), pair.y()),
        corrected_pearson(pair.x(), pair.y()),
    ) {
        (Some(slope), Some(test)) => {
            debug!(
                member = %y.member(),
                r = test.r(),
                n_eff = test.n_eff(),
                "member correlated"
            );
            CorrelationRecord::new(y.member(), slope, test.r(), test.p_value(), test.n_eff())
        }
        _ => {
            warn!(member = %y.member(), "degenerate statistics, recording missing member");
            CorrelationRecord::missing(y.member())
        }
    }
}
