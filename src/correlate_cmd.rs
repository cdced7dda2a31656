//! Correlate command: residual series against a climate index, per member.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use nereus_ensemble::ScalarSeries;
use nereus_grid::Ebus;
use nereus_io::{read_index, write_records};
use nereus_pipeline::{CorrelateConfig, correlate_ensemble};

use crate::cli::CorrelateArgs;
use crate::config::NereusConfig;

/// Run the ensemble correlation pipeline.
pub fn run(args: CorrelateArgs) -> Result<()> {
    let _cmd = info_span!("correlate").entered();

    // 1. Config and region
    let config = NereusConfig::load(&args.config)?;
    let ebus: Ebus = args.ebus.parse()?;

    info!(
        x = %args.x_var,
        y = %args.y_var,
        ebus = %ebus,
        lag = args.lag,
        smooth = args.smooth,
        "running regional regressions"
    );

    // 2. Predictor and response series
    let xs = read_index(&args.x_path, &args.x_var, args.mode)
        .with_context(|| format!("failed to read predictor: {}", args.x_path.display()))?;
    let ys = read_index(&args.y_path, &args.y_var, None)
        .with_context(|| format!("failed to read response: {}", args.y_path.display()))?;

    // Tag roles for correlation bookkeeping.
    let xs: Vec<ScalarSeries> = xs.iter().map(|s| s.renamed("x")).collect();
    let ys: Vec<ScalarSeries> = ys.iter().map(|s| s.renamed("y")).collect();

    // 3. Per-member correlation
    let correlate_config = CorrelateConfig::new()
        .with_lag(args.lag)
        .with_smooth(args.smooth)
        .with_min_overlap(config.correlate.min_overlap);
    let records =
        correlate_ensemble(&xs, &ys, &correlate_config).context("ensemble correlation failed")?;

    info!(
        n_members = records.len(),
        n_missing = records.iter().filter(|r| r.is_missing()).count(),
        "finished regional correlations"
    );

    // 4. Write
    let output = args
        .output
        .unwrap_or_else(|| default_output_path(&config, &args, ebus));
    if let Some(dir) = output.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory: {}", dir.display()))?;
    }

    write_records(&output, &records)
        .with_context(|| format!("failed to write correlation records: {}", output.display()))?;
    info!(path = %output.display(), "correlation records written");

    Ok(())
}

/// Conventional output name:
/// `<X>.<Y>.<EBUS>.{smoothed<S>|unsmoothed}.area_weighted_regional_regression.lag<L>.nc`.
fn default_output_path(config: &NereusConfig, args: &CorrelateArgs, ebus: Ebus) -> PathBuf {
    let smoothing = if args.smooth != 0 {
        format!("smoothed{}", args.smooth)
    } else {
        "unsmoothed".to_string()
    };
    let file_name = format!(
        "{}.{}.{}.{}.area_weighted_regional_regression.lag{}.nc",
        args.x_var,
        args.y_var,
        ebus.code(),
        smoothing,
        args.lag
    );
    match &config.io.output_dir {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}
