//! Residuals command: mask, de-mean, and area-weight a gridded ensemble.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use nereus_ensemble::area_weighted_series;
use nereus_grid::{Ebus, RegionMask};
use nereus_io::{GriddedConfig, read_gridded, write_series};

use crate::cli::ResidualsArgs;
use crate::config::NereusConfig;

/// Run the residual-generation pipeline for one (EBUS, variable) subset.
pub fn run(args: ResidualsArgs) -> Result<()> {
    let _cmd = info_span!("residuals").entered();

    // 1. Config and region
    let config = NereusConfig::load(&args.config)?;
    let ebus: Ebus = args.ebus.parse()?;
    let offshore_km = args.offshore_km.unwrap_or(config.mask.offshore_km);

    info!(
        ebus = %ebus,
        var = %args.variable,
        offshore_km,
        "creating area-weighted ensemble residuals"
    );

    // 2. Gridded ensemble
    let (geometry, field) = read_gridded(&args.input, &args.variable, &GriddedConfig::default())
        .with_context(|| format!("failed to read gridded ensemble: {}", args.input.display()))?;

    // 3. Region mask, computed once and reused for every member
    let mask = RegionMask::compute(&geometry, ebus, offshore_km);
    info!(n_valid = mask.n_valid(), "region mask computed");

    // 4. Mask, remove the ensemble mean, aggregate
    let masked = field
        .masked(&mask)
        .context("failed to apply region mask to ensemble")?;
    let residuals = masked.residuals();

    let series_name = format!("{}_AW", args.variable);
    let series = area_weighted_series(&residuals, geometry.tarea(), &series_name)
        .context("area-weighted aggregation failed")?;

    // 5. Write
    let output = args
        .output
        .unwrap_or_else(|| default_output_path(&config, ebus, &args.variable, offshore_km));
    if let Some(dir) = output.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory: {}", dir.display()))?;
    }

    write_series(&output, &series, &series_name)
        .with_context(|| format!("failed to write residual series: {}", output.display()))?;
    info!(path = %output.display(), "residual series written");

    Ok(())
}

/// Conventional output name:
/// `<ebus>-<VAR>-residuals-AW-chavez-<KM>km.nc`, under `[io].output_dir`.
fn default_output_path(config: &NereusConfig, ebus: Ebus, variable: &str, offshore_km: f64) -> PathBuf {
    let file_name = format!(
        "{}-{}-residuals-AW-chavez-{}km.nc",
        ebus.code().to_lowercase(),
        variable,
        offshore_km.round() as i64
    );
    match &config.io.output_dir {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_name_matches_convention() {
        let config = NereusConfig::default();
        let path = default_output_path(&config, Ebus::California, "FG_ALT_CO2", 800.0);
        assert_eq!(
            path,
            PathBuf::from("calcs-FG_ALT_CO2-residuals-AW-chavez-800km.nc")
        );
    }

    #[test]
    fn output_name_respects_output_dir() {
        let config: NereusConfig = toml::from_str(
            r#"
            [io]
            output_dir = "/data/out"
            "#,
        )
        .expect("valid TOML");
        let path = default_output_path(&config, Ebus::Humboldt, "FG_CO2", 400.0);
        assert_eq!(
            path,
            PathBuf::from("/data/out/humcs-FG_CO2-residuals-AW-chavez-400km.nc")
        );
    }
}
