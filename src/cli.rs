use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Nereus EBUS ensemble analysis toolkit.
#[derive(Parser)]
#[command(
    name = "nereus",
    version,
    about = "Ensemble residual and climate-index correlation analysis for upwelling systems"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Mask a gridded ensemble and write area-weighted residual series.
    Residuals(ResidualsArgs),
    /// Correlate residual series with a climate index, member by member.
    Correlate(CorrelateArgs),
}

/// Arguments for the `residuals` subcommand.
#[derive(clap::Args)]
pub struct ResidualsArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "nereus.toml")]
    pub config: PathBuf,

    /// Gridded ensemble NetCDF file for one (EBUS, variable) subset.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Upwelling system code (CalCS, CanCS, BenCS, HumCS).
    #[arg(short, long)]
    pub ebus: String,

    /// Variable to process (e.g. FG_CO2, FG_ALT_CO2).
    #[arg(long = "var")]
    pub variable: String,

    /// Override the offshore distance threshold (km) from config.
    #[arg(long)]
    pub offshore_km: Option<f64>,

    /// Override the output NetCDF path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `correlate` subcommand.
#[derive(clap::Args)]
pub struct CorrelateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "nereus.toml")]
    pub config: PathBuf,

    /// Predictor (climate index) NetCDF file.
    #[arg(long = "x")]
    pub x_path: PathBuf,

    /// Predictor variable name (e.g. npgo, pdo, pc).
    #[arg(long)]
    pub x_var: String,

    /// EOF mode index when the predictor variable has a mode dimension
    /// (EOF1 is mode 0).
    #[arg(long)]
    pub mode: Option<usize>,

    /// Response (area-weighted residuals) NetCDF file.
    #[arg(long = "y")]
    pub y_path: PathBuf,

    /// Response variable name (e.g. FG_CO2_AW).
    #[arg(long)]
    pub y_var: String,

    /// Upwelling system code, used for the output file name.
    #[arg(short, long)]
    pub ebus: String,

    /// Time steps to lag the response behind the predictor (0 = no lag).
    #[arg(long, default_value_t = 0)]
    pub lag: usize,

    /// Moving-average window in time steps (0 = no smoothing).
    #[arg(long, default_value_t = 0)]
    pub smooth: usize,

    /// Override the output NetCDF path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
