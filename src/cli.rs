use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Seismic source wavelet synthesizer.
#[derive(Parser)]
#[command(
    name = "seiswave",
    version,
    about = "Synthesize seismic source wavelets and their spectra"
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
    /// Generate a wavelet and its amplitude spectrum as JSON.
    Generate(GenerateArgs),
    /// Show the admissible frequency range for a wavelet type.
    Limits(LimitsArgs),
}

/// Arguments for the `generate` subcommand.
///
/// Flags override values from the configuration file.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Wavelet type: ricker, ormsby, klauder or berlage.
    #[arg(short, long)]
    pub kind: Option<String>,

    /// Frequency parameters in Hz (1 for ricker/berlage, 2 for klauder, 4 for ormsby).
    #[arg(short, long = "freq", num_args = 1.., allow_negative_numbers = true)]
    pub freq: Vec<f64>,

    /// Wavelet length in seconds.
    #[arg(long)]
    pub duration: Option<f64>,

    /// Sample interval in seconds.
    #[arg(long)]
    pub dt: Option<f64>,

    /// Berlage envelope exponent n.
    #[arg(long, allow_negative_numbers = true)]
    pub exponent: Option<f64>,

    /// Berlage decay rate alpha (1/s).
    #[arg(long, allow_negative_numbers = true)]
    pub decay: Option<f64>,

    /// Berlage phase in radians.
    #[arg(long, allow_negative_numbers = true)]
    pub phase: Option<f64>,

    /// Write the JSON response here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the peak-normalized wavelet as a WAV file.
    #[arg(long)]
    pub wav: Option<PathBuf>,
}

/// Arguments for the `limits` subcommand.
#[derive(clap::Args)]
pub struct LimitsArgs {
    /// Wavelet type: ricker, ormsby, klauder or berlage.
    #[arg(short, long, default_value = "ricker")]
    pub kind: String,

    /// Sample interval in seconds.
    #[arg(long, default_value_t = 0.001)]
    pub dt: f64,
}
