//! Limits command: admissible frequency range for a wavelet type.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use seiswave_synth::{LimitsResponse, frequency_limits, to_json};

use crate::cli::LimitsArgs;
use crate::convert;

/// Prints the frequency limits for `args.kind` at `args.dt` as JSON.
pub fn run(args: LimitsArgs) -> Result<()> {
    let _cmd = info_span!("limits").entered();
    let kind = convert::parse_kind(&args.kind)?;
    let limits = frequency_limits(kind, args.dt)
        .with_context(|| format!("cannot compute limits for dt = {}", args.dt))?;
    info!(
        kind = %kind,
        min = limits.min(),
        max = limits.max(),
        ordering = %limits.ordering().description(),
        "frequency limits"
    );
    println!("{}", to_json(&LimitsResponse::from(&limits))?);
    Ok(())
}
