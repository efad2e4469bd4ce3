//! Generate command: synthesize a wavelet and emit it as JSON (and WAV).

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use seiswave_synth::{
    ErrorResponse, GenerateResponse, SynthError, Synthesis, WaveletSpec, synthesize, to_json,
};

use crate::cli::GenerateArgs;
use crate::config::{self, SeiswaveConfig};
use crate::convert;
use crate::wav;

/// Run the generate command.
///
/// A rejected request prints its error response as JSON on stdout and
/// exits non-zero.
pub fn run(args: GenerateArgs) -> Result<()> {
    let _cmd = info_span!("generate").entered();

    // 1. Resolve configuration: file, then flags
    let mut config = match args.config {
        Some(ref path) => config::load(path)?,
        None => SeiswaveConfig::default(),
    };
    convert::apply_generate_overrides(&mut config, &args);

    // 2. Build the request and synthesize
    let (spec, synthesis) = match build_and_synthesize(&config) {
        Ok(v) => v,
        Err(e) if e.is_caller_error() => {
            warn!(error = %e, "request rejected");
            println!("{}", rejection_json(&e)?);
            bail!("request rejected ({})", e.kind());
        }
        Err(e) => return Err(e).context("synthesis failed"),
    };
    info!(
        n_samples = synthesis.series().len(),
        peak_frequency = synthesis.spectrum().peak_frequency(),
        "wavelet synthesized"
    );

    // 3. Emit
    let json = to_json(&GenerateResponse::new(&spec, &synthesis))?;
    write_or_print(config.output.json.as_deref(), &json)?;

    if let Some(ref path) = config.output.wav {
        let playback = synthesis.playback();
        wav::write_wav(path, &playback)?;
        info!(path = %path.display(), sample_rate = playback.sample_rate(), "WAV written");
    }

    Ok(())
}

fn build_and_synthesize(config: &SeiswaveConfig) -> Result<(WaveletSpec, Synthesis), SynthError> {
    let spec = convert::build_spec(&config.wavelet)?;
    info!(
        kind = %spec.kind(),
        frequencies = ?spec.frequencies(),
        duration = spec.duration(),
        dt = spec.dt(),
        "synthesizing wavelet"
    );
    let synthesis = synthesize(&spec)?;
    Ok((spec, synthesis))
}

fn rejection_json(err: &SynthError) -> Result<String> {
    Ok(to_json(&ErrorResponse::from(err))?)
}

fn write_or_print(path: Option<&Path>, json: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            info!(path = %path.display(), "response written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
