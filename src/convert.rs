//! Pure conversion functions: TOML config structs -> library request types.

use anyhow::{Context, Result};

use seiswave_synth::{BerlageEnvelope, SynthError, Wavelet, WaveletKind, WaveletSpec};

use crate::cli::GenerateArgs;
use crate::config::{BerlageToml, SeiswaveConfig, WaveletToml};

/// Parses a wavelet type name.
pub fn parse_kind(s: &str) -> Result<WaveletKind> {
    WaveletKind::from_name(s).with_context(|| {
        format!("unknown wavelet type {s:?} (expected ricker, ormsby, klauder or berlage)")
    })
}

/// Frequencies used when none are configured.
pub fn default_frequencies(kind: WaveletKind) -> Vec<f64> {
    match kind {
        WaveletKind::Ricker | WaveletKind::Berlage => vec![60.0],
        WaveletKind::Ormsby => vec![30.0, 40.0, 90.0, 100.0],
        WaveletKind::Klauder => vec![40.0, 90.0],
    }
}

/// Applies `generate` command-line flags on top of the file configuration.
///
/// Changing the type without giving frequencies drops configured
/// frequencies, since they belong to the old type.
pub fn apply_generate_overrides(config: &mut SeiswaveConfig, args: &GenerateArgs) {
    let w = &mut config.wavelet;
    if let Some(ref kind) = args.kind
        && !kind.eq_ignore_ascii_case(&w.kind)
    {
        w.kind = kind.clone();
        w.frequencies = None;
    }
    if !args.freq.is_empty() {
        w.frequencies = Some(args.freq.clone());
    }
    if let Some(d) = args.duration {
        w.duration = d;
    }
    if let Some(dt) = args.dt {
        w.dt = dt;
    }
    if let Some(n) = args.exponent {
        w.berlage.exponent = n;
    }
    if let Some(a) = args.decay {
        w.berlage.decay = Some(a);
    }
    if let Some(p) = args.phase {
        w.berlage.phase = p;
    }
    if args.output.is_some() {
        config.output.json = args.output.clone();
    }
    if args.wav.is_some() {
        config.output.wav = args.wav.clone();
    }
}

/// Builds a [`BerlageEnvelope`] from the TOML Berlage section.
pub fn build_envelope(b: &BerlageToml) -> BerlageEnvelope {
    let mut env = BerlageEnvelope::new()
        .with_exponent(b.exponent)
        .with_phase(b.phase);
    if let Some(a) = b.decay {
        env = env.with_decay(a);
    }
    env
}

/// Builds a [`WaveletSpec`] from the TOML wavelet section.
///
/// Only the shape of the request is checked here; value checks happen
/// during synthesis. An unknown type or a wrong number of frequencies is
/// [`SynthError::InvalidSpecification`], the same as any other malformed
/// request.
pub fn build_spec(w: &WaveletToml) -> Result<WaveletSpec, SynthError> {
    let kind = WaveletKind::from_name(&w.kind)?;
    let freqs = w
        .frequencies
        .clone()
        .unwrap_or_else(|| default_frequencies(kind));
    let wavelet = match Wavelet::from_frequencies(kind, &freqs)? {
        Wavelet::Berlage { frequency, .. } => {
            Wavelet::berlage_with(frequency, build_envelope(&w.berlage))
        }
        other => other,
    };
    Ok(WaveletSpec::new(wavelet, w.duration, w.dt))
}
