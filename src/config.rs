use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level seiswave configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SeiswaveConfig {
    /// Wavelet request.
    #[serde(default)]
    pub wavelet: WaveletToml,

    /// Output destinations.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WaveletToml {
    #[serde(default = "default_kind")]
    pub kind: String,
    /// Falls back to the per-type defaults when unset.
    #[serde(default)]
    pub frequencies: Option<Vec<f64>>,
    #[serde(default = "default_duration")]
    pub duration: f64,
    #[serde(default = "default_dt")]
    pub dt: f64,
    #[serde(default)]
    pub berlage: BerlageToml,
}

impl Default for WaveletToml {
    fn default() -> Self {
        Self {
            kind: default_kind(),
            frequencies: None,
            duration: default_duration(),
            dt: default_dt(),
            berlage: BerlageToml::default(),
        }
    }
}

fn default_kind() -> String {
    "ricker".to_string()
}
fn default_duration() -> f64 {
    0.5
}
fn default_dt() -> f64 {
    0.001
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BerlageToml {
    #[serde(default = "default_exponent")]
    pub exponent: f64,
    /// Solved from the duration when unset.
    #[serde(default)]
    pub decay: Option<f64>,
    #[serde(default)]
    pub phase: f64,
}

impl Default for BerlageToml {
    fn default() -> Self {
        Self {
            exponent: default_exponent(),
            decay: None,
            phase: 0.0,
        }
    }
}

fn default_exponent() -> f64 {
    2.0
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    pub json: Option<PathBuf>,
    pub wav: Option<PathBuf>,
}

/// Reads and parses a TOML configuration file.
pub fn load(path: &Path) -> Result<SeiswaveConfig> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config: SeiswaveConfig = toml::from_str("").unwrap();
        assert_eq!(config.wavelet.kind, "ricker");
        assert_eq!(config.wavelet.frequencies, None);
        assert_eq!(config.wavelet.duration, 0.5);
        assert_eq!(config.wavelet.dt, 0.001);
        assert_eq!(config.wavelet.berlage.exponent, 2.0);
        assert_eq!(config.wavelet.berlage.decay, None);
        assert!(config.output.json.is_none());
    }

    #[test]
    fn full_file() {
        let config: SeiswaveConfig = toml::from_str(
            r#"
            [wavelet]
            kind = "berlage"
            frequencies = [45.0]
            duration = 0.4
            dt = 0.002

            [wavelet.berlage]
            exponent = 1.5
            decay = 30.0
            phase = -1.5708

            [output]
            json = "out.json"
            wav = "out.wav"
            "#,
        )
        .unwrap();
        assert_eq!(config.wavelet.kind, "berlage");
        assert_eq!(config.wavelet.frequencies, Some(vec![45.0]));
        assert_eq!(config.wavelet.berlage.decay, Some(30.0));
        assert_eq!(config.output.wav, Some(PathBuf::from("out.wav")));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = toml::from_str::<SeiswaveConfig>("[wavelet]\nfrequency = 60.0\n").unwrap_err();
        assert!(err.to_string().contains("frequency"));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seiswave.toml");
        std::fs::write(&path, "[wavelet]\nkind = \"klauder\"\n").unwrap();
        assert_eq!(load(&path).unwrap().wavelet.kind, "klauder");
    }
}
