//! Optional TOML settings file for the plotting commands.
//!
//! Every key is optional; unset keys fall back to the library defaults, and
//! CLI flags take precedence over anything read here.

use crate::error::{CliError, Result};
use hydrosite::analysis::enbr::EnbrConfig;
use hydrosite::analysis::rtheta::RthetaConfig;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub enbr: FileEnbrConfig,
    #[serde(default)]
    pub rtheta: FileRthetaConfig,
}

impl FileConfig {
    /// Rejects windows that invert once file values are merged with defaults.
    fn validate(&self) -> Result<()> {
        let enbr = EnbrConfig::default();
        let x_low = self.enbr.x_low.unwrap_or(enbr.x_low);
        let x_high = self.enbr.x_high.unwrap_or(enbr.x_high);
        if x_low >= x_high {
            return Err(CliError::InvalidWindow {
                section: "enbr",
                low_key: "x-low",
                high_key: "x-high",
                low: x_low,
                high: x_high,
            });
        }

        let rtheta = RthetaConfig::default();
        let r_min = self.rtheta.r_min.unwrap_or(rtheta.r_min);
        let r_max = self.rtheta.r_max.unwrap_or(rtheta.r_max);
        if r_min >= r_max {
            return Err(CliError::InvalidWindow {
                section: "rtheta",
                low_key: "r-min",
                high_key: "r-max",
                low: r_min,
                high: r_max,
            });
        }
        Ok(())
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileEnbrConfig {
    #[serde(rename = "x-low")]
    pub x_low: Option<f64>,
    #[serde(rename = "x-high")]
    pub x_high: Option<f64>,
    #[serde(rename = "grid-points")]
    pub grid_points: Option<usize>,
}

impl From<FileEnbrConfig> for EnbrConfig {
    fn from(f: FileEnbrConfig) -> Self {
        let mut builder = EnbrConfig::builder();
        if let Some(v) = f.x_low {
            builder = builder.x_low(v);
        }
        if let Some(v) = f.x_high {
            builder = builder.x_high(v);
        }
        if let Some(v) = f.grid_points {
            builder = builder.grid_points(v);
        }
        builder.build()
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileRthetaConfig {
    #[serde(rename = "theta-max")]
    pub theta_max: Option<f64>,
    #[serde(rename = "theta-points")]
    pub theta_points: Option<usize>,
    #[serde(rename = "r-min")]
    pub r_min: Option<f64>,
    #[serde(rename = "r-max")]
    pub r_max: Option<f64>,
    #[serde(rename = "r-points")]
    pub r_points: Option<usize>,
    #[serde(rename = "shell-width")]
    pub shell_width: Option<f64>,
}

impl From<FileRthetaConfig> for RthetaConfig {
    fn from(f: FileRthetaConfig) -> Self {
        let mut builder = RthetaConfig::builder();
        if let Some(v) = f.theta_max {
            builder = builder.theta_max(v);
        }
        if let Some(v) = f.theta_points {
            builder = builder.theta_points(v);
        }
        if let Some(v) = f.r_min {
            builder = builder.r_min(v);
        }
        if let Some(v) = f.r_max {
            builder = builder.r_max(v);
        }
        if let Some(v) = f.r_points {
            builder = builder.r_points(v);
        }
        if let Some(v) = f.shell_width {
            builder = builder.shell_width(v);
        }
        builder.build()
    }
}

/// Loads the settings file when given, library defaults otherwise.
pub fn load(path: Option<&Path>) -> Result<FileConfig> {
    let Some(path) = path else {
        return Ok(FileConfig::default());
    };
    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content).map_err(|source| CliError::ConfigParsing {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    debug!("Loaded settings from '{}': {:?}", path.display(), config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_when_no_file_is_given() {
        let config = load(None).unwrap();
        let enbr: EnbrConfig = config.enbr.into();
        assert_eq!(enbr, EnbrConfig::default());
        let rtheta: RthetaConfig = config.rtheta.into();
        assert_eq!(rtheta, RthetaConfig::default());
    }

    #[test]
    fn partial_file_overrides_only_named_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            "[enbr]\nx-high = 6.0\n\n[rtheta]\nr-points = 81\nshell-width = 0.05\n"
        )
        .unwrap();

        let config = load(Some(&path)).unwrap();
        let enbr: EnbrConfig = config.enbr.into();
        assert_eq!(enbr.x_low, -5.0);
        assert_eq!(enbr.x_high, 6.0);
        let rtheta: RthetaConfig = config.rtheta.into();
        assert_eq!(rtheta.r_points, 81);
        assert_eq!(rtheta.shell_width, 0.05);
        assert_eq!(rtheta.theta_points, 131);
    }

    #[test]
    fn inverted_energy_window_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[enbr]\nx-low = 4.0\nx-high = -2.0\n").unwrap();
        assert!(matches!(
            load(Some(&path)),
            Err(CliError::InvalidWindow {
                section: "enbr",
                ..
            })
        ));
    }

    #[test]
    fn radial_window_is_checked_against_defaults() {
        // r-max defaults to 6.0, so a lone r-min above it still inverts.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[rtheta]\nr-min = 10.0\n").unwrap();
        assert!(matches!(
            load(Some(&path)),
            Err(CliError::InvalidWindow {
                section: "rtheta",
                low_key: "r-min",
                ..
            })
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[enbr]\nbandwidth = 1.0\n").unwrap();
        assert!(matches!(
            load(Some(&path)),
            Err(CliError::ConfigParsing { .. })
        ));
    }
}
