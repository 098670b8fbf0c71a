//! Thruster catalog models and loaders.

use std::fs::File;
use std::path::{Path, PathBuf};

use marcyb_thrust::{PowerRating, ThrusterGeometry, ThrusterType};
use serde::Deserialize;
use thiserror::Error;

/// One thruster record from a catalog file.
#[derive(Debug, Deserialize, Clone)]
pub struct ThrusterConfig {
    pub name: String,
    pub thruster_type: ThrusterType,
    pub max_power_positive_kw: f64,
    pub max_power_negative_kw: f64,
    #[serde(default)]
    pub diameter_m: Option<f64>,
    #[serde(default)]
    pub ducted: bool,
}

impl ThrusterConfig {
    /// Power rating for the converter crate.
    pub fn power_rating(&self) -> PowerRating {
        PowerRating {
            positive_kw: self.max_power_positive_kw,
            negative_kw: self.max_power_negative_kw,
        }
    }

    /// Geometry for the ABS relationship; `None` when the record carries no
    /// diameter (tunnel and waterjet entries usually don't).
    pub fn geometry(&self) -> Option<ThrusterGeometry> {
        self.diameter_m.map(|diameter_m| ThrusterGeometry {
            diameter_m,
            ducted: self.ducted,
        })
    }
}

/// Errors that can occur while loading catalog files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load thruster records from a catalog path.
///
/// Accepts a YAML file holding a list of records, a single-record TOML file,
/// or a directory of single-record TOML files (read in path order).
pub fn load_thrusters<P: AsRef<Path>>(path: P) -> Result<Vec<ThrusterConfig>, ConfigError> {
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: ThrusterConfig = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records(dir: &Path) -> Result<Vec<ThrusterConfig>, ConfigError> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();

    let mut records = Vec::new();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        records.push(toml::from_str(&contents)?);
    }
    Ok(records)
}
