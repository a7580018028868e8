// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
//
// Everything here has a sensible default for the current quadrimester, so
// running without a config file is the normal case; the file exists so the
// term boundaries can be updated once per term without rebuilding.
use crate::model::recurrence::{CivilZone, Term};
use anyhow::Result;
use chrono::{FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_term_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 2).unwrap()
}
fn default_term_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 4, 25).unwrap()
}

fn default_utc_offset() -> i32 {
    -180
}
fn default_timezone_id() -> String {
    "America/Sao_Paulo".to_string()
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Config {
    /// First and last day of classes, inclusive.
    #[serde(default = "default_term_start")]
    pub term_start: NaiveDate,
    #[serde(default = "default_term_end")]
    pub term_end: NaiveDate,

    /// Fixed civil zone class times are expressed in. São Paulo has had no
    /// DST since 2019, so a plain UTC offset is exact for the supported
    /// zone.
    #[serde(default = "default_utc_offset")]
    pub utc_offset_minutes: i32,
    #[serde(default = "default_timezone_id")]
    pub timezone_id: String,

    /// Fallback path to the extracted rooms-table document, used when
    /// --table is not given on the command line.
    #[serde(default)]
    pub table_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            term_start: default_term_start(),
            term_end: default_term_end(),
            utc_offset_minutes: default_utc_offset(),
            timezone_id: default_timezone_id(),
            table_path: None,
        }
    }
}

impl Config {
    /// Load the configuration from disk.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(anyhow::anyhow!(
                "Config file not found: {}",
                path.display()
            ));
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(path, toml_str).map_err(|e| {
            anyhow::anyhow!("Failed to write config file '{}': {}", path.display(), e)
        })?;
        Ok(())
    }

    pub fn term(&self) -> Term {
        Term {
            start: self.term_start,
            end: self.term_end,
        }
    }

    pub fn zone(&self) -> Result<CivilZone> {
        let offset = FixedOffset::east_opt(self.utc_offset_minutes * 60).ok_or_else(|| {
            anyhow::anyhow!("Invalid UTC offset: {} minutes", self.utc_offset_minutes)
        })?;
        Ok(CivilZone {
            offset,
            tzid: self.timezone_id.clone(),
        })
    }
}
