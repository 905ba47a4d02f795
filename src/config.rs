// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Tallyboard", "tallyboard"));

pub const CONFIG_DIR_ENV: &str = "TALLYBOARD_CONFIG_DIR";
pub const DATA_ENV: &str = "TALLYBOARD_DATA";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// JSON snapshot used when no path is given on the command line.
    #[serde(default)]
    pub data_path: Option<PathBuf>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: None,
            log_level: default_log_level(),
        }
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(APP.0, APP.1, APP.2).context("Could not determine platform-specific dirs")
}

pub fn config_dir() -> Result<PathBuf> {
    if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(custom));
    }
    Ok(project_dirs()?.config_dir().to_path_buf())
}

pub fn settings_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("settings.json"))
}

pub fn default_data_path() -> Result<PathBuf> {
    Ok(project_dirs()?.data_dir().join("snapshot.json"))
}

impl Settings {
    /// Reads settings from `path`; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)
            .with_context(|| format!("Read settings at {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("Parse settings at {}", path.display()))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&settings_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).context("Failed to create config dir")?;
        }
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_string_pretty(self)?)?;
        fs::rename(&tmp, path)
            .with_context(|| format!("Write settings at {}", path.display()))?;
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&settings_path()?)
    }

    /// Snapshot location: explicit flag, then `TALLYBOARD_DATA`, then the
    /// saved setting, then the platform data dir.
    pub fn resolve_data_path(&self, flag: Option<&Path>) -> Result<PathBuf> {
        if let Some(p) = flag {
            return Ok(p.to_path_buf());
        }
        if let Ok(p) = std::env::var(DATA_ENV) {
            return Ok(PathBuf::from(p));
        }
        if let Some(p) = &self.data_path {
            return Ok(p.clone());
        }
        default_data_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let s = Settings::load_from(&dir.path().join("nope.json")).unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.log_level, "warn");
    }

    #[test]
    fn save_then_load_keeps_data_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let s = Settings {
            data_path: Some(PathBuf::from("/tmp/snap.json")),
            log_level: "debug".into(),
        };
        s.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), s);
    }

    #[test]
    fn flag_wins_over_saved_path() {
        let s = Settings {
            data_path: Some(PathBuf::from("saved.json")),
            ..Settings::default()
        };
        let p = s.resolve_data_path(Some(Path::new("flag.json"))).unwrap();
        assert_eq!(p, PathBuf::from("flag.json"));
    }
}
