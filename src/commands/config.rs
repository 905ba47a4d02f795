// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::utils::pretty_table;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub fn handle(settings_path: &Path, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => {
            let s = Settings::load_from(settings_path)?;
            let data_path = s
                .data_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(default)".into());
            let rows = vec![
                vec!["settings file".into(), settings_path.display().to_string()],
                vec!["data_path".into(), data_path],
                vec!["log_level".into(), s.log_level],
            ];
            println!("{}", pretty_table(&["Key", "Value"], rows));
        }
        Some(("set-data", sub)) => {
            let path = sub.get_one::<PathBuf>("path").unwrap();
            let mut s = Settings::load_from(settings_path)?;
            s.data_path = Some(path.clone());
            s.save_to(settings_path)?;
            println!("Default snapshot set to {}", path.display());
        }
        _ => {}
    }
    Ok(())
}
