// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use anyhow::{Context, Result};

use tallyboard::clock::{Clock, FixedClock, SystemClock};
use tallyboard::config::{self, Settings};
use tallyboard::snapshot::{self, Snapshot};
use tallyboard::{cli, commands, logging, utils};

fn load_snapshot(matches: &clap::ArgMatches, settings: &Settings) -> Result<Snapshot> {
    if let (Some(txs), Some(cats)) = (
        matches.get_one::<PathBuf>("transactions"),
        matches.get_one::<PathBuf>("categories"),
    ) {
        return snapshot::load_csv(txs, cats)
            .with_context(|| format!("Load CSV snapshot {} + {}", txs.display(), cats.display()));
    }
    let path = settings.resolve_data_path(matches.get_one::<PathBuf>("data").map(|p| p.as_path()))?;
    snapshot::load_json(&path).with_context(|| format!("Load snapshot {}", path.display()))
}

fn main() -> Result<()> {
    let settings_path = config::settings_path()?;
    let settings = Settings::load_from(&settings_path)?;
    logging::init_tracing(&settings.log_level);

    let matches = cli::build_cli().get_matches();

    if let Some(("config", sub)) = matches.subcommand() {
        return commands::config::handle(&settings_path, sub);
    }

    let clock: Box<dyn Clock> = match matches.get_one::<String>("today") {
        Some(s) => Box::new(FixedClock(utils::parse_date(s)?)),
        None => Box::new(SystemClock),
    };
    let today = clock.today();

    match matches.subcommand() {
        Some((name, sub)) => {
            let snapshot = load_snapshot(&matches, &settings)?;
            match name {
                "dashboard" => commands::dashboard::handle(&snapshot, today, sub)?,
                "report" => commands::reports::handle(&snapshot, today, sub)?,
                "tx" => commands::transactions::handle(&snapshot, sub)?,
                "category" => commands::categories::handle(&snapshot, sub)?,
                "export" => commands::exporter::handle(&snapshot, today, sub)?,
                "doctor" => commands::doctor::handle(&snapshot)?,
                _ => {}
            }
        }
        None => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
