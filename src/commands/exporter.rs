// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::dashboard::compute_at;
use crate::snapshot::Snapshot;
use anyhow::{bail, Result};
use chrono::NaiveDate;

pub fn handle(snapshot: &Snapshot, today: NaiveDate, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("dashboard", sub)) => export_dashboard(snapshot, today, sub),
        _ => Ok(()),
    }
}

fn export_dashboard(snapshot: &Snapshot, today: NaiveDate, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let data = compute_at(&snapshot.transactions, &snapshot.categories, today);

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["year", "month", "income", "expense"])?;
            for e in &data.monthly_income_expense {
                wtr.write_record([
                    e.year.to_string(),
                    e.month.to_string(),
                    e.income.to_string(),
                    e.expense.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&data)?)?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    tracing::info!(out = %out, format = %fmt, "exported dashboard");
    println!("Exported dashboard to {}", out);
    Ok(())
}
