// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::snapshot::Snapshot;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use serde::Serialize;

pub fn handle(snapshot: &Snapshot, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", sub)) = m.subcommand() {
        let data = query_rows(snapshot);
        if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
            let rows = data
                .into_iter()
                .map(|r| vec![r.icon, r.name, r.transactions.to_string()])
                .collect();
            println!("{}", pretty_table(&["", "Category", "Transactions"], rows));
        }
    }
    Ok(())
}

#[derive(Serialize)]
pub struct CategoryRow {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub transactions: usize,
}

/// Categories sorted by name with the number of transactions filed under each.
pub fn query_rows(snapshot: &Snapshot) -> Vec<CategoryRow> {
    let mut rows: Vec<CategoryRow> = snapshot
        .categories
        .iter()
        .map(|c| CategoryRow {
            id: c.id.clone(),
            name: c.name.clone(),
            icon: c.icon.clone(),
            transactions: snapshot
                .transactions
                .iter()
                .filter(|t| t.category_id == c.id)
                .count(),
        })
        .collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name));
    rows
}
