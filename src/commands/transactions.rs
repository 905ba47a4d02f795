// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Transaction, TransactionType};
use crate::snapshot::Snapshot;
use crate::utils::{fmt_money, maybe_print_json, parse_month, pretty_table};
use anyhow::Result;
use chrono::Datelike;
use serde::Serialize;

pub fn handle(snapshot: &Snapshot, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", sub)) = m.subcommand() {
        list(snapshot, sub)?;
    }
    Ok(())
}

fn list(snapshot: &Snapshot, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(snapshot, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.description.clone(),
                    r.r#type.clone(),
                    r.amount.clone(),
                    r.category.clone(),
                    r.notes.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Description", "Type", "Amount", "Category", "Notes"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub description: String,
    pub r#type: String,
    pub amount: String,
    pub category: String,
    pub notes: String,
}

pub fn query_rows(snapshot: &Snapshot, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let month = sub
        .get_one::<String>("month")
        .map(|s| parse_month(s))
        .transpose()?;
    let kind = sub
        .get_one::<String>("type")
        .map(|s| s.parse::<TransactionType>())
        .transpose()?;
    let category = sub.get_one::<String>("category");

    let mut selected: Vec<&Transaction> = snapshot
        .transactions
        .iter()
        .filter(|t| month.is_none_or(|(m, y)| t.date.month() == m && t.date.year() == y))
        .filter(|t| kind.is_none_or(|k| t.r#type == k))
        .filter(|t| {
            category.is_none_or(|name| {
                snapshot.category_name(&t.category_id) == Some(name.as_str())
            })
        })
        .collect();
    // Newest first; equal dates keep the later-listed record on top.
    selected.reverse();
    selected.sort_by(|a, b| b.date.cmp(&a.date));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        selected.truncate(*limit);
    }

    Ok(selected
        .into_iter()
        .map(|t| TransactionRow {
            id: t.id.clone(),
            date: t.date.to_string(),
            description: t.description.clone(),
            r#type: t.r#type.to_string(),
            amount: fmt_money(&t.amount),
            category: snapshot
                .category_name(&t.category_id)
                .unwrap_or("(unknown)")
                .to_string(),
            notes: t.notes.clone().unwrap_or_default(),
        })
        .collect())
}
