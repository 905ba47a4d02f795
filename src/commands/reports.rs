// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::dashboard::{
    category_breakdown, monthly_income_expense, running_balance, top_category,
    transactions_for_period, CategoryBreakdown, MonthlyTotals, RunningBalance,
};
use crate::models::TransactionType;
use crate::snapshot::Snapshot;
use crate::utils::{fmt_money, maybe_print_json, parse_month, pretty_table};
use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

pub fn handle(snapshot: &Snapshot, today: NaiveDate, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("cashflow", sub)) => cashflow(snapshot, today, sub)?,
        Some(("by-category", sub)) => by_category(snapshot, today, sub)?,
        Some(("top", sub)) => top(snapshot, sub)?,
        Some(("balance", sub)) => balance(snapshot, today, sub)?,
        _ => {}
    }
    Ok(())
}

fn cashflow(snapshot: &Snapshot, today: NaiveDate, sub: &clap::ArgMatches) -> Result<()> {
    let series = monthly_income_expense(&snapshot.transactions, today);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &series)? {
        let rows = series
            .iter()
            .map(|e: &MonthlyTotals| {
                vec![
                    format!("{}/{}", e.month, e.year),
                    fmt_money(&e.income),
                    fmt_money(&e.expense),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Month", "Income", "Expense"], rows));
    }
    Ok(())
}

pub fn query_by_category(
    snapshot: &Snapshot,
    today: NaiveDate,
    sub: &clap::ArgMatches,
) -> Result<Vec<CategoryBreakdown>> {
    let period = sub
        .get_one::<String>("month")
        .map(|s| parse_month(s))
        .transpose()?;
    let txs = transactions_for_period(&snapshot.transactions, period, today);
    Ok(category_breakdown(txs, &snapshot.categories))
}

fn by_category(snapshot: &Snapshot, today: NaiveDate, sub: &clap::ArgMatches) -> Result<()> {
    let data = query_by_category(snapshot, today, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .iter()
            .map(|c| {
                vec![
                    c.icon.clone(),
                    c.category_name.clone(),
                    fmt_money(&c.income),
                    fmt_money(&c.expense),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["", "Category", "Income", "Expense"], rows));
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct TopRow {
    pub r#type: TransactionType,
    pub category: String,
    pub icon: String,
    pub amount: String,
}

pub fn query_top(snapshot: &Snapshot) -> Vec<TopRow> {
    [TransactionType::Income, TransactionType::Expense]
        .into_iter()
        .flat_map(|kind| {
            top_category(&snapshot.transactions, &snapshot.categories, kind)
                .into_iter()
                .map(move |c| TopRow {
                    r#type: kind,
                    category: c.category_name,
                    icon: c.icon,
                    amount: fmt_money(&c.amount),
                })
        })
        .collect()
}

fn top(snapshot: &Snapshot, sub: &clap::ArgMatches) -> Result<()> {
    let data = query_top(snapshot);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .into_iter()
            .map(|r| vec![r.r#type.to_string(), r.icon, r.category, r.amount])
            .collect();
        println!("{}", pretty_table(&["Type", "", "Category", "Amount"], rows));
    }
    Ok(())
}

fn balance(snapshot: &Snapshot, today: NaiveDate, sub: &clap::ArgMatches) -> Result<()> {
    let series = monthly_income_expense(&snapshot.transactions, today);
    let running = running_balance(&series);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &running)? {
        let rows = running
            .iter()
            .map(|r: &RunningBalance| {
                vec![format!("{}/{}", r.month, r.year), fmt_money(&r.balance)]
            })
            .collect();
        println!("{}", pretty_table(&["Month", "Balance"], rows));
    }
    Ok(())
}
