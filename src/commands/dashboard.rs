// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::dashboard::{compute_at, CategoryAmount, DashboardData};
use crate::snapshot::Snapshot;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use chrono::NaiveDate;

pub fn handle(snapshot: &Snapshot, today: NaiveDate, m: &clap::ArgMatches) -> Result<()> {
    let data = compute_at(&snapshot.transactions, &snapshot.categories, today);
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    println!("{}", pretty_table(&["Figure", "Amount"], summary_rows(&data)));
    if !data.income_by_category.is_empty() {
        let rows = category_rows(&data.income_by_category);
        println!("{}", pretty_table(&["", "Income category", "Amount"], rows));
    }
    if !data.expense_by_category.is_empty() {
        let rows = category_rows(&data.expense_by_category);
        println!("{}", pretty_table(&["", "Expense category", "Amount"], rows));
    }
    Ok(())
}

pub fn summary_rows(data: &DashboardData) -> Vec<Vec<String>> {
    [
        ("Current balance", &data.current_balance),
        ("Income this month", &data.monthly_income),
        ("Expense this month", &data.monthly_expense),
        ("Savings this month", &data.savings),
        ("Total income", &data.total_income),
        ("Total expense", &data.total_expense),
    ]
    .into_iter()
    .map(|(label, amount)| vec![label.to_string(), fmt_money(amount)])
    .collect()
}

pub fn category_rows(items: &[CategoryAmount]) -> Vec<Vec<String>> {
    items
        .iter()
        .map(|c| vec![c.icon.clone(), c.category_name.clone(), fmt_money(&c.amount)])
        .collect()
}
