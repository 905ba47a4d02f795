// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Dashboard aggregation.
//!
//! Pure reductions from a transaction snapshot and its categories to the
//! figures a dashboard shows: balances, month-scoped totals, per-category
//! breakdowns and a gap-free monthly time series. Nothing here performs I/O
//! or mutates its inputs; the only outside dependency is the calendar day
//! used for "current month", which callers pass in (or supply via a
//! [`Clock`]).

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::clock::Clock;
use crate::models::{Category, Transaction, TransactionType};

/// Month labels in calendar order.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Total for one category and one transaction type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAmount {
    pub category_name: String,
    pub amount: Decimal,
    pub icon: String,
}

/// Income and expense side by side for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub category_name: String,
    pub icon: String,
    pub expense: Decimal,
    pub income: Decimal,
}

impl CategoryBreakdown {
    pub fn total(&self) -> Decimal {
        self.expense + self.income
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTotals {
    pub month: &'static str,
    pub year: i32,
    pub income: Decimal,
    pub expense: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunningBalance {
    pub month: &'static str,
    pub year: i32,
    pub balance: Decimal,
}

/// Everything the dashboard renders. Recomputed from scratch on every
/// snapshot change and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub current_balance: Decimal,
    pub monthly_income: Decimal,
    pub monthly_expense: Decimal,
    pub savings: Decimal,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub income_by_category: Vec<CategoryAmount>,
    pub expense_by_category: Vec<CategoryAmount>,
    pub top_income_category: Vec<CategoryAmount>,
    pub top_expense_category: Vec<CategoryAmount>,
    #[serde(rename = "getByCategory")]
    pub by_category: Vec<CategoryBreakdown>,
    #[serde(rename = "getMonthlyIncomeExpense")]
    pub monthly_income_expense: Vec<MonthlyTotals>,
}

/// Lowercase three-letter label for a month number in `1..=12`.
pub fn month_abbreviation(month: u32) -> &'static str {
    MONTH_ABBREVIATIONS[(month.clamp(1, 12) - 1) as usize]
}

/// Category lookup by id. With duplicate ids the first category wins.
fn index_categories(categories: &[Category]) -> HashMap<&str, &Category> {
    let mut index = HashMap::with_capacity(categories.len());
    for category in categories {
        index.entry(category.id.as_str()).or_insert(category);
    }
    index
}

/// Transactions dated in the given month (`1..=12`) of the given year.
pub fn transactions_in_month(
    transactions: &[Transaction],
    month: u32,
    year: i32,
) -> Vec<&Transaction> {
    transactions
        .iter()
        .filter(|t| t.date.month() == month && t.date.year() == year)
        .collect()
}

/// Month filter with an optional `(month, year)`; `None` means the month
/// containing `today`.
pub fn transactions_for_period(
    transactions: &[Transaction],
    period: Option<(u32, i32)>,
    today: NaiveDate,
) -> Vec<&Transaction> {
    let (month, year) = period.unwrap_or((today.month(), today.year()));
    transactions_in_month(transactions, month, year)
}

pub fn current_month_transactions(
    transactions: &[Transaction],
    today: NaiveDate,
) -> Vec<&Transaction> {
    transactions_for_period(transactions, None, today)
}

/// Signed sum: income adds, expense subtracts.
pub fn balance<'a, I>(transactions: I) -> Decimal
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .fold(Decimal::ZERO, |acc, t| acc + t.signed_amount())
}

/// Unsigned sum of the transactions of one type.
pub fn sum_by_type<'a, I>(transactions: I, kind: TransactionType) -> Decimal
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .filter(|t| t.r#type == kind)
        .map(|t| t.amount)
        .sum()
}

/// Totals per category, largest first.
///
/// Transactions whose category id does not resolve are skipped. Categories
/// with equal totals keep the order in which they were first seen.
pub fn group_by_category<'a, I>(transactions: I, categories: &[Category]) -> Vec<CategoryAmount>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let index = index_categories(categories);
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut buckets: Vec<CategoryAmount> = Vec::new();

    for transaction in transactions {
        let Some(category) = index.get(transaction.category_id.as_str()) else {
            continue;
        };
        let position = *positions.entry(category.id.as_str()).or_insert_with(|| {
            buckets.push(CategoryAmount {
                category_name: category.name.clone(),
                amount: Decimal::ZERO,
                icon: category.icon.clone(),
            });
            buckets.len() - 1
        });
        buckets[position].amount += transaction.amount;
    }

    buckets.sort_by(|a, b| b.amount.cmp(&a.amount));
    buckets
}

/// The all-time largest category for one transaction type, as a list of at
/// most one entry. The first category seen wins a tie.
pub fn top_category(
    transactions: &[Transaction],
    categories: &[Category],
    kind: TransactionType,
) -> Vec<CategoryAmount> {
    let of_kind = transactions.iter().filter(|t| t.r#type == kind);
    // Grouping sorts stably, so the head is the earliest of the maxima.
    group_by_category(of_kind, categories)
        .into_iter()
        .take(1)
        .collect()
}

/// Income and expense per category in one pass, sorted by their combined
/// total, largest first.
pub fn category_breakdown<'a, I>(transactions: I, categories: &[Category]) -> Vec<CategoryBreakdown>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let index = index_categories(categories);
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<CategoryBreakdown> = Vec::new();

    for transaction in transactions {
        let Some(category) = index.get(transaction.category_id.as_str()) else {
            continue;
        };
        let position = *positions.entry(category.id.as_str()).or_insert_with(|| {
            rows.push(CategoryBreakdown {
                category_name: category.name.clone(),
                icon: category.icon.clone(),
                expense: Decimal::ZERO,
                income: Decimal::ZERO,
            });
            rows.len() - 1
        });
        let row = &mut rows[position];
        match transaction.r#type {
            TransactionType::Income => row.income += transaction.amount,
            TransactionType::Expense => row.expense += transaction.amount,
        }
    }

    rows.sort_by(|a, b| b.total().cmp(&a.total()));
    rows
}

/// Income and expense for every month of every year spanned by the
/// transactions, in chronological order.
///
/// Months without activity are present with zero totals. With no
/// transactions the span is the year of `today`.
///
/// # Returns
/// `12 * (max_year - min_year + 1)` entries.
pub fn monthly_income_expense(
    transactions: &[Transaction],
    today: NaiveDate,
) -> Vec<MonthlyTotals> {
    let (min_year, max_year) = transactions
        .iter()
        .map(|t| t.date.year())
        .fold(None, |span: Option<(i32, i32)>, year| match span {
            None => Some((year, year)),
            Some((lo, hi)) => Some((lo.min(year), hi.max(year))),
        })
        .unwrap_or((today.year(), today.year()));

    let mut series: Vec<MonthlyTotals> = (min_year..=max_year)
        .flat_map(|year| {
            MONTH_ABBREVIATIONS.into_iter().map(move |month| MonthlyTotals {
                month,
                year,
                income: Decimal::ZERO,
                expense: Decimal::ZERO,
            })
        })
        .collect();

    for transaction in transactions {
        let slot = (transaction.date.year() - min_year) as usize * 12
            + transaction.date.month0() as usize;
        let bucket = &mut series[slot];
        match transaction.r#type {
            TransactionType::Income => bucket.income += transaction.amount,
            TransactionType::Expense => bucket.expense += transaction.amount,
        }
    }

    series
}

/// Cumulative balance after each month of a series.
pub fn running_balance(series: &[MonthlyTotals]) -> Vec<RunningBalance> {
    let mut cumulative = Decimal::ZERO;
    series
        .iter()
        .map(|entry| {
            cumulative += entry.income - entry.expense;
            RunningBalance {
                month: entry.month,
                year: entry.year,
                balance: cumulative,
            }
        })
        .collect()
}

/// Builds the dashboard using `clock` for the current month.
pub fn compute(
    transactions: &[Transaction],
    categories: &[Category],
    clock: &dyn Clock,
) -> DashboardData {
    compute_at(transactions, categories, clock.today())
}

/// Builds the dashboard as it looks on `today`.
pub fn compute_at(
    transactions: &[Transaction],
    categories: &[Category],
    today: NaiveDate,
) -> DashboardData {
    let this_month = current_month_transactions(transactions, today);

    let monthly_income = sum_by_type(this_month.iter().copied(), TransactionType::Income);
    let monthly_expense = sum_by_type(this_month.iter().copied(), TransactionType::Expense);

    let data = DashboardData {
        current_balance: balance(transactions),
        monthly_income,
        monthly_expense,
        savings: monthly_income - monthly_expense,
        total_income: sum_by_type(transactions, TransactionType::Income),
        total_expense: sum_by_type(transactions, TransactionType::Expense),
        income_by_category: group_by_category(
            this_month
                .iter()
                .copied()
                .filter(|t| t.r#type == TransactionType::Income),
            categories,
        ),
        expense_by_category: group_by_category(
            this_month
                .iter()
                .copied()
                .filter(|t| t.r#type == TransactionType::Expense),
            categories,
        ),
        top_income_category: top_category(transactions, categories, TransactionType::Income),
        top_expense_category: top_category(transactions, categories, TransactionType::Expense),
        by_category: category_breakdown(this_month.iter().copied(), categories),
        monthly_income_expense: monthly_income_expense(transactions, today),
    };

    tracing::debug!(
        transactions = transactions.len(),
        categories = categories.len(),
        in_month = this_month.len(),
        %today,
        "dashboard computed"
    );
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(
        id: &str,
        amount: &str,
        kind: TransactionType,
        category: &str,
        date: &str,
    ) -> Transaction {
        Transaction {
            id: id.into(),
            description: String::new(),
            amount: amount.parse().unwrap(),
            r#type: kind,
            category_id: category.into(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            notes: None,
        }
    }

    fn cat(id: &str, name: &str) -> Category {
        Category {
            id: id.into(),
            name: name.into(),
            icon: String::new(),
        }
    }

    #[test]
    fn grouping_ties_keep_first_seen_order() {
        let categories = vec![cat("a", "A"), cat("b", "B"), cat("c", "C")];
        let txs = vec![
            tx("1", "10", TransactionType::Expense, "b", "2024-01-01"),
            tx("2", "10", TransactionType::Expense, "a", "2024-01-02"),
            tx("3", "15", TransactionType::Expense, "c", "2024-01-03"),
        ];
        let names: Vec<_> = group_by_category(&txs, &categories)
            .into_iter()
            .map(|c| c.category_name)
            .collect();
        assert_eq!(names, ["C", "B", "A"]);

        let top = top_category(&txs[..2], &categories, TransactionType::Expense);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].category_name, "B");
    }

    #[test]
    fn duplicate_category_ids_resolve_to_first() {
        let categories = vec![cat("a", "First"), cat("a", "Second")];
        let txs = vec![tx("1", "5", TransactionType::Income, "a", "2024-01-01")];
        let grouped = group_by_category(&txs, &categories);
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].category_name, "First");
    }

    #[test]
    fn series_orders_by_calendar_not_alphabet() {
        let txs = vec![
            tx("1", "1", TransactionType::Income, "x", "2023-12-31"),
            tx("2", "2", TransactionType::Expense, "x", "2024-04-01"),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let series = monthly_income_expense(&txs, today);
        assert_eq!(series.len(), 24);
        assert_eq!((series[0].month, series[0].year), ("jan", 2023));
        assert_eq!((series[11].month, series[11].year), ("dez", 2023));
        assert_eq!(series[11].income, Decimal::ONE);
        assert_eq!((series[15].month, series[15].year), ("abr", 2024));
        assert_eq!(series[15].expense, Decimal::from(2));
    }

    #[test]
    fn running_balance_accumulates_net_flow() {
        let txs = vec![
            tx("1", "100", TransactionType::Income, "x", "2024-01-05"),
            tx("2", "30", TransactionType::Expense, "x", "2024-02-05"),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        let running = running_balance(&monthly_income_expense(&txs, today));
        assert_eq!(running[0].balance, Decimal::from(100));
        assert_eq!(running[1].balance, Decimal::from(70));
        assert_eq!(running[11].balance, balance(&txs));
    }

    #[test]
    fn month_abbreviation_covers_calendar() {
        assert_eq!(month_abbreviation(1), "jan");
        assert_eq!(month_abbreviation(12), "dez");
    }
}
