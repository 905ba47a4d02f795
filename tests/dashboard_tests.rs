// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tallyboard::dashboard::{compute, compute_at, CategoryAmount, MONTH_ABBREVIATIONS};
use tallyboard::{Category, FixedClock, Transaction, TransactionType};

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn tx(id: &str, amount: &str, kind: TransactionType, category: &str, date: &str) -> Transaction {
    Transaction {
        id: id.into(),
        description: format!("tx {}", id),
        amount: d(amount),
        r#type: kind,
        category_id: category.into(),
        date: day(date),
        notes: None,
    }
}

fn cat(id: &str, name: &str, icon: &str) -> Category {
    Category {
        id: id.into(),
        name: name.into(),
        icon: icon.into(),
    }
}

fn sample() -> (Vec<Transaction>, Vec<Category>) {
    let categories = vec![
        cat("5", "Salário", "💰"),
        cat("1", "Casa", "🏠"),
        cat("2", "Mercado", "🛒"),
        cat("3", "Freela", "💻"),
    ];
    let transactions = vec![
        tx("a", "3000", TransactionType::Income, "5", "2024-01-15"),
        tx("b", "1200", TransactionType::Expense, "1", "2024-01-10"),
        tx("c", "310.45", TransactionType::Expense, "2", "2024-01-20"),
        tx("d", "800", TransactionType::Income, "3", "2024-01-22"),
        tx("e", "3000", TransactionType::Income, "5", "2023-12-15"),
        tx("f", "99.90", TransactionType::Expense, "2", "2023-12-02"),
        tx("g", "150", TransactionType::Expense, "gone", "2024-01-03"),
        tx("h", "45", TransactionType::Income, "gone", "2022-06-30"),
    ];
    (transactions, categories)
}

#[test]
fn january_scenario_matches_expected_cards() {
    let transactions = vec![
        tx("1", "3000", TransactionType::Income, "5", "2024-01-15"),
        tx("2", "1200", TransactionType::Expense, "1", "2024-01-10"),
    ];
    let categories = vec![cat("5", "Salário", "💰"), cat("1", "Casa", "🏠")];
    let data = compute(&transactions, &categories, &FixedClock(day("2024-01-20")));

    assert_eq!(data.monthly_income, d("3000"));
    assert_eq!(data.monthly_expense, d("1200"));
    assert_eq!(data.savings, d("1800"));
    assert_eq!(data.current_balance, d("1800"));
    assert_eq!(
        data.income_by_category,
        vec![CategoryAmount {
            category_name: "Salário".into(),
            amount: d("3000"),
            icon: "💰".into(),
        }]
    );
    assert_eq!(
        data.expense_by_category,
        vec![CategoryAmount {
            category_name: "Casa".into(),
            amount: d("1200"),
            icon: "🏠".into(),
        }]
    );
}

#[test]
fn balance_and_savings_identities_hold() {
    let (transactions, categories) = sample();
    for today in ["2024-01-31", "2023-12-01", "2022-06-15", "2025-03-03"] {
        let data = compute_at(&transactions, &categories, day(today));
        assert_eq!(data.current_balance, data.total_income - data.total_expense);
        assert_eq!(data.savings, data.monthly_income - data.monthly_expense);
    }
}

#[test]
fn compute_is_idempotent() {
    let (transactions, categories) = sample();
    let clock = FixedClock(day("2024-01-31"));
    assert_eq!(
        compute(&transactions, &categories, &clock),
        compute(&transactions, &categories, &clock)
    );
}

#[test]
fn dangling_category_counts_in_totals_only() {
    let (transactions, categories) = sample();
    let data = compute_at(&transactions, &categories, day("2024-01-31"));

    assert_eq!(data.total_income, d("6845"));
    assert_eq!(data.total_expense, d("1760.35"));
    assert_eq!(data.monthly_expense, d("1660.45"));

    let grouped_expense: Decimal = data.expense_by_category.iter().map(|c| c.amount).sum();
    assert_eq!(grouped_expense, d("1510.45"));
    assert!(grouped_expense <= data.monthly_expense);
    assert_eq!(data.by_category.len(), 4);
}

#[test]
fn grouped_income_matches_monthly_when_all_resolve() {
    let (transactions, categories) = sample();
    let data = compute_at(&transactions, &categories, day("2024-01-31"));
    let grouped: Decimal = data.income_by_category.iter().map(|c| c.amount).sum();
    assert_eq!(grouped, data.monthly_income);
    assert_eq!(data.income_by_category[0].category_name, "Salário");
    assert_eq!(data.income_by_category[1].category_name, "Freela");
}

#[test]
fn top_categories_are_all_time_maxima() {
    let (transactions, categories) = sample();
    let data = compute_at(&transactions, &categories, day("2025-03-03"));

    // Nothing falls in March 2025, but the all-time leaders still show.
    assert!(data.income_by_category.is_empty());
    assert_eq!(data.top_income_category.len(), 1);
    assert_eq!(data.top_income_category[0].category_name, "Salário");
    assert_eq!(data.top_income_category[0].amount, d("6000"));

    assert_eq!(data.top_expense_category.len(), 1);
    assert_eq!(data.top_expense_category[0].category_name, "Casa");
    assert_eq!(data.top_expense_category[0].amount, d("1200"));
}

#[test]
fn combined_view_sorts_by_total() {
    let (transactions, categories) = sample();
    let data = compute_at(&transactions, &categories, day("2024-01-31"));
    let names: Vec<_> = data
        .by_category
        .iter()
        .map(|c| c.category_name.as_str())
        .collect();
    assert_eq!(names, ["Salário", "Casa", "Freela", "Mercado"]);
    assert_eq!(data.by_category[3].expense, d("310.45"));
    assert_eq!(data.by_category[3].income, Decimal::ZERO);
}

#[test]
fn time_series_spans_every_month_of_every_year() {
    let (transactions, categories) = sample();
    let data = compute_at(&transactions, &categories, day("2024-01-31"));
    let series = &data.monthly_income_expense;

    assert_eq!(series.len(), 12 * 3);
    assert_eq!((series[0].month, series[0].year), ("jan", 2022));
    assert_eq!((series[35].month, series[35].year), ("dez", 2024));
    let keys: Vec<(i32, usize)> = series
        .iter()
        .map(|e| {
            let pos = MONTH_ABBREVIATIONS.iter().position(|m| *m == e.month).unwrap();
            (e.year, pos)
        })
        .collect();
    assert!(keys.windows(2).all(|w| w[0] < w[1]));

    let jun_2022 = &series[5];
    assert_eq!(jun_2022.month, "jun");
    assert_eq!(jun_2022.income, d("45"));

    let dec_2023 = &series[23];
    assert_eq!((dec_2023.month, dec_2023.year), ("dez", 2023));
    assert_eq!(dec_2023.income, d("3000"));
    assert_eq!(dec_2023.expense, d("99.90"));

    let jan_2024 = &series[24];
    assert_eq!(jan_2024.income, d("3800"));
    assert_eq!(jan_2024.expense, d("1660.45"));

    let income: Decimal = series.iter().map(|e| e.income).sum();
    assert_eq!(income, data.total_income);
}

#[test]
fn empty_snapshot_gives_zeroed_dashboard() {
    let data = compute_at(&[], &[cat("1", "Casa", "🏠")], day("2026-10-19"));

    assert_eq!(data.current_balance, Decimal::ZERO);
    assert_eq!(data.monthly_income, Decimal::ZERO);
    assert_eq!(data.monthly_expense, Decimal::ZERO);
    assert_eq!(data.savings, Decimal::ZERO);
    assert!(data.income_by_category.is_empty());
    assert!(data.expense_by_category.is_empty());
    assert!(data.top_income_category.is_empty());
    assert!(data.top_expense_category.is_empty());
    assert!(data.by_category.is_empty());

    assert_eq!(data.monthly_income_expense.len(), 12);
    assert!(data.monthly_income_expense.iter().all(|e| e.year == 2026
        && e.income.is_zero()
        && e.expense.is_zero()));
}

#[test]
fn decimal_sums_do_not_drift() {
    let transactions: Vec<_> = (0..10)
        .map(|i| tx(&i.to_string(), "0.1", TransactionType::Income, "1", "2024-05-05"))
        .collect();
    let data = compute_at(&transactions, &[cat("1", "Casa", "🏠")], day("2024-05-06"));
    assert_eq!(data.monthly_income, d("1.0"));
    assert_eq!(data.current_balance, Decimal::ONE);
}

#[test]
fn serialises_with_dashboard_field_names() {
    let (transactions, categories) = sample();
    let data = compute_at(&transactions, &categories, day("2024-01-31"));
    let v = serde_json::to_value(&data).unwrap();
    for key in [
        "currentBalance",
        "monthlyIncome",
        "monthlyExpense",
        "savings",
        "totalIncome",
        "totalExpense",
        "incomeByCategory",
        "expenseByCategory",
        "topIncomeCategory",
        "topExpenseCategory",
        "getByCategory",
        "getMonthlyIncomeExpense",
    ] {
        assert!(v.get(key).is_some(), "missing {}", key);
    }
    assert_eq!(v["incomeByCategory"][0]["categoryName"], "Salário");
    assert_eq!(v["getMonthlyIncomeExpense"][0]["month"], "jan");
}
