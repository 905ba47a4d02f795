// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::utils::{parse_date, parse_decimal};

/// Direction of a transfer. The stored amount is always a magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            _ => Err(ValidationError::UnknownType(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

impl Category {
    pub fn validate(self) -> Result<Self, ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingId);
        }
        Ok(self)
    }
}

/// A validated transfer, ready for aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub r#type: TransactionType,
    pub category_id: String,
    pub date: NaiveDate,
    pub notes: Option<String>,
}

impl Transaction {
    /// Contribution of this transaction to a running balance.
    pub fn signed_amount(&self) -> Decimal {
        match self.r#type {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

/// An amount as delivered: a JSON number or any text. Parsed during
/// validation so a bad value is reported against its record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(serde_json::Number),
    Text(String),
}

impl RawAmount {
    pub fn parse(&self) -> Result<Decimal, ValidationError> {
        match self {
            RawAmount::Number(n) => parse_decimal(&n.to_string()),
            RawAmount::Text(s) => parse_decimal(s),
        }
    }
}

impl From<&str> for RawAmount {
    fn from(s: &str) -> Self {
        RawAmount::Text(s.to_string())
    }
}

/// A transfer exactly as the upstream store hands it over.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    pub id: String,
    #[serde(default)]
    pub description: String,
    pub amount: RawAmount,
    #[serde(rename = "type")]
    pub r#type: String,
    /// `None` (or JSON `null`) leaves the transaction uncategorised.
    #[serde(default, alias = "category_id")]
    pub category_id: Option<String>,
    pub date: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl RawTransaction {
    pub fn validate(self) -> Result<Transaction, ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingId);
        }
        let r#type = self.r#type.parse::<TransactionType>()?;
        let date = parse_date(&self.date)?;
        let amount = self.amount.parse()?;
        if amount < Decimal::ZERO {
            return Err(ValidationError::NegativeAmount {
                id: self.id,
                amount,
            });
        }
        Ok(Transaction {
            id: self.id,
            description: self.description,
            amount,
            r#type,
            // Never matches a category, whose ids are non-empty.
            category_id: self.category_id.unwrap_or_default(),
            date,
            notes: self.notes.filter(|n| !n.trim().is_empty()),
        })
    }
}

/// One line of a transactions CSV. Every column is read as text so amounts
/// keep their exact decimal form.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionCsvRow {
    pub id: String,
    #[serde(default)]
    pub description: String,
    pub amount: String,
    #[serde(rename = "type")]
    pub r#type: String,
    #[serde(default)]
    pub category_id: String,
    pub date: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<TransactionCsvRow> for RawTransaction {
    fn from(row: TransactionCsvRow) -> Self {
        RawTransaction {
            amount: RawAmount::Text(row.amount),
            id: row.id,
            description: row.description,
            r#type: row.r#type,
            category_id: Some(row.category_id).filter(|c| !c.is_empty()),
            date: row.date,
            notes: row.notes,
        }
    }
}
