// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Read-only snapshots of the transaction store.
//!
//! A snapshot is either one JSON document holding both collections or a
//! pair of CSV files. Every record is validated on the way in so the
//! aggregation engine only ever sees well-typed data.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;
use crate::models::{Category, RawTransaction, Transaction, TransactionCsvRow};

#[derive(Debug, Deserialize)]
struct SnapshotDocument {
    #[serde(default)]
    transactions: Vec<RawTransaction>,
    #[serde(default)]
    categories: Vec<Category>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub transactions: Vec<Transaction>,
    pub categories: Vec<Category>,
}

impl Snapshot {
    /// Validates raw records. The first bad record aborts the load.
    pub fn from_raw(
        transactions: Vec<RawTransaction>,
        categories: Vec<Category>,
    ) -> Result<Self, SnapshotError> {
        let transactions = transactions
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                raw.validate().map_err(|source| SnapshotError::Invalid {
                    kind: "transaction",
                    index,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let categories = categories
            .into_iter()
            .enumerate()
            .map(|(index, c)| {
                c.validate().map_err(|source| SnapshotError::Invalid {
                    kind: "category",
                    index,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let snapshot = Snapshot {
            transactions,
            categories,
        };
        let dangling = snapshot.dangling_references().len();
        if dangling > 0 {
            tracing::warn!(dangling, "transactions reference unknown categories");
        }
        Ok(snapshot)
    }

    /// Transactions whose category id matches no known category.
    pub fn dangling_references(&self) -> Vec<&Transaction> {
        let known: HashSet<&str> = self.categories.iter().map(|c| c.id.as_str()).collect();
        self.transactions
            .iter()
            .filter(|t| !known.contains(t.category_id.as_str()))
            .collect()
    }

    /// Categories no transaction points at.
    pub fn unused_categories(&self) -> Vec<&Category> {
        let used: HashSet<&str> = self
            .transactions
            .iter()
            .map(|t| t.category_id.as_str())
            .collect();
        self.categories
            .iter()
            .filter(|c| !used.contains(c.id.as_str()))
            .collect()
    }

    pub fn category_name(&self, id: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }
}

/// Loads `{"transactions": [...], "categories": [...]}`.
pub fn load_json(path: &Path) -> Result<Snapshot, SnapshotError> {
    let data = fs::read_to_string(path)?;
    let doc: SnapshotDocument = serde_json::from_str(&data)?;
    let snapshot = Snapshot::from_raw(doc.transactions, doc.categories)?;
    tracing::info!(
        path = %path.display(),
        transactions = snapshot.transactions.len(),
        categories = snapshot.categories.len(),
        "loaded JSON snapshot"
    );
    Ok(snapshot)
}

/// Reads `id,description,amount,type,category_id,date,notes`.
pub fn load_transactions_csv(path: &Path) -> Result<Vec<RawTransaction>, SnapshotError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    let mut out = Vec::new();
    for row in rdr.deserialize::<TransactionCsvRow>() {
        out.push(RawTransaction::from(row?));
    }
    Ok(out)
}

/// Reads `id,name,icon`.
pub fn load_categories_csv(path: &Path) -> Result<Vec<Category>, SnapshotError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    let mut out = Vec::new();
    for row in rdr.deserialize::<Category>() {
        out.push(row?);
    }
    Ok(out)
}

/// Loads a snapshot from a transactions CSV and a categories CSV.
pub fn load_csv(transactions: &Path, categories: &Path) -> Result<Snapshot, SnapshotError> {
    let snapshot = Snapshot::from_raw(
        load_transactions_csv(transactions)?,
        load_categories_csv(categories)?,
    )?;
    tracing::info!(
        transactions = snapshot.transactions.len(),
        categories = snapshot.categories.len(),
        "loaded CSV snapshot"
    );
    Ok(snapshot)
}
