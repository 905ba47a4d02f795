// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use thiserror::Error;

/// A record that cannot be handed to the aggregation engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("invalid amount '{0}'")]
    InvalidAmount(String),
    #[error("amount {amount} on transaction '{id}' is negative")]
    NegativeAmount { id: String, amount: Decimal },
    #[error("record has an empty id")]
    MissingId,
    #[error("unknown transaction type '{0}', expected income|expense")]
    UnknownType(String),
}

/// Failures while reading a snapshot from disk.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid {kind} at index {index}: {source}")]
    Invalid {
        kind: &'static str,
        index: usize,
        #[source]
        source: ValidationError,
    },
}
