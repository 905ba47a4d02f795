// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod clock;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod logging;
pub mod models;
pub mod snapshot;
pub mod utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dashboard::{compute, compute_at, DashboardData};
pub use error::{SnapshotError, ValidationError};
pub use models::{Category, Transaction, TransactionType};
