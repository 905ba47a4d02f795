// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone};

/// Source of "now" for month scoping, so dashboards can be pinned in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;

    /// Local calendar date; month/year bucketing reads only these fields.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall clock in the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock stuck on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        let midday = self.0.and_time(NaiveTime::MIN) + chrono::Duration::hours(12);
        // A gap at local midday falls back to UTC midday, still the same day.
        Local
            .from_local_datetime(&midday)
            .earliest()
            .unwrap_or_else(|| Local.from_utc_datetime(&midday))
    }

    fn today(&self) -> NaiveDate {
        self.0
    }
}
