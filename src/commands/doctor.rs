// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::snapshot::Snapshot;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(snapshot: &Snapshot) -> Result<()> {
    let rows = issues(snapshot);
    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

pub fn issues(snapshot: &Snapshot) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    // Left out of every per-category figure
    for t in snapshot.dangling_references() {
        rows.push(vec![
            "unknown_category".into(),
            format!("{} {} -> '{}'", t.date, t.id, t.category_id),
        ]);
    }

    for c in snapshot.unused_categories() {
        rows.push(vec!["unused_category".into(), format!("{} ({})", c.name, c.id)]);
    }
    rows
}
