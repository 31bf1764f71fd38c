// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Expense;
use crate::store;
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;

pub fn handle(conn: &Connection) -> Result<()> {
    let records = store::select_all(conn)?;
    let rows = find_issues(&records);
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Id", "Issue", "Detail"], rows));
    }
    Ok(())
}

/// Rows that could only exist if something bypassed form validation.
pub fn find_issues(records: &[Expense]) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    for e in records {
        let id = e.id.to_string();
        if e.day().is_none() {
            rows.push(vec![id.clone(), "malformed_date".into(), e.date.clone()]);
        }
        if e.amount <= Decimal::ZERO {
            rows.push(vec![id.clone(), "non_positive_amount".into(), e.amount.to_string()]);
        }
        if e.category.trim().is_empty() {
            rows.push(vec![id, "blank_category".into(), format!("{:?}", e.category)]);
        }
    }
    for r in &rows {
        tracing::warn!(id = %r[0], issue = %r[1], detail = %r[2], "invalid expense row");
    }
    rows
}
