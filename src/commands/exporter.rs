// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate;
use crate::store;
use crate::utils::{required, view_state};
use anyhow::{Context, Result, bail};
use rusqlite::Connection;
use serde_json::json;

pub fn handle(conn: &Connection, root: &clap::ArgMatches, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = required(sub, "format")?.to_lowercase();
    let out = required(sub, "out")?;

    let view = view_state(root, sub);
    let all = store::select_all(conn)?;
    let rows = aggregate::filter(&all, view.filter, view.today);

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)
                .with_context(|| format!("Failed to open {}", out))?;
            wtr.write_record(["id", "date", "category", "amount", "note"])?;
            for e in &rows {
                wtr.write_record([
                    e.id.to_string(),
                    e.date.clone(),
                    e.category.clone(),
                    e.amount.to_string(),
                    e.note.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = rows
                .iter()
                .map(|e| {
                    json!({
                        "id": e.id, "date": e.date, "category": e.category, "amount": e.amount.to_string(), "note": e.note
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)
                .with_context(|| format!("Failed to write {}", out))?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    println!("Exported {} expense(s) to {}", rows.len(), out);
    Ok(())
}
