// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate;
use crate::models::{ChartSegment, Summary};
use crate::store;
use crate::utils::{fmt_amount, maybe_print_json, pretty_table, view_state};
use anyhow::Result;
use comfy_table::{Cell, Color, Table, presets::UTF8_FULL};
use rusqlite::Connection;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

const BAR_WIDTH: u32 = 30;

pub fn handle(conn: &Connection, root: &clap::ArgMatches, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let summary = compute(conn, root, sub)?;
    if maybe_print_json(json_flag, jsonl_flag, &summary)? {
        return Ok(());
    }

    println!(
        "Total ({}): {} across {} expense(s)",
        summary.filter,
        fmt_amount(&summary.total),
        summary.count
    );
    let rows: Vec<Vec<String>> = summary
        .by_category
        .iter()
        .map(|t| vec![t.category.clone(), fmt_amount(&t.total)])
        .collect();
    println!("{}", pretty_table(&["Category", "Total"], rows));

    if summary.segments.is_empty() {
        println!("No expenses to chart");
    } else {
        println!("{}", chart_table(&summary));
    }
    Ok(())
}

pub fn compute(conn: &Connection, root: &clap::ArgMatches, sub: &clap::ArgMatches) -> Result<Summary> {
    let view = view_state(root, sub);
    let all = store::select_all(conn)?;
    Ok(aggregate::summarize(&all, &view))
}

/// Percentage of `total` held by one segment, one decimal place.
pub fn share(segment: &ChartSegment, total: &Decimal) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    (segment.value / *total * Decimal::ONE_HUNDRED).round_dp(1)
}

fn bar(share: &Decimal) -> String {
    let cells = (*share * Decimal::from(BAR_WIDTH) / Decimal::ONE_HUNDRED)
        .round()
        .to_usize()
        .unwrap_or(0);
    "█".repeat(cells)
}

fn hex_color(hex: &str) -> Option<Color> {
    let h = hex.strip_prefix('#')?;
    if h.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&h[i..i + 2], 16).ok();
    Some(Color::Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

fn chart_table(summary: &Summary) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(["Category", "Amount", "Share", ""].map(Cell::new));
    for seg in &summary.segments {
        let pct = share(seg, &summary.total);
        let mut bar_cell = Cell::new(bar(&pct));
        if let Some(c) = hex_color(&seg.color) {
            bar_cell = bar_cell.fg(c);
        }
        t.add_row(vec![
            Cell::new(&seg.label),
            Cell::new(fmt_amount(&seg.value)),
            Cell::new(format!("{}%", pct)),
            bar_cell,
        ]);
    }
    t
}
