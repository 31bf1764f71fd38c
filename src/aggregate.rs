// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Filtering and totals over a loaded list of expenses.
//!
//! Every function here is pure: inputs are borrowed, outputs are fresh values,
//! and the relative order of records is never changed.

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{CategoryTotal, ChartSegment, Expense, FilterMode, Summary, ViewState};

/// Chart colors, handed out by category position. A sixth category reuses the first color.
pub const PALETTE: [&str; 5] = ["#f39c12", "#e74c3c", "#3498db", "#2ecc71", "#9b59b6"];

/// Bucket for records whose category is blank.
pub const OTHER_CATEGORY: &str = "Other";

/// Monday of the week containing `today`.
pub fn start_of_week(today: NaiveDate) -> NaiveDate {
    today - Duration::days(i64::from(today.weekday().num_days_from_monday()))
}

pub fn start_of_month(today: NaiveDate) -> NaiveDate {
    today.with_day(1).unwrap_or(today)
}

/// Keeps the records that fall in the range selected by `mode`, ending at `today`.
///
/// `All` returns every record, including ones with an unreadable date. The
/// ranged modes drop those since they cannot be placed on the calendar.
pub fn filter(records: &[Expense], mode: FilterMode, today: NaiveDate) -> Vec<Expense> {
    let start = match mode {
        FilterMode::All => return records.to_vec(),
        FilterMode::ThisWeek => start_of_week(today),
        FilterMode::ThisMonth => start_of_month(today),
    };
    let kept: Vec<Expense> = records
        .iter()
        .filter(|e| e.day().is_some_and(|d| d >= start && d <= today))
        .cloned()
        .collect();
    tracing::debug!(
        filter = %mode,
        %start,
        %today,
        kept = kept.len(),
        total = records.len(),
        "filtered expenses"
    );
    kept
}

pub fn total_spending(records: &[Expense]) -> Decimal {
    records.iter().map(|e| e.amount).sum()
}

/// Sums amounts per category in first-seen order.
pub fn totals_by_category(records: &[Expense]) -> Vec<CategoryTotal> {
    let mut out: Vec<CategoryTotal> = Vec::new();
    for e in records {
        let name = match e.category.trim() {
            "" => OTHER_CATEGORY,
            c => c,
        };
        match out.iter_mut().find(|t| t.category == name) {
            Some(t) => t.total += e.amount,
            None => out.push(CategoryTotal {
                category: name.to_string(),
                total: e.amount,
            }),
        }
    }
    out
}

pub fn chart_segments(totals: &[CategoryTotal]) -> Vec<ChartSegment> {
    totals
        .iter()
        .enumerate()
        .map(|(i, t)| ChartSegment {
            label: t.category.clone(),
            value: t.total,
            color: PALETTE[i % PALETTE.len()].to_string(),
        })
        .collect()
}

/// Runs the whole pipeline for one view.
pub fn summarize(records: &[Expense], view: &ViewState) -> Summary {
    let filtered = filter(records, view.filter, view.today);
    let by_category = totals_by_category(&filtered);
    let segments = chart_segments(&by_category);
    Summary {
        filter: view.filter,
        total: total_spending(&filtered),
        count: filtered.len(),
        by_category,
        segments,
    }
}
