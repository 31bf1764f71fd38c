// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use spendwise::aggregate::{
    PALETTE, chart_segments, filter, start_of_month, start_of_week, summarize,
    total_spending, totals_by_category,
};
use spendwise::models::{CategoryTotal, Expense, FilterMode, ViewState};

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn exp(id: i64, amount: &str, category: &str, date: &str) -> Expense {
    Expense {
        id,
        amount: dec(amount),
        category: category.to_string(),
        note: None,
        date: date.to_string(),
    }
}

// Store order: date desc, id desc.
fn sample() -> Vec<Expense> {
    vec![
        exp(3, "5", "Books", "2024-01-15"),
        exp(2, "20", "Food", "2024-01-10"),
        exp(1, "10", "Food", "2024-01-01"),
    ]
}

#[test]
fn all_keeps_every_record_in_order() {
    let records = sample();
    let out = filter(&records, FilterMode::All, day("2024-01-17"));
    assert_eq!(out, records);
}

#[test]
fn all_scenario_totals() {
    let records = sample();
    let s = summarize(&records, &ViewState::new(FilterMode::All, day("2024-01-17")));
    assert_eq!(s.total, dec("35"));
    assert_eq!(s.count, 3);
    assert_eq!(
        s.by_category,
        vec![
            CategoryTotal { category: "Books".into(), total: dec("5") },
            CategoryTotal { category: "Food".into(), total: dec("30") },
        ]
    );
    assert_eq!(s.segments.len(), 2);
}

#[test]
fn week_starts_on_monday() {
    // 2024-01-17 is a Wednesday.
    assert_eq!(start_of_week(day("2024-01-17")), day("2024-01-15"));
    assert_eq!(start_of_week(day("2024-01-15")), day("2024-01-15"));
    assert_eq!(start_of_week(day("2024-01-21")), day("2024-01-15"));
    // Crossing a month boundary.
    assert_eq!(start_of_week(day("2024-03-02")), day("2024-02-26"));
}

#[test]
fn month_starts_on_first() {
    assert_eq!(start_of_month(day("2024-02-29")), day("2024-02-01"));
    assert_eq!(start_of_month(day("2024-01-01")), day("2024-01-01"));
}

#[test]
fn this_week_scenario() {
    let records = sample();
    let out = filter(&records, FilterMode::ThisWeek, day("2024-01-17"));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].category, "Books");
    assert_eq!(total_spending(&out), dec("5"));
}

#[test]
fn this_month_excludes_future_and_previous_month() {
    let records = vec![
        exp(4, "7", "Food", "2024-01-20"),
        exp(3, "5", "Books", "2024-01-15"),
        exp(2, "20", "Food", "2024-01-10"),
        exp(1, "10", "Food", "2023-12-31"),
    ];
    let out = filter(&records, FilterMode::ThisMonth, day("2024-01-17"));
    let ids: Vec<i64> = out.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![3, 2]);
}

#[test]
fn today_is_inside_week_and_month() {
    let today = day("2024-05-31");
    let records = vec![exp(1, "3.50", "Snacks", "2024-05-31")];
    assert_eq!(filter(&records, FilterMode::ThisWeek, today).len(), 1);
    assert_eq!(filter(&records, FilterMode::ThisMonth, today).len(), 1);
}

#[test]
fn malformed_dates_only_survive_all() {
    let records = vec![exp(2, "4", "Food", "yesterday"), exp(1, "6", "Food", "2024-01-16")];
    let today = day("2024-01-17");
    assert_eq!(filter(&records, FilterMode::All, today).len(), 2);
    let week = filter(&records, FilterMode::ThisWeek, today);
    assert_eq!(week.len(), 1);
    assert_eq!(week[0].id, 1);
}

#[test]
fn empty_input_for_every_filter() {
    let today = day("2024-01-17");
    for mode in [FilterMode::All, FilterMode::ThisWeek, FilterMode::ThisMonth] {
        let s = summarize(&[], &ViewState::new(mode, today));
        assert_eq!(s.total, Decimal::ZERO);
        assert!(s.by_category.is_empty());
        assert!(s.segments.is_empty());
    }
}

#[test]
fn category_buckets_add_up_to_total() {
    let records = vec![
        exp(5, "0.10", "Food", "2024-01-05"),
        exp(4, "0.20", "Food", "2024-01-04"),
        exp(3, "12.99", "Transport", "2024-01-03"),
        exp(2, "450", "Rent", "2024-01-02"),
        exp(1, "1.01", "Transport", "2024-01-01"),
    ];
    let totals = totals_by_category(&records);
    let order: Vec<&str> = totals.iter().map(|t| t.category.as_str()).collect();
    assert_eq!(order, vec!["Food", "Transport", "Rent"]);
    assert_eq!(totals[0].total, dec("0.30"));
    assert_eq!(totals[1].total, dec("14.00"));
    let bucket_sum: Decimal = totals.iter().map(|t| t.total).sum();
    assert_eq!(bucket_sum, total_spending(&records));
}

#[test]
fn blank_category_goes_to_other() {
    let records = vec![exp(2, "2", "  ", "2024-01-02"), exp(1, "3", " Food ", "2024-01-01")];
    let totals = totals_by_category(&records);
    assert_eq!(totals[0].category, "Other");
    assert_eq!(totals[1].category, "Food");
}

#[test]
fn segment_colors_cycle_after_five() {
    let totals: Vec<CategoryTotal> = (0..7)
        .map(|i| CategoryTotal {
            category: format!("C{}", i),
            total: Decimal::from(i + 1),
        })
        .collect();
    let segs = chart_segments(&totals);
    assert_eq!(segs.len(), 7);
    for (i, s) in segs.iter().enumerate() {
        assert_eq!(s.label, totals[i].category);
        assert_eq!(s.value, totals[i].total);
        assert_eq!(s.color, PALETTE[i % 5]);
    }
    assert_eq!(segs[5].color, segs[0].color);
    assert!(chart_segments(&[]).is_empty());
}
