// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate;
use crate::form::ExpenseForm;
use crate::models::Expense;
use crate::store;
use crate::utils::{fmt_amount, maybe_print_json, pretty_table, reference_day, required, view_state};
use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn add(conn: &Connection, root: &clap::ArgMatches, sub: &clap::ArgMatches) -> Result<i64> {
    let form = ExpenseForm {
        amount: required(sub, "amount")?.clone(),
        category: required(sub, "category")?.clone(),
        note: sub.get_one::<String>("note").cloned(),
        date: sub.get_one::<String>("date").cloned(),
    };
    let input = form.validate_new(reference_day(root))?;
    let id = store::insert(conn, &input)?;
    println!(
        "Recorded {} for '{}' on {} (id {})",
        fmt_amount(&input.amount),
        input.category,
        input.date,
        id
    );
    Ok(id)
}

pub fn edit(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").context("Missing expense id")?;
    let current = store::get(conn, id)?;
    let mut form = ExpenseForm::from_expense(&current);
    if let Some(v) = sub.get_one::<String>("amount") {
        form.amount = v.clone();
    }
    if let Some(v) = sub.get_one::<String>("category") {
        form.category = v.clone();
    }
    if let Some(v) = sub.get_one::<String>("note") {
        form.note = Some(v.clone());
    }
    if let Some(v) = sub.get_one::<String>("date") {
        form.date = Some(v.clone());
    }
    let input = form.validate_edit()?;
    store::update(conn, id, &input)?;
    println!(
        "Updated expense {}: {} for '{}' on {}",
        id,
        fmt_amount(&input.amount),
        input.category,
        input.date
    );
    Ok(())
}

pub fn remove(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").context("Missing expense id")?;
    store::delete(conn, id)?;
    println!("Deleted expense {}", id);
    Ok(())
}

pub fn list(conn: &Connection, root: &clap::ArgMatches, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, root, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|e| {
                vec![
                    e.id.to_string(),
                    e.date.clone(),
                    e.category.clone(),
                    fmt_amount(&e.amount),
                    e.note.clone().unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Date", "Category", "Amount", "Note"], rows)
        );
    }
    Ok(())
}

/// The filtered list as `list` shows it: newest first, optionally truncated.
pub fn query_rows(
    conn: &Connection,
    root: &clap::ArgMatches,
    sub: &clap::ArgMatches,
) -> Result<Vec<Expense>> {
    let view = view_state(root, sub);
    let all = store::select_all(conn)?;
    let mut data = aggregate::filter(&all, view.filter, view.today);
    if let Some(limit) = sub.get_one::<usize>("limit") {
        data.truncate(*limit);
    }
    Ok(data)
}
