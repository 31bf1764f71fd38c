// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! CRUD over the `expenses` table. Each call is a single statement.

use anyhow::{Context, Result, anyhow};
use rusqlite::{Connection, OptionalExtension, Row, params};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::{Expense, ExpenseInput};

const SELECT_COLUMNS: &str = "SELECT id, amount, category, note, date FROM expenses";

struct RawExpense {
    id: i64,
    amount: f64,
    category: String,
    note: Option<String>,
    date: String,
}

impl RawExpense {
    fn from_row(r: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: r.get(0)?,
            amount: r.get(1)?,
            category: r.get(2)?,
            note: r.get(3)?,
            date: r.get(4)?,
        })
    }

    fn into_expense(self) -> Result<Expense> {
        let amount = Decimal::try_from(self.amount)
            .with_context(|| format!("Invalid amount '{}' for expense {}", self.amount, self.id))?
            .normalize();
        Ok(Expense {
            id: self.id,
            amount,
            category: self.category,
            note: self.note,
            date: self.date,
        })
    }
}

fn amount_to_real(amount: &Decimal) -> Result<f64> {
    amount
        .to_f64()
        .ok_or_else(|| anyhow!("Amount {} does not fit a REAL column", amount))
}

pub fn insert(conn: &Connection, input: &ExpenseInput) -> Result<i64> {
    conn.execute(
        "INSERT INTO expenses(amount, category, note, date) VALUES (?1, ?2, ?3, ?4)",
        params![
            amount_to_real(&input.amount)?,
            input.category,
            input.note,
            input.date.to_string()
        ],
    )
    .context("Failed to insert expense")?;
    let id = conn.last_insert_rowid();
    tracing::info!(id, amount = %input.amount, category = %input.category, "expense added");
    Ok(id)
}

pub fn update(conn: &Connection, id: i64, input: &ExpenseInput) -> Result<()> {
    let n = conn
        .execute(
            "UPDATE expenses SET amount=?1, category=?2, note=?3, date=?4 WHERE id=?5",
            params![
                amount_to_real(&input.amount)?,
                input.category,
                input.note,
                input.date.to_string(),
                id
            ],
        )
        .with_context(|| format!("Failed to update expense {}", id))?;
    if n == 0 {
        return Err(anyhow!("Expense {} not found", id));
    }
    tracing::info!(id, "expense updated");
    Ok(())
}

pub fn delete(conn: &Connection, id: i64) -> Result<()> {
    let n = conn
        .execute("DELETE FROM expenses WHERE id=?1", params![id])
        .with_context(|| format!("Failed to delete expense {}", id))?;
    if n == 0 {
        return Err(anyhow!("Expense {} not found", id));
    }
    tracing::info!(id, "expense deleted");
    Ok(())
}

pub fn get(conn: &Connection, id: i64) -> Result<Expense> {
    let raw = conn
        .query_row(
            &format!("{} WHERE id=?1", SELECT_COLUMNS),
            params![id],
            RawExpense::from_row,
        )
        .optional()
        .with_context(|| format!("Failed to load expense {}", id))?
        .ok_or_else(|| anyhow!("Expense {} not found", id))?;
    raw.into_expense()
}

/// Every expense, newest date first, ties broken by the later id.
pub fn select_all(conn: &Connection) -> Result<Vec<Expense>> {
    let mut stmt = conn.prepare(&format!("{} ORDER BY date DESC, id DESC", SELECT_COLUMNS))?;
    let rows = stmt.query_map([], RawExpense::from_row)?;
    let mut data = Vec::new();
    for row in rows {
        data.push(row?.into_expense()?);
    }
    tracing::debug!(count = data.len(), "loaded expenses");
    Ok(data)
}
