// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the `expenses` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub amount: Decimal,
    pub category: String,
    pub note: Option<String>,
    pub date: String, // YYYY-MM-DD as stored
}

impl Expense {
    /// Calendar date of the expense, `None` if the stored text is malformed.
    pub fn day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }
}

/// Validated fields for an insert or an update. Built by [`crate::form::ExpenseForm`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseInput {
    pub amount: Decimal,
    pub category: String,
    pub note: Option<String>,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    #[default]
    All,
    ThisWeek,
    ThisMonth,
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "week" | "this-week" => Ok(FilterMode::ThisWeek),
            "month" | "this-month" => Ok(FilterMode::ThisMonth),
            other => Err(format!(
                "Unknown filter '{}' (use all|week|month)",
                other
            )),
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FilterMode::All => "all",
            FilterMode::ThisWeek => "this week",
            FilterMode::ThisMonth => "this month",
        };
        f.write_str(s)
    }
}

/// The state a summary or listing is computed for. Owned by the caller and
/// never mutated by the aggregation functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub filter: FilterMode,
    pub today: NaiveDate,
}

impl ViewState {
    pub fn new(filter: FilterMode, today: NaiveDate) -> Self {
        Self { filter, today }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSegment {
    pub label: String,
    pub value: Decimal,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub filter: FilterMode,
    pub total: Decimal,
    pub count: usize,
    pub by_category: Vec<CategoryTotal>,
    pub segments: Vec<ChartSegment>,
}
