// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Field checks run before anything reaches the store.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::models::{Expense, ExpenseInput};

/// Raw text as typed into the add or edit form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseForm {
    pub amount: String,
    pub category: String,
    pub note: Option<String>,
    pub date: Option<String>,
}

impl ExpenseForm {
    /// Pre-fills the edit form with a stored record.
    pub fn from_expense(e: &Expense) -> Self {
        Self {
            amount: e.amount.to_string(),
            category: e.category.clone(),
            note: e.note.clone(),
            date: Some(e.date.clone()),
        }
    }

    /// Add form: the date is stamped with `today` unless one was given.
    pub fn validate_new(&self, today: NaiveDate) -> Result<ExpenseInput, ValidationError> {
        let date = match self.date.as_deref().map(str::trim) {
            None | Some("") => today,
            Some(s) => parse_day(s)?,
        };
        self.build(date)
    }

    /// Edit form: the date field must be filled in.
    pub fn validate_edit(&self) -> Result<ExpenseInput, ValidationError> {
        let raw = self.date.as_deref().map(str::trim).unwrap_or_default();
        if raw.is_empty() {
            return Err(ValidationError::EmptyDate);
        }
        let date = parse_day(raw)?;
        self.build(date)
    }

    fn build(&self, date: NaiveDate) -> Result<ExpenseInput, ValidationError> {
        let amount = parse_amount(&self.amount)?;
        let category = self.category.trim();
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        let note = self
            .note
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);
        Ok(ExpenseInput {
            amount,
            category: category.to_string(),
            note,
            date,
        })
    }
}

pub fn parse_amount(s: &str) -> Result<Decimal, ValidationError> {
    let s = s.trim();
    let amount = s
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(s))
        .map_err(|_| ValidationError::InvalidAmount(s.to_string()))?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount(amount));
    }
    Ok(amount)
}

pub fn parse_day(s: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(s.to_string()))
}
