// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use spendwise::error::ValidationError;
use spendwise::form::ExpenseForm;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 17).unwrap()
}

fn form(amount: &str, category: &str) -> ExpenseForm {
    ExpenseForm {
        amount: amount.into(),
        category: category.into(),
        ..Default::default()
    }
}

#[test]
fn new_expense_defaults_to_today_and_trims() {
    let mut f = form(" 12.50 ", "  Food ");
    f.note = Some("   ".into());
    let input = f.validate_new(today()).unwrap();
    assert_eq!(input.amount, "12.5".parse::<Decimal>().unwrap());
    assert_eq!(input.category, "Food");
    assert_eq!(input.note, None);
    assert_eq!(input.date, today());
}

#[test]
fn new_expense_keeps_explicit_date() {
    let mut f = form("3", "Books");
    f.date = Some("2023-09-01".into());
    let input = f.validate_new(today()).unwrap();
    assert_eq!(input.date, NaiveDate::from_ymd_opt(2023, 9, 1).unwrap());
}

#[test]
fn amount_must_be_a_positive_number() {
    assert_eq!(
        form("abc", "Food").validate_new(today()),
        Err(ValidationError::InvalidAmount("abc".into()))
    );
    assert_eq!(
        form("", "Food").validate_new(today()),
        Err(ValidationError::InvalidAmount("".into()))
    );
    assert!(matches!(
        form("0", "Food").validate_new(today()),
        Err(ValidationError::NonPositiveAmount(_))
    ));
    assert!(matches!(
        form("-4.2", "Food").validate_new(today()),
        Err(ValidationError::NonPositiveAmount(_))
    ));
}

#[test]
fn category_must_not_be_blank() {
    assert_eq!(
        form("5", "   ").validate_new(today()),
        Err(ValidationError::EmptyCategory)
    );
    let mut f = form("5", "");
    f.date = Some("2024-01-01".into());
    assert_eq!(f.validate_edit(), Err(ValidationError::EmptyCategory));
}

#[test]
fn edit_requires_a_date() {
    let f = form("5", "Food");
    assert_eq!(f.validate_edit(), Err(ValidationError::EmptyDate));
    let mut f = form("5", "Food");
    f.date = Some(" ".into());
    assert_eq!(f.validate_edit(), Err(ValidationError::EmptyDate));
    f.date = Some("17/01/2024".into());
    assert_eq!(
        f.validate_edit(),
        Err(ValidationError::InvalidDate("17/01/2024".into()))
    );
    f.date = Some("2024-01-16".into());
    assert!(f.validate_edit().is_ok());
}
