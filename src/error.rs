// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

/// Rejections raised while checking user-entered expense fields.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid amount '{0}', expected a number")]
    InvalidAmount(String),

    #[error("Amount must be greater than zero, got {0}")]
    NonPositiveAmount(Decimal),

    #[error("Category cannot be empty")]
    EmptyCategory,

    #[error("Date cannot be empty")]
    EmptyDate,

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}
