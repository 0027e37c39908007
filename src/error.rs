// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Validation failures raised before anything touches the store or settings.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Amount must be greater than 0 (got {0})")]
    NonPositiveAmount(String),

    #[error("Budget cannot be negative (got {0})")]
    NegativeBudget(String),

    #[error("Currency symbol cannot be empty")]
    EmptyCurrencySymbol,

    #[error("Unknown transaction type '{0}', expected expense|income")]
    UnknownType(String),

    #[error("Unknown period '{0}'")]
    UnknownPeriod(String),

    #[error("Invalid date range: {start} is after {end}")]
    InvalidRange { start: String, end: String },

    #[error("Unknown format: {0} (use csv|json)")]
    UnknownFormat(String),

    #[error("Invalid file format. Missing required columns: {0}")]
    MissingColumns(String),
}
