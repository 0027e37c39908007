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

use crate::error::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DEFAULT_DESCRIPTION: &str = "No description";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Expense,
    Income,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Expense => "expense",
            TransactionType::Income => "income",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "expense" => Ok(TransactionType::Expense),
            "income" => Ok(TransactionType::Income),
            other => Err(Error::UnknownType(other.to_string())),
        }
    }
}

/// A stored income or expense entry.
///
/// `date` keeps the raw text from the data file; rows with a date that does
/// not parse still load and are simply left out of date-based aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: String,
    pub description: String,
    pub amount: Decimal,
    pub r#type: TransactionType,
    pub notes: String,
    pub created_at: String,
}

impl Transaction {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()
    }

    pub fn is(&self, kind: TransactionType) -> bool {
        self.r#type == kind
    }
}

/// User input for a new entry; id and timestamp are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub r#type: TransactionType,
    pub notes: String,
}

impl NewTransaction {
    pub fn validate(&self) -> Result<(), Error> {
        if self.amount <= Decimal::ZERO {
            return Err(Error::NonPositiveAmount(self.amount.to_string()));
        }
        Ok(())
    }

    pub fn description_or_default(&self) -> String {
        let d = self.description.trim();
        if d.is_empty() {
            DEFAULT_DESCRIPTION.to_string()
        } else {
            d.to_string()
        }
    }
}

