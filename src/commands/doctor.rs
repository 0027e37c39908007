// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{TransactionType, DATE_FORMAT};
use crate::store::{Store, TransactionRecord};
use crate::utils::pretty_table;
use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashSet;

pub fn handle(store: &Store) -> Result<()> {
    let rows = find_issues(&store.records()?);
    if rows.is_empty() {
        println!("doctor: no issues found in {}", store.path().display());
    } else {
        println!("{}", pretty_table(&["Issue", "Id", "Detail"], rows));
    }
    Ok(())
}

/// One `[issue, id, detail]` row per problem; a record can yield several.
pub fn find_issues(records: &[TransactionRecord]) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut seen = HashSet::new();
    for r in records {
        let mut push = |issue: &str, detail: &str| {
            rows.push(vec![issue.to_string(), r.id.clone(), detail.to_string()]);
        };
        if !seen.insert(r.id.as_str()) {
            push("duplicate_id", "");
        }
        // Skipped by every date-based report
        if NaiveDate::parse_from_str(r.date.trim(), DATE_FORMAT).is_err() {
            push("unparsable_date", &r.date);
        }
        match r.amount.trim().parse::<Decimal>() {
            Ok(a) if a <= Decimal::ZERO => push("non_positive_amount", &r.amount),
            Ok(_) => {}
            Err(_) => push("invalid_amount", &r.amount),
        }
        if r.r#type.parse::<TransactionType>().is_err() {
            push("unknown_type", &r.r#type);
        }
    }
    rows
}
