// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::predictor::predict_month_survival;
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use chrono::NaiveDate;

pub fn handle(store: &Store, today: NaiveDate, m: &clap::ArgMatches) -> Result<()> {
    let result = predict_month_survival(&store.list_all()?, today);
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &result)? {
        return Ok(());
    }

    println!("{}", result.message);
    println!("Confidence: {}%", result.confidence);
    if let Some(trend) = &result.trend {
        println!("{}", trend);
    }
    if let Some(d) = &result.details {
        let rows = vec![
            vec!["Current balance".into(), fmt_money(&d.current_balance)],
            vec!["Daily expense average".into(), fmt_money(&d.daily_expense_avg)],
            vec!["Daily income average".into(), fmt_money(&d.daily_income_avg)],
            vec!["Days passed".into(), d.days_passed.to_string()],
            vec!["Days remaining".into(), d.days_remaining.to_string()],
            vec!["Projected expenses".into(), fmt_money(&d.projected_total_expenses)],
            vec!["Projected income".into(), fmt_money(&d.projected_total_income)],
            vec!["Projected balance".into(), fmt_money(&d.projected_balance)],
        ];
        println!("{}", pretty_table(&["", "Value"], rows));
    }
    Ok(())
}
