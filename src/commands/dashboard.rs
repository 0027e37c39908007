// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::{month_summary, MonthSummary};
use crate::config::Config;
use crate::models::Transaction;
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

const RECENT_LIMIT: usize = 5;

#[derive(Serialize)]
pub struct Dashboard {
    pub summary: MonthSummary,
    pub recent: Vec<Transaction>,
}

pub fn handle(store: &Store, config: &Config, today: NaiveDate, m: &clap::ArgMatches) -> Result<()> {
    let all = store.list_all()?;
    let view = Dashboard {
        summary: month_summary(&all, today, config.monthly_budget()),
        recent: all.into_iter().take(RECENT_LIMIT).collect(),
    };
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &view)? {
        return Ok(());
    }

    let s = &view.summary;
    let remaining = s
        .budget_remaining
        .map(|r| fmt_money(&r))
        .unwrap_or_else(|| "No Budget Set".to_string());
    println!(
        "{}",
        pretty_table(
            &["Total Expenses", "Total Income", "Balance", "Budget Remaining"],
            vec![vec![
                fmt_money(&s.expenses),
                fmt_money(&s.income),
                fmt_money(&s.balance),
                remaining,
            ]],
        )
    );

    if view.recent.is_empty() {
        println!("No transactions yet. Add one with `budgetmgr tx add --amount <AMOUNT>`.");
        return Ok(());
    }
    let rows = view
        .recent
        .iter()
        .map(|t| {
            vec![
                t.date.clone(),
                t.description.clone(),
                t.r#type.to_string(),
                fmt_money(&t.amount),
            ]
        })
        .collect();
    println!("Recent transactions:");
    println!("{}", pretty_table(&["Date", "Description", "Type", "Amount"], rows));
    Ok(())
}
