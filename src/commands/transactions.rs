// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::month_total;
use crate::config::Config;
use crate::models::{NewTransaction, Transaction, TransactionType};
use crate::period::{DateInterval, filter_by_description, filter_by_interval, resolve_period};
use crate::store::Store;
use crate::utils::{
    fmt_money, maybe_print_json, parse_date, parse_decimal, period_from_args, pretty_table,
};
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::warn;

pub fn handle(store: &Store, config: &Config, today: NaiveDate, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, config, today, sub)?,
        Some(("list", sub)) => list(store, today, sub)?,
        Some(("delete", sub)) => delete(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &Store, config: &Config, today: NaiveDate, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => today,
    };
    let kind = TransactionType::from_str(sub.get_one::<String>("type").unwrap())?;
    let new = NewTransaction {
        date,
        description: sub.get_one::<String>("description").cloned().unwrap_or_default(),
        amount,
        r#type: kind,
        notes: sub.get_one::<String>("notes").cloned().unwrap_or_default(),
    };
    let id = store.insert(new)?;
    println!("Recorded {} {} on {} (id: {})", kind, fmt_money(&amount), date, id);

    if kind == TransactionType::Expense {
        if let Some(over) = budget_overrun(&store.list_all()?, config, today) {
            warn!(%over, "monthly budget exceeded");
            println!("Budget alert: this month's spending is {} over budget.", fmt_money(&over));
        }
    }
    Ok(())
}

/// Amount by which the current month's expenses exceed the budget, when
/// alerts are on and a budget is set.
pub fn budget_overrun(all: &[Transaction], config: &Config, today: NaiveDate) -> Option<Decimal> {
    let budget = config.monthly_budget();
    if !config.budget_alert_enabled() || budget <= Decimal::ZERO {
        return None;
    }
    let spent = month_total(all, today.year(), today.month(), TransactionType::Expense);
    (spent > budget).then(|| spent - budget)
}

fn list(store: &Store, today: NaiveDate, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, today, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.date.clone(),
                    t.description.clone(),
                    fmt_money(&t.amount),
                    t.r#type.to_string(),
                    t.notes.clone(),
                    t.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Description", "Amount", "Type", "Notes", "Id"], rows)
        );
    }
    Ok(())
}

pub fn query_rows(store: &Store, today: NaiveDate, sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let all = store.list_all()?;
    let interval = if sub.contains_id("period") || sub.contains_id("from") {
        resolve_period(period_from_args(sub)?, today)
    } else {
        DateInterval::UNBOUNDED
    };
    let mut data = filter_by_interval(&all, &interval);
    if let Some(term) = sub.get_one::<String>("search") {
        data = filter_by_description(&data, term);
    }
    if let Some(limit) = sub.get_one::<usize>("limit") {
        data.truncate(*limit);
    }
    Ok(data)
}

fn delete(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    for id in sub.get_many::<String>("id").into_iter().flatten() {
        if store.delete(id)? {
            println!("Deleted {}", id);
        } else {
            println!("No transaction with id {}", id);
        }
    }
    Ok(())
}
