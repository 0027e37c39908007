// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::{
    bar_percentage, compute_statistics, generate_insights, month_total, monthly_expense_totals,
    sum_by_type, Statistics,
};
use crate::config::Config;
use crate::models::{Transaction, TransactionType};
use crate::period::{filter_by_interval, resolve_period, Period};
use crate::predictor::spending_trend;
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, period_from_args, pretty_table, text_bar};
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(store: &Store, config: &Config, today: NaiveDate, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("stats", sub)) => stats(store, config, today, sub)?,
        Some(("overview", sub)) => overview(store, today, sub)?,
        Some(("monthly", sub)) => monthly(store, today, sub)?,
        Some(("trend", sub)) => trend(store, today, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
pub struct StatsReport {
    pub period: String,
    pub statistics: Statistics,
    pub month_income: Decimal,
    pub insights: Vec<String>,
}

pub fn stats_report(
    all: &[Transaction],
    period: Period,
    budget: Decimal,
    today: NaiveDate,
) -> StatsReport {
    let scoped = filter_by_interval(all, &resolve_period(period, today));
    let statistics = compute_statistics(&scoped);
    let spending = month_total(all, today.year(), today.month(), TransactionType::Expense);
    let insights = generate_insights(&statistics, budget, spending);
    StatsReport {
        period: period.to_string(),
        month_income: month_total(all, today.year(), today.month(), TransactionType::Income),
        statistics,
        insights,
    }
}

fn stats(store: &Store, config: &Config, today: NaiveDate, sub: &clap::ArgMatches) -> Result<()> {
    let period = period_from_args(sub)?;
    let report = stats_report(&store.list_all()?, period, config.monthly_budget(), today);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &report)? {
        return Ok(());
    }
    let s = &report.statistics;
    println!("Analysis period: {}", report.period);
    println!(
        "{}",
        pretty_table(
            &["Total Transactions", "Average Expense", "Highest Expense", "Income (this month)"],
            vec![vec![
                s.count.to_string(),
                fmt_money(&s.average),
                fmt_money(&s.max),
                fmt_money(&report.month_income),
            ]],
        )
    );
    println!("Spending insights:");
    for line in &report.insights {
        println!("  • {}", line);
    }
    Ok(())
}

#[derive(Serialize)]
pub struct OverviewRow {
    pub label: String,
    pub amount: Decimal,
    pub percent: Decimal,
}

/// Totals for the period, each scaled against the larger of the two.
/// A side with no transactions is left out.
pub fn overview_rows(scoped: &[Transaction]) -> Vec<OverviewRow> {
    let has = |k: TransactionType| scoped.iter().any(|t| t.is(k));
    let expenses = sum_by_type(scoped, TransactionType::Expense);
    let income = sum_by_type(scoped, TransactionType::Income);
    let max = expenses.max(income);

    let mut rows = Vec::new();
    if has(TransactionType::Expense) {
        rows.push(OverviewRow {
            label: "Total Expenses".into(),
            amount: expenses,
            percent: bar_percentage(expenses, max),
        });
    }
    if has(TransactionType::Income) {
        rows.push(OverviewRow {
            label: "Total Income".into(),
            amount: income,
            percent: bar_percentage(income, max),
        });
    }
    rows
}

fn overview(store: &Store, today: NaiveDate, sub: &clap::ArgMatches) -> Result<()> {
    let period = period_from_args(sub)?;
    let scoped = filter_by_interval(&store.list_all()?, &resolve_period(period, today));
    let rows = overview_rows(&scoped);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        return Ok(());
    }
    if rows.is_empty() {
        println!("No data available for the selected period ({})", period);
        return Ok(());
    }
    let data = rows
        .iter()
        .map(|r| vec![r.label.clone(), text_bar(r.percent), fmt_money(&r.amount)])
        .collect();
    println!("Spending overview: {}", period);
    println!("{}", pretty_table(&["", "", "Amount"], data));
    Ok(())
}

fn monthly(store: &Store, today: NaiveDate, sub: &clap::ArgMatches) -> Result<()> {
    let months = *sub.get_one::<u32>("months").unwrap_or(&6) as usize;
    let totals = monthly_expense_totals(&store.list_all()?, months, today);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &totals)? {
        return Ok(());
    }
    if totals.iter().all(|m| m.expenses.is_zero()) {
        println!("No trend data available");
        return Ok(());
    }
    let max = totals
        .iter()
        .map(|m| m.expenses)
        .max()
        .unwrap_or(Decimal::ZERO);
    let data = totals
        .iter()
        .map(|m| {
            vec![
                format!("{} {}", m.label, m.year),
                text_bar(bar_percentage(m.expenses, max)),
                fmt_money(&m.expenses.round()),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Month", "", "Expenses"], data));
    Ok(())
}

fn trend(store: &Store, today: NaiveDate, sub: &clap::ArgMatches) -> Result<()> {
    let months = *sub.get_one::<u32>("months").unwrap_or(&3);
    let points = spending_trend(&store.list_all()?, months, today);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &points)? {
        let data = points
            .iter()
            .map(|p| {
                vec![
                    p.month.clone(),
                    fmt_money(&p.income),
                    fmt_money(&p.expenses),
                    fmt_money(&p.balance),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Month", "Income", "Expenses", "Balance"], data)
        );
    }
    Ok(())
}
