// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Sums, statistics and insight text over an in-memory list of transactions.
//!
//! Everything here is a pure function of its inputs: no I/O, no clock reads.
//! The reference date is always passed in by the caller.

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Transaction, TransactionType};
use crate::utils::fmt_money;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub count: usize,
    pub average: Decimal,
    pub max: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthSummary {
    pub expenses: Decimal,
    pub income: Decimal,
    pub balance: Decimal,
    pub budget_remaining: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTotal {
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub expenses: Decimal,
}

pub fn sum_by_type(transactions: &[Transaction], kind: TransactionType) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.is(kind))
        .map(|t| t.amount)
        .sum()
}

pub fn month_total(
    transactions: &[Transaction],
    year: i32,
    month: u32,
    kind: TransactionType,
) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.is(kind))
        .filter(|t| {
            t.parsed_date()
                .is_some_and(|d| d.year() == year && d.month() == month)
        })
        .map(|t| t.amount)
        .sum()
}

pub fn compute_statistics(transactions: &[Transaction]) -> Statistics {
    let amounts: Vec<Decimal> = transactions
        .iter()
        .filter(|t| t.is(TransactionType::Expense))
        .map(|t| t.amount)
        .collect();
    if amounts.is_empty() {
        return Statistics {
            count: 0,
            average: Decimal::ZERO,
            max: Decimal::ZERO,
        };
    }
    let total: Decimal = amounts.iter().sum();
    let max = amounts.iter().copied().max().unwrap_or(Decimal::ZERO);
    Statistics {
        count: amounts.len(),
        average: total / Decimal::from(amounts.len()),
        max,
    }
}

/// Human readable observations for the analytics screen.
///
/// `month_spending` is the current calendar month's expense total; it is
/// compared against `budget` only when a budget is set (`budget > 0`).
/// Spending exactly equal to the budget counts as within budget.
pub fn generate_insights(stats: &Statistics, budget: Decimal, month_spending: Decimal) -> Vec<String> {
    if stats.count == 0 {
        return vec![
            "No transaction data available for the selected period.".to_string(),
            "Start tracking your expenses to get personalized insights!".to_string(),
        ];
    }

    let mut insights = vec![
        format!("You've made {} transactions in this period.", stats.count),
        format!("Your average expense is {}.", fmt_money(&stats.average)),
        format!(
            "Your highest single expense was {}.",
            fmt_money(&stats.max)
        ),
    ];

    if budget > Decimal::ZERO {
        if month_spending > budget {
            insights.push(format!(
                "You've exceeded your monthly budget by {}!",
                fmt_money(&(month_spending - budget))
            ));
        } else {
            insights.push(format!(
                "You're within budget! {} remaining.",
                fmt_money(&(budget - month_spending))
            ));
        }
    }
    insights
}

pub fn month_summary(transactions: &[Transaction], now: NaiveDate, budget: Decimal) -> MonthSummary {
    let expenses = month_total(transactions, now.year(), now.month(), TransactionType::Expense);
    let income = month_total(transactions, now.year(), now.month(), TransactionType::Income);
    MonthSummary {
        expenses,
        income,
        balance: income - expenses,
        budget_remaining: (budget > Decimal::ZERO).then(|| budget - expenses),
    }
}

/// Share of `max` taken by `amount`, in percent. Zero when `max` is not positive.
pub fn bar_percentage(amount: Decimal, max: Decimal) -> Decimal {
    if max <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    amount / max * Decimal::ONE_HUNDRED
}

/// Expense totals stepping back 30 days at a time from `now`, oldest first.
pub fn monthly_expense_totals(
    transactions: &[Transaction],
    months: usize,
    now: NaiveDate,
) -> Vec<MonthlyTotal> {
    let mut out: Vec<MonthlyTotal> = Vec::with_capacity(months);
    for i in 0..months {
        let d = now - Duration::days(30 * i as i64);
        if out.iter().any(|m| m.year == d.year() && m.month == d.month()) {
            continue;
        }
        out.push(MonthlyTotal {
            label: d.format("%b").to_string(),
            year: d.year(),
            month: d.month(),
            expenses: month_total(transactions, d.year(), d.month(), TransactionType::Expense),
        });
    }
    out.reverse();
    out
}
