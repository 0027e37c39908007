// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Month snapshots and the run-rate projection of month-end balance.

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::models::{Transaction, TransactionType};
use crate::period::days_in_month;
use crate::utils::fmt_money;

const FULL_CONFIDENCE_DAYS: u32 = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthSnapshot {
    pub month_name: String,
    pub year: i32,
    pub month: u32,
    pub transactions: Vec<Transaction>,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub days_in_month: u32,
    pub days_passed: u32,
}

impl MonthSnapshot {
    pub fn balance(&self) -> Decimal {
        self.total_income - self.total_expenses
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionDetails {
    pub current_balance: Decimal,
    pub projected_balance: Decimal,
    pub daily_expense_avg: Decimal,
    pub daily_income_avg: Decimal,
    pub days_passed: u32,
    pub days_remaining: u32,
    pub projected_total_expenses: Decimal,
    pub projected_total_income: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionResult {
    /// `None` when the current month has no transactions yet.
    pub can_survive: Option<bool>,
    pub confidence: Decimal,
    pub message: String,
    pub trend: Option<String>,
    pub details: Option<PredictionDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub month: String,
    pub expenses: Decimal,
    pub income: Decimal,
    pub balance: Decimal,
}

/// Aggregates one calendar month.
///
/// The target month is found by stepping back `30 * months_ago` days from
/// `now`, so for long windows a short month can be skipped or a long one
/// visited twice.
pub fn month_snapshot(all: &[Transaction], months_ago: u32, now: NaiveDate) -> MonthSnapshot {
    let target = now - Duration::days(30 * i64::from(months_ago));
    let (year, month) = (target.year(), target.month());
    let days_in_month = days_in_month(year, month);
    let days_passed = if months_ago == 0 {
        now.day()
    } else {
        days_in_month
    };

    let mut transactions = Vec::new();
    let mut total_income = Decimal::ZERO;
    let mut total_expenses = Decimal::ZERO;
    for t in all {
        let Some(d) = t.parsed_date() else {
            continue;
        };
        if d.year() != year || d.month() != month {
            continue;
        }
        match t.r#type {
            TransactionType::Income => total_income += t.amount,
            TransactionType::Expense => total_expenses += t.amount,
        }
        transactions.push(t.clone());
    }

    MonthSnapshot {
        month_name: target.format("%B %Y").to_string(),
        year,
        month,
        transactions,
        total_income,
        total_expenses,
        days_in_month,
        days_passed,
    }
}

pub fn predict_month_survival(all: &[Transaction], now: NaiveDate) -> PredictionResult {
    let current = month_snapshot(all, 0, now);
    let previous = month_snapshot(all, 1, now);

    if current.transactions.is_empty() {
        debug!(month = %current.month_name, "no transactions this month, skipping projection");
        return PredictionResult {
            can_survive: None,
            confidence: Decimal::ZERO,
            message: "Not enough data to make prediction".to_string(),
            trend: None,
            details: None,
        };
    }

    let current_balance = current.balance();
    let days_passed = current.days_passed.max(1);
    let elapsed = Decimal::from(days_passed);

    let daily_expense_avg = current.total_expenses / elapsed;
    let daily_income_avg = current.total_income / elapsed;

    let days_remaining = current.days_in_month.saturating_sub(days_passed);
    let remaining = Decimal::from(days_remaining);
    let projected_expenses = current.total_expenses + daily_expense_avg * remaining;
    let projected_income = current.total_income + daily_income_avg * remaining;
    let projected_balance = projected_income - projected_expenses;

    let can_survive = projected_balance >= Decimal::ZERO;
    let confidence = confidence_score(days_passed);

    let trend = if previous.transactions.is_empty() {
        None
    } else {
        let prev_balance = previous.balance();
        let msg = if current_balance > prev_balance {
            "Your financial situation is improving compared to last month."
        } else if current_balance < prev_balance {
            "Your expenses have increased compared to last month."
        } else {
            "Your financial pattern is stable."
        };
        Some(msg.to_string())
    };

    let message = if can_survive {
        format!(
            "Prediction: You can survive this month with an estimated balance of {}",
            fmt_money(&projected_balance)
        )
    } else {
        format!(
            "Warning: You may face a deficit of {} by month end",
            fmt_money(&projected_balance.abs())
        )
    };

    debug!(
        %projected_balance,
        %confidence,
        days_passed,
        days_remaining,
        "month projection computed"
    );

    PredictionResult {
        can_survive: Some(can_survive),
        confidence,
        message,
        trend,
        details: Some(PredictionDetails {
            current_balance,
            projected_balance,
            daily_expense_avg,
            daily_income_avg,
            days_passed,
            days_remaining,
            projected_total_expenses: projected_expenses,
            projected_total_income: projected_income,
        }),
    }
}

/// Percentage that grows with elapsed days and saturates after a week.
pub fn confidence_score(days_passed: u32) -> Decimal {
    if days_passed >= FULL_CONFIDENCE_DAYS {
        return Decimal::ONE_HUNDRED;
    }
    (Decimal::from(days_passed) / Decimal::from(FULL_CONFIDENCE_DAYS) * Decimal::ONE_HUNDRED)
        .round_dp(1)
}

/// Per-month totals for the last `months` snapshots that have any
/// transactions, oldest first.
pub fn spending_trend(all: &[Transaction], months: u32, now: NaiveDate) -> Vec<TrendPoint> {
    let mut points: Vec<TrendPoint> = (0..months)
        .map(|i| month_snapshot(all, i, now))
        .filter(|s| !s.transactions.is_empty())
        .map(|s| TrendPoint {
            balance: s.balance(),
            month: s.month_name,
            expenses: s.total_expenses,
            income: s.total_income,
        })
        .collect();
    points.reverse();
    points
}
