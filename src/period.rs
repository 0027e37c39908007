// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Named analysis periods and the date intervals they resolve to.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::error::Error;
use crate::models::Transaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Today,
    Yesterday,
    /// Rolling seven days ending today, not a Monday-Sunday week.
    ThisWeek,
    ThisMonth,
    LastMonth,
    Last3Months,
    ThisYear,
    AllTime,
    Custom { start: NaiveDate, end: NaiveDate },
}

impl Period {
    pub const PRESETS: [Period; 8] = [
        Period::Today,
        Period::Yesterday,
        Period::ThisWeek,
        Period::ThisMonth,
        Period::LastMonth,
        Period::Last3Months,
        Period::ThisYear,
        Period::AllTime,
    ];

    pub fn custom(start: NaiveDate, end: NaiveDate) -> Result<Self, Error> {
        if start > end {
            return Err(Error::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Period::Custom { start, end })
    }

    fn slug(&self) -> &'static str {
        match self {
            Period::Today => "today",
            Period::Yesterday => "yesterday",
            Period::ThisWeek => "this-week",
            Period::ThisMonth => "this-month",
            Period::LastMonth => "last-month",
            Period::Last3Months => "last-3-months",
            Period::ThisYear => "this-year",
            Period::AllTime => "all-time",
            Period::Custom { .. } => "custom",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Today => f.write_str("Today"),
            Period::Yesterday => f.write_str("Yesterday"),
            Period::ThisWeek => f.write_str("This Week"),
            Period::ThisMonth => f.write_str("This Month"),
            Period::LastMonth => f.write_str("Last Month"),
            Period::Last3Months => f.write_str("Last 3 Months"),
            Period::ThisYear => f.write_str("This Year"),
            Period::AllTime => f.write_str("All Time"),
            Period::Custom { start, end } => write!(f, "{} to {}", start, end),
        }
    }
}

/// Accepts slugs (`last-3-months`) as well as display labels (`Last 3 Months`).
impl FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        Period::PRESETS
            .into_iter()
            .find(|p| p.slug() == key)
            .ok_or_else(|| Error::UnknownPeriod(s.to_string()))
    }
}

/// Inclusive date interval; a missing bound is open on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateInterval {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateInterval {
    pub const UNBOUNDED: DateInterval = DateInterval {
        start: None,
        end: None,
    };

    pub fn closed(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|s| date >= s) && self.end.is_none_or(|e| date <= e)
    }
}

pub fn resolve_period(period: Period, now: NaiveDate) -> DateInterval {
    match period {
        Period::Today => DateInterval::closed(now, now),
        Period::Yesterday => {
            let y = now - Duration::days(1);
            DateInterval::closed(y, y)
        }
        Period::ThisWeek => DateInterval::closed(now - Duration::days(7), now),
        Period::ThisMonth => DateInterval::closed(first_of_month(now), now),
        Period::LastMonth => {
            let last = first_of_month(now) - Duration::days(1);
            DateInterval::closed(first_of_month(last), last)
        }
        Period::Last3Months => DateInterval::closed(now - Duration::days(90), now),
        Period::ThisYear => DateInterval::closed(now.with_ordinal(1).unwrap_or(now), now),
        Period::AllTime => DateInterval::UNBOUNDED,
        Period::Custom { start, end } => DateInterval::closed(start, end),
    }
}

/// Keeps transactions whose date falls inside `interval`, in input order.
/// Unparsable dates never match a bounded interval; an unbounded interval
/// returns the input unchanged.
pub fn filter_by_interval(transactions: &[Transaction], interval: &DateInterval) -> Vec<Transaction> {
    if interval.is_unbounded() {
        return transactions.to_vec();
    }
    transactions
        .iter()
        .filter(|t| t.parsed_date().is_some_and(|d| interval.contains(d)))
        .cloned()
        .collect()
}

pub fn filter_by_description(transactions: &[Transaction], term: &str) -> Vec<Transaction> {
    let needle = term.trim().to_lowercase();
    transactions
        .iter()
        .filter(|t| needle.is_empty() || t.description.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}
