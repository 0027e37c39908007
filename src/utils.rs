// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use once_cell::sync::OnceCell;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::DATE_FORMAT;
use crate::period::Period;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";
static CURRENCY_SYMBOL: OnceCell<String> = OnceCell::new();
const BAR_WIDTH: usize = 30;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Sets the symbol [`fmt_money`] uses for the rest of the process; only the
/// first call has an effect.
pub fn init_currency_symbol(symbol: &str) {
    let _ = CURRENCY_SYMBOL.set(symbol.to_string());
}

pub fn currency_symbol() -> &'static str {
    CURRENCY_SYMBOL
        .get()
        .map(String::as_str)
        .unwrap_or(DEFAULT_CURRENCY_SYMBOL)
}

pub fn fmt_money(d: &Decimal) -> String {
    fmt_money_with(currency_symbol(), d)
}

pub fn fmt_money_with(symbol: &str, d: &Decimal) -> String {
    let v = d.round_dp(2);
    if v.is_sign_negative() && !v.is_zero() {
        format!("-{}{:.2}", symbol, v.abs())
    } else {
        format!("{}{:.2}", symbol, v.abs())
    }
}

/// Reference date for every calendar computation: `--today` when given,
/// otherwise the local date.
pub fn reference_date(m: &clap::ArgMatches) -> Result<NaiveDate> {
    match m.get_one::<String>("today") {
        Some(s) => parse_date(s),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Resolves `--period` or `--from/--to` into a [`Period`]; defaults to this month.
pub fn period_from_args(m: &clap::ArgMatches) -> Result<Period> {
    let from = m.get_one::<String>("from");
    let to = m.get_one::<String>("to");
    if let (Some(from), Some(to)) = (from, to) {
        return Ok(Period::custom(parse_date(from)?, parse_date(to)?)?);
    }
    match m.get_one::<String>("period") {
        Some(p) => Ok(p.parse::<Period>()?),
        None => Ok(Period::ThisMonth),
    }
}

pub fn text_bar(percent: Decimal) -> String {
    let pct = percent.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
    let filled = (pct * Decimal::from(BAR_WIDTH) / Decimal::ONE_HUNDRED)
        .round()
        .to_usize()
        .unwrap_or(0)
        .min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "·".repeat(BAR_WIDTH - filled))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
