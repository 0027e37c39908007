// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::utils::{fmt_money, parse_decimal, pretty_table};
use anyhow::Result;

pub fn handle(config: &mut Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(config, sub)?,
        Some(("alert", sub)) => alert(config, sub)?,
        Some(("currency", sub)) => currency(config, sub)?,
        _ => show(config),
    }
    Ok(())
}

fn set(config: &mut Config, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    config.set_monthly_budget(amount)?;
    if amount.is_zero() {
        println!("Monthly budget cleared");
    } else {
        println!("Monthly budget set to {}", fmt_money(&amount));
    }
    Ok(())
}

fn alert(config: &mut Config, sub: &clap::ArgMatches) -> Result<()> {
    let on = sub.get_one::<String>("state").map(String::as_str) == Some("on");
    config.set_budget_alert(on)?;
    println!("Budget alerts {}", if on { "enabled" } else { "disabled" });
    Ok(())
}

fn currency(config: &mut Config, sub: &clap::ArgMatches) -> Result<()> {
    config.set_currency_symbol(sub.get_one::<String>("symbol").unwrap())?;
    println!("Currency symbol set to {}", config.currency_symbol());
    Ok(())
}

fn show(config: &Config) {
    let budget = config.monthly_budget();
    let shown = if budget.is_zero() {
        "No Budget Set".to_string()
    } else {
        fmt_money(&budget)
    };
    let alert = if config.budget_alert_enabled() { "on" } else { "off" };
    println!(
        "{}",
        pretty_table(
            &["Monthly Budget", "Alerts", "Currency", "Settings File"],
            vec![vec![
                shown,
                alert.into(),
                config.currency_symbol().to_string(),
                config.path().display().to_string(),
            ]],
        )
    );
}
