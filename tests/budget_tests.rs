// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budgetmgr::commands::transactions::budget_overrun;
use budgetmgr::config::{app_paths, Config, Settings};
use budgetmgr::models::{Transaction, TransactionType};
use budgetmgr::utils::fmt_money_with;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tempfile::tempdir;

fn expense(date: &str, amount: i64) -> Transaction {
    Transaction {
        id: date.into(),
        date: date.into(),
        description: "Test".into(),
        amount: Decimal::from(amount),
        r#type: TransactionType::Expense,
        notes: String::new(),
        created_at: String::new(),
    }
}

#[test]
fn first_load_writes_defaults() {
    let dir = tempdir().unwrap();
    let cfg = Config::load_or_init(dir.path()).unwrap();
    assert_eq!(cfg.settings, Settings::default());
    assert_eq!(cfg.monthly_budget(), Decimal::ZERO);
    assert!(cfg.budget_alert_enabled());
    assert!(cfg.path().exists());
}

#[test]
fn missing_keys_fall_back_to_defaults() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("settings.json"), r#"{"monthly_budget": 250}"#).unwrap();
    let cfg = Config::load_or_init(dir.path()).unwrap();
    assert_eq!(cfg.monthly_budget(), Decimal::from(250));
    assert!(cfg.budget_alert_enabled());
}

#[test]
fn unreadable_settings_use_defaults() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();
    let cfg = Config::load_or_init(dir.path()).unwrap();
    assert_eq!(cfg.settings, Settings::default());
}

#[test]
fn budget_changes_persist_and_reject_negatives() {
    let dir = tempdir().unwrap();
    let mut cfg = Config::load_or_init(dir.path()).unwrap();
    cfg.set_monthly_budget(Decimal::from(500)).unwrap();
    cfg.set_budget_alert(false).unwrap();
    assert!(cfg.set_monthly_budget(Decimal::from(-1)).is_err());

    let reloaded = Config::load_or_init(dir.path()).unwrap();
    assert_eq!(reloaded.monthly_budget(), Decimal::from(500));
    assert!(!reloaded.budget_alert_enabled());
}

#[test]
fn overrun_only_reported_when_alerts_on_and_budget_set() {
    let dir = tempdir().unwrap();
    let mut cfg = Config::load_or_init(dir.path()).unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    let all = vec![expense("2024-03-02", 400), expense("2024-03-08", 200), expense("2024-02-01", 900)];

    assert_eq!(budget_overrun(&all, &cfg, today), None);

    cfg.set_monthly_budget(Decimal::from(500)).unwrap();
    assert_eq!(budget_overrun(&all, &cfg, today), Some(Decimal::from(100)));

    cfg.set_monthly_budget(Decimal::from(600)).unwrap();
    assert_eq!(budget_overrun(&all, &cfg, today), None);

    cfg.set_monthly_budget(Decimal::from(500)).unwrap();
    cfg.set_budget_alert(false).unwrap();
    assert_eq!(budget_overrun(&all, &cfg, today), None);
}

#[test]
fn data_dir_override_splits_config_and_data() {
    let dir = tempdir().unwrap();
    let paths = app_paths(Some(dir.path())).unwrap();
    assert_eq!(paths.config_dir, dir.path().join("config"));
    assert_eq!(paths.data_dir, dir.path().join("data"));
}

#[test]
fn currency_symbol_defaults_and_persists() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("settings.json"), r#"{"monthly_budget": 250}"#).unwrap();
    let mut cfg = Config::load_or_init(dir.path()).unwrap();
    assert_eq!(cfg.currency_symbol(), "$");

    cfg.set_currency_symbol(" € ").unwrap();
    assert!(cfg.set_currency_symbol("   ").is_err());

    let reloaded = Config::load_or_init(dir.path()).unwrap();
    assert_eq!(reloaded.currency_symbol(), "€");
    assert_eq!(reloaded.monthly_budget(), Decimal::from(250));
}

#[test]
fn money_formatting_uses_given_symbol() {
    assert_eq!(fmt_money_with("€", &Decimal::new(12345, 2)), "€123.45");
    assert_eq!(fmt_money_with("£", &Decimal::new(-5, 1)), "-£0.50");
}
