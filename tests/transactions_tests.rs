// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budgetmgr::models::{NewTransaction, TransactionType};
use budgetmgr::store::{data_file, Store};
use budgetmgr::{cli, commands::transactions};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tempfile::TempDir;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn setup() -> (TempDir, Store) {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(data_file(dir.path())).unwrap();
    let rows = [
        ("2024-01-20", "Groceries"),
        ("2024-02-14", "Flowers"),
        ("2024-03-01", "Grocery run"),
        ("2024-03-03", "Cinema"),
    ];
    for (date, description) in rows {
        store
            .insert(NewTransaction {
                date: d(date),
                description: description.into(),
                amount: Decimal::TEN,
                r#type: TransactionType::Expense,
                notes: String::new(),
            })
            .unwrap();
    }
    (dir, store)
}

fn list_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["budgetmgr", "tx", "list"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some(("tx", tx_m)) => match tx_m.subcommand() {
            Some(("list", list_m)) => list_m.clone(),
            _ => panic!("no list subcommand"),
        },
        _ => panic!("no tx subcommand"),
    }
}

#[test]
fn list_limit_respected() {
    let (_dir, store) = setup();
    let rows = transactions::query_rows(&store, d("2024-03-10"), &list_matches(&["--limit", "2"])).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, "2024-03-03");
}

#[test]
fn list_without_period_shows_everything() {
    let (_dir, store) = setup();
    let rows = transactions::query_rows(&store, d("2024-03-10"), &list_matches(&[])).unwrap();
    assert_eq!(rows.len(), 4);
}

#[test]
fn list_by_period_and_search() {
    let (_dir, store) = setup();
    let today = d("2024-03-10");

    let rows = transactions::query_rows(&store, today, &list_matches(&["--period", "last-month"])).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, "Flowers");

    let rows = transactions::query_rows(&store, today, &list_matches(&["--search", "GROCER"])).unwrap();
    assert_eq!(rows.len(), 2);

    let rows = transactions::query_rows(
        &store,
        today,
        &list_matches(&["--from", "2024-01-01", "--to", "2024-02-14", "--search", "grocer"]),
    )
    .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date, "2024-01-20");
}

#[test]
fn list_rejects_unknown_period_and_reversed_range() {
    let (_dir, store) = setup();
    let today = d("2024-03-10");
    assert!(transactions::query_rows(&store, today, &list_matches(&["--period", "fortnight"])).is_err());
    assert!(
        transactions::query_rows(
            &store,
            today,
            &list_matches(&["--from", "2024-03-05", "--to", "2024-03-01"])
        )
        .is_err()
    );
}

#[test]
fn add_and_delete_through_cli() {
    let (_dir, store) = setup();
    let dir = tempfile::tempdir().unwrap();
    let config = budgetmgr::config::Config::load_or_init(dir.path()).unwrap();
    let today = d("2024-03-10");

    let matches = cli::build_cli().get_matches_from([
        "budgetmgr", "tx", "add", "--amount", "42.5", "--type", "income", "--description", "Refund",
    ]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    transactions::handle(&store, &config, today, tx_m).unwrap();

    let added = store
        .list_all()
        .unwrap()
        .into_iter()
        .find(|t| t.description == "Refund")
        .expect("added row");
    assert_eq!(added.date, "2024-03-10");
    assert_eq!(added.r#type, TransactionType::Income);
    assert_eq!(added.amount, "42.5".parse::<Decimal>().unwrap());

    let matches = cli::build_cli().get_matches_from(["budgetmgr", "tx", "delete", added.id.as_str()]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    transactions::handle(&store, &config, today, tx_m).unwrap();
    assert_eq!(store.list_all().unwrap().len(), 4);
}

#[test]
fn add_rejects_zero_amount() {
    let (_dir, store) = setup();
    let dir = tempfile::tempdir().unwrap();
    let config = budgetmgr::config::Config::load_or_init(dir.path()).unwrap();
    let matches = cli::build_cli().get_matches_from(["budgetmgr", "tx", "add", "--amount", "0"]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    assert!(transactions::handle(&store, &config, d("2024-03-10"), tx_m).is_err());
    assert_eq!(store.list_all().unwrap().len(), 4);
}
