// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budgetmgr::commands::doctor;
use budgetmgr::error::Error;
use budgetmgr::models::{NewTransaction, TransactionType};
use budgetmgr::store::{data_file, Store};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::io::Write;
use tempfile::tempdir;

fn new_tx(date: &str, amount: &str, kind: TransactionType, description: &str) -> NewTransaction {
    NewTransaction {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        description: description.into(),
        amount: amount.parse().unwrap(),
        r#type: kind,
        notes: String::new(),
    }
}

#[test]
fn open_creates_file_with_header() {
    let dir = tempdir().unwrap();
    let store = Store::open(data_file(&dir.path().join("data"))).unwrap();
    let contents = std::fs::read_to_string(store.path()).unwrap();
    assert_eq!(contents.trim(), "id,date,description,amount,type,notes,created_at");
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn insert_list_delete_round_trip() {
    let dir = tempdir().unwrap();
    let store = Store::open(data_file(dir.path())).unwrap();
    let a = store
        .insert(new_tx("2024-03-01", "12.50", TransactionType::Expense, "Lunch"))
        .unwrap();
    let b = store
        .insert(new_tx("2024-03-05", "1500", TransactionType::Income, "Salary"))
        .unwrap();
    assert_ne!(a, b);

    let all = store.list_all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, b, "newest date first");
    assert_eq!(all[1].amount, "12.50".parse::<Decimal>().unwrap());
    assert_eq!(all[1].r#type, TransactionType::Expense);
    assert!(!all[1].created_at.is_empty());

    assert_eq!(store.list_recent(1).unwrap().len(), 1);

    assert!(store.delete(&a).unwrap());
    assert!(!store.delete(&a).unwrap());
    let left = store.list_all().unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].id, b);
}

#[test]
fn insert_rejects_non_positive_amount() {
    let dir = tempdir().unwrap();
    let store = Store::open(data_file(dir.path())).unwrap();
    let err = store
        .insert(new_tx("2024-03-01", "0", TransactionType::Expense, "Free"))
        .unwrap_err();
    assert_eq!(
        err.downcast_ref::<Error>(),
        Some(&Error::NonPositiveAmount("0".into()))
    );
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn blank_description_gets_placeholder() {
    let dir = tempdir().unwrap();
    let store = Store::open(data_file(dir.path())).unwrap();
    store
        .insert(new_tx("2024-03-01", "3", TransactionType::Expense, "   "))
        .unwrap();
    assert_eq!(store.list_all().unwrap()[0].description, "No description");
}

#[test]
fn unreadable_rows_are_skipped_but_kept_on_delete() {
    let dir = tempdir().unwrap();
    let path = data_file(dir.path());
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(
        f,
        "id,date,description,amount,type,notes,created_at\n\
         a,2024-03-01,Good,10,expense,,\n\
         b,2024-03-02,Bad amount,ten,expense,,\n\
         c,03/04/2024,Bad date,5,income,,\n\
         d,2024-03-04,Other,7,expense,,"
    )
    .unwrap();
    drop(f);

    let store = Store::open(&path).unwrap();
    let ids: Vec<String> = store.list_all().unwrap().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec!["d", "a", "c"]);

    assert!(store.delete("d").unwrap());
    let ids: Vec<String> = store.records().unwrap().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn short_rows_survive_deleting_another_row() {
    let dir = tempdir().unwrap();
    let path = data_file(dir.path());
    let store = Store::open(&path).unwrap();
    let id = store
        .insert(new_tx("2024-03-01", "4", TransactionType::Expense, "Tea"))
        .unwrap();
    let mut f = std::fs::OpenOptions::new().append(true).open(&path).unwrap();
    writeln!(f, "handedit-1,2024-03-02,Coffee").unwrap();
    drop(f);

    assert!(store.delete(&id).unwrap());
    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "id,date,description,amount,type,notes,created_at",
            "handedit-1,2024-03-02,Coffee",
        ]
    );
    assert!(!store.delete("missing").unwrap());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), text);
}

#[test]
fn doctor_flags_each_problem() {
    let dir = tempdir().unwrap();
    let path = data_file(dir.path());
    std::fs::write(
        &path,
        "id,date,description,amount,type,notes,created_at\n\
         a,2024-03-01,Fine,10,expense,,\n\
         a,2024-13-01,Dup and bad date,-2,transfer,,\n\
         c,2024-03-03,Bad amount,abc,income,,\n",
    )
    .unwrap();
    let store = Store::open(&path).unwrap();
    let issues: Vec<String> = doctor::find_issues(&store.records().unwrap())
        .into_iter()
        .map(|r| r[0].clone())
        .collect();
    assert_eq!(
        issues,
        vec![
            "duplicate_id",
            "unparsable_date",
            "non_positive_amount",
            "unknown_type",
            "invalid_amount",
        ]
    );
}
