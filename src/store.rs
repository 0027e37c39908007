// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Flat CSV file holding every transaction, one row each.

use anyhow::{Context, Result};
use chrono::Local;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::Error;
use crate::models::{DEFAULT_DESCRIPTION, NewTransaction, Transaction, TransactionType};
use crate::utils::{parse_date, parse_decimal};

pub const TRANSACTIONS_FILE: &str = "transactions.csv";
const HEADERS: [&str; 7] = [
    "id",
    "date",
    "description",
    "amount",
    "type",
    "notes",
    "created_at",
];
const REQUIRED_IMPORT_COLUMNS: [&str; 4] = ["date", "description", "amount", "type"];

/// One row exactly as it sits in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: String,
    pub date: String,
    pub description: String,
    pub amount: String,
    pub r#type: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub created_at: String,
}

impl TryFrom<&TransactionRecord> for Transaction {
    type Error = anyhow::Error;

    fn try_from(r: &TransactionRecord) -> Result<Self> {
        Ok(Transaction {
            id: r.id.clone(),
            date: r.date.clone(),
            description: r.description.clone(),
            amount: parse_decimal(&r.amount)?,
            r#type: TransactionType::from_str(&r.r#type)?,
            notes: r.notes.clone(),
            created_at: r.created_at.clone(),
        })
    }
}

impl From<&Transaction> for TransactionRecord {
    fn from(t: &Transaction) -> Self {
        TransactionRecord {
            id: t.id.clone(),
            date: t.date.clone(),
            description: t.description.clone(),
            amount: t.amount.to_string(),
            r#type: t.r#type.to_string(),
            notes: t.notes.clone(),
            created_at: t.created_at.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

pub fn data_file(data_dir: &Path) -> PathBuf {
    data_dir.join(TRANSACTIONS_FILE)
}

fn now_stamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Opens the data file, creating it (and its directory) with a header row
    /// when missing.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).context("Failed to create data dir")?;
        }
        let store = Store { path };
        if !store.path.exists() {
            store.write_rows(&[])?;
            info!(path = %store.path.display(), "initialized transactions file");
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> Result<Vec<TransactionRecord>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .with_context(|| format!("Open transactions file {}", self.path.display()))?;
        let mut out = Vec::new();
        for rec in rdr.deserialize::<TransactionRecord>() {
            match rec {
                Ok(r) => out.push(r),
                Err(e) => warn!(error = %e, "skipping malformed row"),
            }
        }
        Ok(out)
    }

    /// Every readable transaction, newest date first. Rows whose amount or
    /// type cannot be parsed are skipped.
    pub fn list_all(&self) -> Result<Vec<Transaction>> {
        let mut out: Vec<Transaction> = Vec::new();
        for r in self.records()? {
            match Transaction::try_from(&r) {
                Ok(t) => out.push(t),
                Err(e) => warn!(id = %r.id, error = %e, "skipping unreadable transaction"),
            }
        }
        out.sort_by(|a, b| b.date.cmp(&a.date));
        debug!(count = out.len(), "loaded transactions");
        Ok(out)
    }

    pub fn list_recent(&self, limit: usize) -> Result<Vec<Transaction>> {
        let mut all = self.list_all()?;
        all.truncate(limit);
        Ok(all)
    }

    pub fn insert(&self, new: NewTransaction) -> Result<String> {
        new.validate()?;
        let t = Transaction {
            id: Uuid::new_v4().to_string(),
            date: new.date.to_string(),
            description: new.description_or_default(),
            amount: new.amount,
            r#type: new.r#type,
            notes: new.notes.trim().to_string(),
            created_at: now_stamp(),
        };
        self.append(&[TransactionRecord::from(&t)])?;
        info!(id = %t.id, kind = %t.r#type, amount = %t.amount, "recorded transaction");
        Ok(t.id)
    }

    /// Removes the row with `id`. Returns false when no row matched, in
    /// which case the file is not rewritten. Every other row is written back
    /// as it was read, including rows too malformed to deserialize.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let rows = self.raw_rows()?;
        let before = rows.len();
        let kept: Vec<StringRecord> = rows
            .into_iter()
            .filter(|r| r.get(0) != Some(id))
            .collect();
        if kept.len() == before {
            return Ok(false);
        }
        self.write_rows(&kept)?;
        info!(%id, "deleted transaction");
        Ok(true)
    }

    fn raw_rows(&self) -> Result<Vec<StringRecord>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .with_context(|| format!("Open transactions file {}", self.path.display()))?;
        let mut out = Vec::new();
        for rec in rdr.records() {
            out.push(rec?);
        }
        Ok(out)
    }

    /// Appends rows from another CSV file. Required columns are `date`,
    /// `description`, `amount` and `type`; `id`, `notes` and `created_at` are
    /// filled in when absent.
    pub fn import_csv(&self, source: &Path) -> Result<usize> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_path(source)
            .with_context(|| format!("Open CSV {}", source.display()))?;
        let headers = rdr.headers()?.clone();
        let col = |name: &str| headers.iter().position(|h| h.trim().eq_ignore_ascii_case(name));

        let missing: Vec<&str> = REQUIRED_IMPORT_COLUMNS
            .iter()
            .copied()
            .filter(|c| col(c).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(Error::MissingColumns(missing.join(", ")).into());
        }
        let (date_i, desc_i, amount_i, type_i) = (
            col("date").unwrap_or_default(),
            col("description").unwrap_or_default(),
            col("amount").unwrap_or_default(),
            col("type").unwrap_or_default(),
        );
        let (id_i, notes_i, created_i) = (col("id"), col("notes"), col("created_at"));

        let mut rows = Vec::new();
        for (line, result) in rdr.records().enumerate() {
            let rec = result?;
            let field = |i: usize| rec.get(i).unwrap_or("").trim().to_string();
            let optional = |i: Option<usize>| i.map(field).filter(|s| !s.is_empty());

            let date_raw = field(date_i);
            let date = parse_date(&date_raw)
                .with_context(|| format!("Invalid transaction date '{}' on row {}", date_raw, line + 1))?;
            let amount_raw = field(amount_i);
            let amount = parse_decimal(&amount_raw)
                .with_context(|| format!("Invalid amount '{}' on row {}", amount_raw, line + 1))?;
            if amount <= Decimal::ZERO {
                return Err(anyhow::Error::new(Error::NonPositiveAmount(amount_raw))
                    .context(format!("Invalid amount on row {}", line + 1)));
            }
            let kind = TransactionType::from_str(&field(type_i))?;

            rows.push(TransactionRecord {
                id: optional(id_i).unwrap_or_else(|| Uuid::new_v4().to_string()),
                date: date.to_string(),
                description: Some(field(desc_i))
                    .filter(|d| !d.is_empty())
                    .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
                amount: amount.to_string(),
                r#type: kind.to_string(),
                notes: optional(notes_i).unwrap_or_default(),
                created_at: optional(created_i).unwrap_or_else(now_stamp),
            });
        }
        self.append(&rows)?;
        info!(source = %source.display(), count = rows.len(), "imported transactions");
        Ok(rows.len())
    }

    /// Writes every stored row to `out`, oldest first.
    pub fn export(&self, out: &Path, format: ExportFormat) -> Result<usize> {
        let mut records = self.records()?;
        records.sort_by(|a, b| a.date.cmp(&b.date));
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_path(out)
                    .with_context(|| format!("Create {}", out.display()))?;
                for r in &records {
                    wtr.serialize(r)?;
                }
                if records.is_empty() {
                    wtr.write_record(HEADERS)?;
                }
                wtr.flush()?;
            }
            ExportFormat::Json => {
                fs::write(out, serde_json::to_string_pretty(&records)?)
                    .with_context(|| format!("Write {}", out.display()))?;
            }
        }
        Ok(records.len())
    }

    fn append(&self, rows: &[TransactionRecord]) -> Result<()> {
        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Open transactions file {}", self.path.display()))?;
        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);
        for r in rows {
            wtr.serialize(r)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Rewrites the whole file: header, then `rows` verbatim.
    fn write_rows(&self, rows: &[StringRecord]) -> Result<()> {
        let mut wtr = WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .with_context(|| format!("Write transactions file {}", self.path.display()))?;
        wtr.write_record(HEADERS)?;
        for r in rows {
            wtr.write_record(r)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
