// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::Error;
use crate::utils::DEFAULT_CURRENCY_SYMBOL;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Budgetmgr", "budgetmgr"));

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone)]
pub struct AppPaths {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

/// Platform directories, or `<home>/config` and `<home>/data` when overridden.
pub fn app_paths(override_home: Option<&Path>) -> Result<AppPaths> {
    if let Some(home) = override_home {
        return Ok(AppPaths {
            config_dir: home.join("config"),
            data_dir: home.join("data"),
        });
    }
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    Ok(AppPaths {
        config_dir: proj.config_dir().to_path_buf(),
        data_dir: proj.data_dir().to_path_buf(),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Zero means no budget is set.
    pub monthly_budget: Decimal,
    pub budget_alert: bool,
    pub currency_symbol: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            monthly_budget: Decimal::ZERO,
            budget_alert: true,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub settings: Settings,
    path: PathBuf,
}

impl Config {
    /// Reads `settings.json` from `config_dir`, writing defaults on first use.
    /// Missing keys fall back to their defaults; an unreadable file is
    /// reported and replaced by defaults in memory.
    pub fn load_or_init(config_dir: &Path) -> Result<Self> {
        fs::create_dir_all(config_dir)
            .with_context(|| format!("Failed to create config dir {}", config_dir.display()))?;
        let path = config_dir.join(SETTINGS_FILE);
        if !path.exists() {
            let cfg = Config {
                settings: Settings::default(),
                path,
            };
            cfg.save()?;
            return Ok(cfg);
        }

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let settings = match serde_json::from_str::<Settings>(&raw) {
            Ok(s) => s,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "settings unreadable, using defaults");
                Settings::default()
            }
        };
        debug!(path = %path.display(), "loaded settings");
        Ok(Config { settings, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn monthly_budget(&self) -> Decimal {
        self.settings.monthly_budget
    }

    pub fn budget_alert_enabled(&self) -> bool {
        self.settings.budget_alert
    }

    pub fn currency_symbol(&self) -> &str {
        &self.settings.currency_symbol
    }

    pub fn set_currency_symbol(&mut self, symbol: &str) -> Result<()> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(Error::EmptyCurrencySymbol.into());
        }
        self.settings.currency_symbol = symbol.to_string();
        self.save()
    }

    pub fn set_monthly_budget(&mut self, budget: Decimal) -> Result<()> {
        if budget < Decimal::ZERO {
            return Err(Error::NegativeBudget(budget.to_string()).into());
        }
        self.settings.monthly_budget = budget;
        self.save()
    }

    pub fn set_budget_alert(&mut self, enabled: bool) -> Result<()> {
        self.settings.budget_alert = enabled;
        self.save()
    }

    pub fn save(&self) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.settings)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}
