// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::Path;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use budgetmgr::config::{app_paths, Config};
use budgetmgr::store::{data_file, Store};
use budgetmgr::{cli, commands, utils};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if matches.get_flag("verbose") {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr).compact())
        .init();

    let paths = app_paths(matches.get_one::<String>("data-dir").map(Path::new))?;
    let mut config = Config::load_or_init(&paths.config_dir)?;
    utils::init_currency_symbol(config.currency_symbol());
    let store = Store::open(data_file(&paths.data_dir))?;
    let today = utils::reference_date(&matches)?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Data file at {}", store.path().display());
            println!("Settings at {}", config.path().display());
        }
        Some(("tx", sub)) => commands::transactions::handle(&store, &config, today, sub)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&store, &config, today, sub)?,
        Some(("report", sub)) => commands::reports::handle(&store, &config, today, sub)?,
        Some(("predict", sub)) => commands::predict::handle(&store, today, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&mut config, sub)?,
        Some(("import", sub)) => commands::importer::handle(&store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&store)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
