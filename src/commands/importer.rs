// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::Store;
use anyhow::Result;
use std::path::Path;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let path = m.get_one::<String>("path").unwrap().trim();
    let count = store.import_csv(Path::new(path))?;
    println!("Imported {} transactions from {}", count, path);
    Ok(())
}
