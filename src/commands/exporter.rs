// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::{ExportFormat, Store};
use anyhow::Result;
use std::path::Path;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let fmt: ExportFormat = m.get_one::<String>("format").unwrap().parse()?;
    let out = m.get_one::<String>("out").unwrap();
    let count = store.export(Path::new(out), fmt)?;
    println!("Exported {} transactions to {}", count, out);
    Ok(())
}
