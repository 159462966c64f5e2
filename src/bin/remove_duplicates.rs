// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use tracing::{error, info};

use manifest_tools::config::Config;
use manifest_tools::dedup::run_dedup;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    info!(
        "Removing duplicate namespaces from {}",
        config.layout().manifest_dir.display()
    );

    run_dedup(&config)
        .inspect_err(|e| error!("Duplicate namespace removal failed: {}", e))
        .context("duplicate namespace removal failed")?;

    Ok(())
}
