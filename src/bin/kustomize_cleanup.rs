// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use tracing::{error, info};

use manifest_tools::config::Config;
use manifest_tools::kustomize::run_cleanup;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    info!("Cleaning up kustomize tree under {}", config.root.display());

    run_cleanup(&config)
        .inspect_err(|e| error!("Kustomize cleanup failed: {}", e))
        .context("kustomize cleanup failed")?;

    info!("Kustomize tree updated");
    Ok(())
}
