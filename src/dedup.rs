// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Removal of repeated Namespace resources from combined release manifests

use crate::config::Config;
use crate::constants::RELEASE_MANIFESTS;
use crate::error::Result;
use crate::manifest::{read_resources, rewrite_file, Resource, ResourceKind};
use std::path::Path;
use tracing::{debug, info, instrument};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DedupSummary {
    pub kept: usize,
    pub dropped: usize,
}

/// Keep every resource except Namespaces after the first one, in input order
pub fn dedup_namespaces(resources: &[Resource]) -> Vec<&Resource> {
    let mut seen_namespace = false;
    resources
        .iter()
        .filter(|resource| match resource.kind() {
            ResourceKind::Namespace if seen_namespace => {
                debug!("Dropping duplicate {}", resource);
                false
            }
            ResourceKind::Namespace => {
                seen_namespace = true;
                true
            }
            _ => true,
        })
        .collect()
}

/// Rewrite `path` keeping only its first Namespace
#[instrument]
pub fn remove_duplicate_namespaces(path: &Path) -> Result<DedupSummary> {
    info!("Read file {}", path.display());
    let resources = read_resources(path)?;
    let kept = dedup_namespaces(&resources);

    let summary = DedupSummary {
        kept: kept.len(),
        dropped: resources.len() - kept.len(),
    };
    rewrite_file(path, kept)?;
    Ok(summary)
}

/// Deduplicate every release manifest in the manifest directory
pub fn run_dedup(config: &Config) -> Result<()> {
    let manifest_dir = config.layout().manifest_dir;
    for name in RELEASE_MANIFESTS {
        let summary = remove_duplicate_namespaces(&manifest_dir.join(name))?;
        info!(
            "{}: kept {} resources, dropped {} duplicate namespaces",
            name, summary.kept, summary.dropped
        );
    }
    Ok(())
}
