// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Passes that move resources out of the combined base manifests

use crate::constants::NAMESPACE_FILE_NAME;
use crate::error::{ManifestError, Result};
use crate::manifest::{list_files, read_resources, rewrite_file, write_resource_file};
use crate::manifest::{Resource, ResourceKind};
use k8s_openapi::api::core::v1::Namespace;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Outcome of one pass over a directory
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PassSummary {
    /// Files rewritten
    pub files: usize,
    /// Resources left in their file
    pub kept: usize,
    /// Resources taken out of their file
    pub removed: usize,
}

/// Rewrite every file in `dir` without the resources `extract` claims.
///
/// `extract` is called for each removed resource, in file then document order.
fn filter_dir<P, F>(dir: &Path, remove: P, mut extract: F) -> Result<PassSummary>
where
    P: Fn(&ResourceKind) -> bool,
    F: FnMut(&Resource) -> Result<()>,
{
    let mut summary = PassSummary::default();

    for name in list_files(dir)? {
        let path = dir.join(&name);
        info!("Processing file {}", path.display());

        let resources = read_resources(&path)?;
        let (removed, kept): (Vec<&Resource>, Vec<&Resource>) =
            resources.iter().partition(|r| remove(r.kind()));

        for &resource in &removed {
            extract(resource)?;
        }
        rewrite_file(&path, kept.iter().copied())?;

        summary.files += 1;
        summary.kept += kept.len();
        summary.removed += removed.len();
    }

    Ok(summary)
}

/// The Namespace written to `namespace.yaml`
pub fn namespace_resource(name: &str) -> Namespace {
    Namespace {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Remove Namespaces from every file in `base_dir` and write the single
/// `namespace.yaml` that replaces them
#[instrument]
pub fn extract_namespaces(base_dir: &Path, namespace: &str) -> Result<PassSummary> {
    let summary = filter_dir(
        base_dir,
        |kind| *kind == ResourceKind::Namespace,
        |resource| {
            info!("Removed namespace {}", resource.name());
            Ok(())
        },
    )?;

    fs::create_dir_all(base_dir).map_err(|e| ManifestError::io(base_dir, e))?;
    let path = base_dir.join(NAMESPACE_FILE_NAME);
    let yaml = serde_yaml::to_string(&namespace_resource(namespace))?;
    fs::write(&path, yaml).map_err(|e| ManifestError::io(&path, e))?;
    info!("Created {}", path.display());

    Ok(summary)
}

/// Move every CRD out of the files in `base_dir` into `<crds_dir>/<name>.yaml`.
///
/// Returns the CRD files written. Two CRDs with the same name end up in the
/// same file, the last one read wins.
#[instrument]
pub fn extract_crds(base_dir: &Path, crds_dir: &Path) -> Result<(PassSummary, Vec<PathBuf>)> {
    fs::create_dir_all(crds_dir).map_err(|e| ManifestError::io(crds_dir, e))?;

    let mut written = Vec::new();
    let summary = filter_dir(
        base_dir,
        |kind| *kind == ResourceKind::CustomResourceDefinition,
        |resource| {
            let path = crds_dir.join(format!("{}.yaml", resource.name()));
            info!("create file in {} for CRD {}", crds_dir.display(), resource.name());
            write_resource_file(&path, resource)?;
            if !written.contains(&path) {
                written.push(path);
            }
            Ok(())
        },
    )?;

    Ok((summary, written))
}

/// Drop every ServiceMonitor from the files in `base_dir`
#[instrument]
pub fn remove_service_monitors(base_dir: &Path) -> Result<PassSummary> {
    filter_dir(
        base_dir,
        |kind| *kind == ResourceKind::ServiceMonitor,
        |resource| {
            info!("Removed ServiceMonitor {}", resource);
            Ok(())
        },
    )
}
