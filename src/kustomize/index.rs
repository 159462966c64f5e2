// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! `kustomization.yaml` generation

use crate::constants::{dirs, kustomize};
use crate::error::{ManifestError, Result};
use crate::manifest::list_files;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// A Kustomize `Kustomization` or `Component` document
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Kustomization {
    pub api_version: String,
    pub kind: String,
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patches: Vec<Patch>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Patch {
    pub path: String,
}

impl Kustomization {
    pub fn kustomization(resources: Vec<String>) -> Self {
        Kustomization {
            api_version: kustomize::KUSTOMIZATION_API_VERSION.to_string(),
            kind: kustomize::KUSTOMIZATION_KIND.to_string(),
            resources,
            components: Vec::new(),
            patches: Vec::new(),
        }
    }

    pub fn component(resources: Vec<String>) -> Self {
        Kustomization {
            api_version: kustomize::COMPONENT_API_VERSION.to_string(),
            kind: kustomize::COMPONENT_KIND.to_string(),
            resources,
            components: Vec::new(),
            patches: Vec::new(),
        }
    }

    /// Write this document as `kustomization.yaml` in `dir`
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(kustomize::FILE_NAME);
        let yaml = serde_yaml::to_string(self)?;
        fs::write(&path, yaml).map_err(|e| ManifestError::io(&path, e))?;
        info!("Wrote {} with {} resources", path.display(), self.resources.len());
        Ok(path)
    }
}

pub fn is_patch_file(name: &str) -> bool {
    kustomize::PATCH_FILES.contains(&name)
}

/// Index of the base directory, pulling in the CRD component
pub fn base_kustomization(base_dir: &Path) -> Result<Kustomization> {
    let mut index = Kustomization::kustomization(list_files(base_dir)?);
    index.components = vec![format!("../{}/{}", dirs::COMPONENTS, dirs::CRDS)];
    Ok(index)
}

pub fn crds_component(crds_dir: &Path) -> Result<Kustomization> {
    Ok(Kustomization::component(list_files(crds_dir)?))
}

/// Index of the agentless-mode overlay: the base plus every non-patch file as
/// resources, and the fixed patch files as patches
pub fn overlay_kustomization(overlay_dir: &Path) -> Result<Kustomization> {
    let mut resources = vec![kustomize::OVERLAY_BASE.to_string()];
    resources.extend(
        list_files(overlay_dir)?
            .into_iter()
            .filter(|name| !is_patch_file(name)),
    );

    let mut index = Kustomization::kustomization(resources);
    index.patches = kustomize::PATCH_FILES
        .iter()
        .map(|path| Patch {
            path: path.to_string(),
        })
        .collect();
    Ok(index)
}

#[instrument]
pub fn write_base_kustomization(base_dir: &Path) -> Result<PathBuf> {
    base_kustomization(base_dir)?.write_to(base_dir)
}

#[instrument]
pub fn write_crds_component(crds_dir: &Path) -> Result<PathBuf> {
    crds_component(crds_dir)?.write_to(crds_dir)
}

#[instrument]
pub fn write_overlay_kustomization(overlay_dir: &Path) -> Result<PathBuf> {
    overlay_kustomization(overlay_dir)?.write_to(overlay_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn make_dir(files: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in files {
            fs::write(dir.path().join(name), "").unwrap();
        }
        dir
    }

    #[test]
    fn test_component_lists_files() {
        let dir = make_dir(&["y.yaml", "x.yaml"]);

        let path = write_crds_component(dir.path()).unwrap();

        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "apiVersion: kustomize.config.k8s.io/v1alpha1
kind: Component
resources:
- x.yaml
- y.yaml
"
        );
    }

    #[test]
    fn test_base_kustomization_references_crds_component() {
        let dir = make_dir(&["namespace.yaml", "classifier.yaml"]);

        let path = write_base_kustomization(dir.path()).unwrap();

        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "apiVersion: kustomize.config.k8s.io/v1beta1
kind: Kustomization
resources:
- classifier.yaml
- namespace.yaml
components:
- ../components/crds
"
        );
    }

    #[test]
    fn test_regenerating_does_not_list_itself() {
        let dir = make_dir(&["a.yaml"]);

        let first = fs::read_to_string(write_base_kustomization(dir.path()).unwrap()).unwrap();
        let second = fs::read_to_string(write_base_kustomization(dir.path()).unwrap()).unwrap();

        assert_eq!(first, second);
        assert!(!second.contains("- kustomization.yaml"));
    }

    #[test]
    fn test_overlay_separates_patches() {
        let dir = make_dir(&[
            "classifier.yaml",
            "addon-controller.yaml",
            "sveltoscluster-manager.yaml",
            "Classifier.yaml",
        ]);

        let index = overlay_kustomization(dir.path()).unwrap();

        assert_eq!(
            index.resources,
            vec![
                "../../base",
                "Classifier.yaml",
                "sveltoscluster-manager.yaml"
            ]
        );
        let patches: Vec<&str> = index.patches.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(
            patches,
            vec![
                "addon-controller.yaml",
                "classifier.yaml",
                "event-manager.yaml",
                "healthcheck-manager.yaml",
                "shard-controller.yaml"
            ]
        );
    }

    #[test]
    fn test_overlay_file_format() {
        let dir = make_dir(&["extra.yaml"]);

        let path = write_overlay_kustomization(dir.path()).unwrap();

        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "apiVersion: kustomize.config.k8s.io/v1beta1
kind: Kustomization
resources:
- ../../base
- extra.yaml
patches:
- path: addon-controller.yaml
- path: classifier.yaml
- path: event-manager.yaml
- path: healthcheck-manager.yaml
- path: shard-controller.yaml
"
        );
    }

    #[test]
    fn test_empty_dir_has_empty_resources() {
        let dir = make_dir(&[]);

        let index = crds_component(dir.path()).unwrap();
        assert!(index.resources.is_empty());

        let yaml = serde_yaml::to_string(&index).unwrap();
        let parsed: Kustomization = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, index);
    }

    #[test]
    fn test_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(write_crds_component(&dir.path().join("absent")).is_err());
    }
}
