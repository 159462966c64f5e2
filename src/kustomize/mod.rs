// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Post-processing of the generated Kustomize tree.

pub mod index;
pub mod split;

pub use index::{
    write_base_kustomization, write_crds_component, write_overlay_kustomization, Kustomization,
};
pub use split::{extract_crds, extract_namespaces, remove_service_monitors, PassSummary};

use crate::config::Config;
use crate::error::Result;
use tracing::info;

/// Run every cleanup step on the tree described by `config`:
///
/// - Namespaces move out of the base files into `base/namespace.yaml`
/// - CRDs move out of the base files into `components/crds/<name>.yaml`
/// - ServiceMonitors are dropped
/// - `kustomization.yaml` is regenerated for base, the CRD component and the
///   agentless-mode overlay
pub fn run_cleanup(config: &Config) -> Result<()> {
    let layout = config.layout();

    let summary = extract_namespaces(&layout.base_dir, &config.namespace)?;
    info!("Namespace extraction: {:?}", summary);

    let (summary, crds) = extract_crds(&layout.base_dir, &layout.crds_dir)?;
    info!("CRD extraction: {:?}, {} CRD files", summary, crds.len());

    let summary = remove_service_monitors(&layout.base_dir)?;
    info!("ServiceMonitor removal: {:?}", summary);

    write_base_kustomization(&layout.base_dir)?;
    write_crds_component(&layout.crds_dir)?;
    write_overlay_kustomization(&layout.overlay_dir)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::parse_resources;
    use std::fs;
    use std::path::Path;

    const CONTROLLER: &str = "apiVersion: v1
kind: Namespace
metadata:
  name: projectsveltos
---
apiVersion: apiextensions.k8s.io/v1
kind: CustomResourceDefinition
metadata:
  name: clusterprofiles.config.projectsveltos.io
---
apiVersion: monitoring.coreos.com/v1
kind: ServiceMonitor
metadata:
  name: addon-controller
  namespace: projectsveltos
---
apiVersion: apps/v1
kind: Deployment
metadata:
  name: addon-controller
  namespace: projectsveltos
";

    fn make_tree(root: &Path) -> Config {
        let config = Config {
            root: root.to_path_buf(),
            namespace: "projectsveltos".to_string(),
        };
        let layout = config.layout();
        fs::create_dir_all(&layout.base_dir).unwrap();
        fs::create_dir_all(&layout.overlay_dir).unwrap();
        fs::write(layout.base_dir.join("addon-controller.yaml"), CONTROLLER).unwrap();
        fs::write(layout.overlay_dir.join("addon-controller.yaml"), "").unwrap();
        fs::write(layout.overlay_dir.join("mgmt-cluster.yaml"), "").unwrap();
        config
    }

    #[test]
    fn test_run_cleanup() {
        let root = tempfile::tempdir().unwrap();
        let config = make_tree(root.path());
        let layout = config.layout();

        run_cleanup(&config).unwrap();

        let controller =
            fs::read_to_string(layout.base_dir.join("addon-controller.yaml")).unwrap();
        let kinds: Vec<String> = parse_resources(&controller)
            .unwrap()
            .iter()
            .map(|r| r.kind().to_string())
            .collect();
        assert_eq!(kinds, vec!["Deployment"]);

        assert!(layout
            .crds_dir
            .join("clusterprofiles.config.projectsveltos.io.yaml")
            .is_file());

        let base: Kustomization = serde_yaml::from_str(
            &fs::read_to_string(layout.base_dir.join("kustomization.yaml")).unwrap(),
        )
        .unwrap();
        assert_eq!(base.resources, vec!["addon-controller.yaml", "namespace.yaml"]);
        assert_eq!(base.components, vec!["../components/crds"]);

        let crds: Kustomization = serde_yaml::from_str(
            &fs::read_to_string(layout.crds_dir.join("kustomization.yaml")).unwrap(),
        )
        .unwrap();
        assert_eq!(crds.kind, "Component");
        assert_eq!(
            crds.resources,
            vec!["clusterprofiles.config.projectsveltos.io.yaml"]
        );

        let overlay: Kustomization = serde_yaml::from_str(
            &fs::read_to_string(layout.overlay_dir.join("kustomization.yaml")).unwrap(),
        )
        .unwrap();
        assert_eq!(overlay.resources, vec!["../../base", "mgmt-cluster.yaml"]);
        assert_eq!(overlay.patches.len(), 5);
    }

    #[test]
    fn test_run_cleanup_twice_is_stable() {
        let root = tempfile::tempdir().unwrap();
        let config = make_tree(root.path());
        let layout = config.layout();

        run_cleanup(&config).unwrap();
        let controller =
            fs::read_to_string(layout.base_dir.join("addon-controller.yaml")).unwrap();
        let index = fs::read_to_string(layout.base_dir.join("kustomization.yaml")).unwrap();

        run_cleanup(&config).unwrap();

        assert_eq!(
            fs::read_to_string(layout.base_dir.join("addon-controller.yaml")).unwrap(),
            controller
        );
        assert_eq!(
            fs::read_to_string(layout.base_dir.join("kustomization.yaml")).unwrap(),
            index
        );
    }

    #[test]
    fn test_run_cleanup_without_base_fails() {
        let root = tempfile::tempdir().unwrap();
        let config = Config {
            root: root.path().to_path_buf(),
            namespace: "projectsveltos".to_string(),
        };

        assert!(run_cleanup(&config).is_err());
    }
}
