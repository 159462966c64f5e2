// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Directory names of the generated Kustomize tree
pub mod dirs {
    pub const KUSTOMIZE: &str = "kustomize";
    pub const BASE: &str = "base";
    pub const COMPONENTS: &str = "components";
    pub const CRDS: &str = "crds";
    pub const OVERLAYS: &str = "overlays";
    pub const AGENTLESS_MODE: &str = "agentless-mode";
    pub const MANIFEST: &str = "manifest";
}

/// Resource kinds the tools act on
pub mod kinds {
    pub const NAMESPACE: &str = "Namespace";
    pub const CUSTOM_RESOURCE_DEFINITION: &str = "CustomResourceDefinition";
    pub const SERVICE_MONITOR: &str = "ServiceMonitor";
}

/// Kustomize index file settings
pub mod kustomize {
    pub const FILE_NAME: &str = "kustomization.yaml";
    pub const KUSTOMIZATION_API_VERSION: &str = "kustomize.config.k8s.io/v1beta1";
    pub const COMPONENT_API_VERSION: &str = "kustomize.config.k8s.io/v1alpha1";
    pub const KUSTOMIZATION_KIND: &str = "Kustomization";
    pub const COMPONENT_KIND: &str = "Component";
    /// Resource entry pointing an overlay back at the base
    pub const OVERLAY_BASE: &str = "../../base";

    /// Files in the agentless-mode overlay that are patches, not resources
    pub const PATCH_FILES: [&str; 5] = [
        "addon-controller.yaml",
        "classifier.yaml",
        "event-manager.yaml",
        "healthcheck-manager.yaml",
        "shard-controller.yaml",
    ];
}

/// File written into the base directory in place of the extracted Namespaces
pub const NAMESPACE_FILE_NAME: &str = "namespace.yaml";

/// Namespace every component is installed into
pub const DEFAULT_NAMESPACE: &str = "projectsveltos";

/// Release manifests deduplicated by `remove-duplicates`, in processing order
pub const RELEASE_MANIFESTS: [&str; 3] = [
    "manifest.yaml",
    "dashboard-manifest.yaml",
    "agents_in_mgmt_cluster_manifest.yaml",
];

/// Separator written after every serialized resource
pub const DOCUMENT_SEPARATOR: &str = "---\n";
