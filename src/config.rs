// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{dirs, DEFAULT_NAMESPACE};
use crate::error::{ManifestError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Tool configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Repository root holding the `kustomize/` and `manifest/` trees
    pub root: PathBuf,
    /// Name of the Namespace written to `namespace.yaml`
    pub namespace: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Without `MANIFEST_TOOLS_ROOT` the root is the grandparent of the
    /// current directory, since the tools run from `scripts/<tool>/`.
    pub fn from_env() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| ManifestError::io(".", e))?;
        Self::resolve(
            &cwd,
            env::var("MANIFEST_TOOLS_ROOT").ok(),
            env::var("MANIFEST_TOOLS_NAMESPACE").ok(),
        )
    }

    fn resolve(cwd: &Path, root: Option<String>, namespace: Option<String>) -> Result<Self> {
        let root = match root.filter(|r| !r.is_empty()) {
            Some(root) => PathBuf::from(root),
            None => cwd
                .parent()
                .and_then(Path::parent)
                .map(Path::to_path_buf)
                .ok_or_else(|| {
                    ManifestError::Config(format!(
                        "{} has no grandparent directory",
                        cwd.display()
                    ))
                })?,
        };

        Ok(Config {
            root,
            namespace: namespace
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
        })
    }

    pub fn layout(&self) -> Layout {
        Layout::new(&self.root)
    }
}

/// Directories the tools read and rewrite, relative to the repository root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub base_dir: PathBuf,
    pub crds_dir: PathBuf,
    pub overlay_dir: PathBuf,
    pub manifest_dir: PathBuf,
}

impl Layout {
    pub fn new(root: &Path) -> Self {
        let kustomize = root.join(dirs::KUSTOMIZE);
        Layout {
            base_dir: kustomize.join(dirs::BASE),
            crds_dir: kustomize.join(dirs::COMPONENTS).join(dirs::CRDS),
            overlay_dir: kustomize.join(dirs::OVERLAYS).join(dirs::AGENTLESS_MODE),
            manifest_dir: root.join(dirs::MANIFEST),
        }
    }
}
