// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::kustomize;
use crate::error::{ManifestError, Result};
use std::fs;
use std::path::Path;

/// Names of the regular files in `dir`, sorted.
///
/// Subdirectories and the directory's own `kustomization.yaml` are left out.
pub fn list_files(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|e| ManifestError::io(dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ManifestError::io(dir, e))?;
        let file_type = entry
            .file_type()
            .map_err(|e| ManifestError::io(entry.path(), e))?;
        if file_type.is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if name != kustomize::FILE_NAME {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}
