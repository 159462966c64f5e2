// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Writing resources back to manifest files

use crate::constants::DOCUMENT_SEPARATOR;
use crate::error::{ManifestError, Result};
use crate::manifest::resource::Resource;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Replace `path` with the given resources.
///
/// The original file is removed and recreated; every resource is written as
/// YAML followed by a `---` line, the last one included.
pub fn rewrite_file<'a, I>(path: &Path, resources: I) -> Result<()>
where
    I: IntoIterator<Item = &'a Resource>,
{
    fs::remove_file(path).map_err(|e| ManifestError::io(path, e))?;

    let file = File::create(path).map_err(|e| ManifestError::io(path, e))?;
    let mut out = BufWriter::new(file);

    for resource in resources {
        info!("add resource {}", resource);
        let yaml = resource.to_yaml()?;
        out.write_all(yaml.as_bytes())
            .and_then(|_| out.write_all(DOCUMENT_SEPARATOR.as_bytes()))
            .map_err(|e| ManifestError::io(path, e))?;
    }

    out.flush().map_err(|e| ManifestError::io(path, e))?;
    info!("Updated file {}", path.display());
    Ok(())
}

/// Write a single resource to its own file, replacing any existing one
pub fn write_resource_file(path: &Path, resource: &Resource) -> Result<()> {
    let yaml = resource.to_yaml()?;
    fs::write(path, yaml).map_err(|e| ManifestError::io(path, e))
}
