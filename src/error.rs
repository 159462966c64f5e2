// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse resource from section:\n{section}\n{source}")]
    Parse {
        section: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to serialize resource: {0}")]
    Serialize(#[from] serde_yaml::Error),

    #[error("Failed to convert resource: {0}")]
    Convert(#[from] serde_json::Error),

    #[error("Invalid resource: {0}")]
    InvalidResource(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ManifestError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ManifestError>;
