// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Reading, classifying, and rewriting multi-document manifest files.

pub mod listing;
pub mod parser;
pub mod resource;
pub mod writer;

pub use listing::list_files;
pub use parser::{parse_resources, read_resources};
pub use resource::{Resource, ResourceKind};
pub use writer::{rewrite_file, write_resource_file};
