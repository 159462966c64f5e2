// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Multi-document manifest parsing

use crate::error::{ManifestError, Result};
use crate::manifest::resource::Resource;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::debug;

/// A `#` comment line, a bare `#` included. Lines starting with `##` are kept.
static COMMENT_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*#(?:[^#]|$)").unwrap());

fn is_separator(line: &str) -> bool {
    line.starts_with("---") && line.trim() == "---"
}

/// Split manifest text into the sections between `---` lines.
///
/// Every line kept in a section ends with `\n`. Sections without any line
/// (two consecutive separators, or a leading one) are not returned.
pub fn split_sections(content: &str) -> Vec<String> {
    let mut sections = Vec::new();
    let mut current = String::new();

    for line in content.lines() {
        if is_separator(line) {
            if !current.is_empty() {
                sections.push(std::mem::take(&mut current));
            }
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }

    if !current.is_empty() {
        sections.push(current);
    }

    sections
}

/// Drop comment lines, then blank or whitespace-only lines
pub fn strip_comments_and_blank_lines(section: &str) -> String {
    section
        .lines()
        .filter(|line| !COMMENT_LINE.is_match(line))
        .filter(|line| !line.trim().is_empty())
        .fold(String::new(), |mut out, line| {
            out.push_str(line);
            out.push('\n');
            out
        })
}

/// Parse manifest text into its resources, in document order.
///
/// Sections left empty after stripping comments are skipped. A section that
/// does not parse fails the whole call.
pub fn parse_resources(content: &str) -> Result<Vec<Resource>> {
    split_sections(content)
        .iter()
        .map(|section| strip_comments_and_blank_lines(section))
        .filter(|section| !section.is_empty())
        .map(|section| Resource::from_yaml(&section))
        .collect()
}

/// Read a manifest file and parse it into resources
pub fn read_resources(path: &Path) -> Result<Vec<Resource>> {
    let content = fs::read_to_string(path).map_err(|e| ManifestError::io(path, e))?;
    let resources = parse_resources(&content)?;
    debug!("Read {} resources from {}", resources.len(), path.display());
    Ok(resources)
}
