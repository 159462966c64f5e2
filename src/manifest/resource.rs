// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::kinds;
use crate::error::{ManifestError, Result};
use kube::core::DynamicObject;
use serde_yaml::{Mapping, Value};
use std::fmt;

/// Resource kinds the tools distinguish; everything else is `Other`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceKind {
    Namespace,
    CustomResourceDefinition,
    ServiceMonitor,
    Other(String),
}

impl ResourceKind {
    pub fn as_str(&self) -> &str {
        match self {
            ResourceKind::Namespace => kinds::NAMESPACE,
            ResourceKind::CustomResourceDefinition => kinds::CUSTOM_RESOURCE_DEFINITION,
            ResourceKind::ServiceMonitor => kinds::SERVICE_MONITOR,
            ResourceKind::Other(kind) => kind,
        }
    }
}

impl From<&str> for ResourceKind {
    fn from(kind: &str) -> Self {
        match kind {
            kinds::NAMESPACE => ResourceKind::Namespace,
            kinds::CUSTOM_RESOURCE_DEFINITION => ResourceKind::CustomResourceDefinition,
            kinds::SERVICE_MONITOR => ResourceKind::ServiceMonitor,
            other => ResourceKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One Kubernetes resource read from a manifest file.
///
/// The whole object is kept as a [`DynamicObject`] so that re-serializing it
/// writes back every field, not only the ones the tools look at.
#[derive(Debug, Clone)]
pub struct Resource {
    kind: ResourceKind,
    object: DynamicObject,
}

impl Resource {
    /// Parse a single YAML document into a resource.
    ///
    /// The document goes through JSON on its way to a [`DynamicObject`], so
    /// scalar mapping keys such as `8080:` become string keys.
    pub fn from_yaml(section: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(section).map_err(|source| ManifestError::Parse {
            section: section.to_string(),
            source,
        })?;
        let json = serde_json::to_value(stringify_keys(value)?)?;
        let object: DynamicObject = serde_json::from_value(json)?;
        Self::try_from(object)
    }

    pub fn kind(&self) -> &ResourceKind {
        &self.kind
    }

    pub fn name(&self) -> &str {
        self.object.metadata.name.as_deref().unwrap_or_default()
    }

    /// Namespace of the resource, empty for cluster-scoped or unset
    pub fn namespace(&self) -> &str {
        self.object.metadata.namespace.as_deref().unwrap_or_default()
    }

    pub fn object(&self) -> &DynamicObject {
        &self.object
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.object)?)
    }
}

/// Rewrite every mapping key as a string, the way JSON requires
fn stringify_keys(value: Value) -> Result<Value> {
    Ok(match value {
        Value::Mapping(mapping) => {
            let mut out = Mapping::with_capacity(mapping.len());
            for (key, value) in mapping {
                out.insert(Value::String(key_to_string(key)?), stringify_keys(value)?);
            }
            Value::Mapping(out)
        }
        Value::Sequence(items) => Value::Sequence(
            items
                .into_iter()
                .map(stringify_keys)
                .collect::<Result<_>>()?,
        ),
        Value::Tagged(mut tagged) => {
            tagged.value = stringify_keys(std::mem::take(&mut tagged.value))?;
            Value::Tagged(tagged)
        }
        scalar => scalar,
    })
}

fn key_to_string(key: Value) -> Result<String> {
    match key {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        other => Err(ManifestError::InvalidResource(format!(
            "unsupported mapping key {:?}",
            other
        ))),
    }
}

impl TryFrom<DynamicObject> for Resource {
    type Error = ManifestError;

    fn try_from(object: DynamicObject) -> Result<Self> {
        let kind = match object.types.as_ref() {
            Some(types) if !types.kind.is_empty() => ResourceKind::from(types.kind.as_str()),
            _ => {
                return Err(ManifestError::InvalidResource(format!(
                    "object {:?} has no kind",
                    object.metadata.name
                )))
            }
        };
        Ok(Resource { kind, object })
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}/{}", self.kind, self.namespace(), self.name())
    }
}
