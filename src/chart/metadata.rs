//! Chart metadata from Chart.yaml

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A maintainer entry in Chart.yaml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Maintainer {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Descriptive fields of a chart, deserialized from Chart.yaml
///
/// Only `name` is required, and that is enforced by the loader rather than
/// the parser so an empty document still yields a value to inspect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Metadata {
    /// Chart name
    pub name: String,

    /// Chart version (for reference only, no constraint resolution)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Project homepage URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub maintainers: Vec<Maintainer>,

    /// Template engine name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub deprecated: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kube_version: Option<String>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

impl Metadata {
    /// Create metadata carrying only a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Parse metadata from the raw bytes of a Chart.yaml file
    ///
    /// An empty document parses to default metadata.
    pub fn from_yaml(data: &[u8]) -> Result<Self> {
        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        let metadata: Self = serde_yaml::from_slice(data)?;
        Ok(metadata)
    }

    /// Whether the metadata satisfies the loader's requirements
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty()
    }
}
