//! The loaded chart tree
//!
//! A [`Chart`] is built bottom-up by the loader: every dependency is fully
//! assembled before it is attached to its parent, and the tree is not
//! modified afterwards.

pub mod metadata;

use serde::Serialize;

pub use metadata::{Maintainer, Metadata};

/// A template file, keyed by its path relative to the chart root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    pub name: String,
    pub data: Vec<u8>,
}

/// Any file that is not metadata, values, a template or a nested chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartFile {
    pub name: String,
    pub data: Vec<u8>,
}

/// A loaded chart with its nested dependencies
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chart {
    pub metadata: Metadata,

    /// Raw contents of values.yaml, if present
    pub values: Option<Vec<u8>>,

    /// Templates in discovery order
    pub templates: Vec<Template>,

    /// Opaque files in discovery order
    pub files: Vec<ChartFile>,

    /// Nested charts in discovery order
    pub dependencies: Vec<Chart>,
}

impl Chart {
    /// Create an empty chart around the given metadata
    pub fn new(metadata: Metadata) -> Self {
        Self {
            metadata,
            values: None,
            templates: Vec::new(),
            files: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    /// Chart name from its metadata
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Values as text, with invalid UTF-8 replaced
    pub fn values_str(&self) -> Option<std::borrow::Cow<'_, str>> {
        self.values.as_deref().map(String::from_utf8_lossy)
    }

    /// Find a template by its full path, e.g. `templates/deployment.yaml`
    pub fn template(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Find an opaque file by its path
    pub fn file(&self, name: &str) -> Option<&ChartFile> {
        self.files.iter().find(|f| f.name == name)
    }

    /// Find a direct dependency by chart name
    pub fn dependency(&self, name: &str) -> Option<&Chart> {
        self.dependencies.iter().find(|d| d.name() == name)
    }

    /// Depth-first, pre-order iteration over this chart and all nested charts
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Number of charts in the tree, this one included
    pub fn total_charts(&self) -> usize {
        self.walk().count()
    }
}

/// Iterator returned by [`Chart::walk`]
pub struct Walk<'a> {
    stack: Vec<&'a Chart>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Chart;

    fn next(&mut self) -> Option<Self::Item> {
        let chart = self.stack.pop()?;
        self.stack.extend(chart.dependencies.iter().rev());
        Some(chart)
    }
}
