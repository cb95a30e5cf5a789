//! Loader configuration

use crate::ignore::HELM_IGNORE;

/// Default maximum depth of nested charts below the top-level chart
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Settings shared by every load entry point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Deepest allowed level of nested charts; the top-level chart is depth 0
    pub max_depth: usize,

    /// Name of the exclusion rule file looked up at a chart directory's root
    pub ignore_file: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            ignore_file: HELM_IGNORE.to_string(),
        }
    }
}

impl LoadOptions {
    /// Options with every setting at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum nesting depth
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the exclusion rule file name
    #[must_use]
    pub fn with_ignore_file(mut self, name: impl Into<String>) -> Self {
        self.ignore_file = name.into();
        self
    }
}
