//! Game-tree search configuration.

use serde::{Deserialize, Serialize};

/// Game-tree search configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Cache position values within a single search.
    ///
    /// The full 3x3 tree is small enough without it; results are identical
    /// either way.
    pub memoize: bool,
}

impl SearchConfig {
    #[must_use]
    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }
}
