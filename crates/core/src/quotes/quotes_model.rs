//! Quote refresh models.

use serde::{Deserialize, Serialize};

/// Result of one refresh run over all held symbols.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PriceRefreshOutcome {
    /// Investment rows marked to a fresh price
    pub updated: usize,
    /// Symbols that yielded no usable quote
    pub failed: usize,
}
