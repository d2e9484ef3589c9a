//! Assessment model definition.

use serde::{Deserialize, Serialize};

/// A strategy summary paired with a list of concrete methods.
///
/// The same shape serves two roles on a plan: the assessment strategy and
/// the differentiation strategy. Only the semantic role differs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assessment {
    /// Brief overview of the strategy
    pub description: String,

    /// Specific methods or accommodations, in presentation order
    #[serde(default)]
    pub items: Vec<String>,
}
