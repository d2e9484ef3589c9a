//! Activity model definition.

use serde::{Deserialize, Serialize};

/// Represents one chronological segment of a lesson.
///
/// Activities are meaningful in array order: the sequence in which they
/// appear is the sequence in which they are taught, and every projection of
/// a plan must preserve it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    /// Name of the activity step (e.g. "Introduction", "Guided Practice")
    pub step: String,

    /// Description of teacher and student actions during this step
    pub description: String,

    /// Estimated time in minutes for this step
    pub time: u32,
}
