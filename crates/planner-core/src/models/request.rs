//! Lesson request model - the validated form input for one generation.

use serde::{Deserialize, Serialize};

use super::{Duration, GradeLevel};
use crate::error::{PlannerError, Result};

/// Parameters describing the lesson a user wants a plan for.
///
/// One request drives one generation round-trip. The `subject`,
/// `grade_level` and `duration` values are echoed back onto the resulting
/// plan regardless of what the generator produced for those fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LessonRequest {
    /// Subject area, free text
    pub subject: String,

    /// Target grade band
    pub grade_level: GradeLevel,

    /// Total lesson duration
    pub duration: Duration,

    /// Lesson topic, free text, required non-blank
    pub topic: String,
}

impl LessonRequest {
    /// Creates a request with the given topic and the form defaults for the
    /// remaining fields (Science, Grades 3-5, 45 minutes).
    pub fn for_topic(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Default::default()
        }
    }

    /// Validate the request before submission.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - when the topic is empty or
    ///   whitespace-only
    pub fn validate(&self) -> Result<()> {
        if self.topic.trim().is_empty() {
            return Err(PlannerError::invalid_input(
                "topic",
                "Lesson topic must not be empty",
            ));
        }
        Ok(())
    }
}

impl Default for LessonRequest {
    fn default() -> Self {
        Self {
            subject: "Science".to_string(),
            grade_level: GradeLevel::default(),
            duration: Duration::default(),
            topic: String::new(),
        }
    }
}
