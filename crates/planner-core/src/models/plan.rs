//! Lesson plan model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::{Activity, Assessment, LessonRequest};

/// Represents a complete generated lesson plan.
///
/// A plan is constructed wholesale from one generator response and is never
/// partially mutated afterwards, with one exception: the `subject`,
/// `grade_level` and `duration` fields are overwritten with the values from
/// the originating [`LessonRequest`] so the plan always reflects what the
/// user asked for (see [`LessonPlan::echo_request`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LessonPlan {
    /// Generated title for the lesson
    pub title: String,

    /// Subject area, echoed back from the request
    pub subject: String,

    /// Target grade level, echoed back from the request
    pub grade_level: String,

    /// Total lesson duration, echoed back from the request
    pub duration: String,

    /// Measurable learning objectives (3-5 by policy, not enforced on parse)
    pub objectives: Vec<String>,

    /// Materials, tools and resources needed for the lesson
    #[serde(default)]
    pub materials: Vec<String>,

    /// Chronological lesson activities, in teaching order
    pub activities: Vec<Activity>,

    /// Methods for assessing student learning
    pub assessment: Assessment,

    /// Strategies to support diverse learners
    pub differentiation: Assessment,
}

impl LessonPlan {
    /// Overwrite the request-derived fields with the original request values.
    ///
    /// The generator is asked to echo these fields, but whatever it produced
    /// is discarded so the plan is always consistent with user intent.
    pub fn echo_request(mut self, request: &LessonRequest) -> Self {
        self.subject = request.subject.clone();
        self.grade_level = request.grade_level.as_str().to_string();
        self.duration = request.duration.as_str().to_string();
        self
    }
}
