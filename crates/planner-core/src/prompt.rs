//! Prompt construction for the lesson plan generator.
//!
//! Builds the natural-language instruction and the structured-output schema
//! that together constrain the generation service to emit JSON parseable
//! into a [`LessonPlan`](crate::models::LessonPlan). Everything in this
//! module is a pure function of the request: no I/O, no clock, no
//! randomness.

use serde_json::{json, Value};

use crate::models::LessonRequest;

/// A fully built generation prompt: instruction text plus output schema.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonPrompt {
    /// Natural-language instruction embedding the request fields verbatim
    pub instruction: String,

    /// Structured-output schema constraining the response body
    pub schema: Value,
}

/// Build the generation prompt for a lesson request.
pub fn build_prompt(request: &LessonRequest) -> LessonPrompt {
    let instruction = format!(
        "Generate a comprehensive lesson plan for an educator.\n\
         \n\
         Instructions:\n\
         1. The lesson plan must be detailed, practical, and easy for a teacher to follow.\n\
         2. The tone should be professional and supportive.\n\
         3. Create content that is age-appropriate for the specified grade level.\n\
         4. Ensure the activities logically fit within the specified duration.\n\
         5. The 'title' should be creative and relevant to the topic.\n\
         \n\
         Lesson Details:\n\
         - Topic: {topic}\n\
         - Subject: {subject}\n\
         - Grade Level: {grade_level}\n\
         - Total Duration: {duration}\n",
        topic = request.topic,
        subject = request.subject,
        grade_level = request.grade_level.as_str(),
        duration = request.duration.as_str(),
    );

    LessonPrompt {
        instruction,
        schema: response_schema(),
    }
}

/// The fixed structured-output schema for a lesson plan.
///
/// Shape mirrors [`LessonPlan`](crate::models::LessonPlan) with per-field
/// descriptions guiding the generator. The objectives count (3-5) is policy
/// expressed here; it is not re-validated when parsing the response.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": {
                "type": "STRING",
                "description": "A creative and engaging title for the lesson plan."
            },
            "subject": { "type": "STRING" },
            "gradeLevel": { "type": "STRING" },
            "duration": { "type": "STRING" },
            "objectives": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A list of 3-5 clear, measurable learning objectives."
            },
            "materials": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A list of all materials, tools, and resources needed for the lesson."
            },
            "activities": {
                "type": "ARRAY",
                "description": "A step-by-step breakdown of lesson activities, from introduction to conclusion.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "step": {
                            "type": "STRING",
                            "description": "The name of the activity step (e.g., 'Introduction', 'Guided Practice', 'Group Work', 'Conclusion')."
                        },
                        "description": {
                            "type": "STRING",
                            "description": "A detailed description of the teacher and student actions during this step."
                        },
                        "time": {
                            "type": "INTEGER",
                            "description": "Estimated time in minutes for this activity step."
                        }
                    },
                    "required": ["step", "description", "time"]
                }
            },
            "assessment": {
                "type": "OBJECT",
                "description": "Methods for assessing student learning.",
                "properties": {
                    "description": {
                        "type": "STRING",
                        "description": "A brief overview of the assessment strategy."
                    },
                    "items": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" },
                        "description": "A list of specific assessment methods (e.g., 'Class discussion', 'Exit ticket questions')."
                    }
                },
                "required": ["description", "items"]
            },
            "differentiation": {
                "type": "OBJECT",
                "description": "Strategies to support diverse learners.",
                "properties": {
                    "description": {
                        "type": "STRING",
                        "description": "A brief overview of the differentiation strategy."
                    },
                    "items": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" },
                        "description": "A list of specific accommodations for different learning needs."
                    }
                },
                "required": ["description", "items"]
            }
        },
        "required": [
            "title", "subject", "gradeLevel", "duration", "objectives",
            "materials", "activities", "assessment", "differentiation"
        ]
    })
}
