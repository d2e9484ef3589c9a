//! Data models for lesson requests and generated plans.
//!
//! This module contains the core domain models shared between prompt
//! construction, generator response parsing and the two presentation
//! projections. Display implementations live in [`crate::display::models`]
//! to keep data structures separate from presentation logic.
//!
//! # Wire compatibility
//!
//! [`LessonPlan`] and its children (de)serialize with the camelCase field
//! names the structured-output schema requires (`gradeLevel` on the wire,
//! `grade_level` in Rust). A response missing any required field fails to
//! parse and is treated as a failed generation; no partially-populated plan
//! is ever produced.

pub mod activity;
pub mod assessment;
pub mod levels;
pub mod plan;
pub mod request;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use activity::Activity;
pub use assessment::Assessment;
pub use levels::{Duration, GradeLevel};
pub use plan::LessonPlan;
pub use request::LessonRequest;
