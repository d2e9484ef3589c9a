//! Render projection: markdown formatting for generated plans.
//!
//! This module implements the visual projection of a [`LessonPlan`]: a
//! markdown document with a title header, a metadata block, and the five
//! labeled sections in fixed order (objectives, materials, activities as a
//! timeline, assessment, differentiation). The CLI feeds this markdown to
//! its terminal renderer; the projection itself is pure and deterministic.
//!
//! The flat-text export projection lives in [`crate::export`] - the two
//! projections share section grouping but not formatting.
//!
//! [`LessonPlan`]: crate::models::LessonPlan

pub mod models;
