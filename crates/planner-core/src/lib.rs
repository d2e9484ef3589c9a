//! Core library for the lesson planner application.
//!
//! This crate provides the data contract and transformation pipeline for
//! generating structured lesson plans: form input, prompt construction, a
//! schema-constrained generator boundary, and two presentation projections
//! of the result.
//!
//! # Pipeline
//!
//! ```text
//! LessonRequest ──▶ build_prompt ──▶ PlanGenerator ──▶ LessonPlan
//!                                     (one HTTP          │
//!                                      round-trip)       ├─▶ Display (markdown render)
//!                                                        └─▶ export (flat text + file)
//! ```
//!
//! The [`session::Session`] controller orchestrates the pipeline and tracks
//! a single observable state (idle, loading, ready, failed); the generator
//! is injected behind the [`generator::PlanGenerator`] trait so tests can
//! substitute a stub for the network boundary.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use planner_core::{GeminiClient, LessonRequest, Session};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Requires GEMINI_API_KEY in the environment
//! let client = GeminiClient::from_env()?;
//! let mut session = Session::new(client);
//!
//! session.submit(&LessonRequest::for_topic("The Water Cycle")).await?;
//! if let Some(plan) = session.plan() {
//!     println!("{plan}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod export;
pub mod generator;
pub mod models;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use error::{PlannerError, Result};
pub use export::{export_filename, export_text};
pub use generator::{GeminiClient, PlanGenerator};
pub use models::{Activity, Assessment, Duration, GradeLevel, LessonPlan, LessonRequest};
pub use prompt::{build_prompt, LessonPrompt};
pub use session::{Session, SessionState};
