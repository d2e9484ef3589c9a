//! Command-line interface definitions using clap
//!
//! This module defines the CLI surface using clap's derive API, following
//! the parameter wrapper pattern: clap-specific argument types live here
//! and convert explicitly into the framework-agnostic core types, so
//! `planner-core` stays free of CLI concerns.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use planner_core::{Duration, GradeLevel, LessonRequest};

/// Generate a ready-to-teach lesson plan from a topic
///
/// Sends the lesson parameters to a generative AI service constrained to a
/// fixed lesson plan schema, renders the result in the terminal, and can
/// export it as a plain-text file. Requires the GEMINI_API_KEY environment
/// variable.
#[derive(Parser)]
#[command(version, about, name = "lesson-planner")]
pub struct Args {
    /// Lesson topic. Be specific - the more detail, the better the plan
    pub topic: String,

    /// Subject area for the lesson
    #[arg(short, long, default_value = "Science")]
    pub subject: String,

    /// Target grade level
    #[arg(short, long, value_enum, default_value_t = GradeLevelArg::UpperElementary)]
    pub grade_level: GradeLevelArg,

    /// Total lesson duration in minutes
    #[arg(short, long, value_enum, default_value_t = DurationArg::FortyFive)]
    pub duration: DurationArg,

    /// Save the plan as a text file after generating
    #[arg(long)]
    pub save: bool,

    /// Directory to save the exported plan into
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Print the flat text export instead of rendered markdown
    #[arg(long)]
    pub plain: bool,

    /// Disable colored output and use plain text
    #[arg(long)]
    pub no_color: bool,

    /// Override the generation model (defaults to $GEMINI_MODEL or
    /// gemini-2.5-flash)
    #[arg(long)]
    pub model: Option<String>,
}

impl Args {
    /// Convert the parsed arguments into a core lesson request.
    pub fn to_request(&self) -> LessonRequest {
        LessonRequest {
            subject: self.subject.clone(),
            grade_level: self.grade_level.into(),
            duration: self.duration.into(),
            topic: self.topic.clone(),
        }
    }
}

/// Command-line argument representation of the supported grade bands.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum GradeLevelArg {
    /// Kindergarten
    Kindergarten,
    /// Grades 1-2
    #[value(name = "grades-1-2")]
    LowerElementary,
    /// Grades 3-5
    #[value(name = "grades-3-5")]
    UpperElementary,
    /// Middle school (grades 6-8)
    MiddleSchool,
    /// High school (grades 9-12)
    HighSchool,
}

impl From<GradeLevelArg> for GradeLevel {
    fn from(val: GradeLevelArg) -> Self {
        match val {
            GradeLevelArg::Kindergarten => GradeLevel::Kindergarten,
            GradeLevelArg::LowerElementary => GradeLevel::LowerElementary,
            GradeLevelArg::UpperElementary => GradeLevel::UpperElementary,
            GradeLevelArg::MiddleSchool => GradeLevel::MiddleSchool,
            GradeLevelArg::HighSchool => GradeLevel::HighSchool,
        }
    }
}

/// Command-line argument representation of the supported durations.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum DurationArg {
    /// 30 minutes
    #[value(name = "30")]
    Thirty,
    /// 45 minutes
    #[value(name = "45")]
    FortyFive,
    /// 60 minutes
    #[value(name = "60")]
    Sixty,
    /// 90 minutes
    #[value(name = "90")]
    Ninety,
}

impl From<DurationArg> for Duration {
    fn from(val: DurationArg) -> Self {
        match val {
            DurationArg::Thirty => Duration::HalfHour,
            DurationArg::FortyFive => Duration::FortyFiveMinutes,
            DurationArg::Sixty => Duration::Hour,
            DurationArg::Ninety => Duration::NinetyMinutes,
        }
    }
}
