//! Closed enumerations for the lesson request form fields.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of supported grade bands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum GradeLevel {
    /// Kindergarten
    Kindergarten,

    /// Grades 1-2
    LowerElementary,

    /// Grades 3-5
    #[default]
    UpperElementary,

    /// Middle school, grades 6-8
    MiddleSchool,

    /// High school, grades 9-12
    HighSchool,
}

impl FromStr for GradeLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Kindergarten" => Ok(GradeLevel::Kindergarten),
            "Grades 1-2" => Ok(GradeLevel::LowerElementary),
            "Grades 3-5" => Ok(GradeLevel::UpperElementary),
            "Middle School (Grades 6-8)" => Ok(GradeLevel::MiddleSchool),
            "High School (Grades 9-12)" => Ok(GradeLevel::HighSchool),
            _ => Err(format!("Invalid grade level: {s}")),
        }
    }
}

impl GradeLevel {
    /// The display string used in prompts, plans and exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            GradeLevel::Kindergarten => "Kindergarten",
            GradeLevel::LowerElementary => "Grades 1-2",
            GradeLevel::UpperElementary => "Grades 3-5",
            GradeLevel::MiddleSchool => "Middle School (Grades 6-8)",
            GradeLevel::HighSchool => "High School (Grades 9-12)",
        }
    }
}

/// Type-safe enumeration of supported lesson durations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Duration {
    /// 30 minutes
    HalfHour,

    /// 45 minutes
    #[default]
    FortyFiveMinutes,

    /// 60 minutes
    Hour,

    /// 90 minutes
    NinetyMinutes,
}

impl FromStr for Duration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "30 minutes" => Ok(Duration::HalfHour),
            "45 minutes" => Ok(Duration::FortyFiveMinutes),
            "60 minutes" => Ok(Duration::Hour),
            "90 minutes" => Ok(Duration::NinetyMinutes),
            _ => Err(format!("Invalid duration: {s}")),
        }
    }
}

impl Duration {
    /// The display string used in prompts, plans and exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Duration::HalfHour => "30 minutes",
            Duration::FortyFiveMinutes => "45 minutes",
            Duration::Hour => "60 minutes",
            Duration::NinetyMinutes => "90 minutes",
        }
    }
}
