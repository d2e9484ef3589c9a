//! Export projection: flat plain-text rendering and file save.
//!
//! Produces the downloadable `.txt` form of a plan. The layout is a
//! compatibility contract: uppercased title underlined with `=` to the
//! title's length, metadata lines, then each section as an underlined
//! header followed by its content, with sections separated by blank lines.
//! Repeated calls over the same plan yield byte-identical output.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PlannerError, Result};
use crate::models::{Activity, Assessment, LessonPlan};

/// Underline a header with `=` matching its length.
fn underlined(header: &str) -> String {
    format!("{}\n{}", header, "=".repeat(header.chars().count()))
}

fn list_section(title: &str, items: &[String]) -> String {
    let content: Vec<String> = items.iter().map(|item| format!("- {item}")).collect();
    format!("{}\n{}", underlined(title), content.join("\n"))
}

fn activities_section(title: &str, activities: &[Activity]) -> String {
    let content: Vec<String> = activities
        .iter()
        .map(|a| format!("- {} ({} mins): {}", a.step, a.time, a.description))
        .collect();
    format!("{}\n{}", underlined(title), content.join("\n"))
}

fn assessment_section(title: &str, assessment: &Assessment) -> String {
    let items: Vec<String> = assessment
        .items
        .iter()
        .map(|item| format!("- {item}"))
        .collect();
    format!(
        "{}\n{}\n{}",
        underlined(title),
        assessment.description,
        items.join("\n")
    )
}

/// Render a plan as a flat text document.
pub fn export_text(plan: &LessonPlan) -> String {
    let header = underlined(&plan.title.to_uppercase());
    let metadata = format!(
        "Subject: {}\nGrade Level: {}\nDuration: {}",
        plan.subject, plan.grade_level, plan.duration
    );

    let sections = [
        header,
        metadata,
        list_section("Learning Objectives", &plan.objectives),
        list_section("Materials Needed", &plan.materials),
        activities_section("Lesson Activities", &plan.activities),
        assessment_section("Assessment & Evaluation", &plan.assessment),
        assessment_section("Differentiation & Accommodations", &plan.differentiation),
    ];

    sections.join("\n\n")
}

/// Derive the export filename from a plan title.
///
/// Whitespace runs collapse to single underscores and the result is
/// lowercased, e.g. "Water Cycle Basics" becomes
/// `water_cycle_basics_lesson_plan.txt`.
pub fn export_filename(title: &str) -> String {
    let slug = title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase();
    format!("{slug}_lesson_plan.txt")
}

/// Write the exported plan into `dir`, returning the written path.
pub fn save_plan(plan: &LessonPlan, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(export_filename(&plan.title));
    fs::write(&path, export_text(plan)).map_err(|e| PlannerError::FileSystem {
        path: path.clone(),
        source: e,
    })?;
    Ok(path)
}
