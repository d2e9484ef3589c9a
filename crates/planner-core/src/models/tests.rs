use std::str::FromStr;

use crate::models::{
    Activity, Assessment, Duration, GradeLevel, LessonPlan, LessonRequest,
};

fn create_test_plan() -> LessonPlan {
    LessonPlan {
        title: "Shadows and Light".to_string(),
        subject: "Science".to_string(),
        grade_level: "Kindergarten".to_string(),
        duration: "30 minutes".to_string(),
        objectives: vec![
            "Observe how shadows form".to_string(),
            "Predict shadow changes".to_string(),
            "Record observations".to_string(),
        ],
        materials: vec!["Flashlights".to_string(), "Paper cutouts".to_string()],
        activities: vec![
            Activity {
                step: "Introduction".to_string(),
                description: "Shadow puppet demonstration.".to_string(),
                time: 5,
            },
            Activity {
                step: "Exploration".to_string(),
                description: "Stations with flashlights and objects.".to_string(),
                time: 20,
            },
            Activity {
                step: "Conclusion".to_string(),
                description: "Share one discovery each.".to_string(),
                time: 5,
            },
        ],
        assessment: Assessment {
            description: "Observation during stations.".to_string(),
            items: vec!["Drawing of a shadow".to_string()],
        },
        differentiation: Assessment {
            description: "Partner support for emerging learners.".to_string(),
            items: vec!["Pre-cut shapes".to_string(), "Extension prompts".to_string()],
        },
    }
}

#[test]
fn test_plan_serializes_with_camel_case_wire_names() {
    let json = serde_json::to_value(create_test_plan()).unwrap();
    assert!(json.get("gradeLevel").is_some());
    assert!(json.get("grade_level").is_none());
}

#[test]
fn test_plan_round_trips_through_json() {
    let plan = create_test_plan();
    let json = serde_json::to_string(&plan).unwrap();
    let parsed: LessonPlan = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, plan);
}

#[test]
fn test_plan_parses_without_materials() {
    // materials is the only list the schema lets be empty or absent
    let mut value = serde_json::to_value(create_test_plan()).unwrap();
    value.as_object_mut().unwrap().remove("materials");
    let parsed: LessonPlan = serde_json::from_value(value).unwrap();
    assert!(parsed.materials.is_empty());
}

#[test]
fn test_echo_request_overwrites_generator_fields() {
    let request = LessonRequest {
        subject: "Art".to_string(),
        grade_level: GradeLevel::MiddleSchool,
        duration: Duration::Hour,
        topic: "Perspective drawing".to_string(),
    };

    let plan = create_test_plan().echo_request(&request);
    assert_eq!(plan.subject, "Art");
    assert_eq!(plan.grade_level, "Middle School (Grades 6-8)");
    assert_eq!(plan.duration, "60 minutes");
    // Everything else is untouched
    assert_eq!(plan.title, "Shadows and Light");
    assert_eq!(plan.activities.len(), 3);
}

#[test]
fn test_grade_level_round_trips_through_str() {
    for level in [
        GradeLevel::Kindergarten,
        GradeLevel::LowerElementary,
        GradeLevel::UpperElementary,
        GradeLevel::MiddleSchool,
        GradeLevel::HighSchool,
    ] {
        assert_eq!(GradeLevel::from_str(level.as_str()), Ok(level));
    }
    assert!(GradeLevel::from_str("Postgraduate").is_err());
}

#[test]
fn test_duration_round_trips_through_str() {
    for duration in [
        Duration::HalfHour,
        Duration::FortyFiveMinutes,
        Duration::Hour,
        Duration::NinetyMinutes,
    ] {
        assert_eq!(Duration::from_str(duration.as_str()), Ok(duration));
    }
    assert!(Duration::from_str("2 hours").is_err());
}

#[test]
fn test_request_defaults_match_the_form() {
    let request = LessonRequest::for_topic("The Water Cycle");
    assert_eq!(request.subject, "Science");
    assert_eq!(request.grade_level.as_str(), "Grades 3-5");
    assert_eq!(request.duration.as_str(), "45 minutes");
}

#[test]
fn test_request_validation_rejects_blank_topic() {
    assert!(LessonRequest::for_topic("").validate().is_err());
    assert!(LessonRequest::for_topic(" \t ").validate().is_err());
    assert!(LessonRequest::for_topic("Fractions").validate().is_ok());
}

#[test]
fn test_plan_display_sections_in_order() {
    let rendered = create_test_plan().to_string();

    let sections = [
        "# Shadows and Light",
        "## 🎯 Learning Objectives",
        "## 🧪 Materials & Resources",
        "## 📖 Lesson Activities",
        "## ✅ Assessment",
        "## 👥 Differentiation",
    ];
    let mut last = 0;
    for section in sections {
        let pos = rendered.find(section).unwrap_or_else(|| {
            panic!("section {section} missing from rendered plan");
        });
        assert!(pos >= last, "section {section} out of order");
        last = pos;
    }
}

#[test]
fn test_plan_display_with_no_materials() {
    let mut plan = create_test_plan();
    plan.materials.clear();

    let rendered = plan.to_string();
    assert!(rendered.contains("## 🧪 Materials & Resources"));
    assert!(rendered.contains("No materials required."));
    assert!(!rendered.contains("- Flashlights"));
}

#[test]
fn test_activity_display_shows_step_time_and_description() {
    let rendered = create_test_plan().activities[0].to_string();
    assert!(rendered.contains("### Introduction (5 minutes)"));
    assert!(rendered.contains("Shadow puppet demonstration."));
}
