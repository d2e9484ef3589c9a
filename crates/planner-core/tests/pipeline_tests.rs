//! End-to-end pipeline tests with a stubbed generator boundary.

use std::str::FromStr;

use async_trait::async_trait;
use planner_core::{
    build_prompt, export_filename, export_text, Duration, GradeLevel, LessonPlan, LessonPrompt,
    LessonRequest, PlanGenerator, Result, Session,
};

/// Generator stub that parses the canned wire payload the way the real
/// client parses a response body.
struct CannedGenerator {
    payload: &'static str,
}

#[async_trait]
impl PlanGenerator for CannedGenerator {
    async fn generate(&self, _prompt: &LessonPrompt) -> Result<LessonPlan> {
        Ok(serde_json::from_str(self.payload)?)
    }
}

const PAYLOAD: &str = r#"{
    "title": "Water Cycle Basics",
    "subject": "whatever the model said",
    "gradeLevel": "whatever the model said",
    "duration": "whatever the model said",
    "objectives": [
        "Name the four stages of the water cycle",
        "Explain evaporation and condensation",
        "Trace a raindrop through the cycle"
    ],
    "materials": ["Chart paper", "Markers", "Kettle"],
    "activities": [
        {"step": "Introduction", "description": "Boiling kettle demo.", "time": 10},
        {"step": "Guided Practice", "description": "Label a cycle diagram.", "time": 15},
        {"step": "Group Work", "description": "Build a cycle poster.", "time": 15},
        {"step": "Conclusion", "description": "Gallery walk.", "time": 5}
    ],
    "assessment": {
        "description": "Formative and summative assessments will be used.",
        "items": ["Class discussion", "Exit ticket questions"]
    },
    "differentiation": {
        "description": "Tiered supports for diverse learners.",
        "items": ["Sentence starters", "Extension activities"]
    }
}"#;

fn request() -> LessonRequest {
    LessonRequest {
        subject: "Science".to_string(),
        grade_level: GradeLevel::from_str("Grades 3-5").unwrap(),
        duration: Duration::from_str("45 minutes").unwrap(),
        topic: "The Water Cycle".to_string(),
    }
}

async fn generated_session() -> Session<CannedGenerator> {
    let mut session = Session::new(CannedGenerator { payload: PAYLOAD });
    session.submit(&request()).await.unwrap();
    session
}

#[tokio::test]
async fn test_pipeline_echoes_request_over_generator_output() {
    let session = generated_session().await;
    let plan = session.plan().unwrap();

    assert_eq!(plan.subject, "Science");
    assert_eq!(plan.grade_level, "Grades 3-5");
    assert_eq!(plan.duration, "45 minutes");
    assert_eq!(plan.title, "Water Cycle Basics");
}

#[tokio::test]
async fn test_pipeline_preserves_order_in_both_projections() {
    let session = generated_session().await;
    let plan = session.plan().unwrap();

    let steps = ["Introduction", "Guided Practice", "Group Work", "Conclusion"];
    for projection in [plan.to_string(), export_text(plan)] {
        let positions: Vec<usize> = steps
            .iter()
            .map(|s| projection.find(s).expect("step missing from projection"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

#[tokio::test]
async fn test_pipeline_export_matches_scenario_filename() {
    let session = generated_session().await;
    let plan = session.plan().unwrap();

    assert_eq!(
        export_filename(&plan.title),
        "water_cycle_basics_lesson_plan.txt"
    );
}

#[tokio::test]
async fn test_pipeline_export_is_byte_identical_across_calls() {
    let session = generated_session().await;
    let plan = session.plan().unwrap();

    assert_eq!(export_text(plan), export_text(plan));
}

#[test]
fn test_prompt_carries_all_request_fields() {
    let prompt = build_prompt(&request());
    for needle in ["The Water Cycle", "Science", "Grades 3-5", "45 minutes"] {
        assert!(prompt.instruction.contains(needle), "missing {needle}");
    }
}

#[tokio::test]
async fn test_nonconforming_payload_fails_whole_request() {
    let mut session = Session::new(CannedGenerator {
        // activities items missing the required time field
        payload: r#"{
            "title": "Broken",
            "subject": "s", "gradeLevel": "g", "duration": "d",
            "objectives": [], "materials": [],
            "activities": [{"step": "Introduction", "description": "x"}],
            "assessment": {"description": "a", "items": []},
            "differentiation": {"description": "d", "items": []}
        }"#,
    });

    session.submit(&request()).await.unwrap();
    assert!(session.plan().is_none());
    assert!(session.error().is_some());
}
