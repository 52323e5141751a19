mod mock_prompt_template_store;

pub use mock_prompt_template_store::MockPromptTemplateStore;

use crate::domain::{Problem, StudentState};

/// Isosceles-triangle problem with three hints, an answer key and a solution.
pub fn sample_problem() -> Problem {
    Problem {
        id: Some("prob_001".into()),
        statement: Some("Triangle ABC has AB = AC and angle A = 40°. Find angle B.".into()),
        archetype: Some("constraint_translation".into()),
        skill_track: Some("Geometry without Formulas".into()),
        hints: vec![
            "What type of triangle is this?".into(),
            "In an isosceles triangle, what about base angles?".into(),
            "If angle A = 40°, how much is left for base angles?".into(),
        ],
        answer_key: Some("70°".into()),
        solution: Some(
            "Since AB = AC, triangle is isosceles. Base angles B and C are equal. Sum = 180°, so B = C = (180° - 40°) / 2 = 70°."
                .into(),
        ),
    }
}

pub fn sample_student() -> StudentState {
    StudentState {
        level: Some("junior".into()),
        age: Some(11),
        attempts_on_this_archetype: Some(2),
    }
}
