//! # Model Builder
//!
//! Pure construction of a well-formed single-part model from primitive
//! author inputs. Shared by the authoring surface (save path) and the
//! creation function (new-instance path).

use crate::entities::{AuthoringContent, Feedback, Model, Part, Response, ScoringStrategy};
use crate::rules::Rule;

/// Build a full model from a stem and a correct answer.
///
/// Deterministic and side-effect-free: the same inputs always yield a
/// structurally identical model. Ids are fixed literals since this activity
/// only ever has one part and one response set. The equality rule scores 1
/// with canned "Correct" feedback; the trailing catch-all scores 0 with
/// "Incorrect". No hints are offered.
#[must_use]
pub fn build_model(stem: &str, correct: &str) -> Model {
    Model {
        stem: stem.to_string(),
        authoring: AuthoringContent {
            parts: vec![Part {
                id: "1".to_string(),
                scoring_strategy: ScoringStrategy::Average,
                responses: vec![
                    Response {
                        id: "response1".to_string(),
                        rule: Rule::equals(correct),
                        score: 1.0,
                        feedback: Feedback {
                            id: "feedback1".to_string(),
                            content: "Correct".to_string(),
                        },
                    },
                    Response {
                        id: "response2".to_string(),
                        rule: Rule::catch_all(),
                        score: 0.0,
                        feedback: Feedback {
                            id: "feedback2".to_string(),
                            content: "Incorrect".to_string(),
                        },
                    },
                ],
                hints: Vec::new(),
            }],
        },
    }
}

/// The canned model used when the host creates a brand-new instance.
#[must_use]
pub fn default_model() -> Model {
    build_model("What is two plus two?", "4")
}
