//! # Core Domain Entities
//!
//! Defines the content model, attempt state, submission payload, and
//! evaluation result shapes exchanged across the host/plugin boundary.
//!
//! ## Clusters
//!
//! - **Content**: [`Model`], [`AuthoringContent`], [`Part`], [`Response`], [`Feedback`]
//! - **Attempt**: [`AttemptState`], [`PartAttemptState`]
//! - **Submission & Evaluation**: [`SubmissionPayload`], [`PartSubmission`],
//!   [`EvaluationResult`], [`Evaluation`]
//!
//! All wire names are camelCase to match the host's JSON attribute strings.

use crate::rules::Rule;
use serde::{Deserialize, Serialize};

// =============================================================================
// CLUSTER A: CONTENT MODEL (author-owned)
// =============================================================================

/// The authored content definition for one activity instance.
///
/// The host exclusively owns the model; surfaces receive it through the
/// `model` attribute and replace it wholesale on save (never a partial patch).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// The free-text prompt posed to the student.
    pub stem: String,
    /// Authoring-side content: scoring parts and their rules.
    pub authoring: AuthoringContent,
}

/// The authoring section of a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthoringContent {
    /// Ordered scoring units. This simple activity has exactly one.
    pub parts: Vec<Part>,
}

/// A scoring unit: an ordered rule set plus hints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Part identifier, unique within the model.
    pub id: String,
    /// How multiple attempts against this part are combined into a score.
    pub scoring_strategy: ScoringStrategy,
    /// Responses evaluated in order; first match wins, so the catch-all
    /// must be last.
    pub responses: Vec<Response>,
    /// Author-provided hints, possibly empty.
    pub hints: Vec<Hint>,
}

/// Strategy for combining attempt scores on a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScoringStrategy {
    /// Average of all attempt scores.
    #[default]
    Average,
    /// Best attempt score.
    Best,
    /// Most recent attempt score.
    #[serde(rename = "most_recent")]
    MostRecent,
}

/// A matching rule plus its outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Response identifier, unique within the part.
    pub id: String,
    /// The rule matched against the student input.
    pub rule: Rule,
    /// Score awarded when the rule matches (0 or 1 here).
    pub score: f64,
    /// Feedback shown to the student when the rule matches.
    pub feedback: Feedback,
}

/// Display feedback attached to a response or evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    /// Feedback identifier.
    pub id: String,
    /// Display text.
    pub content: String,
}

/// An author-provided hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hint {
    /// Hint identifier.
    pub id: String,
    /// Display text.
    pub content: String,
}

// =============================================================================
// CLUSTER B: ATTEMPT STATE (host-owned, delivery only)
// =============================================================================

/// The state of one learner attempt, pushed read-only into a delivery surface.
///
/// Created by the host when a learner starts an attempt and replaced when a
/// new attempt starts. Surfaces never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptState {
    /// GUID for the activity-level attempt.
    pub attempt_guid: String,
    /// Per-part attempt state, parallel to the model's parts.
    pub parts: Vec<PartAttemptState>,
}

/// Attempt state for a single part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartAttemptState {
    /// GUID for this part-level attempt.
    pub attempt_guid: String,
    /// The part this attempt belongs to, when the host provides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_id: Option<String>,
}

// =============================================================================
// CLUSTER C: SUBMISSION & EVALUATION
// =============================================================================

/// Ephemeral per-submit payload: one entry per part.
pub type SubmissionPayload = Vec<PartSubmission>;

/// A single part's submission: the part attempt GUID plus the student input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartSubmission {
    /// The part attempt GUID this input answers.
    pub attempt_guid: String,
    /// The student's response.
    pub response: StudentInput,
}

/// The student's raw input for one part. Submitted as-is, even when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentInput {
    /// The raw input text.
    pub input: String,
}

/// Host-owned evaluation outcome, returned asynchronously after submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    /// The activity attempt this result applies to, when the host echoes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attempt_guid: Option<String>,
    /// Per-part evaluations, in submission order.
    pub evaluations: Vec<Evaluation>,
}

/// The evaluation of a single part submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    /// Awarded score.
    pub score: f64,
    /// Maximum achievable score.
    pub out_of: f64,
    /// Feedback selected by the matching rule.
    pub feedback: Feedback,
}
