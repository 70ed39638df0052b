//! # Boundary Events
//!
//! The two events a surface may raise toward its host, and the host-side
//! error taxonomy delivered through the reply slot. Wire event names match
//! the host platform's event vocabulary.

use activity_model::{EvaluationResult, Model, SubmissionPayload};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A payload the plugin can dispatch to the host.
///
/// `NAME` is the wire event name the host routes on; `Reply` is the payload
/// the host sends back through the one-shot reply slot.
pub trait EventPayload: Send + 'static {
    /// Wire event name.
    const NAME: &'static str;
    /// Reply payload type.
    type Reply: Send + 'static;
}

/// Change-submission event: the authoring surface replaces the whole model.
///
/// The host is expected to fold this into its undo/redo and deferred-save
/// machinery before acknowledging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelUpdated {
    /// The full replacement model (never a diff).
    pub model: Model,
}

impl EventPayload for ModelUpdated {
    const NAME: &'static str = "modelUpdated";
    type Reply = SaveReceipt;
}

/// Acknowledgement that the host accepted a model replacement.
///
/// Opaque to the plugin beyond logging; the revision lets a host correlate
/// the save with its own persistence history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveReceipt {
    /// Monotonic revision assigned by the host's save path.
    pub revision: u64,
}

/// Answer-submission event raised by the delivery surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// The activity-level attempt being submitted.
    pub attempt_guid: String,
    /// One entry per part: part attempt GUID plus the student input.
    pub payload: SubmissionPayload,
}

impl EventPayload for Submission {
    const NAME: &'static str = "submitActivity";
    type Reply = EvaluationResult;
}

/// Host-reported failures delivered through the reply slot.
///
/// The plugin's only obligation is to present these without crashing;
/// retry and backoff policy, if any, belongs to the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The host rejected the model save.
    #[error("Save rejected: {0}")]
    SaveRejected(String),

    /// The host's grading service failed to evaluate the submission.
    #[error("Evaluation failed: {0}")]
    EvaluationFailed(String),

    /// The host dropped the reply slot without answering.
    #[error("Host unavailable: no reply will arrive")]
    HostUnavailable,
}
