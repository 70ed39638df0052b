//! # Test Host Harness
//!
//! A miniature host for exercising the contract end to end: it receives
//! events from the [`HostEndpoint`], persists model replacements, manages
//! attempts, and grades submissions with first-match-wins over the model's
//! response rules.

use activity_bus::{ActivityChannels, HostEndpoint, HostError, PluginEndpoint, SaveReceipt};
use activity_model::{
    AttemptState, Evaluation, EvaluationResult, Model, PartAttemptState, ATTR_GRADED, ATTR_MODEL,
    ATTR_STATE,
};
use std::sync::Once;
use tracing::info;
use uuid::Uuid;

static TRACING: Once = Once::new();

/// Initialize tracing once for the whole test binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "debug".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

/// The host side of the boundary: owns the model, attempts, and grading.
pub struct TestHost {
    endpoint: HostEndpoint,
    model: Model,
    revision: u64,
}

impl TestHost {
    /// Create a host holding `model` and the plugin endpoint to hand to
    /// surfaces.
    pub fn new(model: Model) -> (Self, PluginEndpoint) {
        init_tracing();
        let (plugin, endpoint) = ActivityChannels::new();
        (
            Self {
                endpoint,
                model,
                revision: 0,
            },
            plugin,
        )
    }

    /// The host's current authoritative model.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Serialized `model` attribute for pushing into a surface.
    pub fn model_attr(&self) -> String {
        serde_json::to_string(&self.model).expect("model serializes")
    }

    /// Start a new attempt: fresh GUIDs for the activity and each part.
    pub fn start_attempt(&self) -> AttemptState {
        let attempt_guid = Uuid::new_v4().to_string();
        let parts = self
            .model
            .authoring
            .parts
            .iter()
            .map(|part| PartAttemptState {
                attempt_guid: Uuid::new_v4().to_string(),
                part_id: Some(part.id.clone()),
            })
            .collect();
        AttemptState {
            attempt_guid,
            parts,
        }
    }

    /// Serialized `state` attribute for an attempt.
    pub fn state_attr(state: &AttemptState) -> String {
        serde_json::to_string(state).expect("state serializes")
    }

    /// Serialized `graded` attribute.
    pub fn graded_attr(graded: bool) -> String {
        serde_json::to_string(&graded).expect("bool serializes")
    }

    /// Push all three delivery attributes into a surface.
    pub fn push_delivery_attrs(
        &self,
        surface: &mut impl activity_surfaces::Surface,
        state: &AttemptState,
        graded: bool,
    ) {
        surface
            .attribute_changed(ATTR_MODEL, &self.model_attr())
            .expect("model attribute");
        surface
            .attribute_changed(ATTR_STATE, &Self::state_attr(state))
            .expect("state attribute");
        surface
            .attribute_changed(ATTR_GRADED, &Self::graded_attr(graded))
            .expect("graded attribute");
    }

    /// Accept the next model replacement: validate, persist, acknowledge.
    pub async fn accept_next_save(&mut self) -> Model {
        let request = self
            .endpoint
            .model_updates
            .recv()
            .await
            .expect("a modelUpdated event");
        let model = request.envelope.event.model;
        model.validate().expect("host rejects malformed models");

        self.model = model.clone();
        self.revision += 1;
        info!(revision = self.revision, "Host persisted model");
        request.responder.reply(Ok(SaveReceipt {
            revision: self.revision,
        }));
        model
    }

    /// Reject the next model replacement with a save error.
    pub async fn reject_next_save(&mut self, reason: &str) {
        let request = self
            .endpoint
            .model_updates
            .recv()
            .await
            .expect("a modelUpdated event");
        request
            .responder
            .reply(Err(HostError::SaveRejected(reason.to_string())));
    }

    /// Grade the next submission with first-match-wins over the model's
    /// rules and reply with the evaluation.
    pub async fn grade_next_submission(&mut self) -> EvaluationResult {
        let request = self
            .endpoint
            .submissions
            .recv()
            .await
            .expect("a submitActivity event");
        let submission = &request.envelope.event;

        let evaluations: Vec<Evaluation> = submission
            .payload
            .iter()
            .zip(&self.model.authoring.parts)
            .map(|(part_submission, part)| {
                let out_of = part
                    .responses
                    .iter()
                    .map(|r| r.score)
                    .fold(0.0_f64, f64::max);
                let matched = part
                    .responses
                    .iter()
                    .find(|r| r.rule.matches(&part_submission.response.input))
                    .expect("the catch-all matches any input");
                Evaluation {
                    score: matched.score,
                    out_of,
                    feedback: matched.feedback.clone(),
                }
            })
            .collect();

        let result = EvaluationResult {
            attempt_guid: Some(submission.attempt_guid.clone()),
            evaluations,
        };
        request.responder.reply(Ok(result.clone()));
        result
    }

    /// Fail the next submission with an evaluation error.
    pub async fn fail_next_submission(&mut self, reason: &str) {
        let request = self
            .endpoint
            .submissions
            .recv()
            .await
            .expect("a submitActivity event");
        request
            .responder
            .reply(Err(HostError::EvaluationFailed(reason.to_string())));
    }

    /// Drop the next submission's responder without answering.
    pub async fn abandon_next_submission(&mut self) {
        let request = self
            .endpoint
            .submissions
            .recv()
            .await
            .expect("a submitActivity event");
        drop(request.responder);
    }
}
