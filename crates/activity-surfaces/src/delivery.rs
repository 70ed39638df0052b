//! # Delivery Surface
//!
//! Displays the prompt and an input keyed by the current attempt, submits
//! the learner's answer over the `submitActivity` channel, and presents the
//! feedback the host's evaluation returns.
//!
//! The surface never mutates attempt state: the host creates it when a
//! learner starts an attempt and replaces it for a new attempt, pushing it
//! down as a fresh `state` attribute.

use crate::errors::SurfaceError;
use crate::lifecycle::Lifecycle;
use crate::surface::Surface;
use crate::view::{DeliveryView, MountPoint};
use activity_bus::{HostError, ReplyHandle, RequestSender, Submission};
use activity_model::{
    AttributeBag, EvaluationResult, PartSubmission, StudentInput, ATTR_MODEL, ATTR_STATE,
};
use tracing::{debug, warn};

/// Attributes that trigger a re-render when changed.
const OBSERVED: &[&str] = &[ATTR_MODEL, ATTR_STATE];

/// The delivery view of one activity instance.
pub struct DeliverySurface {
    lifecycle: Lifecycle,
    attrs: AttributeBag,
    mount_point: MountPoint<DeliveryView>,
    sender: RequestSender<Submission>,
    pending: Option<ReplyHandle<EvaluationResult>>,
    graded: Option<bool>,
}

impl DeliverySurface {
    /// Create an unmounted surface wired to the host's submission channel.
    #[must_use]
    pub fn new(sender: RequestSender<Submission>) -> Self {
        Self {
            lifecycle: Lifecycle::default(),
            attrs: AttributeBag::new(),
            mount_point: MountPoint::new(),
            sender,
            pending: None,
            graded: None,
        }
    }

    /// The current rendered view, if mounted.
    #[must_use]
    pub fn view(&self) -> Option<&DeliveryView> {
        self.mount_point.contents()
    }

    /// Whether the surface is operating in a graded context.
    ///
    /// Informational at this layer: submission and retry policy may differ
    /// in a graded assessment, but this reference surface does not branch
    /// on it.
    #[must_use]
    pub fn graded(&self) -> Option<bool> {
        self.graded
    }

    /// Set the learner's input buffer.
    ///
    /// # Errors
    ///
    /// Fails when the surface has not been rendered yet.
    pub fn student_input(&mut self, text: &str) -> Result<(), SurfaceError> {
        let view = self
            .mount_point
            .contents_mut()
            .ok_or(SurfaceError::NotMounted)?;
        view.input_value = text.to_string();
        Ok(())
    }

    /// Submit the learner's current input for evaluation.
    ///
    /// Builds a one-entry payload keyed by `part_attempt_guid` and
    /// dispatches it; absent input is submitted as-is, any rejection is the
    /// host's responsibility. Returns immediately; the evaluation arrives
    /// through the pending reply handle (see [`DeliverySurface::settle`]).
    ///
    /// # Errors
    ///
    /// Fails when unrendered or when the host is unreachable.
    pub fn submit(
        &mut self,
        attempt_guid: &str,
        part_attempt_guid: &str,
    ) -> Result<(), SurfaceError> {
        let view = self.mount_point.contents().ok_or(SurfaceError::NotMounted)?;

        let submission = Submission {
            attempt_guid: attempt_guid.to_string(),
            payload: vec![PartSubmission {
                attempt_guid: part_attempt_guid.to_string(),
                response: StudentInput {
                    input: view.input_value.clone(),
                },
            }],
        };

        debug!(attempt_guid, part_attempt_guid, "Submitting answer");
        let handle = self.sender.dispatch(submission)?;
        self.pending = Some(handle);
        Ok(())
    }

    /// Await the host's evaluation of the last submission, if one is pending.
    ///
    /// On success, presents the first evaluation's feedback in the view; on
    /// a host error, records a notice and presents no evaluation content.
    /// Either way the surface stays usable.
    pub async fn settle(&mut self) -> Option<Result<EvaluationResult, HostError>> {
        let handle = self.pending.take()?;
        let outcome = handle.outcome().await;

        if let Some(view) = self.mount_point.contents_mut() {
            match &outcome {
                Ok(result) => {
                    view.notice = None;
                    view.feedback = result
                        .evaluations
                        .first()
                        .map(|e| e.feedback.content.clone());
                    debug!(feedback = ?view.feedback, "Evaluation presented");
                }
                Err(e) => {
                    view.feedback = None;
                    view.notice = Some(e.to_string());
                    warn!(error = %e, "Submission failed");
                }
            }
        }

        Some(outcome)
    }

    /// Take ownership of the pending reply handle, overriding the default
    /// present-feedback continuation.
    pub fn take_pending(&mut self) -> Option<ReplyHandle<EvaluationResult>> {
        self.pending.take()
    }

    fn render(&mut self) -> Result<(), SurfaceError> {
        let model = self.attrs.model()?;
        let state = self.attrs.state()?;
        self.graded = Some(self.attrs.graded()?);

        // One input per part, keyed by the attempt identifiers; this simple
        // activity has exactly one part.
        self.mount_point
            .replace(DeliveryView::new(model.stem, state.attempt_guid));
        Ok(())
    }
}

impl Surface for DeliverySurface {
    fn observed_attributes(&self) -> &'static [&'static str] {
        OBSERVED
    }

    fn is_mounted(&self) -> bool {
        self.lifecycle.is_mounted()
    }

    fn mount(&mut self) -> Result<(), SurfaceError> {
        if !self.lifecycle.mount() {
            return Ok(());
        }
        self.render()
    }

    fn attribute_changed(&mut self, name: &str, value: &str) -> Result<(), SurfaceError> {
        let changed = self.attrs.set(name, value);
        if changed && self.is_mounted() && OBSERVED.contains(&name) {
            return self.render();
        }
        Ok(())
    }
}
