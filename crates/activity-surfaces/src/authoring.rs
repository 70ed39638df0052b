//! # Authoring Surface
//!
//! Displays an editable projection of the content model and reports author
//! edits to the host as a full model replacement over the `modelUpdated`
//! channel.
//!
//! ## Responsibilities
//!
//! 1. Render the current model from the `model` attribute, including when
//!    the host pushes a new model underneath us (undo/redo pushes a previous
//!    editing state down as a fresh attribute value).
//! 2. On save, rebuild the entire model from the edited fields and dispatch
//!    it. The contract is full replacement, never a diff.

use crate::errors::SurfaceError;
use crate::lifecycle::Lifecycle;
use crate::surface::Surface;
use crate::view::{AuthoringView, MountPoint};
use activity_bus::{HostError, ModelUpdated, ReplyHandle, RequestSender, SaveReceipt};
use activity_model::{build_model, AttributeBag, ATTR_MODEL};
use tracing::{debug, warn};

/// Attributes that trigger a re-render when changed.
const OBSERVED: &[&str] = &[ATTR_MODEL];

/// The authoring view of one activity instance.
pub struct AuthoringSurface {
    lifecycle: Lifecycle,
    attrs: AttributeBag,
    mount_point: MountPoint<AuthoringView>,
    sender: RequestSender<ModelUpdated>,
    pending: Option<ReplyHandle<SaveReceipt>>,
}

impl AuthoringSurface {
    /// Create an unmounted surface wired to the host's model-update channel.
    #[must_use]
    pub fn new(sender: RequestSender<ModelUpdated>) -> Self {
        Self {
            lifecycle: Lifecycle::default(),
            attrs: AttributeBag::new(),
            mount_point: MountPoint::new(),
            sender,
            pending: None,
        }
    }

    /// The current rendered view, if mounted.
    #[must_use]
    pub fn view(&self) -> Option<&AuthoringView> {
        self.mount_point.contents()
    }

    /// Edit the stem field of the rendered view.
    ///
    /// # Errors
    ///
    /// Fails when the surface has not been rendered yet.
    pub fn edit_stem(&mut self, text: &str) -> Result<(), SurfaceError> {
        let view = self
            .mount_point
            .contents_mut()
            .ok_or(SurfaceError::NotMounted)?;
        view.stem_field = text.to_string();
        Ok(())
    }

    /// Edit the correct-answer field of the rendered view.
    ///
    /// # Errors
    ///
    /// Fails when the surface has not been rendered yet.
    pub fn edit_correct(&mut self, value: &str) -> Result<(), SurfaceError> {
        let view = self
            .mount_point
            .contents_mut()
            .ok_or(SurfaceError::NotMounted)?;
        view.correct_field = value.to_string();
        Ok(())
    }

    /// Save the current edits: build a brand-new model from the field values
    /// and dispatch it to the host.
    ///
    /// Returns immediately; the host's acknowledgement arrives through the
    /// pending reply handle (see [`AuthoringSurface::settle`]). A second
    /// save while one is pending supersedes the earlier handle.
    ///
    /// # Errors
    ///
    /// Fails when unrendered or when the host is unreachable.
    pub fn submit(&mut self) -> Result<(), SurfaceError> {
        let view = self.mount_point.contents().ok_or(SurfaceError::NotMounted)?;
        let model = build_model(&view.stem_field, &view.correct_field);

        debug!(stem = %view.stem_field, "Submitting model replacement");
        let handle = self.sender.dispatch(ModelUpdated { model })?;
        self.pending = Some(handle);
        Ok(())
    }

    /// Await the host's answer to the last save, if one is pending.
    ///
    /// The default continuation only logs the outcome; a production consumer
    /// that needs more should use [`AuthoringSurface::take_pending`] instead.
    pub async fn settle(&mut self) -> Option<Result<SaveReceipt, HostError>> {
        let handle = self.pending.take()?;
        let outcome = handle.outcome().await;
        match &outcome {
            Ok(receipt) => debug!(revision = receipt.revision, "Model save acknowledged"),
            Err(e) => warn!(error = %e, "Model save failed"),
        }
        Some(outcome)
    }

    /// Take ownership of the pending reply handle, overriding the default
    /// log-only continuation.
    pub fn take_pending(&mut self) -> Option<ReplyHandle<SaveReceipt>> {
        self.pending.take()
    }

    fn render(&mut self) -> Result<(), SurfaceError> {
        // model() validated the shape: exactly one part, scoring rule first.
        let model = self.attrs.model()?;
        let correct = model.authoring.parts[0].responses[0].rule.answer();

        self.mount_point.replace(AuthoringView {
            stem_field: model.stem.clone(),
            correct_field: correct.to_string(),
        });
        Ok(())
    }
}

impl Surface for AuthoringSurface {
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
