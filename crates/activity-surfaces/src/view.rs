//! # View Layer
//!
//! A thin, replaceable stand-in for rendering markup. Each render replaces
//! the mount point's contents wholesale with a freshly projected view; the
//! editable field buffers inside a view play the role of input elements.
//!
//! The `Display` impls produce plain text for demos and assertions only.
//! Nothing in the host contract depends on this structure.

use std::fmt;

/// The render target a surface owns.
///
/// Holds at most one view; [`MountPoint::replace`] discards the previous
/// contents, mirroring an `innerHTML` replacement.
#[derive(Debug, Clone, Default)]
pub struct MountPoint<V> {
    contents: Option<V>,
}

impl<V> MountPoint<V> {
    /// An empty mount point.
    #[must_use]
    pub fn new() -> Self {
        Self { contents: None }
    }

    /// Replace the contents with a freshly rendered view.
    pub fn replace(&mut self, view: V) {
        self.contents = Some(view);
    }

    /// The current view, if rendered.
    #[must_use]
    pub fn contents(&self) -> Option<&V> {
        self.contents.as_ref()
    }

    /// Mutable access to the current view (field edits).
    pub fn contents_mut(&mut self) -> Option<&mut V> {
        self.contents.as_mut()
    }
}

/// The editable authoring projection of a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthoringView {
    /// Editable stem field, seeded from the model's stem.
    pub stem_field: String,
    /// Editable correct-answer field, seeded from the first response rule.
    pub correct_field: String,
}

impl fmt::Display for AuthoringView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "What question would you like to pose to the student?")?;
        writeln!(f, "  [{}]", self.stem_field)?;
        writeln!(f, "What is the correct answer?")?;
        writeln!(f, "  [{}]", self.correct_field)?;
        write!(f, "(Save Changes)")
    }
}

/// The read-only delivery projection plus the learner's input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryView {
    /// The prompt posed to the student.
    pub prompt: String,
    /// The attempt identifier keying the input element.
    pub input_key: String,
    /// The learner's current input buffer; reset on every render.
    pub input_value: String,
    /// Feedback presented after a successful evaluation.
    pub feedback: Option<String>,
    /// Notice presented after a host-reported error.
    pub notice: Option<String>,
}

impl DeliveryView {
    /// A freshly rendered view with empty input and no feedback.
    #[must_use]
    pub fn new(prompt: impl Into<String>, input_key: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            input_key: input_key.into(),
            input_value: String::new(),
            feedback: None,
            notice: None,
        }
    }
}

impl fmt::Display for DeliveryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.prompt)?;
        writeln!(f, "  [{}] #{}", self.input_value, self.input_key)?;
        write!(f, "(Submit)")?;
        if let Some(feedback) = &self.feedback {
            write!(f, "\n{feedback}")?;
        }
        if let Some(notice) = &self.notice {
            write!(f, "\n! {notice}")?;
        }
        Ok(())
    }
}
