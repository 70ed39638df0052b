//! # Attribute Protocol
//!
//! The host pushes state into a surface as serialized string attributes;
//! surfaces parse them with schema checks on every render pass. This module
//! is the typed boundary for that protocol: blind structural trust is
//! replaced by explicit parse-and-validate accessors.
//!
//! ## Attributes
//!
//! | Name | Surfaces | Value |
//! |------|----------|-------|
//! | `model` | both | JSON [`Model`] |
//! | `state` | delivery | JSON [`AttemptState`] |
//! | `graded` | delivery | JSON boolean |

use crate::entities::{AttemptState, Model};
use crate::validation::ValidationError;
use std::collections::HashMap;
use thiserror::Error;

/// Attribute carrying the serialized content model.
pub const ATTR_MODEL: &str = "model";
/// Attribute carrying the serialized attempt state (delivery only).
pub const ATTR_STATE: &str = "state";
/// Attribute carrying the graded-context flag (delivery only).
pub const ATTR_GRADED: &str = "graded";

/// An attribute that is absent or does not match its expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    /// The attribute was never set by the host.
    #[error("Missing attribute {attribute:?}")]
    Missing { attribute: &'static str },

    /// The attribute value failed to parse as its expected shape.
    #[error("Malformed attribute {attribute:?}: {reason}")]
    Malformed {
        attribute: &'static str,
        reason: String,
    },

    /// The attribute parsed but violates a structural invariant.
    #[error("Invalid attribute {attribute:?}: {source}")]
    Invalid {
        attribute: &'static str,
        source: ValidationError,
    },
}

/// String-keyed store for the serialized attributes pushed by the host.
///
/// `set` reports whether the stored value actually changed, so callers can
/// honor the protocol rule that only real changes retrigger a render.
#[derive(Debug, Clone, Default)]
pub struct AttributeBag {
    values: HashMap<String, String>,
}

impl AttributeBag {
    /// Create an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, returning whether the value actually changed.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        let value = value.into();
        match self.values.get(name) {
            Some(existing) if *existing == value => false,
            _ => {
                self.values.insert(name.to_string(), value);
                true
            }
        }
    }

    /// Raw serialized value of an attribute, if set.
    #[must_use]
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Parse and validate the `model` attribute.
    ///
    /// # Errors
    ///
    /// [`AttributeError::Missing`] when unset, [`AttributeError::Malformed`]
    /// when it is not a JSON model, [`AttributeError::Invalid`] when it
    /// violates a structural invariant.
    pub fn model(&self) -> Result<Model, AttributeError> {
        let model: Model = self.parse(ATTR_MODEL)?;
        model.validate().map_err(|source| AttributeError::Invalid {
            attribute: ATTR_MODEL,
            source,
        })?;
        Ok(model)
    }

    /// Parse and validate the `state` attribute.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`AttributeBag::model`].
    pub fn state(&self) -> Result<AttemptState, AttributeError> {
        let state: AttemptState = self.parse(ATTR_STATE)?;
        state.validate().map_err(|source| AttributeError::Invalid {
            attribute: ATTR_STATE,
            source,
        })?;
        Ok(state)
    }

    /// Parse the `graded` attribute.
    ///
    /// # Errors
    ///
    /// [`AttributeError::Missing`] or [`AttributeError::Malformed`].
    pub fn graded(&self) -> Result<bool, AttributeError> {
        self.parse(ATTR_GRADED)
    }

    fn parse<T: serde::de::DeserializeOwned>(
        &self,
        attribute: &'static str,
    ) -> Result<T, AttributeError> {
        let raw = self
            .raw(attribute)
            .ok_or(AttributeError::Missing { attribute })?;
        serde_json::from_str(raw).map_err(|e| AttributeError::Malformed {
            attribute,
            reason: e.to_string(),
        })
    }
}
