//! # Creation-Function Registry
//!
//! When the host instantiates a brand-new activity, it consults a registry
//! mapping the activity-type identifier to a creation function that produces
//! a default model. Creation is async because a real implementation may call
//! out to its own service using the provided context; the reference creator
//! resolves immediately.
//!
//! ## Design
//!
//! The registry is an explicit value constructed at host startup and passed
//! by reference to whatever subsystem performs instantiation. It is not
//! ambient global state, but it keeps the "set once per type, read many
//! times" semantics: duplicate registration is an error and there is no
//! removal.

use activity_model::{default_model, Model};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info};

/// Errors from registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreationError {
    /// A creation function is already registered for this type.
    #[error("Creation function already registered for activity type {activity_type:?}")]
    AlreadyRegistered { activity_type: String },

    /// No creation function is registered for this type.
    #[error("Unknown activity type {activity_type:?}")]
    UnknownActivityType { activity_type: String },

    /// The creation function itself failed.
    #[error("Creation failed: {0}")]
    Failed(String),
}

/// Host-supplied context passed to a creation function.
///
/// Opaque to the registry; real creators may use it to reach their own
/// backing service.
#[derive(Debug, Clone, Default)]
pub struct CreationContext {
    /// Free-form host extensions (project id, author, locale, ...).
    pub extensions: Value,
}

/// A creation function for one activity type.
#[async_trait]
pub trait CreationFn: Send + Sync {
    /// Produce a freshly built default model.
    ///
    /// # Errors
    ///
    /// Implementations that reach out to external services may fail.
    async fn create(&self, context: &CreationContext) -> Result<Model, CreationError>;
}

/// A type-erased creation function.
pub type DynCreationFn = Box<dyn CreationFn>;

/// Registry of creation functions keyed by activity-type identifier.
#[derive(Default)]
pub struct CreationRegistry {
    creators: HashMap<String, DynCreationFn>,
}

impl CreationRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a creation function for an activity type.
    ///
    /// # Errors
    ///
    /// Set once per type: registering a duplicate is an error rather than a
    /// silent replacement.
    pub fn register(
        &mut self,
        activity_type: &str,
        creator: DynCreationFn,
    ) -> Result<(), CreationError> {
        if self.creators.contains_key(activity_type) {
            return Err(CreationError::AlreadyRegistered {
                activity_type: activity_type.to_string(),
            });
        }
        info!(activity_type, "Creation function registered");
        self.creators.insert(activity_type.to_string(), creator);
        Ok(())
    }

    /// Whether a creation function is registered for this type.
    #[must_use]
    pub fn is_registered(&self, activity_type: &str) -> bool {
        self.creators.contains_key(activity_type)
    }

    /// Create a new model for the given activity type.
    ///
    /// # Errors
    ///
    /// [`CreationError::UnknownActivityType`] when nothing is registered,
    /// or the creator's own failure.
    pub async fn create(
        &self,
        activity_type: &str,
        context: &CreationContext,
    ) -> Result<Model, CreationError> {
        let creator =
            self.creators
                .get(activity_type)
                .ok_or_else(|| CreationError::UnknownActivityType {
                    activity_type: activity_type.to_string(),
                })?;

        debug!(activity_type, "Creating new activity instance");
        creator.create(context).await
    }
}

/// The reference creation function: resolves immediately with the canned
/// default model.
pub struct DefaultModelCreator;

#[async_trait]
impl CreationFn for DefaultModelCreator {
    async fn create(&self, _context: &CreationContext) -> Result<Model, CreationError> {
        Ok(default_model())
    }
}
