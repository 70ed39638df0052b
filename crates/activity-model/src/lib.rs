//! # Activity Model Crate
//!
//! This crate contains all domain entities for one activity instance, the
//! response-rule grammar, the model builder, and the attribute protocol
//! through which a host pushes serialized state into a surface.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-crate content types are defined here.
//! - **Validated Boundaries**: Attribute strings are parsed with schema checks;
//!   a malformed model fails with a [`ValidationError`] naming the violated
//!   shape expectation, never with an opaque panic.
//! - **Host Ownership**: The host exclusively owns the [`Model`], the
//!   [`AttemptState`], and the [`EvaluationResult`]; surfaces only hold
//!   transient copies rehydrated from attributes on every render pass.

pub mod attributes;
pub mod builder;
pub mod entities;
pub mod rules;
pub mod validation;

pub use attributes::{AttributeBag, AttributeError, ATTR_GRADED, ATTR_MODEL, ATTR_STATE};
pub use builder::{build_model, default_model};
pub use entities::*;
pub use rules::{Rule, RuleKind};
pub use validation::ValidationError;
