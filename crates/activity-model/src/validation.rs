//! # Model & Attempt-State Validation
//!
//! Explicit shape checks applied after deserializing boundary attributes.
//! The first-match-wins rule ordering makes the catch-all position
//! load-bearing, so it is validated here instead of trusted by convention.
//!
//! ## Enforced Invariants
//!
//! | Invariant | Check |
//! |-----------|-------|
//! | Exactly one part | [`ValidationError::PartCount`] |
//! | At least one response | [`ValidationError::NoResponses`] |
//! | Exactly one catch-all | [`ValidationError::CatchAllCount`] |
//! | Catch-all evaluated last | [`ValidationError::CatchAllNotLast`] |
//! | A scoring rule precedes it | [`ValidationError::NoScoringResponse`] |

use crate::entities::{AttemptState, Model};
use thiserror::Error;

/// A model or attempt state that violates an expected shape.
///
/// These are caller contract violations: the component never attempts to
/// sanitize a malformed model, it names the violated expectation and fails
/// the render.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// This activity requires exactly one part.
    #[error("Expected exactly 1 part, found {found}")]
    PartCount { found: usize },

    /// A part must carry at least one response.
    #[error("Part {part_id:?} has no responses")]
    NoResponses { part_id: String },

    /// Exactly one catch-all response is required.
    #[error("Part {part_id:?} has {found} catch-all responses, expected exactly 1")]
    CatchAllCount { part_id: String, found: usize },

    /// The catch-all must be the last response (first match wins).
    #[error("Part {part_id:?} has a catch-all at position {position}, it must be last")]
    CatchAllNotLast { part_id: String, position: usize },

    /// A scoring response must precede the catch-all.
    #[error("Part {part_id:?} has no scoring response before the catch-all")]
    NoScoringResponse { part_id: String },

    /// The attempt GUID must be present and non-empty.
    #[error("Attempt state has an empty attempt GUID")]
    EmptyAttemptGuid,

    /// An attempt must carry at least one part attempt.
    #[error("Attempt {attempt_guid:?} has no part attempts")]
    NoPartAttempts { attempt_guid: String },
}

impl Model {
    /// Validate the structural invariants of this model.
    ///
    /// # Errors
    ///
    /// Returns the first violated shape expectation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.authoring.parts.len() != 1 {
            return Err(ValidationError::PartCount {
                found: self.authoring.parts.len(),
            });
        }

        for part in &self.authoring.parts {
            if part.responses.is_empty() {
                return Err(ValidationError::NoResponses {
                    part_id: part.id.clone(),
                });
            }

            let catch_alls: Vec<usize> = part
                .responses
                .iter()
                .enumerate()
                .filter(|(_, r)| r.rule.is_catch_all())
                .map(|(i, _)| i)
                .collect();

            if catch_alls.len() != 1 {
                return Err(ValidationError::CatchAllCount {
                    part_id: part.id.clone(),
                    found: catch_alls.len(),
                });
            }

            let position = catch_alls[0];
            if position != part.responses.len() - 1 {
                return Err(ValidationError::CatchAllNotLast {
                    part_id: part.id.clone(),
                    position,
                });
            }

            if position == 0 {
                return Err(ValidationError::NoScoringResponse {
                    part_id: part.id.clone(),
                });
            }
        }

        Ok(())
    }
}

impl AttemptState {
    /// Validate the structural invariants of this attempt state.
    ///
    /// # Errors
    ///
    /// Returns the first violated shape expectation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.attempt_guid.is_empty() {
            return Err(ValidationError::EmptyAttemptGuid);
        }
        if self.parts.is_empty() {
            return Err(ValidationError::NoPartAttempts {
                attempt_guid: self.attempt_guid.clone(),
            });
        }
        if self.parts.iter().any(|p| p.attempt_guid.is_empty()) {
            return Err(ValidationError::EmptyAttemptGuid);
        }
        Ok(())
    }
}
