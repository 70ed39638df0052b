//! # Surface Error Types

use activity_bus::DispatchError;
use activity_model::AttributeError;
use thiserror::Error;

/// Errors raised by surface operations.
///
/// Attribute errors are caller contract violations: the host pushed a model
/// or state that does not match the expected shape, and the surface fails
/// the render instead of sanitizing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// An attribute was missing, malformed, or structurally invalid.
    #[error(transparent)]
    Attribute(#[from] AttributeError),

    /// The event could not be handed to the host.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// The operation requires a mounted surface.
    #[error("Surface is not mounted")]
    NotMounted,
}
