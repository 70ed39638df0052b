//! # The Surface Trait
//!
//! The contract a host uses to drive any surface, independent of whether it
//! is an authoring or delivery view. The host constructs the surface, mounts
//! it, and pushes serialized attributes; everything else flows back through
//! the event channels.

use crate::errors::SurfaceError;

/// A pluggable unit rendering either an authoring or delivery view.
pub trait Surface {
    /// The attribute names whose changes trigger a re-render.
    fn observed_attributes(&self) -> &'static [&'static str];

    /// Whether the surface has been mounted.
    fn is_mounted(&self) -> bool;

    /// Mount the surface and perform the initial render from the current
    /// attributes. Idempotent: a silent no-op when already mounted.
    ///
    /// # Errors
    ///
    /// Fails when the current attributes violate the expected shape.
    fn mount(&mut self) -> Result<(), SurfaceError>;

    /// Record an attribute value pushed by the host.
    ///
    /// Re-renders only when the surface is mounted, the attribute is
    /// observed, and the value actually changed. Unobserved names are
    /// stored but otherwise ignored; changes before mount are picked up by
    /// the first render.
    ///
    /// # Errors
    ///
    /// Fails when a re-render is triggered and the attributes violate the
    /// expected shape.
    fn attribute_changed(&mut self, name: &str, value: &str) -> Result<(), SurfaceError>;
}
