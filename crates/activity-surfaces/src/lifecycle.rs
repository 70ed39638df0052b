//! # Surface Lifecycle
//!
//! The shared state machine for both surfaces:
//!
//! ```text
//! [Unmounted] ──mount──→ [Mounted]
//!                           │
//!            attributeChange└──→ re-render (no-op while Unmounted)
//! ```
//!
//! Attribute changes arriving before mount are captured implicitly: the
//! first render always reads the current attribute values, never a
//! historical diff. There is no teardown state; removal from the host's
//! rendering tree is the host's concern.

/// The lifecycle state of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    /// Constructed but not yet mounted; renders are deferred.
    #[default]
    Unmounted,
    /// Mounted and rendered from the current attributes.
    Mounted,
}

impl Lifecycle {
    /// Whether the surface is mounted.
    #[must_use]
    pub fn is_mounted(self) -> bool {
        matches!(self, Self::Mounted)
    }

    /// Transition to mounted. Returns `false` when already mounted, making
    /// repeated mounts a silent no-op.
    pub fn mount(&mut self) -> bool {
        if self.is_mounted() {
            return false;
        }
        *self = Self::Mounted;
        true
    }
}
