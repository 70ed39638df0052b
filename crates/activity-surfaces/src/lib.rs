//! # Activity Surfaces
//!
//! The two peer components that compose into one pluggable activity:
//!
//! 1. [`AuthoringSurface`] displays an editable view of the content model and
//!    reports full-replacement edits to the host over the `modelUpdated`
//!    channel.
//! 2. [`DeliverySurface`] displays a read-only view of the model plus the
//!    current attempt state, reports answer submissions over the
//!    `submitActivity` channel, and presents the returned feedback.
//!
//! Both share the same lifecycle shape: `Unmounted → Mounted`, with every
//! render a pure projection of the latest attribute values. No render-local
//! state survives a re-render, which makes attribute pushes (undo/redo, new
//! attempts) safe to apply repeatedly and out of order.
//!
//! The view layer here is a thin plain-text stand-in for real markup; hosts
//! must not depend on its structure.

pub mod authoring;
pub mod delivery;
pub mod errors;
pub mod lifecycle;
pub mod surface;
pub mod view;

// An authoring entry point must also expose the delivery surface so the
// activity can be operated in test mode inside the host's page editor.
pub use authoring::AuthoringSurface;
pub use delivery::DeliverySurface;
pub use errors::SurfaceError;
pub use lifecycle::Lifecycle;
pub use surface::Surface;
pub use view::{AuthoringView, DeliveryView, MountPoint};
