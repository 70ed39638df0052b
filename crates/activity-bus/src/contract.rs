//! # The Paired Boundary
//!
//! [`ActivityChannels::new`] wires both event channels at once and hands the
//! plugin side to the surfaces and the host side to the platform. This pair
//! is the entire trust boundary: nothing else crosses it.

use crate::channel::{request_channel, RequestReceiver, RequestSender};
use crate::events::{ModelUpdated, Submission};
use crate::DEFAULT_CHANNEL_CAPACITY;

/// Constructor for the paired plugin/host endpoints.
pub struct ActivityChannels;

impl ActivityChannels {
    /// Create the boundary with the default buffer capacity.
    #[must_use]
    pub fn new() -> (PluginEndpoint, HostEndpoint) {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Create the boundary with an explicit buffer capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> (PluginEndpoint, HostEndpoint) {
        let (model_tx, model_rx) = request_channel::<ModelUpdated>(capacity);
        let (submit_tx, submit_rx) = request_channel::<Submission>(capacity);

        (
            PluginEndpoint {
                model_updates: model_tx,
                submissions: submit_tx,
            },
            HostEndpoint {
                model_updates: model_rx,
                submissions: submit_rx,
            },
        )
    }
}

/// The plugin's half of the boundary, held by surfaces.
#[derive(Clone)]
pub struct PluginEndpoint {
    /// Change-submission channel (authoring).
    pub model_updates: RequestSender<ModelUpdated>,
    /// Answer-submission channel (delivery).
    pub submissions: RequestSender<Submission>,
}

/// The host's half of the boundary.
pub struct HostEndpoint {
    /// Incoming model replacements.
    pub model_updates: RequestReceiver<ModelUpdated>,
    /// Incoming answer submissions.
    pub submissions: RequestReceiver<Submission>,
}
