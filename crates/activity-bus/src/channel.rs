//! # Request/Response Channel
//!
//! The dispatch side hands the plugin a [`ReplyHandle`]; the receive side
//! hands the host an [`IncomingRequest`] whose [`Responder`] consumes itself
//! on reply. Correlation ids tie the two halves together in logs.
//!
//! Built on `tokio::sync::mpsc` (requests) and `tokio::sync::oneshot`
//! (replies). Dispatch never blocks the caller.

use crate::events::{EventPayload, HostError};
use std::pin::Pin;
use std::task::{Context, Poll};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio_stream::Stream;
use tracing::{debug, warn};
use uuid::Uuid;

/// Errors raised at dispatch time, before the host ever sees the event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The host side dropped its receiver.
    #[error("Host disconnected: {event} event not delivered")]
    HostDisconnected { event: &'static str },

    /// The request buffer toward the host is full.
    #[error("Host busy: {event} event buffer full")]
    HostBusy { event: &'static str },
}

/// An event wrapped with its correlation id.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<E> {
    /// Unique identifier correlating the request with its reply.
    pub correlation_id: Uuid,
    /// The event payload.
    pub event: E,
}

/// Plugin-side sender for one event type.
pub struct RequestSender<E: EventPayload> {
    tx: mpsc::Sender<IncomingRequest<E>>,
}

impl<E: EventPayload> Clone for RequestSender<E> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<E: EventPayload> RequestSender<E> {
    /// Dispatch an event to the host.
    ///
    /// Returns immediately with a [`ReplyHandle`] that resolves exactly once
    /// when the host answers. There is no way to withdraw a dispatched
    /// event.
    ///
    /// # Errors
    ///
    /// Fails only when the host is gone or its buffer is full; the event is
    /// not delivered in either case.
    pub fn dispatch(&self, event: E) -> Result<ReplyHandle<E::Reply>, DispatchError> {
        let correlation_id = Uuid::new_v4();
        let (reply_tx, reply_rx) = oneshot::channel();

        let request = IncomingRequest {
            envelope: Envelope {
                correlation_id,
                event,
            },
            responder: Responder {
                correlation_id,
                tx: reply_tx,
            },
        };

        match self.tx.try_send(request) {
            Ok(()) => {
                debug!(event = E::NAME, %correlation_id, "Event dispatched");
                Ok(ReplyHandle {
                    correlation_id,
                    rx: reply_rx,
                })
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                warn!(event = E::NAME, "Dispatch failed: host disconnected");
                Err(DispatchError::HostDisconnected { event: E::NAME })
            }
            Err(mpsc::error::TrySendError::Full(_)) => {
                warn!(event = E::NAME, "Dispatch failed: host buffer full");
                Err(DispatchError::HostBusy { event: E::NAME })
            }
        }
    }
}

/// Host-side receiver for one event type.
pub struct RequestReceiver<E: EventPayload> {
    rx: mpsc::Receiver<IncomingRequest<E>>,
}

impl<E: EventPayload> RequestReceiver<E> {
    /// Receive the next request, or `None` when all senders are gone.
    pub async fn recv(&mut self) -> Option<IncomingRequest<E>> {
        self.rx.recv().await
    }

    /// Receive without waiting; `None` when no request is buffered.
    pub fn try_recv(&mut self) -> Option<IncomingRequest<E>> {
        self.rx.try_recv().ok()
    }

    /// Convert into a [`Stream`] of requests for combinator-style hosts.
    #[must_use]
    pub fn into_stream(self) -> RequestStream<E> {
        RequestStream { inner: self }
    }
}

/// A request as seen by the host: the envelope plus its reply slot.
pub struct IncomingRequest<E: EventPayload> {
    /// The dispatched event with its correlation id.
    pub envelope: Envelope<E>,
    /// One-shot reply slot; consumed by [`Responder::reply`].
    pub responder: Responder<E::Reply>,
}

/// The host's one-shot reply slot for a single request.
///
/// Consuming `self` on reply makes double invocation unrepresentable. If
/// the responder is dropped instead, the plugin's handle resolves to
/// [`HostError::HostUnavailable`].
pub struct Responder<R> {
    correlation_id: Uuid,
    tx: oneshot::Sender<Result<R, HostError>>,
}

impl<R> Responder<R> {
    /// The correlation id of the request this responder answers.
    #[must_use]
    pub fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    /// Answer the request with a result or a host error.
    ///
    /// A plugin that already dropped its handle is not an error worth
    /// propagating; the outcome is simply discarded.
    pub fn reply(self, outcome: Result<R, HostError>) {
        let correlation_id = self.correlation_id;
        if self.tx.send(outcome).is_err() {
            debug!(%correlation_id, "Reply discarded: plugin dropped its handle");
        } else {
            debug!(%correlation_id, "Reply delivered");
        }
    }
}

/// Plugin-side handle resolving exactly once with the host's answer.
pub struct ReplyHandle<R> {
    correlation_id: Uuid,
    rx: oneshot::Receiver<Result<R, HostError>>,
}

impl<R> ReplyHandle<R> {
    /// The correlation id of the dispatched request.
    #[must_use]
    pub fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    /// Await the host's answer.
    ///
    /// # Errors
    ///
    /// The host's reported error, or [`HostError::HostUnavailable`] when the
    /// host dropped the responder without answering.
    pub async fn outcome(self) -> Result<R, HostError> {
        match self.rx.await {
            Ok(outcome) => outcome,
            Err(_) => Err(HostError::HostUnavailable),
        }
    }
}

/// A stream wrapper over a [`RequestReceiver`].
pub struct RequestStream<E: EventPayload> {
    inner: RequestReceiver<E>,
}

impl<E: EventPayload> Stream for RequestStream<E> {
    type Item = IncomingRequest<E>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.rx.poll_recv(cx)
    }
}

/// Create a request/response channel pair for one event type.
#[must_use]
pub fn request_channel<E: EventPayload>(
    capacity: usize,
) -> (RequestSender<E>, RequestReceiver<E>) {
    let (tx, rx) = mpsc::channel(capacity);
    (RequestSender { tx }, RequestReceiver { rx })
}
