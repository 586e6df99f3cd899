//! Single-lane dispatch queue for the rate-limited provider.
//!
//! Jikan enforces an approximate 1 request/second ceiling. Rather than a
//! fixed-rate scheduler, the queue leaves a fixed gap after each completed
//! request before starting the next — conservative under bursty demand, at
//! the cost of latency proportional to queue depth.
//!
//! # Shape
//!
//! One worker task owns the receiving end of an unbounded channel:
//! receive a job, run its network call, settle the caller's oneshot, sleep
//! the spacing, receive the next. The idle/draining state machine is the
//! blocked/active state of `recv()` — enqueuing from inside a completion
//! path cannot re-enter the worker.
//!
//! Ordering is strictly FIFO, with no priorities and no cancellation. A
//! failed request settles its own caller with the error and leaves the
//! rest of the queue untouched.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use crate::telemetry;
use crate::transport::Transport;
use crate::types::RequestSpec;
use crate::{FetchError, Result};

/// Minimum gap between the completion of one request and the start of the
/// next, keeping throughput safely under the provider's ~1 req/s ceiling.
pub const DEFAULT_REQUEST_SPACING: Duration = Duration::from_millis(1100);

struct QueuedRequest {
    spec: RequestSpec,
    enqueued_at: tokio::time::Instant,
    reply: oneshot::Sender<Result<Value>>,
}

/// Serializes requests to one rate-limited provider.
///
/// Created by the gateway builder; `new` spawns the worker task and so
/// requires a tokio runtime context. The worker exits when the queue (and
/// with it the sending half of the channel) is dropped.
pub struct DispatchQueue {
    tx: mpsc::UnboundedSender<QueuedRequest>,
}

impl DispatchQueue {
    /// Create a queue draining through `transport` with the given spacing.
    pub fn new(transport: Arc<dyn Transport>, spacing: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(drain(rx, transport, spacing));
        Self { tx }
    }

    /// Append a request at the tail and wait for its own result.
    ///
    /// The returned future settles only once this request has been
    /// dequeued and its network call has completed.
    pub async fn submit(&self, spec: RequestSpec) -> Result<Value> {
        let (reply, response) = oneshot::channel();
        let job = QueuedRequest {
            spec,
            enqueued_at: tokio::time::Instant::now(),
            reply,
        };

        metrics::gauge!(telemetry::QUEUE_DEPTH).increment(1.0);
        if self.tx.send(job).is_err() {
            metrics::gauge!(telemetry::QUEUE_DEPTH).decrement(1.0);
            return Err(FetchError::QueueClosed);
        }

        response.await.map_err(|_| FetchError::QueueClosed)?
    }
}

async fn drain(
    mut rx: mpsc::UnboundedReceiver<QueuedRequest>,
    transport: Arc<dyn Transport>,
    spacing: Duration,
) {
    while let Some(job) = rx.recv().await {
        metrics::gauge!(telemetry::QUEUE_DEPTH).decrement(1.0);
        metrics::histogram!(telemetry::QUEUE_WAIT_SECONDS)
            .record(job.enqueued_at.elapsed().as_secs_f64());

        debug!(url = %job.spec.url, "dispatching rate-limited request");
        let result = transport.execute(&job.spec).await;

        // The caller may have gone away; its loss, the queue keeps going.
        let _ = job.reply.send(result);

        tokio::time::sleep(spacing).await;
    }
}
