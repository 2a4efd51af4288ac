//! Per-request deadline and cancellation signal.
//!
//! A [`RequestContext`] is created by the caller (the HTTP handler or the CLI)
//! and threaded explicitly into the lookup. The only suspending operation in a
//! lookup, the upstream call, runs inside [`RequestContext::run`], which races
//! it against the deadline and the cancellation signal.

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{Instant, sleep_until};

use crate::domain::errors::GeocodeError;

/// Deadline plus optional cancellation signal for a single lookup.
#[derive(Debug, Clone)]
pub struct RequestContext {
    deadline: Instant,
    cancelled: Option<watch::Receiver<bool>>,
}

/// Fires the cancellation signal of the [`RequestContext`] it was created with.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Cancels the associated context. Idempotent.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

impl RequestContext {
    /// Context expiring `timeout` from now, without a cancellation signal.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// Context expiring at an absolute instant.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline,
            cancelled: None,
        }
    }

    /// Context expiring `timeout` from now that can also be cancelled
    /// through the returned handle.
    pub fn with_cancellation(timeout: Duration) -> (Self, CancelHandle) {
        let (tx, rx) = watch::channel(false);
        let ctx = Self {
            deadline: Instant::now() + timeout,
            cancelled: Some(rx),
        };
        (ctx, CancelHandle { tx })
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.as_ref().is_some_and(|rx| *rx.borrow())
    }

    /// Polls `future` until it completes, the deadline passes or the context
    /// is cancelled, whichever happens first.
    ///
    /// Cancellation wins over the deadline when both have already fired.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Canceled`] or [`GeocodeError::Timeout`] when the
    /// corresponding signal fires before `future` completes. `future` is
    /// dropped in that case.
    pub async fn run<F, T>(&self, future: F) -> Result<T, GeocodeError>
    where
        F: Future<Output = T>,
    {
        if self.is_cancelled() {
            return Err(GeocodeError::Canceled);
        }
        if Instant::now() >= self.deadline {
            return Err(GeocodeError::Timeout);
        }

        tokio::select! {
            biased;
            () = self.wait_cancelled() => Err(GeocodeError::Canceled),
            () = sleep_until(self.deadline) => Err(GeocodeError::Timeout),
            output = future => Ok(output),
        }
    }

    async fn wait_cancelled(&self) {
        let Some(rx) = &self.cancelled else {
            return std::future::pending().await;
        };

        let mut rx = rx.clone();
        if rx.wait_for(|cancelled| *cancelled).await.is_err() {
            // Handle dropped without cancelling: only the deadline remains.
            std::future::pending::<()>().await;
        }
    }
}
