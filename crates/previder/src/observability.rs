//! Structured logging for HTTP exchanges and task waits
//!
//! Every request sent by the transport and every poll made by the task
//! waiter is logged through this module, so field names stay consistent.
//! Token and tenant headers are never logged.

use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::types::TaskState;

/// Request line of an HTTP exchange.
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// HTTP method
    pub method: String,
    /// URL path, without query string
    pub path: String,
    /// Encoded body size in bytes
    pub body_size: Option<usize>,
}

impl RequestMetadata {
    /// Create new request metadata
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            body_size: None,
        }
    }

    /// Record the encoded body size
    pub fn with_body_size(mut self, size: usize) -> Self {
        self.body_size = Some(size);
        self
    }

    /// Log the request before it is sent
    pub fn log_request(&self) {
        debug!(
            method = %self.method,
            path = %self.path,
            body_size = self.body_size,
            "Sending Previder API request"
        );
    }

    /// Log an exchange that never produced a response
    pub fn log_transport_error(&self, error: &str) {
        warn!(
            method = %self.method,
            path = %self.path,
            error = %error,
            "Previder API request did not complete"
        );
    }
}

/// Status line and timing of an HTTP response.
#[derive(Debug, Clone)]
pub struct ResponseMetadata {
    /// HTTP status code
    pub status: u16,
    /// Response body size in bytes
    pub body_size: Option<usize>,
    /// Time from send to fully read body
    pub elapsed: Duration,
}

impl ResponseMetadata {
    /// Create new response metadata
    pub fn new(status: u16, elapsed: Duration) -> Self {
        Self {
            status,
            body_size: None,
            elapsed,
        }
    }

    /// Record the response body size
    pub fn with_body_size(mut self, size: usize) -> Self {
        self.body_size = Some(size);
        self
    }

    /// Log a `2xx` response
    pub fn log_success(&self, request: &RequestMetadata) {
        debug!(
            method = %request.method,
            path = %request.path,
            status = self.status,
            elapsed_ms = self.elapsed.as_millis(),
            body_size = self.body_size,
            "Previder API request succeeded"
        );
    }

    /// Log a response outside `2xx`
    pub fn log_error(&self, request: &RequestMetadata, reason: &str) {
        warn!(
            method = %request.method,
            path = %request.path,
            status = self.status,
            elapsed_ms = self.elapsed.as_millis(),
            reason = %reason,
            "Previder API request failed"
        );
    }
}

/// Wall-clock timer for a single exchange.
pub struct RequestTimer {
    start: Instant,
}

impl RequestTimer {
    /// Start a new timer
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Time since start
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Progress of one task wait.
#[derive(Debug)]
pub struct TaskWaitContext {
    /// Task being waited on
    pub task_id: String,
    /// Polls made so far
    pub polls: u32,
    started: tokio::time::Instant,
}

impl TaskWaitContext {
    /// Start tracking a wait
    pub fn start(task_id: impl Into<String>, timeout: Duration, interval: Duration) -> Self {
        let task_id = task_id.into();
        debug!(
            task_id = %task_id,
            timeout_ms = timeout.as_millis(),
            interval_ms = interval.as_millis(),
            "Waiting for task"
        );
        Self {
            task_id,
            polls: 0,
            started: tokio::time::Instant::now(),
        }
    }

    /// Time spent waiting so far
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Log one poll result
    pub fn log_poll(&mut self, state: TaskState, progress: Option<u32>) {
        self.polls += 1;
        debug!(
            task_id = %self.task_id,
            poll = self.polls,
            state = ?state,
            progress = progress,
            "Polled task"
        );
    }

    /// Log a successful finish
    pub fn log_succeeded(&self) {
        info!(
            task_id = %self.task_id,
            polls = self.polls,
            elapsed_ms = self.elapsed().as_millis(),
            "Task completed"
        );
    }

    /// Log a wait that ended without success
    pub fn log_failed(&self, error: &str) {
        warn!(
            task_id = %self.task_id,
            polls = self.polls,
            elapsed_ms = self.elapsed().as_millis(),
            error = %error,
            "Task wait ended"
        );
    }
}
