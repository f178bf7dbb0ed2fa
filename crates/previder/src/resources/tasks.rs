//! Task endpoints and the task poller

use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use super::{IAAS_BASE_PATH, Resource, require};
use crate::{
    client::Client,
    error::{Error, Result},
    observability::TaskWaitContext,
    types::{Task, TaskState},
};

/// Default time to wait for a task.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Time between two polls of the same task.
pub const POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Limits of a task wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitOptions {
    /// Give up once this much time has passed
    pub timeout: Duration,
    /// Time between polls; the first poll happens one interval after the start
    pub interval: Duration,
}

impl WaitOptions {
    /// Wait up to `timeout`, polling every [`POLL_INTERVAL`].
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            interval: POLL_INTERVAL,
        }
    }

    /// Poll at a different interval.
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

/// Tasks API resource.
///
/// Mutating calls on other resources are accepted by the server and carried
/// out in the background. The task they return can be waited on here.
///
/// # Example
///
/// ```rust,no_run
/// # use previder::{Client, CancellationToken, WaitOptions};
/// # use std::time::Duration;
/// # async fn example(client: Client) -> previder::Result<()> {
/// let shutdown = CancellationToken::new();
/// let task = client
///     .tasks()
///     .wait_with("65f1c0de2a4b7e0012345678", WaitOptions::new(Duration::from_secs(600)), &shutdown)
///     .await?;
/// println!("done at {:?}", task.completed_at());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Tasks {
    client: Client,
}

impl Tasks {
    /// Create a new Tasks resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List recent tasks.
    pub async fn list(&self) -> Result<Vec<Task>> {
        let path = format!("{IAAS_BASE_PATH}task");
        Ok(self.client.get(&path, None).await?.unwrap_or_default())
    }

    /// Fetch a single task.
    pub async fn get(&self, id: &str) -> Result<Task> {
        let path = format!("{IAAS_BASE_PATH}task/{id}");
        require(self.client.get(&path, None).await?, &path)
    }

    /// Wait until the task finishes or `timeout` passes.
    ///
    /// # Errors
    ///
    /// - [`Error::TaskTimeout`] when the task is still running at the deadline
    /// - [`Error::TaskFailed`] with the server's own message when the task failed
    /// - Any error of a poll, which ends the wait immediately
    pub async fn wait_for(&self, id: &str, timeout: Duration) -> Result<Task> {
        self.wait_with(id, WaitOptions::new(timeout), &CancellationToken::new())
            .await
    }

    /// Wait for a task returned by a mutating call.
    pub async fn wait_for_task(&self, task: &Task, timeout: Duration) -> Result<Task> {
        self.wait_for(&task.id, timeout).await
    }

    /// Wait for a task with explicit limits and a cancellation token.
    ///
    /// Polls are read-only and run one at a time. A poll in flight when the
    /// deadline passes or `cancel` fires is dropped, which aborts its request.
    ///
    /// # Errors
    ///
    /// As [`wait_for`](Self::wait_for), plus [`Error::Cancelled`] when `cancel`
    /// fires and [`Error::Config`] for a zero interval.
    #[tracing::instrument(skip(self, options, cancel), fields(timeout_ms = options.timeout.as_millis()))]
    pub async fn wait_with(
        &self,
        id: &str,
        options: WaitOptions,
        cancel: &CancellationToken,
    ) -> Result<Task> {
        if options.interval.is_zero() {
            return Err(Error::Config("poll interval must be positive".to_string()));
        }

        let mut ctx = TaskWaitContext::start(id, options.timeout, options.interval);
        let result = self.poll_until_terminal(id, options, cancel, &mut ctx).await;

        match &result {
            Ok(_) => ctx.log_succeeded(),
            Err(e) => ctx.log_failed(&e.to_string()),
        }
        result
    }

    async fn poll_until_terminal(
        &self,
        id: &str,
        options: WaitOptions,
        cancel: &CancellationToken,
        ctx: &mut TaskWaitContext,
    ) -> Result<Task> {
        let start = Instant::now();
        let deadline = tokio::time::sleep_until(start + options.timeout);
        tokio::pin!(deadline);

        let mut ticker = tokio::time::interval_at(start + options.interval, options.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let timed_out = || Error::TaskTimeout {
            task_id: id.to_string(),
            timeout: options.timeout,
        };
        let cancelled = || Error::Cancelled {
            task_id: id.to_string(),
        };

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(cancelled()),
                _ = &mut deadline => return Err(timed_out()),
                _ = ticker.tick() => {}
            }

            let task = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(cancelled()),
                _ = &mut deadline => return Err(timed_out()),
                fetched = self.get(id) => fetched?,
            };

            let state = task.state();
            ctx.log_poll(state, task.progress);

            match state {
                TaskState::Pending => {}
                TaskState::Succeeded => return Ok(task),
                TaskState::Failed => {
                    return Err(Error::TaskFailed {
                        task_id: id.to_string(),
                        message: task.failure_message().unwrap_or("task failed").to_string(),
                    });
                }
            }
        }
    }
}

impl Resource for Tasks {
    fn client(&self) -> &Client {
        &self.client
    }
}
