//! Polling loop that claims and executes queued tasks.

use std::time::Duration;

use hyperion_db::models::task::Task;
use hyperion_db::repositories::TaskRepo;
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

use crate::executor;

/// Default polling interval for the runner loop.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Long-lived task runner.
///
/// Claims one task at a time from the shared queue and executes it to a
/// terminal state (completed or failed) before claiming the next.
pub struct TaskRunner {
    pool: PgPool,
    poll_interval: Duration,
}

impl TaskRunner {
    /// Create a runner with the default 1-second poll interval.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Create a runner with a custom poll interval.
    pub fn with_poll_interval(pool: PgPool, poll_interval: Duration) -> Self {
        Self {
            pool,
            poll_interval,
        }
    }

    /// Run until the cancellation token fires.
    ///
    /// Each tick drains the queue: after a successful claim the loop
    /// immediately tries again rather than waiting out the interval.
    pub async fn run(&self, cancel: CancellationToken) {
        let mut ticker = tokio::time::interval(self.poll_interval);
        tracing::info!(
            poll_interval_ms = self.poll_interval.as_millis() as u64,
            "Task runner started",
        );

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Task runner shutting down");
                    break;
                }
                _ = ticker.tick() => {
                    loop {
                        match self.run_next().await {
                            Ok(true) => continue,
                            Ok(false) => break,
                            Err(e) => {
                                tracing::error!(error = %e, "Task cycle failed");
                                break;
                            }
                        }
                    }
                }
            }
        }
    }

    /// Claim and execute at most one task. Returns whether a task ran.
    pub async fn run_next(&self) -> Result<bool, sqlx::Error> {
        let Some(task) = TaskRepo::claim_next(&self.pool).await? else {
            return Ok(false);
        };

        tracing::info!(task_id = task.id, task_type = %task.task_type, "Task claimed");
        self.execute_claimed(&task).await?;
        Ok(true)
    }

    /// Execute a claimed task and record its terminal state.
    async fn execute_claimed(&self, task: &Task) -> Result<(), sqlx::Error> {
        match executor::execute(&task.task_type, &task.parameters) {
            Ok(result) => {
                TaskRepo::complete(&self.pool, task.id, &result).await?;
                tracing::info!(task_id = task.id, "Task completed");
            }
            Err(message) => {
                TaskRepo::fail(&self.pool, task.id, &message).await?;
                tracing::warn!(task_id = task.id, error = %message, "Task failed");
            }
        }
        Ok(())
    }
}
