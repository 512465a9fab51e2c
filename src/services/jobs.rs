//! Jobs Service
//!
//! Status lookup and polling for asynchronous WebAPI job executions.
//! Job status is live data, so nothing here is cached.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{sleep, Instant};
use tracing::debug;

use crate::error::{Result, WebApiError};
use crate::http::HttpExecutor;
use crate::models::JobExecution;

/// Service for `/job/` endpoints.
#[derive(Debug, Clone)]
pub struct JobsService {
    http: Arc<HttpExecutor>,
}

impl JobsService {
    pub(crate) fn new(http: Arc<HttpExecutor>) -> Self {
        Self { http }
    }

    /// Fetches the current status of a job execution.
    pub async fn status(&self, execution_id: i64) -> Result<JobExecution> {
        let data = self.http.get(&format!("/job/{}", execution_id)).await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Polls a job until it reaches a terminal state.
    ///
    /// Checks immediately, then every `interval`, failing with
    /// [`WebApiError::JobTimeout`] once `timeout` has elapsed without the
    /// job completing.
    pub async fn poll_until_complete(
        &self,
        execution_id: i64,
        interval: Duration,
        timeout: Duration,
    ) -> Result<JobExecution> {
        let deadline = Instant::now() + timeout;

        loop {
            let execution = self.status(execution_id).await?;
            debug!(execution_id, status = %execution.status, "job poll");

            if execution.is_complete() {
                return Ok(execution);
            }
            if Instant::now() + interval > deadline {
                return Err(WebApiError::JobTimeout {
                    execution_id,
                    timeout_secs: timeout.as_secs(),
                });
            }
            sleep(interval).await;
        }
    }
}
