//! Cooperative execution strategy
//!
//! Every item becomes one async unit that first waits for a simulated I/O
//! latency and then runs the job. All units are created up front and
//! driven together, so a single-threaded runtime interleaves their waits.

use crate::{error::Result, executor::ExecutionMode};
use futures::future::try_join_all;
use log::debug;
use std::time::Duration;

/// Runs a batch as cooperative async units
#[derive(Debug, Clone, Copy)]
pub struct CooperativeExecutor {
    latency: Duration,
}

impl CooperativeExecutor {
    /// Create an executor whose units each wait `latency` before working
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Simulated latency per unit
    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Apply `job` to every item, keeping input order
    ///
    /// Requires a tokio runtime with the time driver enabled when the
    /// latency is non-zero.
    pub async fn run<T, R, F>(&self, items: &[T], job: F) -> Result<Vec<R>>
    where
        F: Fn(&T) -> Result<R>,
    {
        let job = &job;
        let latency = self.latency;
        let units = items.iter().enumerate().map(|(index, item)| async move {
            if !latency.is_zero() {
                tokio::time::sleep(latency).await;
            }
            debug!("cooperative unit {index} running");
            job(item)
        });

        try_join_all(units).await
    }

    /// Get the execution mode
    pub fn mode(&self) -> ExecutionMode {
        ExecutionMode::Cooperative
    }
}
