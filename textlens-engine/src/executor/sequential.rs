//! Sequential execution strategy

use crate::error::Result;
use crate::executor::ExecutionMode;

/// Runs a batch on the calling thread
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialExecutor;

impl SequentialExecutor {
    /// Apply `job` to every item in order
    pub fn run<T, R, F>(&self, items: &[T], job: F) -> Result<Vec<R>>
    where
        F: Fn(&T) -> Result<R>,
    {
        items.iter().map(job).collect()
    }

    /// Get the execution mode
    pub fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
