//! Parallel execution strategy

use crate::{
    error::{EngineError, Result},
    executor::ExecutionMode,
};
use log::debug;
use rayon::prelude::*;

/// Fixed-size worker pool for batch analysis
#[derive(Debug)]
pub struct ParallelExecutor {
    pool: rayon::ThreadPool,
    workers: usize,
}

impl ParallelExecutor {
    /// Create a pool with `workers` threads
    pub fn new(workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(EngineError::ConfigError(
                "worker count must be greater than 0".to_string(),
            ));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("textlens-worker-{i}"))
            .build()
            .map_err(|e| EngineError::ThreadPool(e.to_string()))?;

        debug!("started worker pool with {workers} threads");
        Ok(Self { pool, workers })
    }

    /// Number of worker threads
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Apply `job` to every item on the pool, keeping input order
    pub fn run<T, R, F>(&self, items: &[T], job: F) -> Result<Vec<R>>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> Result<R> + Send + Sync,
    {
        self.pool
            .install(|| items.par_iter().map(&job).collect::<Result<Vec<_>>>())
    }

    /// Get the execution mode
    pub fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
