//! Batch execution strategies
//!
//! Both executors take a per-item job and return results in input order;
//! the first failing item fails the whole batch.

pub mod cooperative;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

pub use cooperative::CooperativeExecutor;
#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// One item after another on the calling thread
    Sequential,
    /// Fixed-size worker pool
    Parallel,
    /// Cooperative tasks on an async runtime
    Cooperative,
}

impl ExecutionMode {
    /// Lower-case mode name
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Parallel => "parallel",
            ExecutionMode::Cooperative => "cooperative",
        }
    }
}
