//! Caching, concurrent orchestration for textlens
//!
//! This crate wraps the pure strategies of `textlens-core` in a
//! [`TextAnalyzer`]: a bounded FIFO result cache, observer notifications,
//! worker-pool and cooperative batch execution, text comparison and export
//! of an analysis summary.
//!
//! # Example
//!
//! ```
//! use textlens_engine::TextAnalyzer;
//!
//! let analyzer = TextAnalyzer::with_defaults().unwrap();
//! let stats = analyzer.analyze("bueno bueno malo").unwrap();
//! assert_eq!(stats.total_words(), 3);
//! assert_eq!(analyzer.analysis_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod assembler;
pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod executor;
pub mod export;
pub mod retry;
pub mod timing;

// Re-export key types
pub use assembler::ResultAssembler;
pub use cache::{memoize, FifoCache, Memoized};
pub use config::EngineConfig;
pub use engine::{Comparison, TextAnalyzer, TextAnalyzerBuilder};
pub use error::{EngineError, Result};
pub use events::{
    AnalysisEvent, AnalysisObserver, EventHub, EventKind, EventRecorder, LoggingObserver,
    ObserverError,
};
pub use executor::ExecutionMode;
pub use export::{ExportFormat, ExportSummary};
pub use retry::RetryPolicy;
pub use timing::{measure, timed};

// Re-export from core for convenience
pub use textlens_core::{
    AnalysisStrategy, ComplexityLevel, Emotion, Keyword, TextStatistics, WordLengthSummary,
};
