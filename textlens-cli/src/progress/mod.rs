//! Progress reporting module
//!
//! The progress bar is driven by analysis events: it is attached to the
//! analyzer as an observer and advances once per completed analysis.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use textlens_engine::{AnalysisEvent, AnalysisObserver, EventKind, ObserverError};

/// Progress reporter for batch analysis
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a reporter for `total` texts; a quiet reporter draws nothing
    pub fn new(total: u64, quiet: bool) -> Self {
        if quiet {
            return Self { progress_bar: None };
        }

        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} texts {msg}")
            .map(|style| style.progress_chars("##-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());

        let pb = ProgressBar::new(total);
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));

        Self {
            progress_bar: Some(pb),
        }
    }

    /// Current position of the bar
    pub fn position(&self) -> u64 {
        self.progress_bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }
}

impl AnalysisObserver for ProgressReporter {
    fn update(&self, event: &AnalysisEvent) -> Result<(), ObserverError> {
        if event.kind == EventKind::AnalysisCompleted {
            if let Some(pb) = &self.progress_bar {
                pb.set_message(event.text_preview.clone());
                pb.inc(1);
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "progress"
    }
}
