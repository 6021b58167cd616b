//! Analysis events and the observer hub
//!
//! Observers run synchronously on the thread that triggered the event. An
//! observer error is not contained: it aborts the analysis that raised it.

use log::info;
use serde::Serialize;
use std::fmt;
use std::sync::{Arc, Mutex, RwLock};
use textlens_core::TextStatistics;
use thiserror::Error;

/// Kind of analysis event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Fired before the strategies run
    AnalysisStarted,
    /// Fired once the statistics are assembled
    AnalysisCompleted,
}

impl EventKind {
    /// Wire name of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::AnalysisStarted => "analysis_started",
            EventKind::AnalysisCompleted => "analysis_completed",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An event delivered to observers
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisEvent {
    /// What happened
    pub kind: EventKind,
    /// Content digest of the analyzed text
    pub text_hash: String,
    /// Leading characters of the analyzed text
    pub text_preview: String,
    /// Result, present on completion only
    pub statistics: Option<TextStatistics>,
}

impl AnalysisEvent {
    /// Event announcing the start of an analysis
    pub fn started(text_hash: impl Into<String>, text_preview: impl Into<String>) -> Self {
        Self {
            kind: EventKind::AnalysisStarted,
            text_hash: text_hash.into(),
            text_preview: text_preview.into(),
            statistics: None,
        }
    }

    /// Event carrying a finished result
    pub fn completed(text_preview: impl Into<String>, statistics: TextStatistics) -> Self {
        Self {
            kind: EventKind::AnalysisCompleted,
            text_hash: statistics.text_hash().to_string(),
            text_preview: text_preview.into(),
            statistics: Some(statistics),
        }
    }
}

/// Failure reported by an observer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{observer}: {message}")]
pub struct ObserverError {
    /// Name of the failing observer
    pub observer: String,
    /// What went wrong
    pub message: String,
}

impl ObserverError {
    /// Create an observer error
    pub fn new(observer: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            observer: observer.into(),
            message: message.into(),
        }
    }
}

/// Subscriber to analysis events
pub trait AnalysisObserver: Send + Sync {
    /// React to an event
    fn update(&self, event: &AnalysisEvent) -> Result<(), ObserverError>;

    /// Name used in logs and errors
    fn name(&self) -> &str {
        "observer"
    }
}

/// Ordered set of observers
#[derive(Default)]
pub struct EventHub {
    observers: RwLock<Vec<Arc<dyn AnalysisObserver>>>,
}

fn same_observer(a: &Arc<dyn AnalysisObserver>, b: &Arc<dyn AnalysisObserver>) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}

impl EventHub {
    /// Create a hub without observers
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `observer`; returns `false` if it was already attached
    pub fn attach(&self, observer: Arc<dyn AnalysisObserver>) -> bool {
        let mut observers = self
            .observers
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if observers.iter().any(|o| same_observer(o, &observer)) {
            return false;
        }
        observers.push(observer);
        true
    }

    /// Unsubscribe `observer`; returns `false` if it was not attached
    pub fn detach(&self, observer: &Arc<dyn AnalysisObserver>) -> bool {
        let mut observers = self
            .observers
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let before = observers.len();
        observers.retain(|o| !same_observer(o, observer));
        observers.len() != before
    }

    /// Deliver `event` to every observer in attachment order
    ///
    /// Stops at the first failing observer and returns its error.
    pub fn notify(&self, event: &AnalysisEvent) -> Result<(), ObserverError> {
        // snapshot so observers may attach or detach while handling the event
        let observers: Vec<Arc<dyn AnalysisObserver>> = self
            .observers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();
        for observer in &observers {
            observer.update(event)?;
        }
        Ok(())
    }

    /// Number of attached observers
    pub fn len(&self) -> usize {
        self.observers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Whether no observer is attached
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for EventHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHub")
            .field("observers", &self.len())
            .finish()
    }
}

/// Observer writing every event to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingObserver;

impl AnalysisObserver for LoggingObserver {
    fn update(&self, event: &AnalysisEvent) -> Result<(), ObserverError> {
        match &event.statistics {
            Some(stats) => info!(
                "{} [{}] words={} sentiment={:.2} readability={:.2}",
                event.kind,
                event.text_hash,
                stats.total_words(),
                stats.sentiment_score(),
                stats.readability_score()
            ),
            None => info!("{} [{}] {:?}", event.kind, event.text_hash, event.text_preview),
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "logging"
    }
}

/// Observer keeping every event it receives in memory
#[derive(Debug, Default)]
pub struct EventRecorder {
    events: Mutex<Vec<AnalysisEvent>>,
}

impl EventRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far
    pub fn events(&self) -> Vec<AnalysisEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Kinds of the events received so far
    pub fn kinds(&self) -> Vec<EventKind> {
        self.events().iter().map(|event| event.kind).collect()
    }
}

impl AnalysisObserver for EventRecorder {
    fn update(&self, event: &AnalysisEvent) -> Result<(), ObserverError> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "recorder"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl AnalysisObserver for Failing {
        fn update(&self, _event: &AnalysisEvent) -> Result<(), ObserverError> {
            Err(ObserverError::new("failing", "rejected"))
        }
    }

    fn started() -> AnalysisEvent {
        AnalysisEvent::started("2cf24dba", "hello")
    }

    #[test]
    fn test_attach_is_idempotent() {
        let hub = EventHub::new();
        let recorder: Arc<dyn AnalysisObserver> = Arc::new(EventRecorder::new());
        assert!(hub.attach(Arc::clone(&recorder)));
        assert!(!hub.attach(Arc::clone(&recorder)));
        assert_eq!(hub.len(), 1);

        hub.notify(&started()).unwrap();
        assert!(hub.detach(&recorder));
        assert!(!hub.detach(&recorder));
        assert!(hub.is_empty());
    }

    #[test]
    fn test_notify_in_attachment_order() {
        let hub = EventHub::new();
        let first = Arc::new(EventRecorder::new());
        let second = Arc::new(EventRecorder::new());
        hub.attach(first.clone());
        hub.attach(second.clone());

        hub.notify(&started()).unwrap();
        assert_eq!(first.kinds(), vec![EventKind::AnalysisStarted]);
        assert_eq!(second.kinds(), vec![EventKind::AnalysisStarted]);
    }

    #[test]
    fn test_failure_stops_delivery() {
        let hub = EventHub::new();
        let before = Arc::new(EventRecorder::new());
        let after = Arc::new(EventRecorder::new());
        hub.attach(before.clone());
        hub.attach(Arc::new(Failing));
        hub.attach(after.clone());

        let err = hub.notify(&started()).unwrap_err();
        assert_eq!(err.to_string(), "failing: rejected");
        assert_eq!(before.events().len(), 1);
        assert!(after.events().is_empty());
    }

    #[test]
    fn test_event_names() {
        assert_eq!(EventKind::AnalysisStarted.to_string(), "analysis_started");
        assert_eq!(
            serde_json::to_value(EventKind::AnalysisCompleted).unwrap(),
            "analysis_completed"
        );
    }
}
