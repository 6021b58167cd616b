//! Behavior tests for TextAnalyzer

use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tempfile::TempDir;
use textlens_core::content_hash;
use textlens_engine::*;

struct FailingObserver;

impl AnalysisObserver for FailingObserver {
    fn update(&self, _event: &AnalysisEvent) -> std::result::Result<(), ObserverError> {
        Err(ObserverError::new("failing", "rejected"))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

fn analyzer_with_capacity(capacity: usize) -> TextAnalyzer {
    TextAnalyzer::builder()
        .cache_capacity(capacity)
        .build()
        .unwrap()
}

#[test]
fn test_spanish_sentiment_sample() {
    let analyzer = TextAnalyzer::with_defaults().unwrap();
    let stats = analyzer.analyze("bueno bueno malo").unwrap();

    assert_eq!(stats.total_words(), 3);
    assert_eq!(stats.unique_words(), 2);
    assert_eq!(
        stats.most_common(),
        [("bueno".to_string(), 2), ("malo".to_string(), 1)]
    );
    assert_eq!(stats.sentiment_score(), 0.0);
    assert_eq!(stats.emotion(), Emotion::Neutral);
}

#[test]
fn test_repeated_analysis_served_from_cache() {
    let analyzer = TextAnalyzer::with_defaults().unwrap();
    let recorder = Arc::new(EventRecorder::new());
    analyzer.attach(recorder.clone());

    let first = analyzer.analyze("El día es hermoso.").unwrap();
    let second = analyzer.analyze("El día es hermoso.").unwrap();

    assert_eq!(first, second);
    assert_eq!(analyzer.analysis_count(), 1);
    assert_eq!(analyzer.analyzed_texts().len(), 1);
    assert_eq!(analyzer.cache_size(), 1);
    // the hit fires no events
    assert_eq!(recorder.events().len(), 2);
}

#[test]
fn test_fifo_eviction() {
    let analyzer = analyzer_with_capacity(2);
    analyzer.analyze("primero").unwrap();
    analyzer.analyze("segundo").unwrap();
    analyzer.analyze("tercero").unwrap();
    assert_eq!(analyzer.cache_size(), 2);
    assert_eq!(analyzer.analysis_count(), 3);

    // "primero" was evicted, so this is a miss
    analyzer.analyze("primero").unwrap();
    assert_eq!(analyzer.analysis_count(), 4);

    // "tercero" survived
    analyzer.analyze("tercero").unwrap();
    assert_eq!(analyzer.analysis_count(), 4);
}

#[test]
fn test_zero_capacity_never_caches() {
    let analyzer = TextAnalyzer::new(EngineConfig::uncached()).unwrap();
    analyzer.analyze("hola").unwrap();
    analyzer.analyze("hola").unwrap();
    assert_eq!(analyzer.cache_size(), 0);
    assert_eq!(analyzer.analysis_count(), 2);
}

#[test]
fn test_empty_input_rejected() {
    let analyzer = TextAnalyzer::with_defaults().unwrap();
    assert!(matches!(analyzer.analyze(""), Err(EngineError::EmptyInput)));
    assert!(matches!(
        analyzer.analyze("  \n\t "),
        Err(EngineError::EmptyInput)
    ));
    assert_eq!(analyzer.analysis_count(), 0);
    assert!(analyzer.analyzed_texts().is_empty());
}

#[test]
fn test_lexical_diversity_matches_counts() {
    let analyzer = TextAnalyzer::with_defaults().unwrap();
    let stats = analyzer
        .analyze("the cat and the dog and the bird")
        .unwrap();
    let expected = stats.unique_words() as f64 / stats.total_words() as f64;
    assert!((stats.lexical_diversity() - expected).abs() < 1e-12);
}

#[test]
fn test_history_keeps_fifty_char_prefix() {
    let analyzer = TextAnalyzer::with_defaults().unwrap();
    let text = "palabra ".repeat(20);
    analyzer.analyze(&text).unwrap();

    let history = analyzer.analyzed_texts();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].chars().count(), 50);
    assert!(text.starts_with(&history[0]));
}

#[test]
fn test_failing_observer_aborts_analysis() {
    let analyzer = TextAnalyzer::with_defaults().unwrap();
    analyzer.attach(Arc::new(FailingObserver));

    let err = analyzer.analyze("texto de prueba").unwrap_err();
    match err {
        EngineError::Observer(e) => assert_eq!(e.to_string(), "failing: rejected"),
        other => panic!("expected observer error, got {other:?}"),
    }
    assert_eq!(analyzer.analysis_count(), 0);
    assert_eq!(analyzer.cache_size(), 0);
}

#[test]
fn test_attach_is_idempotent() {
    let analyzer = TextAnalyzer::with_defaults().unwrap();
    let recorder = Arc::new(EventRecorder::new());
    let observer: Arc<dyn AnalysisObserver> = recorder.clone();

    assert!(analyzer.attach(observer.clone()));
    assert!(!analyzer.attach(observer.clone()));

    analyzer.analyze("una vez").unwrap();
    assert_eq!(
        recorder.kinds(),
        vec![EventKind::AnalysisStarted, EventKind::AnalysisCompleted]
    );

    assert!(analyzer.detach(&observer));
    assert!(!analyzer.detach(&observer));
    analyzer.analyze("otra vez").unwrap();
    assert_eq!(recorder.events().len(), 2);
}

#[test]
fn test_parallel_preserves_order() {
    let analyzer = TextAnalyzer::with_defaults().unwrap();
    let results = analyzer.parallel_analyze(&["a", "b", "c"], 2).unwrap();

    assert_eq!(results.len(), 3);
    for (stats, text) in results.iter().zip(["a", "b", "c"]) {
        assert_eq!(stats.text_hash(), content_hash(text));
    }
}

#[test]
fn test_parallel_zero_workers_uses_config() {
    let analyzer = TextAnalyzer::builder().max_workers(2).build().unwrap();
    let texts: Vec<String> = (0..10).map(|i| format!("texto número {i}")).collect();
    let results = analyzer.parallel_analyze(&texts, 0).unwrap();
    assert_eq!(results.len(), 10);
    assert_eq!(analyzer.analysis_count(), 10);
}

#[test]
fn test_parallel_failure_fails_batch() {
    let analyzer = TextAnalyzer::with_defaults().unwrap();
    let result = analyzer.parallel_analyze(&["uno", " ", "tres"], 2);
    assert!(matches!(result, Err(EngineError::EmptyInput)));
}

#[tokio::test]
async fn test_async_preserves_order() {
    let analyzer = TextAnalyzer::builder()
        .async_latency(Duration::from_millis(10))
        .build()
        .unwrap();
    let texts = ["primer texto", "segundo", "el tercero es más largo"];
    let results = analyzer.async_analyze(&texts).await.unwrap();

    let words: Vec<usize> = results.iter().map(|s| s.total_words()).collect();
    assert_eq!(words, vec![2, 1, 5]);
    assert_eq!(analyzer.analysis_count(), 3);
}

#[tokio::test]
async fn test_async_failure_fails_batch() {
    let analyzer = TextAnalyzer::builder()
        .async_latency(Duration::ZERO)
        .build()
        .unwrap();
    let result = analyzer.async_analyze(&["válido", ""]).await;
    assert!(matches!(result, Err(EngineError::EmptyInput)));
}

#[test]
fn test_shared_across_threads() {
    let analyzer = Arc::new(TextAnalyzer::with_defaults().unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let analyzer = Arc::clone(&analyzer);
            thread::spawn(move || analyzer.analyze("texto compartido").unwrap())
        })
        .collect();

    let results: Vec<TextStatistics> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(analyzer.cache_size(), 1);
}

#[test]
fn test_compare_texts() {
    let analyzer = TextAnalyzer::with_defaults().unwrap();
    let cmp = analyzer.compare_texts("cat dog", "dog bird").unwrap();
    assert!((cmp.similarity - 1.0 / 3.0).abs() < 1e-12);
    assert_eq!(cmp.word_diff, 0);

    let cmp = analyzer.compare_texts("excelente", "terrible").unwrap();
    assert_eq!(cmp.similarity, 0.0);
    assert!(cmp.sentiment_diff < 0.0);
}

#[test]
fn test_compare_rejects_empty() {
    let analyzer = TextAnalyzer::with_defaults().unwrap();
    assert!(matches!(
        analyzer.compare_texts("algo", ""),
        Err(EngineError::EmptyInput)
    ));
}

#[test]
fn test_reset_statistics() {
    let analyzer = TextAnalyzer::with_defaults().unwrap();
    let recorder = Arc::new(EventRecorder::new());
    analyzer.attach(recorder.clone());
    analyzer.analyze("uno").unwrap();
    analyzer.analyze("dos").unwrap();

    analyzer.reset_statistics();
    assert_eq!(analyzer.analysis_count(), 0);
    assert!(analyzer.analyzed_texts().is_empty());
    assert_eq!(analyzer.cache_size(), 0);
    assert_eq!(analyzer.strategies().len(), 6);

    // observers survive a reset
    analyzer.analyze("uno").unwrap();
    assert_eq!(recorder.events().len(), 6);
}

#[test]
fn test_export_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.json");

    let analyzer = TextAnalyzer::builder().name("Exporter").build().unwrap();
    analyzer.analyze("hola mundo").unwrap();
    analyzer.analyze("adiós mundo").unwrap();
    analyzer.export_results(&path, "json").unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["analyzer_name"], "Exporter");
    assert_eq!(value["total_analyses"], 2);
    assert_eq!(
        value["texts_analyzed"],
        serde_json::json!(["hola mundo", "adiós mundo"])
    );
}

#[test]
fn test_export_csv() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.csv");

    let analyzer = TextAnalyzer::with_defaults().unwrap();
    analyzer.analyze("uno, dos").unwrap();
    analyzer.export_results(&path, "csv").unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "Analyzer,TotalAnalyses,Text\nMain Analyzer,1,\"uno, dos\"\n"
    );
}

#[test]
fn test_export_unsupported_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.xml");

    let analyzer = TextAnalyzer::with_defaults().unwrap();
    let err = analyzer.export_results(&path, "xml").unwrap_err();
    assert!(matches!(err, EngineError::UnsupportedFormat { format } if format == "xml"));
    assert!(!path.exists());
}

#[test]
fn test_export_to_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("results.json");

    let analyzer = TextAnalyzer::builder()
        .retry(RetryPolicy::new(2, Duration::from_millis(1)))
        .build()
        .unwrap();
    assert!(matches!(
        analyzer.export_results(&path, "json"),
        Err(EngineError::Io(_))
    ));
}

#[test]
fn test_invalid_name_rejected() {
    let config = EngineConfig {
        name: String::new(),
        ..Default::default()
    };
    let err = TextAnalyzer::new(config).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_patterns_and_ngrams() {
    let analyzer = TextAnalyzer::with_defaults().unwrap();
    let matches = analyzer
        .find_patterns("Escribe a ana@example.com o a BOB@example.com", r"\w+@example\.com")
        .unwrap();
    assert_eq!(matches, vec!["ana@example.com", "BOB@example.com"]);

    assert!(matches!(
        analyzer.find_patterns("texto", "("),
        Err(EngineError::Core(_))
    ));

    let bigrams = analyzer.ngram_frequencies("a b a b", 2);
    assert_eq!(bigrams[0].1, 2);
    assert_eq!(bigrams[0].0.join(" "), "a b");
}
