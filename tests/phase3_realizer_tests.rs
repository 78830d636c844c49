use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use recipe_nlg::kernel::phrase::types::Document;
use recipe_nlg::outputs::realizer::realize;
use recipe_nlg::services::realizer::ConfiguredRealizer;
use recipe_nlg::{Generator, GeneratorConfig, KeywordFrame, NlgError, RecipeQuery, SurfaceRealizer};

/// Fails the first `failures` calls, then renders with the built-in rules.
struct FlakyRealizer {
    calls: Arc<AtomicUsize>,
    failures: usize,
}

impl SurfaceRealizer for FlakyRealizer {
    async fn realize(&self, document: &Document) -> Result<String, NlgError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        if n < self.failures {
            Err(NlgError::RealizerUnavailable("connection refused".to_string()))
        } else {
            Ok(format!("  {}  ", realize(document)))
        }
    }
}

/// Never answers within the configured timeout.
struct SlowRealizer {
    calls: Arc<AtomicUsize>,
}

impl SurfaceRealizer for SlowRealizer {
    async fn realize(&self, document: &Document) -> Result<String, NlgError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(500)).await;
        Ok(realize(document))
    }
}

fn fast_config() -> GeneratorConfig {
    GeneratorConfig {
        seed: Some(9),
        realizer_timeout_ms: 50,
        retry_backoff_ms: 1,
        ..GeneratorConfig::default()
    }
}

fn flaky(failures: usize) -> (Generator<FlakyRealizer>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let realizer = FlakyRealizer { calls: calls.clone(), failures };
    (Generator::with_realizer(realizer, fast_config()), calls)
}

#[tokio::test]
async fn test_single_failure_is_retried() {
    let (generator, calls) = flaky(1);

    let text = generator.generate("yes_no", &KeywordFrame::example(), None).await.unwrap();
    assert_eq!(text, "Do you confidently prefer Thai recipes that contains potatoes, celery and carrots?");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_gives_up_after_one_retry() {
    let (generator, calls) = flaky(usize::MAX);

    let err = generator.generate("unknown", &KeywordFrame::default(), None).await.unwrap_err();
    assert!(matches!(err, NlgError::RealizerUnavailable(_)), "{:?}", err);
    assert_eq!(calls.load(Ordering::SeqCst), 2, "one call plus one retry");
}

#[tokio::test]
async fn test_respond_falls_back() {
    let (generator, _calls) = flaky(usize::MAX);

    let text = generator.respond("how", &KeywordFrame::example(), None).await.unwrap();
    assert_eq!(text, generator.config().fallback_text);
}

#[tokio::test]
async fn test_respond_from_json_falls_back() {
    let (generator, calls) = flaky(usize::MAX);
    let frame = serde_json::json!({ "subject": "you", "verb": "like", "object": "soup" });

    let text = generator.respond_from_json("yes_no", &frame, None).await.unwrap();
    assert_eq!(text, "Sorry, I didn't catch that.");
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    // Input errors are not masked by the fallback
    let err = generator
        .respond_from_json("summarize", &frame, Some(&serde_json::json!({ "num_steps": 2.5 })))
        .await
        .unwrap_err();
    assert!(matches!(err, NlgError::MalformedQuery { .. }), "{:?}", err);
}

#[tokio::test]
async fn test_shared_generator_serves_concurrent_calls() {
    let generator = Arc::new(Generator::seeded(12));
    let ava = KeywordFrame::new("Ava", "like", "pasta");
    let james = KeywordFrame::new("James", "bake", "bread");

    let (left, right) = tokio::join!(
        generator.generate("statement", &ava, None),
        generator.generate("yes_no", &james, None),
    );
    assert_eq!(left.unwrap(), "Ava likes pasta.");
    assert_eq!(right.unwrap(), "Does James bake bread?");

    let shared = generator.clone();
    let task = tokio::spawn(async move { shared.generate("unknown", &KeywordFrame::default(), None).await });
    let everything = RecipeQuery::default();
    let summary = generator.summarize(&everything);
    let (clarification, summary) = tokio::join!(task, summary);
    assert!(!clarification.unwrap().unwrap().is_empty());
    assert!(!summary.unwrap().is_empty());
    println!("Shared generator: PASS");
}

#[tokio::test]
async fn test_timeout_counts_as_unavailable() {
    let calls = Arc::new(AtomicUsize::new(0));
    let generator = Generator::with_realizer(SlowRealizer { calls: calls.clone() }, fast_config());

    let err = generator.generate("statement", &KeywordFrame::example(), None).await.unwrap_err();
    match err {
        NlgError::RealizerUnavailable(reason) => assert!(reason.contains("timed out"), "{}", reason),
        other => panic!("Expected RealizerUnavailable, got {:?}", other),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_template_paths_skip_realizer() {
    let (generator, calls) = flaky(usize::MAX);
    let frame = KeywordFrame::named("Ava");

    for tag in ["greet", "confirm", "affirm", "decline"] {
        generator.generate(tag, &frame, None).await.unwrap();
    }
    let text = generator.summarize(&Default::default()).await.unwrap();
    assert!(!text.is_empty());

    let err = generator.generate_from_json("summarize", &serde_json::json!({}), Some(&serde_json::json!({ "cook_time": "soon" }))).await.unwrap_err();
    assert!(matches!(err, NlgError::MalformedQuery { .. }));

    assert_eq!(calls.load(Ordering::SeqCst), 0, "no realizer call expected");
}

#[tokio::test]
async fn test_default_config_uses_rules() {
    let generator = Generator::from_config(GeneratorConfig { seed: Some(1), ..GeneratorConfig::default() });
    assert!(generator.config().realizer_url.is_none());

    let realizer = ConfiguredRealizer::from_config(&GeneratorConfig {
        realizer_url: Some("http://localhost:9900".to_string()),
        ..GeneratorConfig::default()
    });
    match realizer {
        ConfiguredRealizer::Remote(remote) => assert_eq!(remote.base_url(), "http://localhost:9900"),
        ConfiguredRealizer::Rule(_) => panic!("Expected remote realizer when a URL is configured"),
    }
}
