//! Registry contract from outside the crate: catalog, dispatch, AI wiring.

use anti_slop::ai::{CompletionError, CompletionProvider, CompletionRequest};
use anti_slop::config::Config;
use anti_slop::{ToolArgs, ToolName, ToolRegistry};
use serde_json::{json, Map, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct CountingProvider {
    calls: AtomicUsize,
}

impl CompletionProvider for CountingProvider {
    fn complete(&self, _request: &CompletionRequest) -> Result<Map<String, Value>, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let Value::Object(reply) = json!({
            "improved_content": "Ship it Friday.",
            "changes_made": ["removed hedging"],
        }) else {
            unreachable!()
        };
        Ok(reply)
    }
}

fn offline() -> ToolRegistry {
    ToolRegistry::with_provider(&Config::default(), None)
}

#[test]
fn catalog_has_thirteen_tools_in_order() {
    let names: Vec<String> = offline()
        .list_tools()
        .iter()
        .map(|d| d.identifier.to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "detect_ai_phrases",
            "detect_cliches",
            "detect_passive_voice",
            "calculate_readability",
            "detect_repetition",
            "detect_run_on_sentences",
            "remove_filler_words",
            "remove_hedging",
            "remove_redundancies",
            "remove_emojis",
            "normalize_whitespace",
            "analyze_content_for_slop",
            "improve_content_from_slop",
        ]
    );
}

#[test]
fn descriptors_serialize_with_name_and_description() {
    let descriptors = serde_json::to_value(offline().list_tools()).unwrap();
    assert_eq!(descriptors[0]["name"], "detect_ai_phrases");
    assert!(descriptors[0]["description"]
        .as_str()
        .unwrap()
        .contains("delve into"));
}

#[test]
fn every_tool_rejects_missing_content() {
    let registry = offline();
    for name in ToolName::ALL {
        let result = registry.invoke_tool(name, &ToolArgs::default());
        assert!(!result.is_success(), "{} accepted missing content", name);
        assert!(result.error().unwrap().contains("content"));
    }
}

#[test]
fn every_local_tool_accepts_plain_content() {
    let registry = offline();
    for name in ToolName::ALL.into_iter().filter(|t| !t.is_ai()) {
        let result = registry.invoke_tool(name, &ToolArgs::new("Plain words in a sentence."));
        assert!(result.is_success(), "{} failed: {:?}", name, result.error());
    }
}

#[test]
fn unknown_options_are_ignored() {
    let result = offline().invoke(
        "detect_cliches",
        &ToolArgs::new("synergy").with("max_words", "not a number"),
    );
    assert!(result.is_success());
}

#[test]
fn unknown_tool_is_a_failed_result() {
    let result = offline().invoke("remove_adverbs", &ToolArgs::new("x"));
    assert!(!result.is_success());
    assert!(result.error().unwrap().contains("remove_adverbs"));
    assert!(result.error().unwrap().contains("normalize_whitespace"));
}

#[test]
fn improver_goes_through_injected_provider() {
    let provider = Arc::new(CountingProvider {
        calls: AtomicUsize::new(0),
    });
    let registry = ToolRegistry::with_provider(&Config::default(), Some(provider.clone()));

    let result = registry.invoke(
        "improve_content_from_slop",
        &ToolArgs::new("Perhaps we might ship it on Friday."),
    );
    assert!(result.is_success());
    assert_eq!(result.data()["improved_content"], "Ship it Friday.");
    assert_eq!(result.data()["original_word_count"], 7);
    assert_eq!(result.data()["new_word_count"], 3);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn missing_credential_is_reported_not_fatal() {
    let registry = offline();
    let result = registry.invoke("analyze_content_for_slop", &ToolArgs::new("x"));
    assert_eq!(
        result.error(),
        Some("OpenAI API key not configured. Set OPENAI_API_KEY environment variable.")
    );

    // the rest of the registry keeps working
    assert!(registry.invoke("remove_emojis", &ToolArgs::new("x")).is_success());
}

#[test]
fn registry_is_shareable_across_threads() {
    let registry = Arc::new(offline());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                let text = format!("Basically run {} is actually fine.", i);
                registry.invoke("remove_filler_words", &ToolArgs::new(text))
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().unwrap();
        assert_eq!(result.data()["cleaned_content"], format!("Run {} is fine.", i));
    }
}
