use std::fs;

use quote_board::quote::{Quote, QuotePool};
use quote_board::source::{
    load_with_fallback, InMemorySource, JsonFileSource, PoolOrigin, QuoteSource, SourceError,
};
use tempfile::tempdir;

struct FailingSource(SourceError);

impl QuoteSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    fn load(&self) -> Result<QuotePool, SourceError> {
        Err(self.0.clone())
    }
}

fn offline() -> InMemorySource {
    let pool = QuotePool::new(vec![
        Quote::new("offline-1", "Bundled quote", "Sam"),
        Quote::new("offline-2", "Another bundled quote", "Alex"),
    ])
    .unwrap();
    InMemorySource::new("offline", pool)
}

#[test]
fn primary_success_is_not_degraded() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("quotes.json");
    fs::write(&path, r#"[{ "id": "p1", "text": "Live quote", "saidBy": "Jo" }]"#).unwrap();

    let resolved = load_with_fallback(&JsonFileSource::new(&path), &offline()).unwrap();

    assert_eq!(resolved.origin, PoolOrigin::Primary);
    assert!(!resolved.is_degraded());
    assert_eq!(resolved.pool.quotes()[0].id.as_str(), "p1");
}

#[test]
fn missing_file_falls_back_as_not_configured() {
    let dir = tempdir().unwrap();
    let primary = JsonFileSource::new(dir.path().join("quotes.json"));

    let resolved = load_with_fallback(&primary, &offline()).unwrap();

    assert!(resolved.is_degraded());
    assert!(matches!(
        resolved.origin,
        PoolOrigin::Fallback { reason: SourceError::NotConfigured(_) }
    ));
    assert_eq!(resolved.pool.len(), 2);
}

#[test]
fn unavailable_source_falls_back() {
    let primary = FailingSource(SourceError::Unavailable("connection refused".into()));

    let resolved = load_with_fallback(&primary, &offline()).unwrap();

    assert_eq!(
        resolved.origin,
        PoolOrigin::Fallback {
            reason: SourceError::Unavailable("connection refused".into())
        }
    );
}

#[test]
fn malformed_primary_is_surfaced() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("quotes.json");
    fs::write(&path, r#"[{ "id": "dup", "text": "a", "saidBy": "x" }, { "id": "dup", "text": "b", "saidBy": "y" }]"#).unwrap();

    let err = load_with_fallback(&JsonFileSource::new(&path), &offline()).unwrap_err();
    assert!(matches!(err, SourceError::Malformed(_)));
    assert!(!err.allows_fallback());
}

#[test]
fn empty_primary_is_a_valid_result() {
    let primary = InMemorySource::new("primary", QuotePool::empty());

    let resolved = load_with_fallback(&primary, &offline()).unwrap();

    assert_eq!(resolved.origin, PoolOrigin::Primary);
    assert!(resolved.pool.is_empty());
}

#[test]
fn fallback_failure_is_surfaced() {
    let primary = FailingSource(SourceError::NotConfigured("no url".into()));
    let fallback = FailingSource(SourceError::Unavailable("bundle missing".into()));

    let err = load_with_fallback(&primary, &fallback).unwrap_err();
    assert_eq!(err, SourceError::Unavailable("bundle missing".into()));
}
