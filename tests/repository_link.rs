mod common;

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Duration, Utc};
use linklet::application::services::LinkService;
use linklet::domain::entities::NewLink;
use linklet::domain::repositories::LinkRepository;
use linklet::error::AppError;
use linklet::infrastructure::persistence::{JsonLinkRepository, JsonStore};

fn new_link(code: &str, url: &str) -> NewLink {
    NewLink {
        code: code.to_string(),
        long_url: url.to_string(),
        expires_at: Utc::now() + Duration::minutes(30),
    }
}

#[tokio::test]
async fn test_create_and_find_round_trip() {
    let repo = JsonLinkRepository::new(Arc::new(JsonStore::in_memory()));

    let before = Utc::now();
    let created = repo
        .create(new_link("abc123", "https://example.com"))
        .await
        .unwrap();
    let after = Utc::now();

    assert!(created.created_at >= before && created.created_at <= after);
    assert!(created.expires_at > created.created_at);

    let found = repo.find_by_code("abc123").await.unwrap().unwrap();
    assert_eq!(found.code, "abc123");
    assert_eq!(found.long_url, "https://example.com");
    assert_eq!(found.expires_at, created.expires_at);
    assert_eq!(found.click_count, 0);
}

#[tokio::test]
async fn test_create_duplicate_is_conflict() {
    let repo = JsonLinkRepository::new(Arc::new(JsonStore::in_memory()));

    repo.create(new_link("abc123", "https://example.com"))
        .await
        .unwrap();

    let err = repo
        .create(new_link("abc123", "https://other.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict { .. }));
}

#[tokio::test]
async fn test_find_unknown_is_none() {
    let repo = JsonLinkRepository::new(Arc::new(JsonStore::in_memory()));
    assert!(repo.find_by_code("ghost1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_increment_clicks_unknown_is_silent() {
    let repo = JsonLinkRepository::new(Arc::new(JsonStore::in_memory()));
    assert!(repo.increment_clicks("ghost1").await.is_ok());
}

#[tokio::test]
async fn test_records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("links.json");

    {
        let store = Arc::new(JsonStore::open(&path).await.unwrap());
        let repo = JsonLinkRepository::new(store);
        repo.create(new_link("abc123", "https://example.com"))
            .await
            .unwrap();
        repo.increment_clicks("abc123").await.unwrap();
    }

    let store = Arc::new(JsonStore::open(&path).await.unwrap());
    let repo = JsonLinkRepository::new(store);

    let found = repo.find_by_code("abc123").await.unwrap().unwrap();
    assert_eq!(found.long_url, "https://example.com");
    assert_eq!(found.click_count, 1);
}

#[tokio::test]
async fn test_concurrent_generated_codes_are_unique() {
    let store = Arc::new(JsonStore::in_memory());
    let service = Arc::new(LinkService::new(
        Arc::new(JsonLinkRepository::new(store.clone())),
        common::TEST_BASE_URL.to_string(),
        30,
    ));

    let mut handles = Vec::new();
    for i in 0..50 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service
                .create_short_link(format!("https://example.com/{i}"), None, None)
                .await
                .unwrap()
        }));
    }

    let mut codes = HashSet::new();
    for handle in handles {
        let link = handle.await.unwrap();
        assert!(codes.insert(link.code.clone()), "duplicate code {}", link.code);
    }

    assert_eq!(codes.len(), 50);
    assert_eq!(store.link_count().await, 50);
}
