//! End-to-end search flows through the engine dispatcher
//!
//! Wires a `SearchEngine` to the JioSaavn resolver with a mocked HTTP
//! bridge and a scripted native delegate, then drives whole searches the
//! way a host would.

use async_trait::async_trait;
use bridge_traits::error::Result;
use bridge_traits::http::{HttpClient, HttpRequest, HttpResponse};
use bridge_traits::search::{
    EngineTrack, SearchDelegate, SearchKind, SearchOptions, SearchResult,
};
use bytes::Bytes;
use core_search::SearchEngine;
use provider_jiosaavn::{SaavnOptions, SaavnResolver};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Scripted HTTP bridge: serves a canned body for every request
struct ScriptedHttp {
    status: u16,
    body: String,
    calls: AtomicUsize,
}

impl ScriptedHttp {
    fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl HttpClient for ScriptedHttp {
    async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(HttpResponse {
            status: self.status,
            headers: HashMap::new(),
            body: Bytes::from(self.body.clone()),
        })
    }
}

/// Scripted delegate: returns a fixed envelope and counts invocations
struct ScriptedDelegate {
    envelope: SearchResult,
    calls: AtomicUsize,
}

impl ScriptedDelegate {
    fn new(envelope: SearchResult) -> Self {
        Self {
            envelope,
            calls: AtomicUsize::new(0),
        }
    }

    fn empty() -> Self {
        Self::new(SearchResult::empty(SearchKind::Empty))
    }
}

#[async_trait]
impl SearchDelegate for ScriptedDelegate {
    async fn search(&self, _query: &str, _options: &SearchOptions) -> Result<SearchResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.envelope.clone())
    }
}

fn native_track() -> EngineTrack {
    EngineTrack {
        source_name: "native".to_string(),
        identifier: "native-1".to_string(),
        title: "Native".to_string(),
        author: "Native Artist".to_string(),
        length: 1000,
        uri: "https://native.example/1".to_string(),
        artwork_url: String::new(),
        is_seekable: true,
        is_stream: false,
        position: 0,
        encoded: String::new(),
        plugin_name: String::new(),
        requester: None,
    }
}

const SONG_URL: &str = "https://www.jiosaavn.com/song/kesariya/HwoFcDZqdWI";

const SONG_BODY: &str = r#"{ "songs": [{
    "id": "5WXAlMNt",
    "title": "Kesariya",
    "perma_url": "https://www.jiosaavn.com/song/kesariya/HwoFcDZqdWI",
    "image": "https://c.saavncdn.com/191/Kesariya-150x150.jpg",
    "more_info": { "duration": "245" }
}] }"#;

#[tokio::test]
async fn url_search_exhausts_budget_then_goes_straight_to_catalog() {
    let http = Arc::new(ScriptedHttp::new(200, SONG_BODY));
    let delegate = Arc::new(ScriptedDelegate::empty());

    let mut engine = SearchEngine::new(Arc::clone(&delegate) as Arc<dyn SearchDelegate>);
    engine.register(Arc::new(SaavnResolver::new(
        Arc::clone(&http) as Arc<dyn HttpClient>
    )));

    for _ in 0..3 {
        let result = engine
            .search(SONG_URL, &SearchOptions::default())
            .await
            .unwrap();
        assert_eq!(result.kind, SearchKind::Track);
        assert_eq!(result.tracks[0].identifier, "5WXAlMNt");
        assert_eq!(result.tracks[0].length, 245_000);
    }

    // Default budget of 2 zero-result delegate attempts, then catalog-only
    assert_eq!(delegate.calls.load(Ordering::SeqCst), 2);
    assert_eq!(http.calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn delegate_hit_wins_over_catalog() {
    let http = Arc::new(ScriptedHttp::new(200, SONG_BODY));
    let delegate = Arc::new(ScriptedDelegate::new(SearchResult::new(
        None,
        vec![native_track()],
        SearchKind::Track,
    )));

    let mut engine = SearchEngine::new(Arc::clone(&delegate) as Arc<dyn SearchDelegate>);
    engine.register(Arc::new(SaavnResolver::new(
        Arc::clone(&http) as Arc<dyn HttpClient>
    )));

    let result = engine
        .search(SONG_URL, &SearchOptions::default())
        .await
        .unwrap();

    assert_eq!(result.tracks[0].identifier, "native-1");
    assert_eq!(http.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn broken_catalog_never_breaks_a_url_search() {
    let http = Arc::new(ScriptedHttp::new(500, "upstream exploded"));
    let delegate = Arc::new(ScriptedDelegate::empty());

    let mut engine = SearchEngine::new(Arc::clone(&delegate) as Arc<dyn SearchDelegate>);
    engine.register(Arc::new(SaavnResolver::new(
        Arc::clone(&http) as Arc<dyn HttpClient>
    )));

    let result = engine
        .search(SONG_URL, &SearchOptions::default())
        .await
        .unwrap();

    assert_eq!(result.kind, SearchKind::Search);
    assert!(result.tracks.is_empty());
}

#[tokio::test]
async fn free_text_with_engine_selector_uses_catalog_capped() {
    let items: Vec<String> = (0..12)
        .map(|i| format!(r#"{{ "id": "s{i}", "title": "Track {i}" }}"#))
        .collect();
    let body = format!(r#"{{ "results": [{}] }}"#, items.join(","));

    let http = Arc::new(ScriptedHttp::new(200, body));
    let delegate = Arc::new(ScriptedDelegate::empty());

    let mut engine = SearchEngine::new(Arc::clone(&delegate) as Arc<dyn SearchDelegate>);
    engine.register(Arc::new(SaavnResolver::with_options(
        Arc::clone(&http) as Arc<dyn HttpClient>,
        SaavnOptions {
            search_limit: 5,
            ..Default::default()
        },
    )));

    let result = engine
        .search("kesariya arijit", &SearchOptions::with_engine("jiosaavn"))
        .await
        .unwrap();

    assert_eq!(result.kind, SearchKind::Search);
    assert_eq!(result.tracks.len(), 5);
    assert_eq!(result.tracks[0].identifier, "s0");
    assert_eq!(delegate.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn plain_query_without_selector_falls_through_to_delegate() {
    let http = Arc::new(ScriptedHttp::new(200, SONG_BODY));
    let delegate = Arc::new(ScriptedDelegate::new(SearchResult::new(
        None,
        vec![native_track()],
        SearchKind::Search,
    )));

    let mut engine = SearchEngine::new(Arc::clone(&delegate) as Arc<dyn SearchDelegate>);
    engine.register(Arc::new(SaavnResolver::new(
        Arc::clone(&http) as Arc<dyn HttpClient>
    )));

    let result = engine
        .search("kesariya arijit", &SearchOptions::default())
        .await
        .unwrap();

    assert_eq!(result.tracks[0].source_name, "native");
    assert_eq!(http.calls.load(Ordering::SeqCst), 0);
    assert_eq!(delegate.calls.load(Ordering::SeqCst), 1);
}
