//! Search dispatcher with pluggable source resolvers
//!
//! The engine owns the host's native search (the delegate) and an ordered
//! list of registered resolvers. Every query is offered to the resolvers in
//! registration order; the first one that claims it produces the result
//! envelope. When all resolvers decline, the delegate serves the query
//! unchanged.

use bridge_traits::error::Result;
use bridge_traits::search::{SearchDelegate, SearchOptions, SearchResult, SourceResolver};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Host-side search engine
///
/// # Example
///
/// ```ignore
/// use core_search::SearchEngine;
///
/// let mut engine = SearchEngine::new(native_delegate);
/// engine.register(Arc::new(SaavnResolver::new(http_client)));
///
/// let result = engine.search("https://www.jiosaavn.com/song/x/y", &options).await?;
/// ```
pub struct SearchEngine {
    delegate: Arc<dyn SearchDelegate>,
    resolvers: Vec<Arc<dyn SourceResolver>>,
}

impl SearchEngine {
    /// Create an engine around the host's native search
    pub fn new(delegate: Arc<dyn SearchDelegate>) -> Self {
        Self {
            delegate,
            resolvers: Vec::new(),
        }
    }

    /// Register a source resolver
    ///
    /// Hands the resolver a handle to the native delegate so it can prefer
    /// host-side resolution before its own catalog.
    pub fn register(&mut self, resolver: Arc<dyn SourceResolver>) {
        info!(resolver = resolver.name(), "Registering source resolver");
        resolver.attach(Arc::clone(&self.delegate));
        self.resolvers.push(resolver);
    }

    /// Names of the registered resolvers, in dispatch order
    pub fn resolver_names(&self) -> Vec<&'static str> {
        self.resolvers.iter().map(|r| r.name()).collect()
    }

    /// Resolve one query
    ///
    /// Resolver errors propagate to the caller; a resolver that declines
    /// (`Ok(None)`) simply passes the query along.
    #[instrument(skip(self, options))]
    pub async fn search(&self, query: &str, options: &SearchOptions) -> Result<SearchResult> {
        for resolver in &self.resolvers {
            if let Some(result) = resolver.resolve(query, options).await? {
                debug!(
                    resolver = resolver.name(),
                    kind = ?result.kind,
                    tracks = result.tracks.len(),
                    "Resolver claimed query"
                );
                return Ok(result);
            }
        }

        debug!("No resolver claimed query, falling through to delegate");
        self.delegate.search(query, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bridge_traits::error::BridgeError;
    use bridge_traits::search::SearchKind;
    use mockall::mock;
    use std::sync::Mutex;

    mock! {
        Delegate {}

        #[async_trait]
        impl SearchDelegate for Delegate {
            async fn search(&self, query: &str, options: &SearchOptions) -> Result<SearchResult>;
        }
    }

    /// Resolver stub with a scripted response
    struct StubResolver {
        response: Mutex<Option<Result<Option<SearchResult>>>>,
        attached: Mutex<bool>,
    }

    impl StubResolver {
        fn new(response: Result<Option<SearchResult>>) -> Self {
            Self {
                response: Mutex::new(Some(response)),
                attached: Mutex::new(false),
            }
        }
    }

    #[async_trait]
    impl SourceResolver for StubResolver {
        fn name(&self) -> &'static str {
            "stub"
        }

        fn attach(&self, _delegate: Arc<dyn SearchDelegate>) {
            *self.attached.lock().unwrap() = true;
        }

        async fn resolve(
            &self,
            _query: &str,
            _options: &SearchOptions,
        ) -> Result<Option<SearchResult>> {
            self.response
                .lock()
                .unwrap()
                .take()
                .expect("stub resolver asked twice")
        }
    }

    #[tokio::test]
    async fn test_register_attaches_delegate() {
        let mut engine = SearchEngine::new(Arc::new(MockDelegate::new()));
        let resolver = Arc::new(StubResolver::new(Ok(None)));
        engine.register(Arc::clone(&resolver) as Arc<dyn SourceResolver>);

        assert!(*resolver.attached.lock().unwrap());
        assert_eq!(engine.resolver_names(), vec!["stub"]);
    }

    #[tokio::test]
    async fn test_claimed_query_returns_resolver_result() {
        let mut delegate = MockDelegate::new();
        delegate.expect_search().times(0);

        let mut engine = SearchEngine::new(Arc::new(delegate));
        let envelope = SearchResult::empty(SearchKind::Playlist);
        engine.register(Arc::new(StubResolver::new(Ok(Some(envelope.clone())))));

        let result = engine
            .search("anything", &SearchOptions::default())
            .await
            .unwrap();
        assert_eq!(result, envelope);
    }

    #[tokio::test]
    async fn test_declined_query_falls_through_to_delegate() {
        let mut delegate = MockDelegate::new();
        delegate
            .expect_search()
            .times(1)
            .returning(|_, _| Ok(SearchResult::empty(SearchKind::Search)));

        let mut engine = SearchEngine::new(Arc::new(delegate));
        engine.register(Arc::new(StubResolver::new(Ok(None))));

        let result = engine
            .search("plain text query", &SearchOptions::default())
            .await
            .unwrap();
        assert_eq!(result.kind, SearchKind::Search);
    }

    #[tokio::test]
    async fn test_resolver_error_propagates() {
        let mut delegate = MockDelegate::new();
        delegate.expect_search().times(0);

        let mut engine = SearchEngine::new(Arc::new(delegate));
        engine.register(Arc::new(StubResolver::new(Err(BridgeError::InvalidQuery))));

        let result = engine.search("", &SearchOptions::default()).await;
        assert!(matches!(result, Err(BridgeError::InvalidQuery)));
    }
}
