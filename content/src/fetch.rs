//! Loading state for one logical query.
//!
//! A [`Fetcher`] owns the state cell for a single view: it runs a [`Query`]
//! against a [`ContentSource`], re-runs it only when the query's key changes,
//! and tags every dispatched request with a sequence number so that a slow,
//! superseded response never overwrites a newer one.

use payloads::{
    Collection, Item, QueryParams, Resource, ResourceKind, UnknownName,
};
use std::cell::{Cell, RefCell};
use std::future::Future;
use tracing::{debug, warn};

use crate::ContentSource;

/// Tri-state result of a fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }
}

impl<T> FetchState<T> {
    /// Returns true if this is the initial load (no data, no error, loading)
    pub fn is_initial_loading(&self) -> bool {
        self.loading && self.data.is_none() && self.error.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(String),
    /// The backend call failed; holds the collaborator's message verbatim.
    #[error("{0}")]
    Source(String),
}

impl From<UnknownName> for FetchError {
    fn from(e: UnknownName) -> Self {
        Self::UnknownEndpoint(e.0)
    }
}

/// Something a [`Fetcher`] knows how to load.
pub trait Query: Clone {
    type Output: Clone;

    /// Identity of the request. Two queries with the same key are the same
    /// request. `None` means there is nothing to fetch yet.
    fn key(&self) -> Option<String>;

    fn run<S: ContentSource>(
        &self,
        source: &S,
    ) -> impl Future<Output = Result<Self::Output, FetchError>>;
}

/// A named collection plus its (unsanitized) query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionQuery {
    pub resource: String,
    pub params: QueryParams,
}

impl CollectionQuery {
    pub fn new(resource: impl Into<String>, params: QueryParams) -> Self {
        Self {
            resource: resource.into(),
            params,
        }
    }
}

impl Query for CollectionQuery {
    type Output = Collection;

    fn key(&self) -> Option<String> {
        Some(format!("{}?{}", self.resource, self.params.sanitized().key()))
    }

    async fn run<S: ContentSource>(
        &self,
        source: &S,
    ) -> Result<Collection, FetchError> {
        let resource: Resource = self.resource.parse()?;
        let params = self.params.sanitized();
        debug!(%resource, params = %params.key(), "fetching collection");
        source
            .list(resource, &params)
            .await
            .map_err(|e| FetchError::Source(e.to_string()))
    }
}

/// A single record looked up by kind and id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleQuery {
    pub kind: String,
    pub id: Option<String>,
}

impl SingleQuery {
    pub fn new(kind: impl Into<String>, id: Option<String>) -> Self {
        Self {
            kind: kind.into(),
            id,
        }
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

impl Query for SingleQuery {
    type Output = Item;

    fn key(&self) -> Option<String> {
        self.id().map(|id| format!("{}/{id}", self.kind))
    }

    async fn run<S: ContentSource>(
        &self,
        source: &S,
    ) -> Result<Item, FetchError> {
        let kind: ResourceKind = self.kind.parse()?;
        let id = self.id().unwrap_or_default();
        debug!(%kind, id, "fetching single item");
        source
            .get(kind, id)
            .await
            .map_err(|e| FetchError::Source(e.to_string()))
    }
}

type Listener<T> = Box<dyn Fn(&FetchState<T>)>;

/// State cell for one query, loaded from `S`.
///
/// Not thread safe: it is driven from a single cooperative executor (the
/// browser event loop, or a current-thread runtime in tests). Listeners must
/// not call back into the fetcher.
pub struct Fetcher<S, Q: Query> {
    source: S,
    state: RefCell<FetchState<Q::Output>>,
    query: RefCell<Option<Q>>,
    key: RefCell<Option<String>>,
    generation: Cell<u64>,
    listeners: RefCell<Vec<Listener<Q::Output>>>,
}

impl<S: ContentSource, Q: Query> Fetcher<S, Q> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: RefCell::new(FetchState::default()),
            query: RefCell::new(None),
            key: RefCell::new(None),
            generation: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn state(&self) -> FetchState<Q::Output> {
        self.state.borrow().clone()
    }

    /// Register a callback run with a snapshot after every state change.
    pub fn subscribe(&self, listener: impl Fn(&FetchState<Q::Output>) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    /// Load `query` unless it has the same key as the current query.
    ///
    /// A query without a key (a single lookup with no id) dispatches nothing
    /// and leaves the state at its initial loading value.
    pub async fn load(&self, query: Q) {
        let key = query.key();
        if key.is_some() && *self.key.borrow() == key {
            return;
        }
        *self.key.borrow_mut() = key.clone();
        *self.query.borrow_mut() = Some(query.clone());

        if key.is_none() {
            self.detach();
            self.update(|state| *state = FetchState::default());
            return;
        }
        self.run(query).await;
    }

    /// Run the current query again, whether or not its key changed.
    pub async fn refetch(&self) {
        let query = self.query.borrow().clone();
        match query {
            Some(query) if query.key().is_some() => self.run(query).await,
            _ => debug!("refetch requested with nothing to fetch"),
        }
    }

    /// Forget any request still in flight. Its result will be dropped when
    /// it completes.
    pub fn detach(&self) {
        self.generation.set(self.generation.get() + 1);
    }

    async fn run(&self, query: Q) {
        let ticket = self.begin();
        let result = query.run(&self.source).await;
        self.finish(ticket, result);
    }

    fn begin(&self) -> u64 {
        let ticket = self.generation.get() + 1;
        self.generation.set(ticket);
        self.update(|state| {
            state.loading = true;
            state.error = None;
        });
        ticket
    }

    fn finish(&self, ticket: u64, result: Result<Q::Output, FetchError>) {
        if ticket != self.generation.get() {
            debug!(
                ticket,
                latest = self.generation.get(),
                "discarding response to superseded request"
            );
            return;
        }
        self.update(|state| {
            match result {
                Ok(data) => {
                    state.data = Some(data);
                    state.error = None;
                }
                Err(e) => {
                    warn!("fetch failed: {e}");
                    state.error = Some(e.to_string());
                }
            }
            state.loading = false;
        });
    }

    fn update(&self, f: impl FnOnce(&mut FetchState<Q::Output>)) {
        f(&mut self.state.borrow_mut());
        let snapshot = self.state();
        for listener in self.listeners.borrow().iter() {
            listener(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::{Category, CategoryId, Listing, SanitizedParams};
    use std::collections::VecDeque;
    use std::rc::Rc;
    use tokio::sync::oneshot;

    type Reply = oneshot::Receiver<Result<Collection, String>>;

    /// Source whose list calls resolve when the test says so.
    #[derive(Default)]
    struct ScriptedSource {
        calls: RefCell<Vec<(Resource, SanitizedParams)>>,
        replies: RefCell<VecDeque<Reply>>,
    }

    impl ScriptedSource {
        fn reply_later(&self) -> oneshot::Sender<Result<Collection, String>> {
            let (tx, rx) = oneshot::channel();
            self.replies.borrow_mut().push_back(rx);
            tx
        }

        fn reply_now(&self, reply: Result<Collection, String>) {
            let _ = self.reply_later().send(reply);
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl ContentSource for ScriptedSource {
        type Error = String;

        async fn list(
            &self,
            resource: Resource,
            params: &SanitizedParams,
        ) -> Result<Collection, String> {
            self.calls.borrow_mut().push((resource, params.clone()));
            let reply = self.replies.borrow_mut().pop_front();
            match reply {
                Some(rx) => rx.await.map_err(|e| e.to_string())?,
                None => Err("no reply scripted".to_string()),
            }
        }

        async fn get(
            &self,
            kind: ResourceKind,
            _id: &str,
        ) -> Result<Item, String> {
            Err(format!("{kind} lookups are not scripted"))
        }
    }

    fn categories(names: &[&str]) -> Collection {
        Collection::Categories(Listing::Raw(
            names
                .iter()
                .enumerate()
                .map(|(i, name)| Category {
                    id: CategoryId(i as i64),
                    name: name.to_string(),
                    slug: name.to_lowercase(),
                })
                .collect(),
        ))
    }

    fn collection_fetcher() -> Fetcher<Rc<ScriptedSource>, CollectionQuery> {
        Fetcher::new(Rc::new(ScriptedSource::default()))
    }

    #[test]
    fn starts_loading_with_nothing() {
        let fetcher = collection_fetcher();
        let state = fetcher.state();
        assert!(state.loading);
        assert!(state.data.is_none());
        assert!(state.error.is_none());
        assert!(state.is_initial_loading());
    }

    #[tokio::test]
    async fn unknown_resource_becomes_error_state() {
        let fetcher = collection_fetcher();
        fetcher
            .load(CollectionQuery::new("sermons", QueryParams::new()))
            .await;

        let state = fetcher.state();
        assert!(!state.loading);
        assert!(state.data.is_none());
        assert!(state.error.unwrap().contains("Unknown endpoint"));
        assert_eq!(fetcher.source.call_count(), 0);
    }

    #[tokio::test]
    async fn unknown_kind_becomes_error_state() {
        let fetcher: Fetcher<ScriptedSource, SingleQuery> =
            Fetcher::new(ScriptedSource::default());
        fetcher
            .load(SingleQuery::new("sermon", Some("4".into())))
            .await;

        let state = fetcher.state();
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Unknown endpoint: sermon"));
    }

    #[tokio::test]
    async fn source_error_message_is_stored_verbatim() {
        let fetcher = collection_fetcher();
        fetcher.source.reply_now(Err("Network down".into()));
        fetcher
            .load(CollectionQuery::new("posts", QueryParams::new()))
            .await;

        let state = fetcher.state();
        assert_eq!(state.error.as_deref(), Some("Network down"));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn success_stores_data_and_sends_sanitized_params() {
        let fetcher = collection_fetcher();
        fetcher.source.reply_now(Ok(categories(&["News"])));
        let params = QueryParams::new()
            .with("search", "")
            .with("category", None::<i64>)
            .with("ordering", "name");
        fetcher.load(CollectionQuery::new("categories", params)).await;

        let state = fetcher.state();
        assert_eq!(state.data, Some(categories(&["News"])));
        assert!(state.error.is_none());
        assert!(!state.loading);

        let calls = fetcher.source.calls.borrow();
        let (resource, sent) = &calls[0];
        assert_eq!(*resource, Resource::Categories);
        assert!(!sent.contains_key("search"));
        assert!(!sent.contains_key("category"));
        assert_eq!(sent.get("ordering"), Some("name"));
    }

    #[tokio::test]
    async fn fetches_once_per_distinct_key() {
        let fetcher = collection_fetcher();
        for _ in 0..3 {
            fetcher.source.reply_now(Ok(categories(&[])));
        }

        fetcher
            .load(CollectionQuery::new("posts", QueryParams::new()))
            .await;
        // a freshly built empty map is the same request
        fetcher
            .load(CollectionQuery::new(
                "posts",
                QueryParams::new().with("search", ""),
            ))
            .await;
        assert_eq!(fetcher.source.call_count(), 1);

        fetcher
            .load(CollectionQuery::new(
                "posts",
                QueryParams::new().with("search", "light"),
            ))
            .await;
        assert_eq!(fetcher.source.call_count(), 2);

        fetcher
            .load(CollectionQuery::new(
                "featured-posts",
                QueryParams::new().with("search", "light"),
            ))
            .await;
        assert_eq!(fetcher.source.call_count(), 3);
    }

    #[tokio::test]
    async fn superseded_response_never_overwrites_newer_one() {
        let fetcher = collection_fetcher();
        let first = fetcher.source.reply_later();
        let second = fetcher.source.reply_later();

        tokio::join!(
            fetcher.load(CollectionQuery::new(
                "categories",
                QueryParams::new().with("search", "a"),
            )),
            fetcher.load(CollectionQuery::new(
                "categories",
                QueryParams::new().with("search", "b"),
            )),
            async {
                // the newer request resolves first, the older one after
                let _ = second.send(Ok(categories(&["second"])));
                tokio::task::yield_now().await;
                let _ = first.send(Ok(categories(&["first"])));
            },
        );

        let state = fetcher.state();
        assert_eq!(fetcher.source.call_count(), 2);
        assert_eq!(state.data, Some(categories(&["second"])));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn single_without_id_never_fetches() {
        let fetcher: Fetcher<ScriptedSource, SingleQuery> =
            Fetcher::new(ScriptedSource::default());
        fetcher.load(SingleQuery::new("post", None)).await;
        fetcher.load(SingleQuery::new("post", Some(String::new()))).await;
        fetcher.refetch().await;

        let state = fetcher.state();
        assert!(state.loading);
        assert!(state.data.is_none());
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn refetch_runs_the_same_query_again() {
        let fetcher = collection_fetcher();
        fetcher.source.reply_now(Ok(categories(&["a"])));
        fetcher.source.reply_now(Ok(categories(&["a", "b"])));

        fetcher
            .load(CollectionQuery::new("categories", QueryParams::new()))
            .await;
        fetcher.refetch().await;

        assert_eq!(fetcher.source.call_count(), 2);
        assert_eq!(fetcher.state().data, Some(categories(&["a", "b"])));
    }

    #[tokio::test]
    async fn failed_refetch_keeps_previous_data() {
        let fetcher = collection_fetcher();
        fetcher.source.reply_now(Ok(categories(&["a"])));
        fetcher.source.reply_now(Err("Service unavailable".into()));

        fetcher
            .load(CollectionQuery::new("categories", QueryParams::new()))
            .await;
        fetcher.refetch().await;

        let state = fetcher.state();
        assert_eq!(state.data, Some(categories(&["a"])));
        assert_eq!(state.error.as_deref(), Some("Service unavailable"));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn detached_request_does_not_update_state() {
        let fetcher = collection_fetcher();
        let reply = fetcher.source.reply_later();

        tokio::join!(
            fetcher.load(CollectionQuery::new("categories", QueryParams::new())),
            async {
                fetcher.detach();
                let _ = reply.send(Ok(categories(&["late"])));
            },
        );

        let state = fetcher.state();
        assert!(state.data.is_none());
        assert!(state.loading);
    }

    #[tokio::test]
    async fn listeners_see_every_transition() {
        let fetcher = collection_fetcher();
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            fetcher.subscribe(move |state| {
                seen.borrow_mut().push((state.loading, state.error.clone()));
            });
        }
        fetcher.source.reply_now(Err("Network down".into()));
        fetcher
            .load(CollectionQuery::new("posts", QueryParams::new()))
            .await;

        assert_eq!(
            *seen.borrow(),
            vec![(true, None), (false, Some("Network down".to_string()))]
        );
    }
}
