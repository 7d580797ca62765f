//! Request cache keyed by resource identifiers.
//!
//! Reads go through [`use_query`] which serves cached data immediately and
//! fetches when nothing is cached or the entry was invalidated. One request per
//! key is in flight at a time; every reader of the key sees its outcome. Writes go
//! through [`use_mutation`] which invalidates the keys it touches on success;
//! every mounted reader of an invalidated key refetches.

use crate::api::{self, ApiError};
use crate::models::{
    Comment, CreateCommentRequest, CreateVideoRequest, EditVideoRequest, SuccessResponse, Video,
};
use std::any::Any;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Videos(String),
    Video(String),
    Comments(String),
}

impl QueryKey {
    fn id(&self) -> &str {
        match self {
            QueryKey::Videos(user_id) => user_id,
            QueryKey::Video(video_id) | QueryKey::Comments(video_id) => video_id,
        }
    }

    /// Queries without an identifier never fire.
    pub fn is_enabled(&self) -> bool {
        !self.id().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    Loading,
    Error(String),
    Data(T),
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }
}

struct CacheEntry {
    data: Rc<dyn Any>,
    stale: bool,
}

#[derive(Default)]
struct CacheInner {
    entries: HashMap<QueryKey, CacheEntry>,
    errors: HashMap<QueryKey, String>,
    in_flight: HashSet<QueryKey>,
    subscribers: HashMap<QueryKey, Vec<(usize, Callback<()>)>>,
    next_subscriber: usize,
}

#[derive(Clone, Default)]
pub struct QueryClient {
    inner: Rc<RefCell<CacheInner>>,
}

impl PartialEq for QueryClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl QueryClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_query_data<T: Clone + 'static>(&self, key: &QueryKey) -> Option<T> {
        self.inner
            .borrow()
            .entries
            .get(key)
            .and_then(|entry| entry.data.downcast_ref::<T>().cloned())
    }

    /// The failure of the last request for `key`, until it is invalidated.
    pub fn get_query_error(&self, key: &QueryKey) -> Option<String> {
        self.inner.borrow().errors.get(key).cloned()
    }

    /// True when nothing is cached for `key` or the entry was invalidated, and
    /// no request for it is running. A failed key waits for invalidation.
    pub fn needs_fetch(&self, key: &QueryKey) -> bool {
        let inner = self.inner.borrow();
        !inner.in_flight.contains(key)
            && !inner.errors.contains_key(key)
            && inner.entries.get(key).map_or(true, |entry| entry.stale)
    }

    /// Claims the request for `key`. Only the first caller while a fetch is
    /// needed gets `true`; the rest wait for its outcome.
    pub fn begin_fetch(&self, key: &QueryKey) -> bool {
        if !self.needs_fetch(key) {
            return false;
        }
        self.inner.borrow_mut().in_flight.insert(key.clone());
        true
    }

    /// Stores fresh data and tells every reader of `key` about it.
    pub fn set_query_data<T: 'static>(&self, key: QueryKey, data: T) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.in_flight.remove(&key);
            inner.errors.remove(&key);
            inner.entries.insert(
                key.clone(),
                CacheEntry {
                    data: Rc::new(data),
                    stale: false,
                },
            );
        }
        self.notify(&key);
    }

    /// Records a failed request and tells every reader of `key` about it.
    pub fn set_query_error(&self, key: QueryKey, message: String) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.in_flight.remove(&key);
            inner.errors.insert(key.clone(), message);
        }
        self.notify(&key);
    }

    pub fn invalidate_queries(&self, key: &QueryKey) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.errors.remove(key);
            if let Some(entry) = inner.entries.get_mut(key) {
                entry.stale = true;
            }
        }
        log::debug!("Invalidated {:?}", key);
        self.notify(key);
    }

    pub fn subscribe(&self, key: QueryKey, on_change: Callback<()>) -> usize {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_subscriber;
        inner.next_subscriber += 1;
        inner.subscribers.entry(key).or_default().push((id, on_change));
        id
    }

    pub fn unsubscribe(&self, key: &QueryKey, id: usize) {
        let mut inner = self.inner.borrow_mut();
        if let Some(list) = inner.subscribers.get_mut(key) {
            list.retain(|(subscriber, _)| *subscriber != id);
            if list.is_empty() {
                inner.subscribers.remove(key);
            }
        }
    }

    fn notify(&self, key: &QueryKey) {
        // Collect first: subscribers may re-enter the client while handling the change
        let callbacks: Vec<Callback<()>> = self
            .inner
            .borrow()
            .subscribers
            .get(key)
            .map(|list| list.iter().map(|(_, cb)| cb.clone()).collect())
            .unwrap_or_default();

        for callback in callbacks {
            callback.emit(());
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct QueryClientProviderProps {
    pub client: QueryClient,
    pub children: Children,
}

#[function_component(QueryClientProvider)]
pub fn query_client_provider(props: &QueryClientProviderProps) -> Html {
    html! {
        <ContextProvider<QueryClient> context={props.client.clone()}>
            { for props.children.iter() }
        </ContextProvider<QueryClient>>
    }
}

#[hook]
pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>().unwrap_or_else(|| {
        log::warn!("No QueryClientProvider above this component, using a detached cache");
        QueryClient::new()
    })
}

#[derive(Default, PartialEq)]
struct Generation(u64);

impl Reducible for Generation {
    type Action = ();

    fn reduce(self: Rc<Self>, _action: ()) -> Rc<Self> {
        Rc::new(Generation(self.0.wrapping_add(1)))
    }
}

pub struct UseQueryHandle<T> {
    pub state: QueryState<T>,
    client: QueryClient,
    key: QueryKey,
}

impl<T> UseQueryHandle<T> {
    /// Marks the entry stale; every mounted reader of the key refetches.
    pub fn refetch_callback<IN: 'static>(&self) -> Callback<IN> {
        let client = self.client.clone();
        let key = self.key.clone();
        Callback::from(move |_| client.invalidate_queries(&key))
    }
}

#[hook]
pub fn use_query<T, F, Fut>(key: QueryKey, fetch: F) -> UseQueryHandle<T>
where
    T: Clone + 'static,
    F: FnOnce(QueryKey) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let client = use_query_client();
    let state = {
        let client = client.clone();
        let key = key.clone();
        use_state(move || match client.get_query_data::<T>(&key) {
            Some(data) => QueryState::Data(data),
            None => QueryState::Loading,
        })
    };
    let generation = use_reducer(Generation::default);

    {
        let client = client.clone();
        let dispatcher = generation.dispatcher();
        use_effect_with(key.clone(), move |key| {
            let id = client.subscribe(key.clone(), Callback::from(move |_| dispatcher.dispatch(())));
            let key = key.clone();
            move || client.unsubscribe(&key, id)
        });
    }

    {
        let client = client.clone();
        let state = state.clone();
        use_effect_with((key.clone(), generation.0), move |(key, _)| {
            if key.is_enabled() {
                match (client.get_query_data::<T>(key), client.get_query_error(key)) {
                    (Some(data), _) => state.set(QueryState::Data(data)),
                    (None, Some(message)) => state.set(QueryState::Error(message)),
                    (None, None) => state.set(QueryState::Loading),
                }

                if client.begin_fetch(key) {
                    let key = key.clone();
                    let request = fetch(key.clone());
                    wasm_bindgen_futures::spawn_local(async move {
                        match request.await {
                            Ok(data) => client.set_query_data(key, data),
                            Err(e) => {
                                log::error!("Query {:?} failed: {}", key, e);
                                client.set_query_error(key, e.to_string());
                            }
                        }
                    });
                }
            }
            || ()
        });
    }

    UseQueryHandle {
        state: (*state).clone(),
        client,
        key,
    }
}

#[hook]
pub fn use_videos(user_id: &str) -> UseQueryHandle<Vec<Video>> {
    use_query(QueryKey::Videos(user_id.to_string()), |key| async move {
        api::list_videos_by_user(key.id()).await
    })
}

#[hook]
pub fn use_video(video_id: &str) -> UseQueryHandle<Video> {
    use_query(QueryKey::Video(video_id.to_string()), |key| async move {
        api::get_video(key.id()).await
    })
}

#[hook]
pub fn use_comments(video_id: &str) -> UseQueryHandle<Vec<Comment>> {
    use_query(QueryKey::Comments(video_id.to_string()), |key| async move {
        api::list_comments(key.id()).await
    })
}

type MutationFuture = Pin<Box<dyn Future<Output = Result<SuccessResponse, ApiError>>>>;

pub struct UseMutationHandle<B> {
    pending: UseStateHandle<bool>,
    error: UseStateHandle<Option<String>>,
    client: QueryClient,
    invalidates: Rc<Vec<QueryKey>>,
    mutation_fn: Rc<dyn Fn(B) -> MutationFuture>,
}

impl<B> Clone for UseMutationHandle<B> {
    fn clone(&self) -> Self {
        Self {
            pending: self.pending.clone(),
            error: self.error.clone(),
            client: self.client.clone(),
            invalidates: self.invalidates.clone(),
            mutation_fn: self.mutation_fn.clone(),
        }
    }
}

impl<B: 'static> UseMutationHandle<B> {
    pub fn is_pending(&self) -> bool {
        *self.pending
    }

    pub fn error(&self) -> Option<String> {
        (*self.error).clone()
    }

    /// Fires the request once; `on_success` runs after the invalidations.
    pub fn mutate<S>(&self, body: B, on_success: S)
    where
        S: FnOnce() + 'static,
    {
        self.pending.set(true);
        self.error.set(None);

        let request = (self.mutation_fn)(body);
        let pending = self.pending.clone();
        let error = self.error.clone();
        let client = self.client.clone();
        let invalidates = self.invalidates.clone();

        wasm_bindgen_futures::spawn_local(async move {
            match request.await {
                Ok(_) => {
                    for key in invalidates.iter() {
                        client.invalidate_queries(key);
                    }
                    pending.set(false);
                    on_success();
                }
                Err(e) => {
                    log::error!("Mutation failed: {}", e);
                    error.set(Some(e.to_string()));
                    pending.set(false);
                }
            }
        });
    }
}

#[hook]
pub fn use_mutation<B, F, Fut>(invalidates: Vec<QueryKey>, mutation_fn: F) -> UseMutationHandle<B>
where
    B: 'static,
    F: Fn(B) -> Fut + 'static,
    Fut: Future<Output = Result<SuccessResponse, ApiError>> + 'static,
{
    let client = use_query_client();
    let pending = use_state(|| false);
    let error = use_state(|| None::<String>);

    UseMutationHandle {
        pending,
        error,
        client,
        invalidates: Rc::new(invalidates),
        mutation_fn: Rc::new(move |body: B| Box::pin(mutation_fn(body)) as MutationFuture),
    }
}

#[hook]
pub fn use_create_video(user_id: &str) -> UseMutationHandle<CreateVideoRequest> {
    use_mutation(vec![QueryKey::Videos(user_id.to_string())], api::create_video)
}

#[hook]
pub fn use_edit_video() -> UseMutationHandle<EditVideoRequest> {
    use_mutation(Vec::new(), api::edit_video)
}

/// Comment bodies carry their own author; the video id comes from the hook.
#[derive(Debug, Clone, PartialEq)]
pub struct NewComment {
    pub content: String,
    pub user_id: String,
}

#[hook]
pub fn use_create_comment(video_id: &str) -> UseMutationHandle<NewComment> {
    let video_id = video_id.to_string();
    use_mutation(
        vec![QueryKey::Comments(video_id.clone())],
        move |comment: NewComment| {
            api::create_comment(CreateCommentRequest {
                video_id: video_id.clone(),
                content: comment.content,
                user_id: comment.user_id,
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, Callback<()>) {
        let hits = Rc::new(Cell::new(0));
        let cb = {
            let hits = hits.clone();
            Callback::from(move |_| hits.set(hits.get() + 1))
        };
        (hits, cb)
    }

    #[test]
    fn empty_identifier_disables_query() {
        assert!(!QueryKey::Video(String::new()).is_enabled());
        assert!(!QueryKey::Videos(String::new()).is_enabled());
        assert!(QueryKey::Comments("v1".into()).is_enabled());
    }

    #[test]
    fn missing_entry_needs_fetch_until_data_arrives() {
        let client = QueryClient::new();
        let key = QueryKey::Video("v1".into());

        assert!(client.needs_fetch(&key));
        assert_eq!(client.get_query_data::<String>(&key), None);

        client.set_query_data(key.clone(), "cached".to_string());
        assert!(!client.needs_fetch(&key));
        assert_eq!(client.get_query_data::<String>(&key).as_deref(), Some("cached"));
    }

    #[test]
    fn invalidation_marks_stale_but_keeps_data() {
        let client = QueryClient::new();
        let key = QueryKey::Comments("v1".into());
        client.set_query_data(key.clone(), vec![1u8, 2, 3]);

        client.invalidate_queries(&key);

        assert!(client.needs_fetch(&key));
        assert_eq!(client.get_query_data::<Vec<u8>>(&key), Some(vec![1, 2, 3]));
    }

    #[test]
    fn invalidation_only_notifies_matching_key() {
        let client = QueryClient::new();
        let (comments_hits, comments_cb) = counter();
        let (videos_hits, videos_cb) = counter();
        client.subscribe(QueryKey::Comments("v1".into()), comments_cb);
        client.subscribe(QueryKey::Videos("john_smith".into()), videos_cb);

        client.invalidate_queries(&QueryKey::Comments("v1".into()));
        client.invalidate_queries(&QueryKey::Comments("v2".into()));

        assert_eq!(comments_hits.get(), 1);
        assert_eq!(videos_hits.get(), 0);
    }

    #[test]
    fn unsubscribed_readers_are_not_notified() {
        let client = QueryClient::new();
        let key = QueryKey::Videos("john_smith".into());
        let (hits, cb) = counter();
        let id = client.subscribe(key.clone(), cb);

        client.set_query_data(key.clone(), 1u32);
        client.unsubscribe(&key, id);
        client.invalidate_queries(&key);

        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn concurrent_readers_share_one_request() {
        let client = QueryClient::new();
        let key = QueryKey::Videos("john_smith".into());

        assert!(client.begin_fetch(&key));
        assert!(!client.begin_fetch(&key));
        assert!(!client.needs_fetch(&key));

        client.set_query_data(key.clone(), 7u32);
        assert!(!client.begin_fetch(&key));

        client.invalidate_queries(&key);
        assert!(client.begin_fetch(&key));
        assert!(!client.begin_fetch(&key));
    }

    #[test]
    fn failure_reaches_every_reader_and_waits_for_retry() {
        let client = QueryClient::new();
        let key = QueryKey::Video("v1".into());
        let (first, first_cb) = counter();
        let (second, second_cb) = counter();
        client.subscribe(key.clone(), first_cb);
        client.subscribe(key.clone(), second_cb);

        assert!(client.begin_fetch(&key));
        client.set_query_error(key.clone(), "boom".into());

        assert_eq!((first.get(), second.get()), (1, 1));
        assert_eq!(client.get_query_error(&key).as_deref(), Some("boom"));
        assert!(!client.begin_fetch(&key));

        client.invalidate_queries(&key);
        assert_eq!(client.get_query_error(&key), None);
        assert!(client.begin_fetch(&key));

        client.set_query_data(key.clone(), "ok".to_string());
        assert_eq!(client.get_query_error(&key), None);
    }

    #[test]
    fn wrong_type_reads_as_missing() {
        let client = QueryClient::new();
        let key = QueryKey::Video("v1".into());
        client.set_query_data(key.clone(), 42u32);

        assert_eq!(client.get_query_data::<String>(&key), None);
    }
}
