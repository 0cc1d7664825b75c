pub mod api;
mod delivery;
pub mod error;
pub mod logic;
pub mod parse;
pub mod request;

pub use crate::api::{PhotoFetcher, PxFetcher};
pub use crate::error::SearchError;
pub use crate::request::DEFAULT_API_URL;

use crate::delivery::Delivery;
use photo_core::{PhotoResultSet, SearchQuery};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::task::{JoinError, JoinHandle};

/// 500px の写真検索サービス
///
/// Holds the consumer key and transport; no per-call state. Cloning is cheap
/// and clones share the same transport and completion delivery task.
#[derive(Clone)]
pub struct PhotoSearch {
    fetcher: Arc<dyn PhotoFetcher>,
    consumer_key: Arc<str>,
    api_url: Arc<str>,
    delivery: Arc<Delivery>,
}

impl PhotoSearch {
    pub fn new(fetcher: impl PhotoFetcher + 'static, consumer_key: impl Into<String>) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            consumer_key: Arc::from(consumer_key.into()),
            api_url: Arc::from(DEFAULT_API_URL),
            delivery: Arc::new(Delivery::default()),
        }
    }

    /// Point the service at another API base, e.g. a staging host.
    pub fn with_api_url(self, api_url: impl Into<String>) -> Self {
        Self {
            api_url: Arc::from(api_url.into()),
            ..self
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Run one search. The outcome is delivered to whoever awaits this future.
    pub async fn find_photos(&self, query: SearchQuery) -> Result<PhotoResultSet, SearchError> {
        logic::find_photos(
            self.fetcher.as_ref(),
            &self.api_url,
            &self.consumer_key,
            &query,
        )
        .await
    }

    /// Run one search on a background task and hand the outcome to `completion`.
    ///
    /// `completion` is called exactly once, after the response has been
    /// decoded and filtered. Completions of every search started from this
    /// service (and its clones) run on one delivery task, one at a time in the
    /// order their results became ready, so they never overlap.
    ///
    /// Dropping the returned [`SearchTask`] does not stop the search and
    /// `completion` still fires; use [`SearchTask::abort`] to cancel it. Must be
    /// called from within a tokio runtime.
    pub fn find_photos_with<C>(&self, query: SearchQuery, completion: C) -> SearchTask
    where
        C: FnOnce(Result<PhotoResultSet, SearchError>) + Send + 'static,
    {
        let service = self.clone();
        let handle = tokio::spawn(async move {
            let result = service.find_photos(query).await;
            service.delivery.deliver(move || completion(result)).await;
        });
        SearchTask { handle }
    }
}

/// Handle to a search started with [`PhotoSearch::find_photos_with`].
///
/// Awaiting it waits until the completion has run (or the task was aborted).
#[derive(Debug)]
pub struct SearchTask {
    handle: JoinHandle<()>,
}

impl SearchTask {
    /// Request cancellation. A completion that has already been queued for
    /// delivery is not withdrawn, so it may still be observed after this
    /// returns.
    pub fn abort(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Future for SearchTask {
    type Output = Result<(), JoinError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.handle).poll(cx)
    }
}
