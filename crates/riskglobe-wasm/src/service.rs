// crates/riskglobe-wasm/src/service.rs

//! Data service: fetches the score document once and hands it to a single
//! subscriber. Dropping interest is explicit through [`Subscription::cancel`].

use futures_util::future::{abortable, AbortHandle};
use gloo_net::http::Request;
use riskglobe_core::{Boundaries, GlobeError, Result, ScoreTable};
use wasm_bindgen_futures::spawn_local;

/// Handle to an in-flight request. After `cancel` the subscriber is never
/// called, even if the response already arrived on the network.
#[derive(Debug)]
pub struct Subscription {
    handle: AbortHandle,
}

impl Subscription {
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

#[derive(Debug, Clone)]
pub struct DataService {
    url: String,
}

impl DataService {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issues the request and delivers exactly one result to `on_next`.
    pub fn subscribe<F>(&self, on_next: F) -> Subscription
    where
        F: FnOnce(Result<ScoreTable>) + 'static,
    {
        let url = self.url.clone();
        let (task, handle) = abortable(async move {
            let body = fetch_text(&url).await?;
            ScoreTable::from_json_str(&body)
        });

        spawn_local(async move {
            // Err(Aborted) means the view went away first.
            if let Ok(result) = task.await {
                on_next(result);
            }
        });

        Subscription { handle }
    }
}

/// GET `url` and return the body. Transport failures are
/// [`GlobeError::Network`]; non-2xx statuses are [`GlobeError::NotFound`].
pub async fn fetch_text(url: &str) -> Result<String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| GlobeError::Network(format!("{url}: {e}")))?;

    if !response.ok() {
        return Err(GlobeError::NotFound(format!(
            "{url}: HTTP {} {}",
            response.status(),
            response.status_text()
        )));
    }

    response
        .text()
        .await
        .map_err(|e| GlobeError::InvalidData(format!("{url}: {e}")))
}

pub async fn fetch_boundaries(url: &str) -> Result<Boundaries> {
    let body = fetch_text(url).await?;
    Boundaries::from_json_str(&body)
}
