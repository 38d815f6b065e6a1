use contracts::domain::a001_catalog::aggregate::Catalog;
use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use std::future::Future;

use crate::shared::api_utils::api_url;

const CATALOGS_PATH: &str = "/Catalogs";

/// Upper bound for the catalog request before the page reports an error
pub const FETCH_TIMEOUT_MS: u32 = 10_000;

/// Получить список всех каталогов
pub async fn fetch_catalogs() -> Result<Vec<Catalog>, String> {
    let response = Request::get(&api_url(CATALOGS_PATH))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<Vec<Catalog>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Race `request` against `timer`. If the timer finishes first the result is
/// a timeout error; the request itself is not aborted, its result is dropped.
pub async fn with_timeout<T, F, D>(request: F, timer: D, timeout_ms: u32) -> Result<T, String>
where
    F: Future<Output = Result<T, String>>,
    D: Future<Output = ()>,
{
    match future::select(Box::pin(request), Box::pin(timer)).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(format!("Request timed out after {} ms", timeout_ms)),
    }
}

/// [`fetch_catalogs`] bounded by `timeout_ms`.
pub async fn fetch_catalogs_with_timeout(timeout_ms: u32) -> Result<Vec<Catalog>, String> {
    with_timeout(fetch_catalogs(), TimeoutFuture::new(timeout_ms), timeout_ms).await
}
