//! HTTP calls to the analysis service.
//!
//! Client-side (csr): real requests via `gloo-net`.
//! Native builds (tests): stubs returning a transport error, since these
//! endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! The reply body is read as text regardless of status and handed to
//! `reply::decode_reply`, so an `{error}` body on a non-2xx status still
//! surfaces the service's own message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AnalysisResult, AnalyzeRequest, Endpoint, RecommendationRequest, RecommendationResult};
use crate::config::ApiConfig;
use crate::error::ControllerError;

/// Send `query` to the analyze endpoint.
///
/// # Errors
///
/// See [`ControllerError`]; every failure is either `Application` or `Transport`.
pub async fn analyze(config: &ApiConfig, query: &str) -> Result<AnalysisResult, ControllerError> {
    let payload = AnalyzeRequest { query: query.to_owned() };
    post_json(config, Endpoint::Analyze, &payload).await
}

/// Send the learner's current state to the recommend endpoint.
///
/// # Errors
///
/// See [`ControllerError`]; every failure is either `Application` or `Transport`.
pub async fn recommend(
    config: &ApiConfig,
    request: &RecommendationRequest,
) -> Result<RecommendationResult, ControllerError> {
    post_json(config, Endpoint::Recommend, request).await
}

async fn post_json<B, T>(config: &ApiConfig, endpoint: Endpoint, body: &B) -> Result<T, ControllerError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    #[cfg(feature = "csr")]
    {
        let url = config.url(endpoint);
        log::debug!("POST {url}");
        let resp = gloo_net::http::Request::post(&url)
            .json(body)
            .map_err(|e| ControllerError::transport(endpoint, e.to_string()))?
            .send()
            .await
            .map_err(|e| ControllerError::transport(endpoint, e.to_string()))?;
        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| ControllerError::transport(endpoint, e.to_string()))?;
        super::reply::decode_reply(endpoint, &text).map_err(|err| annotate_status(err, status))
    }
    #[cfg(not(feature = "csr"))]
    {
        let bytes = serde_json::to_vec(body).map_or(0, |v| v.len());
        log::debug!("POST {} ({bytes} bytes) skipped", config.url(endpoint));
        Err(ControllerError::transport(endpoint, unavailable_message(endpoint)))
    }
}

#[cfg(any(test, feature = "csr"))]
fn annotate_status(err: ControllerError, status: u16) -> ControllerError {
    match err {
        ControllerError::Transport { endpoint, detail } => ControllerError::Transport {
            endpoint,
            detail: format!("HTTP {status}: {detail}"),
        },
        other => other,
    }
}

#[cfg(any(test, not(feature = "csr")))]
fn unavailable_message(endpoint: Endpoint) -> String {
    format!("{endpoint} endpoint is only reachable from the browser")
}
