//! HTTP call to the external login endpoint.
//!
//! Client-side (browser feature): a real `GET` via `gloo-net`.
//! Native builds have no transport; the submit flow is exercised there with
//! test fakes instead.
//!
//! ERROR HANDLING
//! ==============
//! Any response, including 4xx/5xx, resolves to `Ok(status)`; only a request
//! that never got an answer (offline, CORS, DNS) is an `Err`. The caller
//! decides what counts as success.

#[cfg(feature = "browser")]
use crate::error::SiteError;
#[cfg(feature = "browser")]
use crate::state::login::LoginTransport;

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Header carrying the Basic credentials.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

#[cfg(any(test, feature = "browser"))]
fn request_failed_message(endpoint: &str, cause: &str) -> String {
    format!("login request to {endpoint} failed: {cause}")
}

/// Sends login requests with `fetch`.
#[cfg(feature = "browser")]
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[cfg(feature = "browser")]
impl LoginTransport for FetchTransport {
    async fn send(&self, endpoint: &str, authorization: &str) -> Result<u16, SiteError> {
        let resp = gloo_net::http::Request::get(endpoint)
            .header(AUTHORIZATION_HEADER, authorization)
            .send()
            .await
            .map_err(|e| SiteError::Js(request_failed_message(endpoint, &e.to_string())))?;
        Ok(resp.status())
    }
}
