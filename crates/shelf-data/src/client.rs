//! Cached fetch client for the remote API.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use shelf_cache::{CacheLookup, CacheStatus, CacheStore, FetchCachePolicy, RequestSignature};
use shelf_core::Method;

use crate::error::FetchError;

/// Default total timeout for outbound requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client that routes reads through the shared fetch cache.
///
/// Reads consult the cache first; fresh responses are stored under the
/// request signature according to the caller's policy. Error responses are
/// returned to the caller and never cached. Writes bypass the cache
/// entirely.
#[derive(Clone)]
pub struct FetchClient {
    http: reqwest::Client,
    cache: Arc<CacheStore>,
}

impl FetchClient {
    /// Create a client sharing the given cache store.
    ///
    /// Fails only if the TLS backend cannot be initialized.
    pub fn new(cache: Arc<CacheStore>) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| FetchError::ClientInit(e.to_string()))?;
        Ok(Self { http, cache })
    }

    /// The shared cache store.
    pub fn cache(&self) -> &Arc<CacheStore> {
        &self.cache
    }

    /// GET a JSON resource under a cache policy.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        policy: FetchCachePolicy,
    ) -> Result<T, FetchError> {
        let signature = RequestSignature::new(Method::Get, url);

        let status = if policy.allows_caching() {
            match self.cache.lookup(&signature).await {
                CacheLookup::Hit(body) => {
                    debug!(signature = %signature, status = %CacheStatus::Hit, "fetch");
                    return parse_body(&body);
                }
                lookup => lookup.status(),
            }
        } else {
            CacheStatus::Bypass
        };
        debug!(signature = %signature, %status, "fetch");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(e, url))?;

        let body = check_status(response, url)?
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(e, url))?;

        self.cache.insert(signature, body.clone(), policy).await;
        parse_body(&body)
    }

    /// POST a JSON body. Never cached.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, FetchError> {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(e, url))?;

        let body = check_status(response, url)?
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(e, url))?;

        parse_body(&body)
    }

    /// DELETE a resource. Never cached.
    pub async fn delete(&self, url: &str) -> Result<(), FetchError> {
        let response = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(e, url))?;

        check_status(response, url).map(|_| ())
    }
}

fn check_status(response: reqwest::Response, url: &str) -> Result<reqwest::Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(FetchError::NotFound {
            url: url.to_string(),
        });
    }
    Err(FetchError::Http {
        status: status.as_u16(),
        message: status
            .canonical_reason()
            .unwrap_or("Unknown Error")
            .to_string(),
        url: url.to_string(),
    })
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Deserialization(e.to_string()))
}
