//! Thin fetch client over gloo-net.
//!
//! One outbound GET per call, no retry. Non-success statuses and
//! transport/parse failures are normalized into [`FetchError`] so the
//! panel layer has a single failure channel to classify.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The server answered outside the 2xx range.
    #[error("HTTP {status}")]
    HttpStatus { status: u16 },
    /// The request never completed usable: network unreachable, CORS
    /// rejection, malformed JSON body.
    #[error("{detail}")]
    Transport { detail: String },
}

/// Issue one GET and decode the JSON body.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Transport {
            detail: format!("Request failed: {}", e),
        })?;

    if !response.ok() {
        return Err(FetchError::HttpStatus {
            status: response.status(),
        });
    }

    response.json::<T>().await.map_err(|e| FetchError::Transport {
        detail: format!("Failed to parse response: {}", e),
    })
}

/// Probe an endpoint, reporting only reachability. Used for the
/// header's backend health dot.
pub async fn probe(url: &str) -> bool {
    match Request::get(url).send().await {
        Ok(response) => response.ok(),
        Err(_) => false,
    }
}

/// Append an encoded query string to a URL.
pub fn url_with_query(url: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return url.to_string();
    }
    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", url, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_query_strings() {
        assert_eq!(
            url_with_query("http://x/pegging/ia-lite", &[("material", "4011835-AA")]),
            "http://x/pegging/ia-lite?material=4011835-AA"
        );
        assert_eq!(url_with_query("http://x/health", &[]), "http://x/health");
    }

    #[test]
    fn encodes_query_values() {
        assert_eq!(
            url_with_query("http://x/p", &[("material", "a b/c")]),
            "http://x/p?material=a%20b%2Fc"
        );
    }

    #[test]
    fn error_messages_are_readable() {
        let err = FetchError::HttpStatus { status: 500 };
        assert_eq!(err.to_string(), "HTTP 500");

        let err = FetchError::Transport {
            detail: "Request failed: NetworkError".into(),
        };
        assert_eq!(err.to_string(), "Request failed: NetworkError");
    }
}
