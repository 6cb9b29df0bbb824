//! HTTP retrieval for [`from_url_with`](crate::from_url_with).

use crate::error::FetchError;

/// A completed HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FetchResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw `Content-Type` header value, if the server sent one
    pub content_type: Option<String>,
    /// Response body
    pub body: Vec<u8>,
}

/// Retrieves a URL.
///
/// Implementations return `Ok` for any response the server produced,
/// whatever its status; the caller decides what counts as success.
/// Timeouts and cancellation are the implementation's concern. Closures
/// `Fn(&str) -> Result<FetchResponse, FetchError>` implement this trait.
pub trait HttpFetch {
    /// Performs a GET request.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if no response could be obtained.
    fn get(&self, url: &str) -> Result<FetchResponse, FetchError>;
}

impl<F> HttpFetch for F
where
    F: Fn(&str) -> Result<FetchResponse, FetchError>,
{
    fn get(&self, url: &str) -> Result<FetchResponse, FetchError> {
        self(url)
    }
}

/// Blocking [`reqwest`] client.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Default)]
pub struct ReqwestFetcher {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "http")]
impl ReqwestFetcher {
    /// Creates a fetcher with a default client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fetcher around a preconfigured client.
    #[must_use]
    pub const fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "http")]
impl HttpFetch for ReqwestFetcher {
    fn get(&self, url: &str) -> Result<FetchResponse, FetchError> {
        let response = self.client.get(url).send().map_err(FetchError::new)?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().map_err(FetchError::new)?.to_vec();

        Ok(FetchResponse {
            status,
            content_type,
            body,
        })
    }
}

/// Splits a `Content-Type` header into media type and `name=value` parameters.
///
/// Whitespace around each piece is trimmed and one layer of double quotes
/// is removed from values. Pieces without `=` are ignored.
pub(crate) fn split_content_type(header: &str) -> (&str, Vec<(&str, &str)>) {
    let mut pieces = header.split(';');
    let media_type = pieces.next().unwrap_or_default().trim();
    let params = pieces
        .filter_map(|piece| piece.split_once('='))
        .map(|(name, value)| {
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value);
            (name.trim(), value)
        })
        .filter(|(name, _)| !name.is_empty())
        .collect();
    (media_type, params)
}
