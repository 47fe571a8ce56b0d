use std::borrow::Cow;
use std::error::Error as StdError;

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use url::Url;

pub type BoxError = Box<dyn StdError + Send + Sync>;

const LINK: &str = "link";
const RATE_LIMIT: &str = "x-ratelimit-limit";
const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
const TOTAL: &str = "x-total";

/// Failure of an [`HttpTransport`](crate::HttpTransport) to produce a [`Response`].
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request never completed (DNS, TLS, connect, timeout, reset, ...).
    #[error("request failed: {0}")]
    Request(#[source] BoxError),

    /// The server answered but the body could not be read to the end.
    #[error("failed to read response body: {0}")]
    Body(#[source] BoxError),
}

/// An HTTP response with its body fully buffered.
///
/// The status code is reported as-is: a `404` or `500` is still a `Response`,
/// and services still try to decode its body. Check [`Response::status`] or
/// [`Response::is_success`] when the distinction matters.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, headers: HeaderMap, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Header value as text; `None` when missing or not valid visible ASCII.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Deserialize the body as JSON.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Requests allowed per hour for the calling application.
    pub fn rate_limit(&self) -> Option<u32> {
        self.parsed_header(RATE_LIMIT)
    }

    /// Requests left in the current hour.
    pub fn rate_limit_remaining(&self) -> Option<u32> {
        self.parsed_header(RATE_LIMIT_REMAINING)
    }

    /// Total number of items behind a paginated list endpoint.
    pub fn total(&self) -> Option<u64> {
        self.parsed_header(TOTAL)
    }

    /// Page numbers advertised in the `Link` header.
    pub fn pagination(&self) -> Pagination {
        let mut pagination = Pagination::default();
        for value in self.headers.get_all(LINK) {
            if let Ok(value) = value.to_str() {
                pagination.merge_link_header(value);
            }
        }
        pagination
    }

    fn parsed_header<T: std::str::FromStr>(&self, name: &str) -> Option<T> {
        self.header(name)?.trim().parse().ok()
    }
}

/// Page numbers parsed from a `Link` header such as
/// `<https://api.unsplash.com/photos?page=3>; rel="next"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub first: Option<u32>,
    pub prev: Option<u32>,
    pub next: Option<u32>,
    pub last: Option<u32>,
}

impl Pagination {
    pub fn has_next_page(&self) -> bool {
        self.next.is_some()
    }

    fn merge_link_header(&mut self, value: &str) {
        for entry in value.split(',') {
            let mut parts = entry.split(';');
            let Some(target) = parts.next() else {
                continue;
            };
            let target = target.trim().trim_start_matches('<').trim_end_matches('>');
            let Some(page) = page_number(target) else {
                continue;
            };

            for param in parts {
                let Some(rel) = param.trim().strip_prefix("rel=") else {
                    continue;
                };
                match rel.trim_matches('"') {
                    "first" => self.first = Some(page),
                    "prev" => self.prev = Some(page),
                    "next" => self.next = Some(page),
                    "last" => self.last = Some(page),
                    _ => {}
                }
            }
        }
    }
}

fn page_number(target: &str) -> Option<u32> {
    let url = Url::parse(target).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse().ok())
}

/// Buffer a `reqwest` response into a [`Response`].
///
/// Reading the whole body also hands the connection back to the pool.
pub async fn normalize(raw: reqwest::Response) -> Result<Response, TransportError> {
    let status = raw.status().as_u16();
    let headers = raw.headers().clone();
    let body = raw
        .bytes()
        .await
        .map_err(|err| TransportError::Body(Box::new(err)))?;
    Ok(Response::new(status, headers, body.to_vec()))
}
