//! Client layer: the request/execute/decode pipeline and the resource services
//! built on top of it.

mod collections;
mod photos;
mod search;
mod users;

#[cfg(test)]
pub(crate) mod fake;

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::domain::{AccessKey, AccessToken, GlobalStats, MonthStats, User, UserUpdate, ValidationError};
use crate::transport::endpoint::{self, DEFAULT_BASE_URL};
use crate::transport::{
    BoxError, EndpointError, Method, Request, Response, TransportError, UnsupportedMethod,
    normalize,
};

pub use collections::CollectionsService;
pub use photos::PhotosService;
pub use search::SearchService;
pub use users::UsersService;

const API_VERSION: &str = "v1";

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Executes one HTTP request and buffers the response.
///
/// Implementations must be safe to share across tasks. They perform exactly
/// one exchange per call: no retries, and the status code is never turned into
/// an error.
pub trait HttpTransport: Send + Sync {
    fn execute<'a>(&'a self, request: Request) -> BoxFuture<'a, Result<Response, TransportError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(&'a self, request: Request) -> BoxFuture<'a, Result<Response, TransportError>> {
        Box::pin(async move {
            let mut builder = self
                .client
                .request(request.method().into(), request.url().clone());
            for (name, value) in request.headers() {
                builder = builder.header(name.as_str(), value.as_str());
            }
            if let Some(body) = request.body() {
                builder = builder.body(body.to_vec());
            }

            let raw = builder
                .send()
                .await
                .map_err(|err| TransportError::Request(Box::new(err)))?;
            normalize(raw).await
        })
    }
}

#[derive(Debug, Clone)]
/// Credentials attached to every request as the `Authorization` header.
///
/// Use [`Auth::client_id`] for public actions with an application access key,
/// or [`Auth::bearer`] with a user access token for actions on behalf of a user.
pub enum Auth {
    ClientId(AccessKey),
    Bearer(AccessToken),
}

impl Auth {
    /// Create [`Auth::ClientId`] and validate that the key is non-empty after trimming.
    pub fn client_id(access_key: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::ClientId(AccessKey::new(access_key)?))
    }

    /// Create [`Auth::Bearer`] and validate that the token is non-empty after trimming.
    pub fn bearer(token: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::Bearer(AccessToken::new(token)?))
    }

    fn header_value(&self) -> String {
        match self {
            Self::ClientId(key) => format!("Client-ID {}", key.as_str()),
            Self::Bearer(token) => format!("Bearer {}", token.as_str()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`Unsplash`] and its services.
///
/// A non-2xx HTTP status is not an error: the decoded value and the
/// [`Response`] are returned, and callers check [`Response::status`].
pub enum UnsplashError {
    /// Caller input was rejected before any request was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    #[error(transparent)]
    UnsupportedMethod(#[from] UnsupportedMethod),

    #[error(transparent)]
    InvalidEndpoint(#[from] EndpointError),

    /// The request payload could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The response body could not be read to the end.
    #[error("failed to read response body: {0}")]
    Io(#[source] BoxError),

    /// Response body did not match the expected JSON shape.
    #[error("decode error: {0}")]
    Decode(#[source] serde_json::Error),
}

impl From<TransportError> for UnsplashError {
    fn from(value: TransportError) -> Self {
        match value {
            TransportError::Request(err) => Self::Transport(err),
            TransportError::Body(err) => Self::Io(err),
        }
    }
}

#[derive(Clone)]
/// Builder for [`Unsplash`].
///
/// Use this when you need credentials, a different endpoint, a timeout, or your
/// own HTTP client or transport.
pub struct UnsplashBuilder {
    auth: Option<Auth>,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    http_client: Option<reqwest::Client>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl Default for UnsplashBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UnsplashBuilder {
    /// Create a builder with the default endpoint and no credentials.
    pub fn new() -> Self {
        Self {
            auth: None,
            endpoint: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
            http_client: None,
            transport: None,
        }
    }

    pub fn auth(mut self, auth: Auth) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Override the API base URL (`https://api.unsplash.com/`).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// Ignored when a client or transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    ///
    /// Ignored when a client or transport is supplied.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a preconfigured `reqwest` client (proxies, default headers, timeouts, ...).
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Use a custom transport. Takes precedence over [`UnsplashBuilder::http_client`].
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build an [`Unsplash`] client.
    pub fn build(self) -> Result<Unsplash, UnsplashError> {
        endpoint::parse_base_url(&self.endpoint)?;

        let http: Arc<dyn HttpTransport> = match (self.transport, self.http_client) {
            (Some(transport), _) => transport,
            (None, Some(client)) => Arc::new(ReqwestTransport { client }),
            (None, None) => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| UnsplashError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport { client })
            }
        };

        Ok(Unsplash::from_service(Service {
            http,
            base_url: self.endpoint,
            auth: self.auth,
        }))
    }
}

/// State shared by the facade and every resource service.
#[derive(Clone)]
pub(crate) struct Service {
    http: Arc<dyn HttpTransport>,
    base_url: String,
    auth: Option<Auth>,
}

impl fmt::Debug for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Service")
            .field("base_url", &self.base_url)
            .field("auth", &self.auth.is_some())
            .finish_non_exhaustive()
    }
}

impl Service {
    /// Request for the endpoint made of `segments`, with default headers.
    pub(crate) fn request(&self, method: Method, segments: &[&str]) -> Result<Request, UnsplashError> {
        let url = endpoint::join(&self.base_url, segments)?;
        let mut request = Request::new(method, url)
            .with_header("Accept", "application/json")
            .with_header("Accept-Version", API_VERSION);
        if let Some(auth) = &self.auth {
            request = request.with_header("Authorization", auth.header_value());
        }
        Ok(request)
    }

    pub(crate) async fn execute(&self, request: Request) -> Result<Response, UnsplashError> {
        tracing::debug!(method = %request.method(), url = %request.url(), "sending request");
        let response = self.http.execute(request).await?;
        tracing::debug!(
            status = response.status(),
            bytes = response.body().len(),
            "received response"
        );
        Ok(response)
    }

    /// Execute `request` and decode its body as `T`, whatever the status code.
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        request: Request,
    ) -> Result<(T, Response), UnsplashError> {
        let response = self.execute(request).await?;
        let value = response.decode().map_err(UnsplashError::Decode)?;
        Ok((value, response))
    }
}

#[derive(Debug, Clone)]
/// Unsplash API client.
///
/// Cheap to clone; clones share one HTTP transport. Resource groups are reached
/// through [`Unsplash::users`], [`Unsplash::photos`], [`Unsplash::collections`]
/// and [`Unsplash::search`].
///
/// Every operation returns the decoded value together with the buffered
/// [`Response`], so status code, pagination and rate-limit headers stay
/// available.
pub struct Unsplash {
    service: Service,
    users: UsersService,
    photos: PhotosService,
    collections: CollectionsService,
    search: SearchService,
}

impl Unsplash {
    /// Create a client against `https://api.unsplash.com/`.
    ///
    /// With `None` a default `reqwest` client is used. Pass a client configured
    /// with an `Authorization` default header, or use [`Unsplash::builder`] with
    /// [`Auth`], to authenticate.
    pub fn new(client: Option<reqwest::Client>) -> Self {
        let client = client.unwrap_or_default();
        Self::from_service(Service {
            http: Arc::new(ReqwestTransport { client }),
            base_url: DEFAULT_BASE_URL.to_owned(),
            auth: None,
        })
    }

    /// Start building a client with custom settings.
    pub fn builder() -> UnsplashBuilder {
        UnsplashBuilder::new()
    }

    fn from_service(service: Service) -> Self {
        Self {
            users: UsersService::new(service.clone()),
            photos: PhotosService::new(service.clone()),
            collections: CollectionsService::new(service.clone()),
            search: SearchService::new(service.clone()),
            service,
        }
    }

    pub fn users(&self) -> &UsersService {
        &self.users
    }

    pub fn photos(&self) -> &PhotosService {
        &self.photos
    }

    pub fn collections(&self) -> &CollectionsService {
        &self.collections
    }

    pub fn search(&self) -> &SearchService {
        &self.search
    }

    /// Profile of the user the access token belongs to (`GET /me`).
    pub async fn current_user(&self) -> Result<(User, Response), UnsplashError> {
        let request = self.service.request(Method::Get, &[endpoint::CURRENT_USER])?;
        self.service.call(request).await
    }

    /// Update the authenticated user's profile (`PUT /me`).
    pub async fn update_current_user(
        &self,
        update: &UserUpdate,
    ) -> Result<(User, Response), UnsplashError> {
        let request = self
            .service
            .request(Method::Put, &[endpoint::CURRENT_USER])?
            .with_json(update)
            .map_err(UnsplashError::Encode)?;
        self.service.call(request).await
    }

    /// Totals since the launch of Unsplash (`GET /stats/total`).
    pub async fn stats(&self) -> Result<(GlobalStats, Response), UnsplashError> {
        let request = self.service.request(Method::Get, &[endpoint::STATS, "total"])?;
        self.service.call(request).await
    }

    /// Counters for the past 30 days (`GET /stats/month`).
    pub async fn month_stats(&self) -> Result<(MonthStats, Response), UnsplashError> {
        let request = self.service.request(Method::Get, &[endpoint::STATS, "month"])?;
        self.service.call(request).await
    }

    /// Build a request for `path` (relative to the base URL) carrying the
    /// default headers and credentials. Pair with [`Unsplash::execute`] for
    /// endpoints without a typed wrapper.
    ///
    /// A query string in `path` (`"photos?page=2"`) is kept as query
    /// parameters; more can be added with [`Request::with_query`].
    pub fn request(&self, method: Method, path: &str) -> Result<Request, UnsplashError> {
        let (path, query) = path.split_once('?').unwrap_or((path, ""));
        let segments = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>();
        let request = self.service.request(method, &segments)?;
        Ok(request.with_query(url::form_urlencoded::parse(query.as_bytes())))
    }

    /// Send a request as-is and return the buffered response.
    pub async fn execute(&self, request: Request) -> Result<Response, UnsplashError> {
        self.service.execute(request).await
    }
}
