//! Typed Rust client for the Unsplash HTTP API.
//!
//! The crate is split in three layers: a domain layer of resources, options
//! and validated values, a transport layer for HTTP and wire-format details,
//! and a small client layer running the request/execute/decode pipeline.
//!
//! ```rust,no_run
//! use unsplash::{Auth, SearchOpt, Unsplash};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), unsplash::UnsplashError> {
//!     let client = Unsplash::builder()
//!         .auth(Auth::client_id("...")?)
//!         .build()?;
//!     let (result, response) = client.search().photos(&SearchOpt::new("mountains")).await?;
//!     println!("{} ({:?} matches)", response.status(), result.total);
//!     Ok(())
//! }
//! ```
//!
//! ## Status codes
//!
//! HTTP error statuses are not turned into errors. Every operation returns the
//! decoded body together with the buffered [`Response`]; check
//! [`Response::status`] when a `404` or `500` must be told apart from success.
//! Errors are reserved for rejected input, transport failures and bodies that
//! do not decode.
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    Auth, BoxFuture, CollectionsService, HttpTransport, PhotosService, SearchService, Unsplash,
    UnsplashBuilder, UnsplashError, UsersService,
};
pub use domain::{
    Collection, CollectionPhoto, CollectionSearchResult, CollectionUpdate, GlobalStats, Link,
    ListOpt, MonthStats, NewCollection, OrderBy, Orientation, Photo, PhotoLike, PhotoOpt,
    PhotoSearchResult, ProfileImageOpt, RandomPhotoOpt, SearchOpt, Statistics, StatsOpt, User,
    UserSearchResult, UserUpdate, ValidationError,
};
pub use transport::{
    BoxError, EndpointError, Method, Pagination, Request, Response, TransportError,
    UnsupportedMethod,
};
