//! Transport layer: HTTP and wire-format details (requests, buffered
//! responses, endpoint paths, query encoding).

pub(crate) mod endpoint;
mod id;
mod query;
mod request;
mod response;

pub use endpoint::EndpointError;
pub use id::deserialize_opt_id;
pub use query::{
    encode_list_query, encode_photo_query, encode_profile_image_query, encode_random_photo_query,
    encode_search_query, encode_stats_query,
};
pub use request::{Method, Request, UnsupportedMethod};
pub use response::{BoxError, Pagination, Response, TransportError, normalize};
