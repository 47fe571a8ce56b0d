//! Domain layer: resources mirroring the Unsplash JSON schema, request
//! options and validated values (no I/O).

mod collection;
mod photo;
mod request;
mod response;
mod search;
mod stats;
mod user;
mod validation;
mod value;

pub use collection::{Collection, CollectionLinks};
pub use photo::{Exif, Location, Photo, PhotoLinks, PhotoUrls, Position, Tag};
pub use request::{
    CollectionUpdate, ListOpt, MAX_PER_PAGE, MAX_RANDOM_COUNT, MAX_STATS_QUANTITY, NewCollection,
    OrderBy, Orientation, PhotoOpt, ProfileImageOpt, RandomPhotoOpt, Rect, Resolution, SearchOpt,
    StatsOpt, UserUpdate,
};
pub use response::{CollectionPhoto, Link, PhotoLike};
pub use search::{CollectionSearchResult, PhotoSearchResult, UserSearchResult};
pub use stats::{GlobalStats, MonthStats, StatHistory, StatTrend, StatValue, Statistics};
pub use user::{ProfileImage, User, UserLinks};
pub use validation::ValidationError;
pub use value::{AccessKey, AccessToken, CollectionId, PhotoId, Username};
