use serde::{Deserialize, Serialize};

use crate::domain::collection::Collection;
use crate::domain::photo::Photo;
use crate::domain::user::User;

/// A bare URL payload (`{"url": "..."}`), as returned by
/// `users/{username}/portfolio` and `photos/{id}/download`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: Option<String>,
}

/// Result of liking or unliking a photo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotoLike {
    pub photo: Option<Photo>,
    pub user: Option<User>,
}

/// Result of adding a photo to, or removing it from, a collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionPhoto {
    pub photo: Option<Photo>,
    pub collection: Option<Collection>,
    pub user: Option<User>,
}
