use serde::{Deserialize, Serialize};

use crate::domain::collection::Collection;
use crate::domain::photo::Photo;
use crate::domain::user::User;

// `results: None` means the key was missing from the payload, `Some(vec![])`
// means the search matched nothing.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSearchResult {
    pub total: Option<u64>,
    pub total_pages: Option<u64>,
    pub results: Option<Vec<User>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotoSearchResult {
    pub total: Option<u64>,
    pub total_pages: Option<u64>,
    pub results: Option<Vec<Photo>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionSearchResult {
    pub total: Option<u64>,
    pub total_pages: Option<u64>,
    pub results: Option<Vec<Collection>>,
}
