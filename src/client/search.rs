use serde::de::DeserializeOwned;

use crate::domain::{CollectionSearchResult, PhotoSearchResult, SearchOpt, UserSearchResult};
use crate::transport::endpoint::SEARCH;
use crate::transport::{Method, Response, encode_search_query};

use super::{Service, UnsplashError};

#[derive(Debug, Clone)]
/// Full-text search over users, photos and collections.
///
/// Results carry `total` and `total_pages` as reported by the API; fetching
/// further pages is up to the caller (bump [`SearchOpt::page`]).
pub struct SearchService {
    service: Service,
}

impl SearchService {
    pub(crate) fn new(service: Service) -> Self {
        Self { service }
    }

    pub async fn users(&self, opt: &SearchOpt) -> Result<(UserSearchResult, Response), UnsplashError> {
        self.search("users", opt).await
    }

    pub async fn photos(
        &self,
        opt: &SearchOpt,
    ) -> Result<(PhotoSearchResult, Response), UnsplashError> {
        self.search("photos", opt).await
    }

    pub async fn collections(
        &self,
        opt: &SearchOpt,
    ) -> Result<(CollectionSearchResult, Response), UnsplashError> {
        self.search("collections", opt).await
    }

    async fn search<T: DeserializeOwned>(
        &self,
        kind: &str,
        opt: &SearchOpt,
    ) -> Result<(T, Response), UnsplashError> {
        opt.validate()?;
        let request = self
            .service
            .request(Method::Get, &[SEARCH, kind])?
            .with_query(encode_search_query(opt));
        self.service.call(request).await
    }
}
