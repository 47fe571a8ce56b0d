use crate::domain::{
    Link, ListOpt, Photo, PhotoId, PhotoLike, PhotoOpt, RandomPhotoOpt, Statistics, StatsOpt,
};
use crate::transport::endpoint::PHOTOS;
use crate::transport::{
    Method, Response, encode_list_query, encode_photo_query, encode_random_photo_query,
    encode_stats_query,
};

use super::{Service, UnsplashError};

#[derive(Debug, Clone)]
/// Photos: the editorial feed, single photos, random picks, statistics,
/// likes and download links.
pub struct PhotosService {
    service: Service,
}

impl PhotosService {
    pub(crate) fn new(service: Service) -> Self {
        Self { service }
    }

    /// Editorial feed (`GET /photos`).
    pub async fn all(&self, opt: &ListOpt) -> Result<(Vec<Photo>, Response), UnsplashError> {
        opt.validate()?;
        let request = self
            .service
            .request(Method::Get, &[PHOTOS])?
            .with_query(encode_list_query(opt));
        self.service.call(request).await
    }

    /// A single photo, optionally resized or cropped.
    pub async fn get(
        &self,
        id: &str,
        opt: Option<&PhotoOpt>,
    ) -> Result<(Photo, Response), UnsplashError> {
        let id = PhotoId::new(id)?;
        let mut request = self.service.request(Method::Get, &[PHOTOS, id.as_str()])?;
        if let Some(opt) = opt {
            request = request.with_query(encode_photo_query(opt));
        }
        self.service.call(request).await
    }

    /// Random photos matching `opt`. Always a list, even for a single photo.
    pub async fn random(
        &self,
        opt: &RandomPhotoOpt,
    ) -> Result<(Vec<Photo>, Response), UnsplashError> {
        opt.validate()?;
        let request = self
            .service
            .request(Method::Get, &[PHOTOS, "random"])?
            .with_query(encode_random_photo_query(opt));
        self.service.call(request).await
    }

    /// Downloads, views and likes of a photo over the window in `opt`.
    pub async fn statistics(
        &self,
        id: &str,
        opt: &StatsOpt,
    ) -> Result<(Statistics, Response), UnsplashError> {
        let id = PhotoId::new(id)?;
        opt.validate()?;
        let request = self
            .service
            .request(Method::Get, &[PHOTOS, id.as_str(), "statistics"])?
            .with_query(encode_stats_query(opt));
        self.service.call(request).await
    }

    /// Like a photo on behalf of the authenticated user.
    pub async fn like(&self, id: &str) -> Result<(PhotoLike, Response), UnsplashError> {
        self.like_request(Method::Post, id).await
    }

    /// Remove the authenticated user's like.
    pub async fn unlike(&self, id: &str) -> Result<(PhotoLike, Response), UnsplashError> {
        self.like_request(Method::Delete, id).await
    }

    /// URL to download the photo from. Calling this also counts as a download
    /// for the photographer.
    pub async fn download_link(&self, id: &str) -> Result<(Link, Response), UnsplashError> {
        let id = PhotoId::new(id)?;
        let request = self
            .service
            .request(Method::Get, &[PHOTOS, id.as_str(), "download"])?;
        self.service.call(request).await
    }

    async fn like_request(
        &self,
        method: Method,
        id: &str,
    ) -> Result<(PhotoLike, Response), UnsplashError> {
        let id = PhotoId::new(id)?;
        let request = self
            .service
            .request(method, &[PHOTOS, id.as_str(), "like"])?;
        self.service.call(request).await
    }
}
