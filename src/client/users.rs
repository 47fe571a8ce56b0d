use crate::domain::{
    Collection, Link, ListOpt, Photo, ProfileImageOpt, Statistics, StatsOpt, User, Username,
};
use crate::transport::endpoint::USERS;
use crate::transport::{
    Method, Response, encode_list_query, encode_profile_image_query, encode_stats_query,
};

use super::{Service, UnsplashError};

#[derive(Debug, Clone)]
/// Public profiles and their photos, likes, collections and statistics.
pub struct UsersService {
    service: Service,
}

impl UsersService {
    pub(crate) fn new(service: Service) -> Self {
        Self { service }
    }

    /// Public profile of `username`, optionally with a custom profile image size.
    pub async fn get(
        &self,
        username: &str,
        opt: Option<&ProfileImageOpt>,
    ) -> Result<(User, Response), UnsplashError> {
        let username = Username::new(username)?;
        let mut request = self
            .service
            .request(Method::Get, &[USERS, username.as_str()])?;
        if let Some(opt) = opt {
            request = request.with_query(encode_profile_image_query(opt));
        }
        self.service.call(request).await
    }

    /// Portfolio URL of `username`.
    pub async fn portfolio(&self, username: &str) -> Result<(Link, Response), UnsplashError> {
        let username = Username::new(username)?;
        let request = self
            .service
            .request(Method::Get, &[USERS, username.as_str(), "portfolio"])?;
        self.service.call(request).await
    }

    /// Photos uploaded by `username`.
    pub async fn photos(
        &self,
        username: &str,
        opt: &ListOpt,
    ) -> Result<(Vec<Photo>, Response), UnsplashError> {
        self.list(username, "photos", opt).await
    }

    /// Photos liked by `username`.
    pub async fn liked_photos(
        &self,
        username: &str,
        opt: &ListOpt,
    ) -> Result<(Vec<Photo>, Response), UnsplashError> {
        self.list(username, "likes", opt).await
    }

    /// Collections created by `username`.
    pub async fn collections(
        &self,
        username: &str,
        opt: &ListOpt,
    ) -> Result<(Vec<Collection>, Response), UnsplashError> {
        self.list(username, "collections", opt).await
    }

    /// Download, view and like history of `username`.
    pub async fn statistics(
        &self,
        username: &str,
        opt: &StatsOpt,
    ) -> Result<(Statistics, Response), UnsplashError> {
        let username = Username::new(username)?;
        opt.validate()?;
        let request = self
            .service
            .request(Method::Get, &[USERS, username.as_str(), "statistics"])?
            .with_query(encode_stats_query(opt));
        self.service.call(request).await
    }

    async fn list<T: serde::de::DeserializeOwned>(
        &self,
        username: &str,
        kind: &str,
        opt: &ListOpt,
    ) -> Result<(Vec<T>, Response), UnsplashError> {
        let username = Username::new(username)?;
        opt.validate()?;
        let request = self
            .service
            .request(Method::Get, &[USERS, username.as_str(), kind])?
            .with_query(encode_list_query(opt));
        self.service.call(request).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::fake::{FakeTransport, make_client};
    use crate::domain::{OrderBy, ValidationError};

    use super::*;

    #[tokio::test]
    async fn get_user_with_profile_image_size() {
        let transport = FakeTransport::new(
            200,
            r#"{ "username": "naoufal", "profile_image": { "custom": "https://images.unsplash.com/c.jpg" } }"#,
        );
        let client = make_client(&transport);

        let opt = ProfileImageOpt {
            width: Some(64),
            height: Some(64),
        };
        let (user, _) = client.users().get("naoufal", Some(&opt)).await.unwrap();
        assert_eq!(user.username.as_deref(), Some("naoufal"));
        assert!(user.profile_image.unwrap().custom.is_some());

        let request = transport.last_request().unwrap();
        assert_eq!(request.method(), Method::Get);
        assert_eq!(
            request.url().as_str(),
            "https://example.invalid/users/naoufal?w=64&h=64"
        );
    }

    #[tokio::test]
    async fn empty_username_is_rejected_without_a_request() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(&transport);

        let err = client.users().get("  ", None).await.unwrap_err();
        assert!(matches!(
            err,
            UnsplashError::InvalidArgument(ValidationError::Empty {
                field: Username::FIELD
            })
        ));
        assert!(client.users().portfolio("").await.is_err());
        assert!(
            client
                .users()
                .photos("", &ListOpt::default())
                .await
                .is_err()
        );
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn invalid_list_options_are_rejected_without_a_request() {
        let transport = FakeTransport::new(200, "[]");
        let client = make_client(&transport);

        let err = client
            .users()
            .liked_photos("naoufal", &ListOpt::page(1, 31))
            .await
            .unwrap_err();
        assert!(matches!(err, UnsplashError::InvalidArgument(_)));

        let opt = StatsOpt {
            quantity: Some(0),
            ..Default::default()
        };
        assert!(client.users().statistics("naoufal", &opt).await.is_err());
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn list_endpoints_encode_paging() {
        let transport = FakeTransport::new(200, r#"[{ "id": "a" }, { "id": "b" }]"#);
        let client = make_client(&transport);

        let opt = ListOpt {
            page: Some(2),
            per_page: Some(2),
            order_by: Some(OrderBy::Oldest),
        };
        let (photos, _) = client.users().photos("naoufal", &opt).await.unwrap();
        assert_eq!(photos.len(), 2);
        assert_eq!(
            transport.last_request().unwrap().url().as_str(),
            "https://example.invalid/users/naoufal/photos?page=2&per_page=2&order_by=oldest"
        );

        client.users().liked_photos("naoufal", &ListOpt::default()).await.unwrap();
        assert_eq!(
            transport.last_request().unwrap().url().as_str(),
            "https://example.invalid/users/naoufal/likes"
        );

        let (collections, _) = client
            .users()
            .collections("naoufal", &ListOpt::default())
            .await
            .unwrap();
        assert_eq!(collections[1].id.as_deref(), Some("b"));
        assert_eq!(
            transport.last_request().unwrap().url().as_str(),
            "https://example.invalid/users/naoufal/collections"
        );
    }

    #[tokio::test]
    async fn portfolio_and_statistics() {
        let transport = FakeTransport::new(200, r#"{ "url": "https://example.com/portfolio" }"#);
        let client = make_client(&transport);
        let (link, _) = client.users().portfolio("naoufal").await.unwrap();
        assert_eq!(link.url.as_deref(), Some("https://example.com/portfolio"));
        assert_eq!(
            transport.last_request().unwrap().url().as_str(),
            "https://example.invalid/users/naoufal/portfolio"
        );

        let transport = FakeTransport::new(200, r#"{ "username": "naoufal", "views": { "total": 9 } }"#);
        let client = make_client(&transport);
        let opt = StatsOpt {
            quantity: Some(10),
            ..Default::default()
        };
        let (stats, _) = client.users().statistics("naoufal", &opt).await.unwrap();
        assert_eq!(stats.views.unwrap().total, Some(9));
        assert_eq!(
            transport.last_request().unwrap().url().as_str(),
            "https://example.invalid/users/naoufal/statistics?quantity=10"
        );
    }

    #[tokio::test]
    async fn dot_username_sends_nothing() {
        let transport = FakeTransport::new(200, "[]");
        let client = make_client(&transport);

        let err = client
            .users()
            .photos(".", &ListOpt::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            UnsplashError::InvalidArgument(ValidationError::DotSegment {
                field: "username"
            })
        ));
        assert_eq!(transport.calls(), 0);
    }
}
