use crate::domain::{
    Collection, CollectionId, CollectionPhoto, CollectionUpdate, ListOpt, NewCollection, Photo,
    PhotoId,
};
use crate::transport::endpoint::COLLECTIONS;
use crate::transport::{Method, Response, encode_list_query};

use super::{Service, UnsplashError};

#[derive(Debug, Clone)]
/// Collections: listing, lookup, and management of the authenticated user's
/// own collections.
pub struct CollectionsService {
    service: Service,
}

impl CollectionsService {
    pub(crate) fn new(service: Service) -> Self {
        Self { service }
    }

    /// All collections, newest first (`GET /collections`).
    pub async fn all(&self, opt: &ListOpt) -> Result<(Vec<Collection>, Response), UnsplashError> {
        self.list(&[COLLECTIONS], opt).await
    }

    /// Collections featured by the Unsplash team.
    pub async fn featured(
        &self,
        opt: &ListOpt,
    ) -> Result<(Vec<Collection>, Response), UnsplashError> {
        self.list(&[COLLECTIONS, "featured"], opt).await
    }

    /// A single collection by id.
    pub async fn get(&self, id: &str) -> Result<(Collection, Response), UnsplashError> {
        let id = CollectionId::new(id)?;
        let request = self
            .service
            .request(Method::Get, &[COLLECTIONS, id.as_str()])?;
        self.service.call(request).await
    }

    /// Collections similar to `id`.
    pub async fn related(&self, id: &str) -> Result<(Vec<Collection>, Response), UnsplashError> {
        let id = CollectionId::new(id)?;
        let request = self
            .service
            .request(Method::Get, &[COLLECTIONS, id.as_str(), "related"])?;
        self.service.call(request).await
    }

    /// Photos in collection `id`, one page at a time.
    pub async fn photos(
        &self,
        id: &str,
        opt: &ListOpt,
    ) -> Result<(Vec<Photo>, Response), UnsplashError> {
        let id = CollectionId::new(id)?;
        self.list(&[COLLECTIONS, id.as_str(), "photos"], opt).await
    }

    /// Create a collection owned by the authenticated user.
    pub async fn create(
        &self,
        collection: &NewCollection,
    ) -> Result<(Collection, Response), UnsplashError> {
        collection.validate()?;
        let request = self
            .service
            .request(Method::Post, &[COLLECTIONS])?
            .with_json(collection)
            .map_err(UnsplashError::Encode)?;
        self.service.call(request).await
    }

    /// Change title, description or visibility. Unset fields stay as they are.
    pub async fn update(
        &self,
        id: &str,
        update: &CollectionUpdate,
    ) -> Result<(Collection, Response), UnsplashError> {
        let id = CollectionId::new(id)?;
        let request = self
            .service
            .request(Method::Put, &[COLLECTIONS, id.as_str()])?
            .with_json(update)
            .map_err(UnsplashError::Encode)?;
        self.service.call(request).await
    }

    /// Delete a collection. The API answers with an empty body, so only the
    /// [`Response`] is returned.
    pub async fn delete(&self, id: &str) -> Result<Response, UnsplashError> {
        let id = CollectionId::new(id)?;
        let request = self
            .service
            .request(Method::Delete, &[COLLECTIONS, id.as_str()])?;
        self.service.execute(request).await
    }

    /// Add `photo_id` to collection `id`.
    pub async fn add_photo(
        &self,
        id: &str,
        photo_id: &str,
    ) -> Result<(CollectionPhoto, Response), UnsplashError> {
        self.change_photo(Method::Post, id, photo_id, "add").await
    }

    /// Remove `photo_id` from collection `id`.
    pub async fn remove_photo(
        &self,
        id: &str,
        photo_id: &str,
    ) -> Result<(CollectionPhoto, Response), UnsplashError> {
        self.change_photo(Method::Delete, id, photo_id, "remove").await
    }

    async fn change_photo(
        &self,
        method: Method,
        id: &str,
        photo_id: &str,
        action: &str,
    ) -> Result<(CollectionPhoto, Response), UnsplashError> {
        let id = CollectionId::new(id)?;
        let photo_id = PhotoId::new(photo_id)?;
        let request = self
            .service
            .request(method, &[COLLECTIONS, id.as_str(), action])?
            .with_query([(PhotoId::FIELD, photo_id.as_str())]);
        self.service.call(request).await
    }

    async fn list<T: serde::de::DeserializeOwned>(
        &self,
        segments: &[&str],
        opt: &ListOpt,
    ) -> Result<(Vec<T>, Response), UnsplashError> {
        opt.validate()?;
        let request = self
            .service
            .request(Method::Get, segments)?
            .with_query(encode_list_query(opt));
        self.service.call(request).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::fake::{FakeTransport, make_client};
    use crate::domain::ValidationError;

    use super::*;

    const COLLECTION_JSON: &str = r#"
    {
      "id": 206,
      "title": "Makers: Cat and Ben",
      "total_photos": 12,
      "private": false,
      "cover_photo": { "id": "C-mxLlBGaLA" },
      "user": { "username": "cat" }
    }
    "#;

    #[tokio::test]
    async fn list_endpoints() {
        let transport = FakeTransport::new(200, format!("[{COLLECTION_JSON}]"));
        let client = make_client(&transport);

        let (all, _) = client.collections().all(&ListOpt::default()).await.unwrap();
        assert_eq!(all[0].id.as_deref(), Some("206"));
        assert_eq!(
            transport.last_request().unwrap().url().as_str(),
            "https://example.invalid/collections"
        );

        client
            .collections()
            .featured(&ListOpt::page(2, 10))
            .await
            .unwrap();
        assert_eq!(
            transport.last_request().unwrap().url().as_str(),
            "https://example.invalid/collections/featured?page=2&per_page=10"
        );

        let (related, _) = client.collections().related("206").await.unwrap();
        assert_eq!(related.len(), 1);
        assert_eq!(
            transport.last_request().unwrap().url().as_str(),
            "https://example.invalid/collections/206/related"
        );
    }

    #[tokio::test]
    async fn get_collection_decodes_nested_resources() {
        let transport = FakeTransport::new(200, COLLECTION_JSON);
        let client = make_client(&transport);

        let (collection, _) = client.collections().get("206").await.unwrap();
        assert_eq!(collection.title.as_deref(), Some("Makers: Cat and Ben"));
        assert_eq!(collection.total_photos, Some(12));
        assert_eq!(collection.private, Some(false));
        assert_eq!(
            collection.cover_photo.unwrap().id.as_deref(),
            Some("C-mxLlBGaLA")
        );
        assert_eq!(collection.user.unwrap().username.as_deref(), Some("cat"));
        assert_eq!(collection.description, None);
    }

    #[tokio::test]
    async fn collection_photos_are_paged() {
        let transport = FakeTransport::new(200, r#"[{ "id": "p1" }]"#);
        let client = make_client(&transport);

        let (photos, _) = client
            .collections()
            .photos("206", &ListOpt::page(1, 30))
            .await
            .unwrap();
        assert_eq!(photos[0].id.as_deref(), Some("p1"));
        assert_eq!(
            transport.last_request().unwrap().url().as_str(),
            "https://example.invalid/collections/206/photos?page=1&per_page=30"
        );
    }

    #[tokio::test]
    async fn create_posts_json_and_requires_title() {
        let transport = FakeTransport::new(201, COLLECTION_JSON);
        let client = make_client(&transport);

        let err = client
            .collections()
            .create(&NewCollection::new(" "))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            UnsplashError::InvalidArgument(ValidationError::Empty { field: "title" })
        ));
        assert_eq!(transport.calls(), 0);

        let new = NewCollection {
            private: Some(true),
            ..NewCollection::new("Makers")
        };
        let (collection, response) = client.collections().create(&new).await.unwrap();
        assert_eq!(response.status(), 201);
        assert_eq!(collection.id.as_deref(), Some("206"));

        let request = transport.last_request().unwrap();
        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.url().as_str(), "https://example.invalid/collections");
        let body: serde_json::Value = serde_json::from_slice(request.body().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "title": "Makers", "private": true }));
    }

    #[tokio::test]
    async fn update_puts_only_set_fields() {
        let transport = FakeTransport::new(200, COLLECTION_JSON);
        let client = make_client(&transport);

        let update = CollectionUpdate {
            description: Some("Tools".to_owned()),
            ..Default::default()
        };
        client.collections().update("206", &update).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method(), Method::Put);
        assert_eq!(request.url().as_str(), "https://example.invalid/collections/206");
        let body: serde_json::Value = serde_json::from_slice(request.body().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "description": "Tools" }));
    }

    #[tokio::test]
    async fn delete_returns_response_without_decoding() {
        let transport = FakeTransport::new(204, "");
        let client = make_client(&transport);

        let response = client.collections().delete("206").await.unwrap();
        assert_eq!(response.status(), 204);
        assert!(response.body().is_empty());
        assert_eq!(transport.last_request().unwrap().method(), Method::Delete);
    }

    #[tokio::test]
    async fn add_and_remove_photo() {
        let json = r#"{ "photo": { "id": "abc" }, "collection": { "id": "206" }, "user": { "username": "cat" } }"#;
        let transport = FakeTransport::new(201, json);
        let client = make_client(&transport);

        let (change, _) = client.collections().add_photo("206", "abc").await.unwrap();
        assert_eq!(change.collection.unwrap().id.as_deref(), Some("206"));
        let request = transport.last_request().unwrap();
        assert_eq!(request.method(), Method::Post);
        assert_eq!(
            request.url().as_str(),
            "https://example.invalid/collections/206/add?photo_id=abc"
        );

        client.collections().remove_photo("206", "abc").await.unwrap();
        let request = transport.last_request().unwrap();
        assert_eq!(request.method(), Method::Delete);
        assert_eq!(
            request.url().as_str(),
            "https://example.invalid/collections/206/remove?photo_id=abc"
        );

        assert!(client.collections().add_photo("206", "").await.is_err());
        assert_eq!(transport.calls(), 2);
    }

    #[tokio::test]
    async fn dot_segment_ids_never_reach_the_parent_endpoint() {
        let transport = FakeTransport::new(204, "");
        let client = make_client(&transport);

        let err = client.collections().delete("..").await.unwrap_err();
        assert!(matches!(
            err,
            UnsplashError::InvalidArgument(ValidationError::DotSegment {
                field: "collection_id"
            })
        ));
        assert!(client.collections().get(".").await.is_err());
        assert!(client.collections().add_photo("206", "..").await.is_err());
        assert_eq!(transport.calls(), 0);
    }
}
