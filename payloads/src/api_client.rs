use crate::{
    Category, Collection, Event, Item, Lesson, Listing, Media, Post, Resource,
    ResourceKind, SanitizedParams, Season,
};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the content backend.
#[derive(Clone)]
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn query_get(
        &self,
        path: &str,
        params: &SanitizedParams,
    ) -> ReqwestResult {
        let mut request = self.inner_client.get(self.format_url(path));
        if !params.is_empty() {
            request = request.query(params);
        }

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        self.query_get(path, &SanitizedParams::default()).await
    }

    async fn item_get(
        &self,
        kind: ResourceKind,
        id: &str,
    ) -> Result<reqwest::Response, ClientError> {
        // dot segments would be collapsed by URL normalisation even when
        // encoded, so they can never name a record
        if matches!(id, "" | "." | "..") {
            return Err(ClientError::InvalidId(id.to_string()));
        }
        Ok(self.empty_get(&kind.path(id)).await?)
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self.empty_get("health_check").await?;
        ok_empty(response).await
    }

    pub async fn list_posts(
        &self,
        params: &SanitizedParams,
    ) -> Result<Listing<Post>, ClientError> {
        let response = self.query_get(Resource::Posts.path(), params).await?;
        ok_body(response).await
    }

    pub async fn list_featured_posts(
        &self,
        params: &SanitizedParams,
    ) -> Result<Listing<Post>, ClientError> {
        let response =
            self.query_get(Resource::FeaturedPosts.path(), params).await?;
        ok_body(response).await
    }

    pub async fn list_seasons(
        &self,
        params: &SanitizedParams,
    ) -> Result<Listing<Season>, ClientError> {
        let response = self.query_get(Resource::Seasons.path(), params).await?;
        ok_body(response).await
    }

    pub async fn list_lessons(
        &self,
        params: &SanitizedParams,
    ) -> Result<Listing<Lesson>, ClientError> {
        let response = self.query_get(Resource::Lessons.path(), params).await?;
        ok_body(response).await
    }

    pub async fn list_events(
        &self,
        params: &SanitizedParams,
    ) -> Result<Listing<Event>, ClientError> {
        let response = self.query_get(Resource::Events.path(), params).await?;
        ok_body(response).await
    }

    /// Events that have not started yet, soonest first.
    pub async fn list_upcoming_events(
        &self,
        params: &SanitizedParams,
    ) -> Result<Listing<Event>, ClientError> {
        let response =
            self.query_get(Resource::UpcomingEvents.path(), params).await?;
        ok_body(response).await
    }

    pub async fn list_featured_events(
        &self,
        params: &SanitizedParams,
    ) -> Result<Listing<Event>, ClientError> {
        let response =
            self.query_get(Resource::FeaturedEvents.path(), params).await?;
        ok_body(response).await
    }

    pub async fn list_media(
        &self,
        params: &SanitizedParams,
    ) -> Result<Listing<Media>, ClientError> {
        let response = self.query_get(Resource::Media.path(), params).await?;
        ok_body(response).await
    }

    pub async fn list_categories(
        &self,
        params: &SanitizedParams,
    ) -> Result<Listing<Category>, ClientError> {
        let response = self.query_get(Resource::Categories.path(), params).await?;
        ok_body(response).await
    }

    /// Fetch any collection by resource, tagging the result with its type.
    pub async fn list(
        &self,
        resource: Resource,
        params: &SanitizedParams,
    ) -> Result<Collection, ClientError> {
        Ok(match resource {
            Resource::Posts => Collection::Posts(self.list_posts(params).await?),
            Resource::FeaturedPosts => {
                Collection::Posts(self.list_featured_posts(params).await?)
            }
            Resource::Seasons => {
                Collection::Seasons(self.list_seasons(params).await?)
            }
            Resource::Lessons => {
                Collection::Lessons(self.list_lessons(params).await?)
            }
            Resource::Events => {
                Collection::Events(self.list_events(params).await?)
            }
            Resource::UpcomingEvents => {
                Collection::Events(self.list_upcoming_events(params).await?)
            }
            Resource::FeaturedEvents => {
                Collection::Events(self.list_featured_events(params).await?)
            }
            Resource::Media => Collection::Media(self.list_media(params).await?),
            Resource::Categories => {
                Collection::Categories(self.list_categories(params).await?)
            }
        })
    }

    pub async fn get_post(&self, id: &str) -> Result<Post, ClientError> {
        let response = self.item_get(ResourceKind::Post, id).await?;
        ok_body(response).await
    }

    pub async fn get_lesson(&self, id: &str) -> Result<Lesson, ClientError> {
        let response = self.item_get(ResourceKind::Lesson, id).await?;
        ok_body(response).await
    }

    pub async fn get_event(&self, id: &str) -> Result<Event, ClientError> {
        let response = self.item_get(ResourceKind::Event, id).await?;
        ok_body(response).await
    }

    pub async fn get_season(&self, id: &str) -> Result<Season, ClientError> {
        let response = self.item_get(ResourceKind::Season, id).await?;
        ok_body(response).await
    }

    pub async fn get_media(&self, id: &str) -> Result<Media, ClientError> {
        let response = self.item_get(ResourceKind::Media, id).await?;
        ok_body(response).await
    }

    /// Fetch a single record of the given kind by id or slug.
    pub async fn get_item(
        &self,
        kind: ResourceKind,
        id: &str,
    ) -> Result<Item, ClientError> {
        Ok(match kind {
            ResourceKind::Post => Item::Post(self.get_post(id).await?),
            ResourceKind::Lesson => Item::Lesson(self.get_lesson(id).await?),
            ResourceKind::Event => Item::Event(self.get_event(id).await?),
            ResourceKind::Season => Item::Season(self.get_season(id).await?),
            ResourceKind::Media => Item::Media(self.get_media(id).await?),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    #[error("Invalid id: {0:?}")]
    InvalidId(String),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(())
}

/// Build an `APIError` from a failed response. An empty body falls back to
/// the status's reason phrase so the message is never blank.
async fn api_error(response: reqwest::Response) -> ClientError {
    let status = response.status();
    match response.text().await {
        Ok(body) if !body.trim().is_empty() => ClientError::APIError(status, body),
        Ok(_) => ClientError::APIError(
            status,
            status
                .canonical_reason()
                .map_or_else(|| status.to_string(), str::to_string),
        ),
        Err(e) => e.into(),
    }
}
