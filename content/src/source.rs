use payloads::{
    APIClient, ClientError, Collection, Item, Resource, ResourceKind,
    SanitizedParams,
};
use std::fmt::Display;
use std::future::Future;
use std::rc::Rc;

/// The backend a [`Fetcher`](crate::Fetcher) loads from.
///
/// Failures only need to render as a message; the fetcher stores that
/// message in its error slot.
pub trait ContentSource {
    type Error: Display;

    fn list(
        &self,
        resource: Resource,
        params: &SanitizedParams,
    ) -> impl Future<Output = Result<Collection, Self::Error>>;

    fn get(
        &self,
        kind: ResourceKind,
        id: &str,
    ) -> impl Future<Output = Result<Item, Self::Error>>;
}

impl ContentSource for APIClient {
    type Error = ClientError;

    async fn list(
        &self,
        resource: Resource,
        params: &SanitizedParams,
    ) -> Result<Collection, ClientError> {
        APIClient::list(self, resource, params).await
    }

    async fn get(
        &self,
        kind: ResourceKind,
        id: &str,
    ) -> Result<Item, ClientError> {
        self.get_item(kind, id).await
    }
}

impl<S: ContentSource> ContentSource for Rc<S> {
    type Error = S::Error;

    async fn list(
        &self,
        resource: Resource,
        params: &SanitizedParams,
    ) -> Result<Collection, S::Error> {
        S::list(self, resource, params).await
    }

    async fn get(&self, kind: ResourceKind, id: &str) -> Result<Item, S::Error> {
        S::get(self, kind, id).await
    }
}
