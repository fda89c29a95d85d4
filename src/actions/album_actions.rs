use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use thiserror::Error;

use crate::endpoints::{album_endpoint, albums_endpoint};
use crate::models::album::{Album, NewAlbum};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Album not found.")]
    NotFound,
    #[error("Unexpected status: {0}")]
    Status(StatusCode),
    #[error("Request error: {0}")]
    RequestError(reqwest::Error),
    #[error("Cannot build an endpoint from {0}")]
    InvalidEndpoint(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::RequestError(err)
    }
}

/// Result of one API call as seen by a flow: the value, a missing album, or
/// any other failure.
#[derive(Debug)]
pub enum FetchOutcome<T> {
    Success(T),
    NotFound,
    Failure(ApiError),
}

impl<T> From<Result<T, ApiError>> for FetchOutcome<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => FetchOutcome::Success(value),
            Err(ApiError::NotFound) => FetchOutcome::NotFound,
            Err(err) => FetchOutcome::Failure(err),
        }
    }
}

/// The three endpoints of the album API.
#[async_trait]
pub trait AlbumApi: Send + Sync {
    async fn list_albums(&self) -> Result<Vec<Album>, ApiError>;

    /// Fails with [`ApiError::NotFound`] on a 404.
    async fn get_album(&self, id: &str) -> Result<Album, ApiError>;

    /// Any JSON body on a 2xx counts as created; it is handed back as is.
    async fn create_album(&self, album: &NewAlbum) -> Result<Value, ApiError>;
}

#[async_trait]
impl<T: AlbumApi + ?Sized> AlbumApi for Arc<T> {
    async fn list_albums(&self) -> Result<Vec<Album>, ApiError> {
        (**self).list_albums().await
    }

    async fn get_album(&self, id: &str) -> Result<Album, ApiError> {
        (**self).get_album(id).await
    }

    async fn create_album(&self, album: &NewAlbum) -> Result<Value, ApiError> {
        (**self).create_album(album).await
    }
}

#[derive(Debug, Clone)]
pub struct HttpAlbumApi {
    client: Client,
    base: Url,
}

impl HttpAlbumApi {
    pub fn new(base: Url) -> Self {
        HttpAlbumApi {
            client: Client::new(),
            base,
        }
    }
}

#[async_trait]
impl AlbumApi for HttpAlbumApi {
    async fn list_albums(&self) -> Result<Vec<Album>, ApiError> {
        let url = albums_endpoint(&self.base)?;
        tracing::debug!(url = %url, "Listing albums");
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        let albums = resp.json::<Vec<Album>>().await?;
        Ok(albums)
    }

    async fn get_album(&self, id: &str) -> Result<Album, ApiError> {
        let url = album_endpoint(&self.base, id)?;
        tracing::debug!(url = %url, "Fetching album");
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        let album = resp.json::<Album>().await?;
        Ok(album)
    }

    async fn create_album(&self, album: &NewAlbum) -> Result<Value, ApiError> {
        let url = albums_endpoint(&self.base)?;
        tracing::debug!(url = %url, title = %album.title, "Creating album");
        let resp = self.client.post(url).json(album).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        let created = resp.json::<Value>().await?;
        Ok(created)
    }
}
