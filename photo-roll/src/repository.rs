//! Provider repositories: thin adapters over the photo-list APIs.

use async_trait::async_trait;

use crate::api::{FeedError, MarsApi, PicsumApi};
use crate::models::{MarsPhoto, PicsumPhoto};

/// A source of Mars rover photos.
#[async_trait]
pub trait MarsPhotoRepository {
    /// Fetches the full photo list in server-response order; may be empty.
    /// Transport and server faults are passed through unchanged.
    async fn fetch_all(&self) -> Result<Vec<MarsPhoto>, FeedError>;
}

/// A source of Picsum stock photos.
#[async_trait]
pub trait PicsumPhotoRepository {
    /// Fetches the full photo list in server-response order; may be empty.
    /// Transport and server faults are passed through unchanged.
    async fn fetch_all(&self) -> Result<Vec<PicsumPhoto>, FeedError>;
}

/// Network implementation backed by the Mars rover catalog API.
pub struct NetworkMarsPhotosRepository {
    api: MarsApi,
}

impl NetworkMarsPhotosRepository {
    pub fn new(api: MarsApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl MarsPhotoRepository for NetworkMarsPhotosRepository {
    async fn fetch_all(&self) -> Result<Vec<MarsPhoto>, FeedError> {
        self.api.photos().await
    }
}

/// Network implementation backed by the Picsum listing API.
pub struct NetworkPicsumPhotosRepository {
    api: PicsumApi,
}

impl NetworkPicsumPhotosRepository {
    pub fn new(api: PicsumApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl PicsumPhotoRepository for NetworkPicsumPhotosRepository {
    async fn fetch_all(&self) -> Result<Vec<PicsumPhoto>, FeedError> {
        self.api.list().await
    }
}
