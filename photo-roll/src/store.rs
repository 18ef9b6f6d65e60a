//! Remote mirror store for the latest photo pair and the roll counter.
//!
//! The store is a plain JSON document store reached over HTTP. It holds
//! three fixed documents inside a single collection:
//!
//! ```text
//! saved_images/
//! ├── latest_pictures   {"mars": <json string>, "picsum": <json string>}
//! ├── roll_count        {"count": <integer>}
//! └── camera_photo      {"camera_pic": <uri string>}
//! ```
//!
//! Documents are addressed as `{base}/{collection}/{document}`. `GET`
//! returns the document body, or 404 when it does not exist; `PUT`
//! replaces the whole document under its fixed id (an upsert, last writer
//! wins). No other part of the HTTP surface is used, and there is no
//! locking: concurrent writers race and the last write wins.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::models::{MarsPhoto, PicsumPhoto};

/// Collection holding every mirror document
pub const COLLECTION: &str = "saved_images";

/// Document id for the latest photo pair
pub const LATEST_PICTURES_DOC: &str = "latest_pictures";

/// Document id for the roll counter
pub const ROLL_COUNT_DOC: &str = "roll_count";

/// Document id for the captured camera photo URI
pub const CAMERA_PICTURE_DOC: &str = "camera_photo";

const USER_AGENT: &str = "photo-roll/0.1.0";

/// Build the URL of a document within the store
pub fn document_url(base_url: &str, document: &str) -> String {
    format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        COLLECTION,
        document
    )
}

/// Error type for mirror store operations
#[derive(Debug)]
pub enum MirrorError {
    /// Transport fault: connect failure, timeout, broken stream
    Network(String),
    /// The store answered with a non-success status
    Server(String),
    /// A document body or field could not be encoded or decoded
    Json(String),
}

impl std::fmt::Display for MirrorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MirrorError::Network(msg) => write!(f, "Network error: {}", msg),
            MirrorError::Server(msg) => write!(f, "Server error: {}", msg),
            MirrorError::Json(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for MirrorError {}

/// Wire form of the latest photo pair document.
///
/// Each field holds a JSON-encoded photo record keyed by provider name;
/// either may be absent in documents written by older clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LatestPicturesDoc {
    #[serde(skip_serializing_if = "Option::is_none")]
    mars: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    picsum: Option<String>,
}

/// Wire form of the roll counter document.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RollCountDoc {
    count: u64,
}

/// Wire form of the captured camera photo document.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CameraPictureDoc {
    camera_pic: String,
}

/// Counter value to write given the currently stored one.
///
/// An absent counter initializes to 1; an existing one advances by 1.
pub(crate) fn next_roll_count(current: Option<u64>) -> u64 {
    match current {
        Some(count) => count + 1,
        None => 1,
    }
}

/// Remote mirror of the latest displayed photo pair and the roll counter.
///
/// Every operation resolves exactly once, with either its value or a
/// [`MirrorError`]; failures are never reported out of band.
#[async_trait]
pub trait MirrorStore {
    /// Replaces the stored photo pair wholesale (last writer wins).
    async fn save_latest(
        &self,
        mars: &MarsPhoto,
        picsum: &PicsumPhoto,
    ) -> Result<(), MirrorError>;

    /// Reads the most recently saved pair. A field never saved comes back
    /// as `None`, as does the whole pair when nothing was saved yet.
    async fn read_latest(&self) -> Result<(Option<MarsPhoto>, Option<PicsumPhoto>), MirrorError>;

    /// Advances the stored roll counter by one and returns the new value,
    /// initializing the counter to 1 when it does not exist yet.
    ///
    /// The returned value always reflects the write performed by this
    /// call. Without a server-side increment primitive the
    /// read-modify-write can still race a concurrent caller; the result
    /// is best effort, not linearizable.
    async fn increment_roll_count(&self) -> Result<u64, MirrorError>;

    /// Stores the URI of the most recent captured camera photo.
    async fn save_camera_pic(&self, uri: &str) -> Result<(), MirrorError>;
}

/// HTTP implementation of [`MirrorStore`].
///
/// Cloning is cheap and clones share the underlying connection pool.
#[derive(Clone)]
pub struct HttpMirrorStore {
    base_url: String,
    client: reqwest::Client,
}

impl HttpMirrorStore {
    /// Create a store client against the given base URL (no trailing path).
    pub fn new(base_url: String) -> Result<Self, MirrorError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| MirrorError::Network(format!("Client build failed: {}", e)))?;

        Ok(Self { base_url, client })
    }

    /// Replace a document wholesale
    async fn put_document<T: Serialize + Sync>(
        &self,
        document: &str,
        body: &T,
    ) -> Result<(), MirrorError> {
        let url = document_url(&self.base_url, document);
        let response = self
            .client
            .put(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| MirrorError::Network(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(MirrorError::Server(format!(
                "Server returned status: {}",
                response.status()
            )));
        }

        log::debug!("Stored document {}", url);
        Ok(())
    }

    /// Read a document; `Ok(None)` when the store answers 404
    async fn get_document<T: serde::de::DeserializeOwned>(
        &self,
        document: &str,
    ) -> Result<Option<T>, MirrorError> {
        let url = document_url(&self.base_url, document);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| MirrorError::Network(format!("Request failed: {}", e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(MirrorError::Server(format!(
                "Server returned status: {}",
                response.status()
            )));
        }

        let value = response
            .json::<T>()
            .await
            .map_err(|e| MirrorError::Json(format!("Failed to parse document: {}", e)))?;

        Ok(Some(value))
    }
}

#[async_trait]
impl MirrorStore for HttpMirrorStore {
    async fn save_latest(
        &self,
        mars: &MarsPhoto,
        picsum: &PicsumPhoto,
    ) -> Result<(), MirrorError> {
        let doc = LatestPicturesDoc {
            mars: Some(
                serde_json::to_string(mars)
                    .map_err(|e| MirrorError::Json(format!("Failed to encode mars photo: {}", e)))?,
            ),
            picsum: Some(serde_json::to_string(picsum).map_err(|e| {
                MirrorError::Json(format!("Failed to encode picsum photo: {}", e))
            })?),
        };

        self.put_document(LATEST_PICTURES_DOC, &doc).await?;
        log::info!("Saved latest photo pair");
        Ok(())
    }

    async fn read_latest(&self) -> Result<(Option<MarsPhoto>, Option<PicsumPhoto>), MirrorError> {
        let doc = match self
            .get_document::<LatestPicturesDoc>(LATEST_PICTURES_DOC)
            .await?
        {
            Some(doc) => doc,
            None => return Ok((None, None)),
        };

        let mars = match doc.mars {
            Some(raw) => Some(serde_json::from_str::<MarsPhoto>(&raw).map_err(|e| {
                MirrorError::Json(format!("Stored mars photo is invalid: {}", e))
            })?),
            None => None,
        };

        let picsum = match doc.picsum {
            Some(raw) => Some(serde_json::from_str::<PicsumPhoto>(&raw).map_err(|e| {
                MirrorError::Json(format!("Stored picsum photo is invalid: {}", e))
            })?),
            None => None,
        };

        Ok((mars, picsum))
    }

    async fn increment_roll_count(&self) -> Result<u64, MirrorError> {
        let current = self
            .get_document::<RollCountDoc>(ROLL_COUNT_DOC)
            .await?
            .map(|doc| doc.count);

        let next = next_roll_count(current);
        self.put_document(ROLL_COUNT_DOC, &RollCountDoc { count: next })
            .await?;

        log::debug!("Roll count incremented to {}", next);
        Ok(next)
    }

    async fn save_camera_pic(&self, uri: &str) -> Result<(), MirrorError> {
        let doc = CameraPictureDoc {
            camera_pic: uri.to_string(),
        };

        self.put_document(CAMERA_PICTURE_DOC, &doc).await?;
        log::info!("Saved camera photo URI");
        Ok(())
    }
}
