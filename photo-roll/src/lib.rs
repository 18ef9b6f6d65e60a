//! # Photo Roll
//!
//! Random photo selection from public photo APIs with tri-state fetch
//! status and remote mirroring.
//!
//! This crate fetches photo catalogs from two providers (a Mars rover
//! photo catalog and the Picsum stock photo service), picks one photo per
//! provider at random, and tracks each pick as a loading/success/error
//! view state. The displayed pair and a "roll count" counter can be
//! mirrored to a remote JSON document store with last-writer-wins
//! semantics.
//!
//! ## Platform Separation
//!
//! This crate holds the portable core. Presentation (rendering, input,
//! navigation) and device integration (camera capture, permissions) stay
//! in the application crate.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use photo_roll::{
//!     HttpMirrorStore, MarsApi, NetworkMarsPhotosRepository,
//!     NetworkPicsumPhotosRepository, PhotoRoll, PicsumApi,
//! };
//!
//! let mars = NetworkMarsPhotosRepository::new(MarsApi::new(mars_url)?);
//! let picsum = NetworkPicsumPhotosRepository::new(PicsumApi::new(picsum_url)?);
//! let store = HttpMirrorStore::new(store_url)?;
//!
//! let mut controller = PhotoRoll::start(mars, picsum, store).await;
//! let count = controller.roll().await?;
//! ```

pub mod api;
pub mod controller;
pub mod models;
pub mod repository;
pub mod status;
pub mod store;

pub use api::{FeedError, MarsApi, PicsumApi};
pub use controller::PhotoRoll;
pub use models::{MarsPhoto, PicsumPhoto, UrlFilter};
pub use repository::{
    MarsPhotoRepository, NetworkMarsPhotosRepository, NetworkPicsumPhotosRepository,
    PicsumPhotoRepository,
};
pub use status::FetchStatus;
pub use store::{HttpMirrorStore, MirrorError, MirrorStore};
