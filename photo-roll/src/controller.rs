//! Photo selection and view-state controller.
//!
//! `PhotoRoll` owns one [`FetchStatus`] per provider plus the last
//! observed roll count, and performs every state transition: refreshing a
//! provider, applying a download-URL filter, saving and loading the
//! displayed pair through the mirror store, and advancing the roll
//! counter. Methods take `&mut self` and are awaited from a single task,
//! so a provider's `Loading` to terminal transition is never interleaved
//! with another refresh of the same provider.

use crate::models::{MarsPhoto, PicsumPhoto, UrlFilter};
use crate::repository::{MarsPhotoRepository, PicsumPhotoRepository};
use crate::status::FetchStatus;
use crate::store::{MirrorError, MirrorStore};

/// Selection controller over two photo providers and a mirror store.
pub struct PhotoRoll<M, P, S> {
    mars_repo: M,
    picsum_repo: P,
    store: S,
    mars_status: FetchStatus<MarsPhoto>,
    picsum_status: FetchStatus<PicsumPhoto>,
    roll_count: u64,
}

impl<M, P, S> PhotoRoll<M, P, S>
where
    M: MarsPhotoRepository,
    P: PicsumPhotoRepository,
    S: MirrorStore,
{
    /// Creates a controller with both providers in `Loading` and a roll
    /// count of 0.
    pub fn new(mars_repo: M, picsum_repo: P, store: S) -> Self {
        Self {
            mars_repo,
            picsum_repo,
            store,
            mars_status: FetchStatus::Loading,
            picsum_status: FetchStatus::Loading,
            roll_count: 0,
        }
    }

    /// Creates a controller and refreshes both providers once.
    pub async fn start(mars_repo: M, picsum_repo: P, store: S) -> Self {
        let mut controller = Self::new(mars_repo, picsum_repo, store);
        controller.refresh_mars().await;
        controller.refresh_picsum().await;
        controller
    }

    pub fn mars_status(&self) -> &FetchStatus<MarsPhoto> {
        &self.mars_status
    }

    pub fn picsum_status(&self) -> &FetchStatus<PicsumPhoto> {
        &self.picsum_status
    }

    /// Roll count as of the last successful increment, 0 before that.
    pub fn roll_count(&self) -> u64 {
        self.roll_count
    }

    /// Fetches the Mars photo list and picks one photo at random.
    ///
    /// The status moves to `Loading` before the request starts and ends in
    /// `Success` or `Error`; fetch faults are absorbed into `Error`.
    pub async fn refresh_mars(&mut self) {
        self.mars_status = FetchStatus::Loading;

        match self.mars_repo.fetch_all().await {
            Ok(photos) => match pick_random(photos) {
                Some((total, photo)) => {
                    log::debug!("Mars fetch returned {} photos", total);
                    self.mars_status = FetchStatus::Success {
                        message: format!("{} Mars photos retrieved", total),
                        photo,
                    };
                }
                None => {
                    log::warn!("Mars fetch returned an empty list");
                    self.mars_status = FetchStatus::Error;
                }
            },
            Err(e) => {
                log::warn!("Mars fetch failed: {}", e);
                self.mars_status = FetchStatus::Error;
            }
        }
    }

    /// Fetches the picsum photo list and picks one photo at random.
    pub async fn refresh_picsum(&mut self) {
        self.picsum_status = FetchStatus::Loading;

        match self.picsum_repo.fetch_all().await {
            Ok(photos) => match pick_random(photos) {
                Some((total, photo)) => {
                    log::debug!("Picsum fetch returned {} photos", total);
                    self.picsum_status = FetchStatus::Success {
                        message: format!("{} picsum photos retrieved", total),
                        photo,
                    };
                }
                None => {
                    log::warn!("Picsum fetch returned an empty list");
                    self.picsum_status = FetchStatus::Error;
                }
            },
            Err(e) => {
                log::warn!("Picsum fetch failed: {}", e);
                self.picsum_status = FetchStatus::Error;
            }
        }
    }

    /// Appends the blur fragment to the current picsum download URL.
    pub fn apply_blur(&mut self) {
        self.apply_picsum_filter(UrlFilter::Blur);
    }

    /// Appends the grayscale fragment to the current picsum download URL.
    pub fn apply_grayscale(&mut self) {
        self.apply_picsum_filter(UrlFilter::Grayscale);
    }

    /// Filters only transform a displayed photo; `Loading` and `Error`
    /// are left as they are. Fragments stack, nothing deduplicates them.
    fn apply_picsum_filter(&mut self, filter: UrlFilter) {
        if let FetchStatus::Success { photo, .. } = &mut self.picsum_status {
            *photo = photo.with_filter(filter);
        }
    }

    /// Mirrors the displayed pair to the store.
    ///
    /// A no-op returning `Ok(())` unless both providers hold a photo;
    /// store faults surface as errors.
    pub async fn save(&self) -> Result<(), MirrorError> {
        let (mars, picsum) = match (&self.mars_status, &self.picsum_status) {
            (
                FetchStatus::Success { photo: mars, .. },
                FetchStatus::Success { photo: picsum, .. },
            ) => (mars, picsum),
            _ => {
                log::warn!("Skipping save: both providers need a photo");
                return Ok(());
            }
        };

        self.store.save_latest(mars, picsum).await
    }

    /// Replaces each displayed photo with the stored one, keeping the
    /// fetch message. A provider not currently showing a photo keeps its
    /// state; loading never re-enters `Loading`.
    pub async fn load(&mut self) -> Result<(), MirrorError> {
        let (mars, picsum) = self.store.read_latest().await?;

        if let Some(photo) = mars {
            if let FetchStatus::Success { photo: current, .. } = &mut self.mars_status {
                *current = photo;
            }
        }

        if let Some(photo) = picsum {
            if let FetchStatus::Success { photo: current, .. } = &mut self.picsum_status {
                *current = photo;
            }
        }

        Ok(())
    }

    /// Advances the remote roll counter and records the returned value.
    /// On failure the observable count keeps its previous value.
    pub async fn increment_roll(&mut self) -> Result<u64, MirrorError> {
        let count = self.store.increment_roll_count().await?;
        self.roll_count = count;
        Ok(count)
    }

    /// The "roll" action: refresh both providers, then advance the
    /// counter. Returns the new count.
    pub async fn roll(&mut self) -> Result<u64, MirrorError> {
        self.refresh_mars().await;
        self.refresh_picsum().await;
        self.increment_roll().await
    }
}

/// Draws one element uniformly at random, reporting the list size.
fn pick_random<T>(mut photos: Vec<T>) -> Option<(usize, T)> {
    use rand::Rng;

    if photos.is_empty() {
        return None;
    }

    let total = photos.len();
    let index = rand::rng().random_range(0..total);
    Some((total, photos.swap_remove(index)))
}
