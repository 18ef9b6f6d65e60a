/// Fetch outcome for one photo provider.
///
/// Exactly one value is held per provider at any time, independent of the
/// other provider. A fetch cycle starts in `Loading` and ends in either
/// `Success` or `Error`; a later refresh resets to `Loading` before its
/// network call begins.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus<T> {
    Loading,
    Error,
    Success { message: String, photo: T },
}

impl<T> FetchStatus<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FetchStatus::Error)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchStatus::Success { .. })
    }

    /// The photo carried by a `Success` state.
    pub fn photo(&self) -> Option<&T> {
        match self {
            FetchStatus::Success { photo, .. } => Some(photo),
            _ => None,
        }
    }

    /// The human-readable message carried by a `Success` state.
    pub fn message(&self) -> Option<&str> {
        match self {
            FetchStatus::Success { message, .. } => Some(message),
            _ => None,
        }
    }
}
