use serde::{Deserialize, Serialize};

/// A photo record from the Mars rover catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarsPhoto {
    pub id: String,
    pub img_src: String,
}

/// A photo record from the Picsum stock-photo listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PicsumPhoto {
    pub id: String,
    pub author: String,
    pub width: u32,
    pub height: u32,
    pub url: String,
    pub download_url: String,
}

impl PicsumPhoto {
    /// Returns a copy whose download URL carries the filter's query fragment.
    ///
    /// Fragments accumulate: applying a filter to an already filtered URL
    /// appends another fragment, it does not replace the previous one.
    pub fn with_filter(&self, filter: UrlFilter) -> PicsumPhoto {
        let mut photo = self.clone();
        photo.download_url = format!("{}{}", photo.download_url, filter.query_fragment());
        photo
    }
}

/// Cosmetic transforms the Picsum image server applies via the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlFilter {
    Blur,
    Grayscale,
}

impl UrlFilter {
    /// The fragment appended verbatim to a download URL.
    pub fn query_fragment(&self) -> &'static str {
        match self {
            UrlFilter::Blur => "?blur",
            UrlFilter::Grayscale => "?grayscale",
        }
    }
}
