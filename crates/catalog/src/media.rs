//! Media URL sets carried by catalog entries.

use serde::{Deserialize, Serialize};

/// Pre-resized URLs for one product image.
///
/// The asset pipeline produces every size up front; catalog entries carry the
/// full set so storefront clients never hit the media service at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaUrlSet {
    pub thumbnail: String,
    pub small: String,
    pub medium: String,
    pub large: String,
    pub original: String,
}
