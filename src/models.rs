use serde::{Serialize, Deserialize};

/// One product extracted from a search-result page.
///
/// `link` is the identity key: absolute, non-empty, and unique within the
/// final result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub link: String,
    pub rating: f64,
    pub review_count: u64,
    /// Display string, e.g. "£10.5". Formatted at extraction time.
    pub price: String,
    pub image_url: String,
}
