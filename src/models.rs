//! Data Models
//!
//! Raw cataas records and the normalized card type.

use serde::{Deserialize, Serialize};

/// One record as returned by the cataas list endpoint.
///
/// The API does not guarantee field presence: the identifier may arrive as
/// `_id` or `id`, and `tags` may be missing or null. Nothing outside the
/// fetch boundary sees this shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawCat {
    #[serde(rename = "_id")]
    pub mongo_id: Option<String>,
    pub id: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// A swipeable cat card. Immutable after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cat {
    pub id: String,
    pub tags: Vec<String>,
    pub image_url: String,
}
