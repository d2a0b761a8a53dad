//! Book data model.

use serde::{Deserialize, Serialize};

/// A book as served by the remote API. Immutable from our side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub sub_title: String,
    pub author: String,
    pub publisher: String,
    pub cover_img_url: String,
    pub description: String,
}
