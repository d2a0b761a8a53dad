//! Review data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A review as served by the remote API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub book_id: i64,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// Body of a create-review request.
///
/// Identifiers stay strings here: they come straight from form fields and
/// the API echoes them back typed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewBody {
    pub book_id: String,
    pub content: String,
    pub author: String,
}
