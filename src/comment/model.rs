use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Comment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub post_id: ObjectId,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// The stored post_id always comes from the route path; a post_id in the
// request body is ignored.
#[derive(Deserialize)]
pub struct CreateCommentRequest {
    pub content: Option<String>,
    pub author: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateCommentRequest {
    pub content: Option<String>,
}
