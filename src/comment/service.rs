use crate::comment::model::Comment;
use crate::utils::error::AppError;
use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Client, Collection};

pub struct CommentService {
    collection: Collection<Comment>,
}

impl CommentService {
    pub fn new(client: &Client) -> Self {
        let collection = client.database("blog_db").collection::<Comment>("comments");
        CommentService { collection }
    }

    /// Add a new comment to a post
    pub async fn add_comment(
        &self,
        post_id: ObjectId,
        author: String,
        content: String,
    ) -> Result<Comment, AppError> {
        let mut comment = Comment {
            id: None,
            post_id,
            content,
            author,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let result = self
            .collection
            .insert_one(&comment)
            .await
            .map_err(|e| AppError::InternalServerError(format!("Failed to add comment: {}", e)))?;

        comment.id = result.inserted_id.as_object_id();
        Ok(comment)
    }

    /// Get all comments for a specific post
    pub async fn get_comments_for_post(
        &self,
        post_id: &ObjectId,
    ) -> Result<Vec<Comment>, AppError> {
        let cursor = self
            .collection
            .find(doc! { "post_id": post_id })
            .await
            .map_err(|e| {
                AppError::InternalServerError(format!("Failed to fetch comments: {}", e))
            })?;

        let comments: Vec<Comment> = cursor.try_collect().await.map_err(|e| {
            AppError::InternalServerError(format!("Failed to collect comments: {}", e))
        })?;

        Ok(comments)
    }

    /// Update a comment's content (only through its own post)
    pub async fn update_comment(
        &self,
        post_id: &ObjectId,
        comment_id: &ObjectId,
        content: String,
    ) -> Result<bool, AppError> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": comment_id, "post_id": post_id },
                doc! {
                    "$set": {
                        "content": content,
                        "updated_at": Utc::now().to_rfc3339()
                    }
                },
            )
            .await
            .map_err(|e| {
                AppError::InternalServerError(format!("Failed to update comment: {}", e))
            })?;

        if result.matched_count == 0 {
            return Err(AppError::NotFoundError("Comment not found".to_string()));
        }

        Ok(result.modified_count > 0)
    }

    /// Delete a comment (only through its own post)
    pub async fn delete_comment(
        &self,
        post_id: &ObjectId,
        comment_id: &ObjectId,
    ) -> Result<bool, AppError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": comment_id, "post_id": post_id })
            .await
            .map_err(|e| {
                AppError::InternalServerError(format!("Failed to delete comment: {}", e))
            })?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFoundError("Comment not found".to_string()));
        }

        Ok(true)
    }
}
