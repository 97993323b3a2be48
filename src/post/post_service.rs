use crate::post::post_model::{Post, UpdatePostRequest};
use crate::utils::error::AppError;
use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::{
    Client, Collection,
    bson::{doc, oid::ObjectId},
};

pub struct PostService {
    collection: Collection<Post>,
}

impl PostService {
    pub fn new(client: &Client) -> Self {
        let collection = client.database("blog_db").collection::<Post>("posts");
        PostService { collection }
    }

    pub async fn create_post(&self, mut post: Post) -> Result<Post, AppError> {
        let result = self
            .collection
            .insert_one(&post)
            .await
            .map_err(|e| AppError::InternalServerError(format!("Failed to create post: {}", e)))?;

        post.id = result.inserted_id.as_object_id();
        Ok(post)
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, AppError> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| AppError::InternalServerError(format!("Failed to fetch posts: {}", e)))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::InternalServerError(format!("Failed to collect posts: {}", e)))
    }

    pub async fn get_post(&self, id: &str) -> Result<Option<Post>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::BadRequestError("Invalid post ID".into()))?;

        self.find_by_id(&object_id).await
    }

    pub async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Post>, AppError> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::InternalServerError(format!("Failed to fetch post: {}", e)))
    }

    pub async fn update_post(&self, id: &str, update: UpdatePostRequest) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::BadRequestError("Invalid post ID".into()))?;

        let mut update_doc = doc! {
            "$set": {
                "updated_at": Utc::now().to_rfc3339()
            }
        };

        let fields = update_doc.get_document_mut("$set").unwrap();
        if let Some(t) = update.title {
            fields.insert("title", t);
        }
        if let Some(c) = update.content {
            fields.insert("content", c);
        }
        if let Some(a) = update.author {
            fields.insert("author", a);
        }
        if let Some(tags) = update.tags {
            fields.insert("tags", tags);
        }

        let result = self
            .collection
            .update_one(doc! { "_id": object_id }, update_doc)
            .await
            .map_err(|e| AppError::InternalServerError(format!("Failed to update post: {}", e)))?;

        Ok(result.matched_count > 0)
    }

    pub async fn delete_post(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::BadRequestError("Invalid post ID".into()))?;

        let result = self
            .collection
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::InternalServerError(format!("Failed to delete post: {}", e)))?;

        Ok(result.deleted_count > 0)
    }
}
