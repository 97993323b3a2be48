use crate::post::post_model::{CreatePostRequest, Post, UpdatePostRequest};
use crate::post::post_service::PostService;
use crate::utils::error::AppError;
use crate::utils::helpers::required_field;
use actix_web::{HttpResponse, web};
use serde_json::json;

pub async fn create_post(
    post_service: web::Data<PostService>,
    body: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, AppError> {
    let title = required_field(&body.title, "title")?;
    let content = required_field(&body.content, "content")?;
    let author = required_field(&body.author, "author")?;

    let new_post = Post {
        id: None,
        title,
        content,
        author,
        tags: body.tags.clone().unwrap_or_default(),
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    };

    let inserted_post = post_service.create_post(new_post).await?;

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "Post created successfully",
        "httpStatusCode": 201,
        "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
        "post": inserted_post
    })))
}

pub async fn list_posts(post_service: web::Data<PostService>) -> Result<HttpResponse, AppError> {
    let posts = post_service.list_posts().await?;
    let count = posts.len();

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Posts fetched successfully",
        "httpStatusCode": 200,
        "count": count,
        "posts": posts
    })))
}

pub async fn get_post(
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    let post_id = post_id.into_inner();
    let post = post_service.get_post(&post_id).await?;

    match post {
        Some(p) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Post fetched successfully",
            "httpStatusCode": 200,
            "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
            "post": p
        }))),
        None => Err(AppError::NotFoundError("Post not found".into())),
    }
}

pub async fn update_post(
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
    body: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse, AppError> {
    let post_id = post_id.into_inner();
    let updated = post_service.update_post(&post_id, body.into_inner()).await?;

    if updated {
        Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Post updated successfully",
            "httpStatusCode": 200,
            "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
        })))
    } else {
        Err(AppError::NotFoundError("Post not found".into()))
    }
}

pub async fn delete_post(
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    let post_id = post_id.into_inner();
    let deleted = post_service.delete_post(&post_id).await?;

    if deleted {
        Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Post deleted successfully",
            "httpStatusCode": 200,
            "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
        })))
    } else {
        Err(AppError::NotFoundError("Post not found".into()))
    }
}
