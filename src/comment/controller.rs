use crate::comment::model::{CreateCommentRequest, UpdateCommentRequest};
use crate::comment::service::CommentService;
use crate::post::post_service::PostService;
use crate::utils::error::AppError;
use crate::utils::helpers::required_field;
use actix_web::{HttpResponse, web};
use mongodb::bson::oid::ObjectId;
use serde_json::json;

/// Create a new comment on a post
/// POST /api/posts/{post_id}/comments
pub async fn create_comment(
    path: web::Path<String>,
    post_service: web::Data<PostService>,
    comment_service: web::Data<CommentService>,
    body: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse, AppError> {
    let post_id = ObjectId::parse_str(path.into_inner())
        .map_err(|_| AppError::BadRequestError("Invalid post ID".to_string()))?;

    let content = required_field(&body.content, "content")?;
    let author = required_field(&body.author, "author")?;

    post_service
        .find_by_id(&post_id)
        .await?
        .ok_or_else(|| AppError::NotFoundError("Post not found".to_string()))?;

    let comment = comment_service.add_comment(post_id, author, content).await?;

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "Comment created successfully",
        "httpStatusCode": 201,
        "comment": comment
    })))
}

/// Get all comments for a post
/// GET /api/posts/{post_id}/comments
pub async fn list_comments(
    path: web::Path<String>,
    post_service: web::Data<PostService>,
    comment_service: web::Data<CommentService>,
) -> Result<HttpResponse, AppError> {
    let post_id = ObjectId::parse_str(path.into_inner())
        .map_err(|_| AppError::BadRequestError("Invalid post ID".to_string()))?;

    post_service
        .find_by_id(&post_id)
        .await?
        .ok_or_else(|| AppError::NotFoundError("Post not found".to_string()))?;

    let comments = comment_service.get_comments_for_post(&post_id).await?;
    let count = comments.len();

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Comments retrieved successfully",
        "httpStatusCode": 200,
        "count": count,
        "comments": comments
    })))
}

/// Update a comment
/// PUT /api/posts/{post_id}/comments/{comment_id}
pub async fn update_comment(
    path: web::Path<(String, String)>,
    comment_service: web::Data<CommentService>,
    body: web::Json<UpdateCommentRequest>,
) -> Result<HttpResponse, AppError> {
    let (post_id, comment_id) = path.into_inner();

    let post_id = ObjectId::parse_str(&post_id)
        .map_err(|_| AppError::BadRequestError("Invalid post ID".to_string()))?;
    let comment_id = ObjectId::parse_str(&comment_id)
        .map_err(|_| AppError::BadRequestError("Invalid comment ID".to_string()))?;

    let content = required_field(&body.content, "content")?;

    comment_service
        .update_comment(&post_id, &comment_id, content)
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Comment updated successfully",
        "httpStatusCode": 200
    })))
}

/// Delete a comment
/// DELETE /api/posts/{post_id}/comments/{comment_id}
pub async fn delete_comment(
    path: web::Path<(String, String)>,
    comment_service: web::Data<CommentService>,
) -> Result<HttpResponse, AppError> {
    let (post_id, comment_id) = path.into_inner();

    let post_id = ObjectId::parse_str(&post_id)
        .map_err(|_| AppError::BadRequestError("Invalid post ID".to_string()))?;
    let comment_id = ObjectId::parse_str(&comment_id)
        .map_err(|_| AppError::BadRequestError("Invalid comment ID".to_string()))?;

    comment_service
        .delete_comment(&post_id, &comment_id)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use crate::comment::index::comment_routes;
    use crate::comment::service::CommentService;
    use crate::post::post_service::PostService;
    use actix_web::{App, test, web};
    use mongodb::Client;
    use mongodb::bson::oid::ObjectId;
    use serde_json::json;

    async fn lazy_client() -> Client {
        Client::with_uri_str("mongodb://127.0.0.1:27017")
            .await
            .unwrap()
    }

    #[actix_web::test]
    async fn create_comment_malformed_post_id_returns_400() {
        let client = lazy_client().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(PostService::new(&client)))
                .app_data(web::Data::new(CommentService::new(&client)))
                .configure(comment_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/posts/garbage/comments")
            .set_json(json!({ "content": "Nice read", "author": "Bob" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["message"].as_str().unwrap().contains("Invalid post ID"));
    }

    #[actix_web::test]
    async fn create_comment_missing_content_returns_400() {
        let client = lazy_client().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(PostService::new(&client)))
                .app_data(web::Data::new(CommentService::new(&client)))
                .configure(comment_routes),
        )
        .await;

        let uri = format!("/api/posts/{}/comments", ObjectId::new().to_hex());
        let req = test::TestRequest::post()
            .uri(&uri)
            .set_json(json!({ "author": "Bob" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["message"].as_str().unwrap().contains("content"));
    }

    #[actix_web::test]
    async fn update_comment_malformed_comment_id_returns_400() {
        let client = lazy_client().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(PostService::new(&client)))
                .app_data(web::Data::new(CommentService::new(&client)))
                .configure(comment_routes),
        )
        .await;

        let uri = format!("/api/posts/{}/comments/garbage", ObjectId::new().to_hex());
        let req = test::TestRequest::put()
            .uri(&uri)
            .set_json(json!({ "content": "Edited" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .contains("Invalid comment ID")
        );
    }

    #[actix_web::test]
    async fn delete_comment_malformed_comment_id_returns_400() {
        let client = lazy_client().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(PostService::new(&client)))
                .app_data(web::Data::new(CommentService::new(&client)))
                .configure(comment_routes),
        )
        .await;

        let uri = format!("/api/posts/{}/comments/garbage", ObjectId::new().to_hex());
        let req = test::TestRequest::delete().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }
}
