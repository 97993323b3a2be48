use super::controller::{create_comment, delete_comment, list_comments, update_comment};
use actix_web::web;

pub fn comment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/posts/{post_id}/comments")
            .route("", web::post().to(create_comment))
            .route("", web::get().to(list_comments))
            .route("/{comment_id}", web::put().to(update_comment))
            .route("/{comment_id}", web::delete().to(delete_comment)),
    );
}
