use super::post_controller::{create_post, delete_post, get_post, list_posts, update_post};
use actix_web::web;

pub fn post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/posts")
            .route("", web::post().to(create_post))
            .route("", web::get().to(list_posts))
            .route("/{id}", web::get().to(get_post))
            .route("/{id}", web::put().to(update_post))
            .route("/{id}", web::delete().to(delete_post)),
    );
}
