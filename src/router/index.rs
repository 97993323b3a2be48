use crate::comment::index::comment_routes;
use crate::post::post_index::post_routes;
use actix_web::web;

// Comment routes register first: their scope shares the /api/posts prefix
// and the longer pattern must win the dispatch.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(comment_routes);
    cfg.configure(post_routes);
}
