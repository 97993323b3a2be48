use actix_cors::Cors;
use actix_web::http::StatusCode;
use actix_web::middleware::Logger;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, web};
use dotenv::dotenv;
use env_logger::Env;
use log::info;

mod comment;
mod database;
mod middleware;
mod post;
mod router;
mod utils;

use comment::service::CommentService;
use middleware::not_found::not_found;
use post::post_service::PostService;
use router::index::routes;
use serde_json::json;

#[get("/")]
async fn default() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Welcome to the blog API",
        "httpStatusCode": StatusCode::OK.as_u16(),
        "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logger with environment variable support
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    // Connect and ping before the server starts accepting requests
    let mongo_client = database::db::connect_to_mongo()
        .await
        .expect("Failed to connect to MongoDB");

    let post_service = web::Data::new(PostService::new(&mongo_client));
    let comment_service = web::Data::new(CommentService::new(&mongo_client));

    info!("Starting server on http://localhost:{}", port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(post_service.clone())
            .app_data(comment_service.clone())
            .configure(routes)
            .service(default)
            .default_service(web::route().to(not_found))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await?;

    // Close the connection once the server has drained its workers
    mongo_client.shutdown().await;
    info!("Server has stopped");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::default;
    use actix_web::{App, test};
    use serde_json::json;

    #[actix_web::test]
    async fn liveness_route_responds() {
        let app = test::init_service(App::new().service(default)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["httpStatusCode"], json!(200));
    }
}
