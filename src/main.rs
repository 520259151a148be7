mod api;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use services::omdb_service::OmdbConfig;
use utils::cache::MovieCache;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let omdb_base_url =
        env::var("OMDB_API_BASE_URL").unwrap_or_else(|_| "https://www.omdbapi.com/".to_string());
    let omdb_api_key = env::var("OMDB_API_KEY").expect("OMDB_API_KEY must be set");

    log::info!("🚀 Starting Movie Service...");
    log::info!("🎬 OMDb base URL: {}", omdb_base_url);

    let config_data = web::Data::new(OmdbConfig {
        base_url: omdb_base_url,
        api_key: omdb_api_key,
    });

    // Process-wide response cache, shared across all workers
    let cache_data = web::Data::new(MovieCache::new());

    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);
    log::info!("📄 OpenAPI spec at: http://{}:{}/api-docs/openapi.json", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:5173") // Frontend Web (Vite)
            .allowed_origin("http://127.0.0.1:5173")
            .allowed_methods(vec!["GET", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(config_data.clone())
            .app_data(cache_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            // Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            // Health check
            .route("/health", web::get().to(api::health::health_check))
            // Metrics
            .route("/metrics", web::get().to(api::metrics::get_metrics))
            // Movies: OMDb proxy with response caching
            .service(
                web::scope("/api/movies")
                    .route("/search", web::get().to(api::movies::search_movies))
                    .route("/{imdb_id}", web::get().to(api::movies::get_movie_details)), // DEVE FICAR POR ÚLTIMO (catch-all)
            )
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
