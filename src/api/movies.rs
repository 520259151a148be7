use actix_web::{web, HttpResponse};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

use crate::api::metrics;
use crate::services::movie_service;
use crate::services::omdb_service::OmdbConfig;
use crate::utils::cache::MovieCache;
use crate::utils::error::{ErrorResponse, MovieError};

lazy_static! {
    static ref IMDB_ID_PATTERN: Regex = Regex::new(r"^tt\d+$").unwrap();
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Title to search for (must not be blank)
    pub title: String,
    /// Result page, defaults to 1
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

/// GET /api/movies/search?title=batman&page=1
/// Proxies an OMDb title search; repeats are served from the in-memory cache
#[utoipa::path(
    get,
    path = "/api/movies/search",
    tag = "Movies",
    params(SearchQuery),
    responses(
        (status = 200, description = "Raw OMDb search payload, passed through unchanged"),
        (status = 400, description = "Blank search title", body = ErrorResponse),
        (status = 502, description = "OMDb rejected the search or returned no results", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
pub async fn search_movies(
    query: web::Query<SearchQuery>,
    config: web::Data<OmdbConfig>,
    cache: web::Data<MovieCache>,
) -> HttpResponse {
    metrics::increment_request_count();
    log::info!(
        "🔍 GET /api/movies/search?title={}&page={}",
        query.title,
        query.page
    );

    // Validation happens here, before the cache or OMDb are touched
    if query.title.trim().is_empty() {
        metrics::increment_error_count();
        return MovieError::InvalidRequest("Search title must not be empty".to_string())
            .to_response();
    }

    match movie_service::search_movies(&config, &cache, &query.title, query.page).await {
        Ok(payload) => HttpResponse::Ok()
            .content_type("application/json")
            .body(payload),
        Err(e) => {
            log::error!("❌ Movie search failed for '{}': {}", query.title, e);
            metrics::increment_error_count();
            e.to_response()
        }
    }
}

/// GET /api/movies/{imdb_id}
/// Proxies an OMDb details lookup by IMDb ID
#[utoipa::path(
    get,
    path = "/api/movies/{imdb_id}",
    tag = "Movies",
    params(
        ("imdb_id" = String, Path, description = "IMDb ID, format ttNNNNNNN")
    ),
    responses(
        (status = 200, description = "Raw OMDb details payload, passed through unchanged"),
        (status = 400, description = "Malformed IMDb ID", body = ErrorResponse),
        (status = 502, description = "OMDb rejected the lookup or the movie was not found", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
pub async fn get_movie_details(
    path: web::Path<String>,
    config: web::Data<OmdbConfig>,
    cache: web::Data<MovieCache>,
) -> HttpResponse {
    let imdb_id = path.into_inner();

    metrics::increment_request_count();
    log::info!("🎬 GET /api/movies/{}", imdb_id);

    if !IMDB_ID_PATTERN.is_match(&imdb_id) {
        metrics::increment_error_count();
        return MovieError::InvalidRequest("Invalid IMDb ID format".to_string()).to_response();
    }

    match movie_service::get_movie_details(&config, &cache, &imdb_id).await {
        Ok(payload) => HttpResponse::Ok()
            .content_type("application/json")
            .body(payload),
        Err(e) => {
            log::error!("❌ Movie details failed for {}: {}", imdb_id, e);
            metrics::increment_error_count();
            e.to_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SEARCH_BODY: &str =
        r#"{"Search":[{"Title":"Batman Begins","imdbID":"tt0372784"}],"Response":"True"}"#;
    const DETAILS_BODY: &str =
        r#"{"Title":"Batman Begins","imdbID":"tt0372784","Response":"True"}"#;
    const NOT_FOUND_BODY: &str = r#"{"Response":"False","Error":"Movie not found!"}"#;

    // port 9 is never served; a 400 here proves validation short-circuits
    // before any upstream call is attempted
    fn unreachable_config() -> web::Data<OmdbConfig> {
        web::Data::new(OmdbConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            api_key: "test-key".to_string(),
        })
    }

    #[actix_web::test]
    async fn blank_title_is_rejected_before_any_upstream_call() {
        let app = test::init_service(
            App::new()
                .app_data(unreachable_config())
                .app_data(web::Data::new(MovieCache::new()))
                .route("/api/movies/search", web::get().to(search_movies)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/movies/search?title=%20%20&page=1")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Search title must not be empty");
        assert!(body["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn malformed_imdb_id_is_rejected_before_any_upstream_call() {
        let app = test::init_service(
            App::new()
                .app_data(unreachable_config())
                .app_data(web::Data::new(MovieCache::new()))
                .route("/api/movies/{imdb_id}", web::get().to(get_movie_details)),
        )
        .await;

        for bad_id in ["abc123", "tt", "0372784", "tt0372784x"] {
            let req = test::TestRequest::get()
                .uri(&format!("/api/movies/{}", bad_id))
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "id: {}", bad_id);

            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "Invalid IMDb ID format");
        }
    }

    #[actix_web::test]
    async fn search_passes_upstream_payload_through_unchanged() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("s", "batman"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_BODY))
            .mount(&server)
            .await;

        let config = web::Data::new(OmdbConfig {
            base_url: server.uri(),
            api_key: "test-key".to_string(),
        });
        let app = test::init_service(
            App::new()
                .app_data(config)
                .app_data(web::Data::new(MovieCache::new()))
                .route("/api/movies/search", web::get().to(search_movies)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/movies/search?title=batman&page=1")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        assert_eq!(body, SEARCH_BODY.as_bytes());
    }

    #[actix_web::test]
    async fn page_defaults_to_one_when_omitted() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_BODY))
            .expect(1)
            .mount(&server)
            .await;

        let config = web::Data::new(OmdbConfig {
            base_url: server.uri(),
            api_key: "test-key".to_string(),
        });
        let app = test::init_service(
            App::new()
                .app_data(config)
                .app_data(web::Data::new(MovieCache::new()))
                .route("/api/movies/search", web::get().to(search_movies)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/movies/search?title=batman")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn no_results_search_maps_to_bad_gateway() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(NOT_FOUND_BODY))
            .mount(&server)
            .await;

        let config = web::Data::new(OmdbConfig {
            base_url: server.uri(),
            api_key: "test-key".to_string(),
        });
        let app = test::init_service(
            App::new()
                .app_data(config)
                .app_data(web::Data::new(MovieCache::new()))
                .route("/api/movies/search", web::get().to(search_movies)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/movies/search?title=zzzznotfound&page=1")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("no results"));
    }

    #[actix_web::test]
    async fn details_lookup_passes_payload_through_unchanged() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("i", "tt0372784"))
            .respond_with(ResponseTemplate::new(200).set_body_string(DETAILS_BODY))
            .mount(&server)
            .await;

        let config = web::Data::new(OmdbConfig {
            base_url: server.uri(),
            api_key: "test-key".to_string(),
        });
        let app = test::init_service(
            App::new()
                .app_data(config)
                .app_data(web::Data::new(MovieCache::new()))
                .route("/api/movies/{imdb_id}", web::get().to(get_movie_details)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/movies/tt0372784")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        assert_eq!(body, DETAILS_BODY.as_bytes());
    }
}
