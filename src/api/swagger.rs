use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movie Service API",
        version = "1.0.0",
        description = "REST proxy over the OMDb movie database. \n\n**Features:**\n- Movie search by title (paginated)\n- Movie details by IMDb ID\n- In-memory response caching (no expiry)\n- Health monitoring and metrics",
        contact(
            name = "Movie Service Team",
            email = "support@movie-service.com"
        )
    ),
    paths(
        // Movies
        crate::api::movies::search_movies,
        crate::api::movies::get_movie_details,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
            crate::utils::error::ErrorResponse,
        )
    ),
    tags(
        (name = "Movies", description = "Movie search and details endpoints, proxied to OMDb with response caching."),
        (name = "Health", description = "Health check and system metrics endpoints for monitoring service status."),
    )
)]
pub struct ApiDoc;
