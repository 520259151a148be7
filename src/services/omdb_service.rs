use crate::utils::error::MovieError;
use std::time::Duration;

/// OMDb connection settings, read from the environment at startup and
/// injected into the handlers via `web::Data`.
#[derive(Debug, Clone)]
pub struct OmdbConfig {
    pub base_url: String,
    pub api_key: String,
}

// OMDb flags "no results" inside a 200 body instead of the HTTP status
pub const NO_RESULTS_MARKER: &str = "\"Response\":\"False\"";

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Busca filmes no OMDb por título (paginado)
///
/// The payload stays opaque: it is returned verbatim and only probed for
/// the no-results marker.
pub async fn search_movies(
    config: &OmdbConfig,
    title: &str,
    page: u32,
) -> Result<String, MovieError> {
    log::info!("🎬 Fetching movie search from OMDb: '{}' (page {})", title, page);

    let url = format!(
        "{}?apikey={}&s={}&page={}",
        config.base_url,
        config.api_key,
        urlencoding::encode(title),
        page
    );

    let client = reqwest::Client::new();
    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .send()
        .await
        .map_err(|e| MovieError::Internal(format!("Failed to reach OMDb: {}", e)))?;

    let status = response.status();

    if status.is_client_error() {
        return Err(MovieError::Upstream(
            "Failed to fetch movie search results from OMDb".to_string(),
        ));
    }

    if !status.is_success() {
        return Err(MovieError::Internal(format!("OMDb API error: {}", status)));
    }

    let payload = response
        .text()
        .await
        .map_err(|e| MovieError::Internal(format!("Failed to read OMDb response: {}", e)))?;

    if payload.contains(NO_RESULTS_MARKER) {
        return Err(MovieError::Upstream(
            "OMDb returned no results for the given search".to_string(),
        ));
    }

    log::info!("✅ OMDb search ok for '{}' ({} bytes)", title, payload.len());

    Ok(payload)
}

/// Busca detalhes de um filme no OMDb por IMDb ID
pub async fn get_movie_details(config: &OmdbConfig, imdb_id: &str) -> Result<String, MovieError> {
    log::info!("🎬 Fetching movie details from OMDb: {}", imdb_id);

    let url = format!("{}?apikey={}&i={}", config.base_url, config.api_key, imdb_id);

    let client = reqwest::Client::new();
    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .send()
        .await
        .map_err(|e| MovieError::Internal(format!("Failed to reach OMDb: {}", e)))?;

    let status = response.status();

    if status.is_client_error() {
        return Err(MovieError::Upstream(
            "Failed to fetch movie details from OMDb".to_string(),
        ));
    }

    if !status.is_success() {
        return Err(MovieError::Internal(format!("OMDb API error: {}", status)));
    }

    let payload = response
        .text()
        .await
        .map_err(|e| MovieError::Internal(format!("Failed to read OMDb response: {}", e)))?;

    if payload.contains(NO_RESULTS_MARKER) {
        return Err(MovieError::Upstream(
            "Invalid IMDb ID or movie not found".to_string(),
        ));
    }

    log::info!("✅ OMDb details ok for {} ({} bytes)", imdb_id, payload.len());

    Ok(payload)
}
