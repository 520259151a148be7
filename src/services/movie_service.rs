use crate::api::metrics;
use crate::services::omdb_service::{self, OmdbConfig};
use crate::utils::cache::MovieCache;
use crate::utils::error::MovieError;

/// Busca filmes com cache (cache-aside, sem expiração)
///
/// Key is `{title}-{page}`. On a hit the payload is served without touching
/// OMDb; on a miss the fetched payload is stored before returning. Errors
/// propagate unchanged and are never stored, so a later identical request
/// retries OMDb instead of replaying the failure.
pub async fn search_movies(
    config: &OmdbConfig,
    cache: &MovieCache,
    title: &str,
    page: u32,
) -> Result<String, MovieError> {
    let cache_key = format!("{}-{}", title, page);

    if let Some(cached) = cache.search.get(&cache_key) {
        log::debug!("📦 Search cache hit for '{}'", cache_key);
        metrics::increment_cache_hits();
        return Ok(cached);
    }

    metrics::increment_cache_misses();

    let payload = omdb_service::search_movies(config, title, page).await?;

    cache.search.set(cache_key.clone(), payload.clone());
    log::debug!("💾 Cached search result for '{}'", cache_key);

    Ok(payload)
}

/// Busca detalhes de um filme com cache (cache-aside, sem expiração)
pub async fn get_movie_details(
    config: &OmdbConfig,
    cache: &MovieCache,
    imdb_id: &str,
) -> Result<String, MovieError> {
    if let Some(cached) = cache.details.get(imdb_id) {
        log::debug!("📦 Details cache hit for {}", imdb_id);
        metrics::increment_cache_hits();
        return Ok(cached);
    }

    metrics::increment_cache_misses();

    let payload = omdb_service::get_movie_details(config, imdb_id).await?;

    cache.details.set(imdb_id.to_string(), payload.clone());
    log::debug!("💾 Cached details for {}", imdb_id);

    Ok(payload)
}
