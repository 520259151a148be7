use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::utils::cache::MovieCache;

static REQUEST_COUNT: AtomicU64 = AtomicU64::new(0);
static ERROR_COUNT: AtomicU64 = AtomicU64::new(0);
static CACHE_HITS: AtomicU64 = AtomicU64::new(0);
static CACHE_MISSES: AtomicU64 = AtomicU64::new(0);

pub fn increment_request_count() {
    REQUEST_COUNT.fetch_add(1, Ordering::Relaxed);
}

pub fn increment_error_count() {
    ERROR_COUNT.fetch_add(1, Ordering::Relaxed);
}

pub fn increment_cache_hits() {
    CACHE_HITS.fetch_add(1, Ordering::Relaxed);
}

pub fn increment_cache_misses() {
    CACHE_MISSES.fetch_add(1, Ordering::Relaxed);
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MetricsResponse {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub cache_hits_total: u64,
    pub cache_misses_total: u64,
}

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Health",
    responses(
        (status = 200, description = "System metrics", body = MetricsResponse)
    )
)]
pub async fn get_metrics(cache: web::Data<MovieCache>) -> HttpResponse {
    let requests = REQUEST_COUNT.load(Ordering::Relaxed);
    let errors = ERROR_COUNT.load(Ordering::Relaxed);
    let hits = CACHE_HITS.load(Ordering::Relaxed);
    let misses = CACHE_MISSES.load(Ordering::Relaxed);

    let metrics = format!(
        "# HELP http_requests_total Total number of HTTP requests\n\
         # TYPE http_requests_total counter\n\
         http_requests_total {}\n\
         \n\
         # HELP http_errors_total Total number of HTTP errors\n\
         # TYPE http_errors_total counter\n\
         http_errors_total {}\n\
         \n\
         # HELP cache_hits_total Movie responses served from cache\n\
         # TYPE cache_hits_total counter\n\
         cache_hits_total {}\n\
         \n\
         # HELP cache_misses_total Movie requests that went to OMDb\n\
         # TYPE cache_misses_total counter\n\
         cache_misses_total {}\n\
         \n\
         # HELP cache_search_entries Entries in the search cache\n\
         # TYPE cache_search_entries gauge\n\
         cache_search_entries {}\n\
         \n\
         # HELP cache_details_entries Entries in the details cache\n\
         # TYPE cache_details_entries gauge\n\
         cache_details_entries {}\n",
        requests,
        errors,
        hits,
        misses,
        cache.search.len(),
        cache.details.len()
    );

    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(metrics)
}
