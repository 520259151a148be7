pub mod movie_service;
pub mod omdb_service;
