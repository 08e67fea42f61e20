pub mod config;
pub mod errors;
pub mod extractors;
pub mod routes;
pub mod utils;
