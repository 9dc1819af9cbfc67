use poem::middleware::Cors;
use std::env;

use super::server_config::ServerConfig;

/// Initialize CORS middleware for cross-origin requests
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
///   (default: the server's own base URL plus its localhost alias)
///
/// The bundled UI is same-origin; this only matters when the page is
/// served from elsewhere during development.
pub fn init_cors(server: &ServerConfig) -> Cors {
    let allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
        .unwrap_or_else(|_| default_origins(server).join(","));

    Cors::new()
        .allow_origins(parse_origins(&allowed_origins))
        .allow_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allow_headers(vec!["content-type"])
}

fn default_origins(server: &ServerConfig) -> Vec<String> {
    vec![
        server.base_url(),
        format!("http://localhost:{}", server.port),
    ]
}

/// Splits a comma-separated origin list, dropping blanks and whitespace
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
