use axum::http::{HeaderValue, Method, header};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

/// Origin of the storefront dev server, used when `CORS_ALLOWED_ORIGIN` is unset.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// CORS for the browser storefront.
///
/// Bearer tokens travel in `Authorization`, so credentials are not needed.
pub fn cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Build the layer from comma-separated `CORS_ALLOWED_ORIGIN`.
pub fn cors_layer_from_env() -> io::Result<CorsLayer> {
    let raw = std::env::var("CORS_ALLOWED_ORIGIN").unwrap_or_else(|_| {
        warn!(
            origin = DEFAULT_ALLOWED_ORIGIN,
            "CORS_ALLOWED_ORIGIN not set, using default"
        );
        DEFAULT_ALLOWED_ORIGIN.to_string()
    });

    let origins = parse_origins(&raw)?;
    info!(origins = %raw, "CORS configured");
    Ok(cors_layer(origins))
}

fn parse_origins(raw: &str) -> io::Result<Vec<HeaderValue>> {
    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(HeaderValue::from_str)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {e}"),
            )
        })?;

    if origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN cannot be empty",
        ));
    }

    Ok(origins)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_splits_and_trims() {
        let origins = parse_origins("http://localhost:3000, https://shop.example.com").unwrap();
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[1], "https://shop.example.com");
    }

    #[test]
    fn test_parse_origins_rejects_empty() {
        assert!(parse_origins(" , ").is_err());
    }

    #[test]
    fn test_from_env_defaults_when_unset() {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            assert!(cors_layer_from_env().is_ok());
        });
    }

    #[test]
    fn test_parse_origins_rejects_invalid_header() {
        assert!(parse_origins("http://bad\norigin").is_err());
    }
}
