//! Tests for the inventory server.
//!
//! - **store_tests**: the in-memory list and id allocation
//! - **storage_tests**: cache directory and stored file names
//! - **config_tests**: command line parsing and settings layer
//! - **error_tests**: error display and HTTP mapping
//! - **api_tests**: endpoint behavior through the full router
//! - **health_api_tests**: health, version, metrics and docs endpoints
//!
//! Run a single module with `cargo test api_tests`.


use std::path::{Path, PathBuf};

use axum::{body::Body, response::Response, Router};
use http_body_util::BodyExt;
use tempfile::TempDir;

use crate::config::{AppConfig, LoggingConfig, ServerConfig};
use crate::routes;
use crate::state::AppState;

pub const BOUNDARY: &str = "X-INVENTORY-TEST-BOUNDARY";

pub fn static_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/public"))
}

pub fn test_config(cache_dir: &Path, static_dir: &Path) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            cache_dir: cache_dir.to_path_buf(),
            body_limit_bytes: 10 * 1024 * 1024,
            static_dir: static_dir.to_path_buf(),
        },
        logging: LoggingConfig { dir: PathBuf::from("logs"), filter: "info".to_string() },
        security: None,
    }
}

/// Full app over a fresh store and a temporary cache directory.
pub fn setup_test_app() -> (Router, AppState, TempDir) {
    let cache = TempDir::new().unwrap();
    let state = AppState::new(test_config(cache.path(), &static_dir()));
    (routes::app(state.clone()), state, cache)
}

pub enum Part<'a> {
    Text(&'a str, &'a str),
    File { name: &'a str, file_name: &'a str, bytes: &'a [u8] },
}

pub fn multipart_body(parts: &[Part<'_>]) -> Body {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n", name, value).as_bytes(),
                );
            }
            Part::File { name, file_name, bytes } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                        name, file_name
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
                body.extend_from_slice(b"\r\n");
            }
        }
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    Body::from(body)
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
