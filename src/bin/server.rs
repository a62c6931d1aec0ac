use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::post};
use base64::Engine;
use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;

use tablecloth::config::Params;
use tablecloth::render;

const DEFAULT_SIZE: i64 = 21;
const MAX_SERVER_SIZE: usize = 512;

#[derive(Deserialize)]
struct GenerateRequest {
    size: Option<i64>,
}

#[derive(Serialize)]
struct GenerateResponse {
    size: usize,
    rows: Vec<String>,
    layers: Vec<Layer>,
    timings: Vec<TimingEntry>,
}

#[derive(Serialize)]
struct Layer {
    name: String,
    data_url: String,
}

#[derive(Serialize)]
struct TimingEntry {
    name: String,
    ms: f64,
}

struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.1 });
        (self.0, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError(StatusCode::INTERNAL_SERVER_ERROR, format!("{err:#}"))
    }
}

fn encode_png(rgba: &[u8], w: usize, h: usize) -> Result<String> {
    let mut buf = Vec::new();
    let encoder = PngEncoder::new(&mut buf);
    encoder
        .write_image(rgba, w as u32, h as u32, image::ExtendedColorType::Rgba8)
        .context("PNG encode failed")?;
    let b64 = base64::engine::general_purpose::STANDARD.encode(&buf);
    Ok(format!("data:image/png;base64,{}", b64))
}

fn build_response(size: usize) -> Result<GenerateResponse> {
    let params = Params::default();
    let (cloth, timings) = tablecloth::generate(size, &params);

    let mut layers = Vec::new();
    if size > 0 {
        let (rgba, w, h) = render::render_png(&cloth.primes, &params);
        layers.push(Layer {
            name: "primes".into(),
            data_url: encode_png(&rgba, w, h)?,
        });
    }

    let timing_entries = timings
        .iter()
        .map(|t| TimingEntry {
            name: t.name.to_string(),
            ms: t.ms,
        })
        .collect();

    Ok(GenerateResponse {
        size,
        rows: cloth.rows,
        layers,
        timings: timing_entries,
    })
}

async fn generate_handler(
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let size = req.size.unwrap_or(DEFAULT_SIZE).unsigned_abs();
    if size > MAX_SERVER_SIZE as u64 {
        return Err(ApiError(
            StatusCode::BAD_REQUEST,
            format!("size {size} exceeds limit {MAX_SERVER_SIZE}"),
        ));
    }

    let response = tokio::task::spawn_blocking(move || build_response(size as usize))
        .await
        .context("generation task failed")??;

    Ok(Json(response))
}

#[tokio::main]
async fn main() -> Result<()> {
    tablecloth::logging::init();

    let frontend = ServeDir::new("frontend");

    let app = Router::new()
        .route("/api/generate", post(generate_handler))
        .fallback_service(frontend);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    eprintln!("tablecloth server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_carries_rows_and_png() {
        let resp = build_response(3).unwrap();
        assert_eq!(resp.rows, vec!["■□■", "□□■", "■□□"]);
        assert_eq!(resp.layers.len(), 1);
        assert!(resp.layers[0].data_url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn empty_response_has_no_layers() {
        let resp = build_response(0).unwrap();
        assert!(resp.rows.is_empty());
        assert!(resp.layers.is_empty());
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["size"], 0);
    }

    fn accepted(result: Result<Json<GenerateResponse>, ApiError>) -> GenerateResponse {
        match result {
            Ok(Json(resp)) => resp,
            Err(ApiError(status, msg)) => panic!("request rejected: {status} {msg}"),
        }
    }

    #[tokio::test]
    async fn oversized_request_is_rejected_with_json_error() {
        let result = generate_handler(Json(GenerateRequest { size: Some(513) })).await;
        let Err(err) = result else {
            panic!("size 513 was accepted");
        };
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["error"].as_str().unwrap().contains("513"));
    }

    #[tokio::test]
    async fn missing_size_uses_default() {
        let resp = accepted(generate_handler(Json(GenerateRequest { size: None })).await);
        assert_eq!(resp.size, 21);
        assert_eq!(resp.rows.len(), 21);
    }

    #[tokio::test]
    async fn negative_size_is_taken_by_absolute_value() {
        let resp = accepted(generate_handler(Json(GenerateRequest { size: Some(-5) })).await);
        assert_eq!(resp.size, 5);
        assert_eq!(resp.rows.len(), 5);
    }
}
