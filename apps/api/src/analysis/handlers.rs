//! Axum route handlers for the analysis API.

use std::io::Write;

use anyhow::Context;
use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::analysis::{self, prompts};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: String,
}

/// POST /analyze
///
/// Accepts a multipart upload whose `file` field holds the curator CSV,
/// renders the analysis prompt from it, and relays the prompt to the LLM.
/// The uploaded bytes live in a named temp file owned by this handler;
/// dropping it removes the file on every exit path.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut csv_bytes = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
            csv_bytes = Some(bytes);
            break;
        }
    }
    let csv_bytes =
        csv_bytes.ok_or_else(|| AppError::Validation("missing 'file' field in upload".to_string()))?;

    let mut tmp = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .context("failed to create temp file for upload")?;
    tmp.write_all(&csv_bytes)
        .context("failed to persist upload")?;

    let prompt = analysis::build_prompt(tmp.path(), None)?;
    info!("analysis prompt built ({} bytes)", prompt.len());

    let analysis = state.llm.call(&prompt, prompts::ANALYSIS_SYSTEM).await?;

    Ok(Json(AnalyzeResponse { analysis }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use tower::ServiceExt;

    use crate::llm_client::LlmClient;
    use crate::routes::build_router;

    const BOUNDARY: &str = "curator-test-boundary";

    const CSV: &str = "brand,type,name,youtube,instagram,reddit,twitter,linkedin\n\
        Acme,competitor,Globex,,,,,\n\
        Acme,influencer,Jane Doe,yt.co/jane,,,,\n";

    fn app_for(api_url: String) -> Router {
        let llm = LlmClient::new("test-key".to_string()).with_api_url(api_url);
        build_router(AppState { llm })
    }

    fn analyze_request(field_name: &str, csv_text: &str) -> Request<Body> {
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field_name}\"; filename=\"curatorlist.csv\"\r\n\
             Content-Type: text/csv\r\n\r\n\
             {csv_text}\r\n\
             --{BOUNDARY}--\r\n"
        );
        Request::builder()
            .method("POST")
            .uri("/analyze")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_analyze_returns_analysis_text() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            // The rendered prompt must carry the roster from the upload.
            .match_body(mockito::Matcher::Regex("Globex".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"content":"the report"}}]}"#)
            .create_async()
            .await;

        let app = app_for(format!("{}/chat/completions", server.url()));
        let response = app.oneshot(analyze_request("file", CSV)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["analysis"], "the report");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_analyze_maps_upstream_failure_to_bad_gateway() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(429)
            .with_body("rate limited")
            .create_async()
            .await;

        let app = app_for(format!("{}/chat/completions", server.url()));
        let response = app.oneshot(analyze_request("file", CSV)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "UPSTREAM_ERROR");
        assert!(!json["error"]["message"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_analyze_rejects_csv_without_brand_column() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .expect(0)
            .create_async()
            .await;

        let app = app_for(format!("{}/chat/completions", server.url()));
        let response = app
            .oneshot(analyze_request("file", "name,type\nGlobex,competitor\n"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "MALFORMED_CSV");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_analyze_requires_file_field() {
        let app = app_for("http://127.0.0.1:9/unused".to_string());
        let response = app.oneshot(analyze_request("document", CSV)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }
}
