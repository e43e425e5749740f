//! 代码生成相关端点

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::error::AppResult;
use crate::models::{AnalysisTypesResponse, GenerateCodeRequest, GenerateCodeResponse};
use crate::services::{CodegenService, ANALYSIS_TYPES};
use crate::state::AppState;

/// 代码生成处理器
async fn generate_code(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateCodeRequest>,
) -> AppResult<Json<GenerateCodeResponse>> {
    info!(
        "Received code generation request: analysis_type={:?}",
        req.analysis_type
    );

    let service = CodegenService::new(Arc::clone(&state.provider), &state.config.model);

    let entry = state.request_log.start_entry(
        &state.config.model,
        &state.config.api_key,
        req.natural_language.len(),
    );
    let started = Instant::now();

    match service.generate_code(&req).await {
        Ok(response) => {
            state.request_log.log_success(
                entry,
                started.elapsed().as_millis() as u64,
                response.explanation.len() + response.generated_code.len(),
            );
            Ok(Json(response))
        }
        Err(e) => {
            state
                .request_log
                .log_error(entry, started.elapsed().as_millis() as u64, &e.to_string());
            Err(e)
        }
    }
}

/// 分析类别列表处理器
async fn analysis_types() -> Json<AnalysisTypesResponse> {
    Json(AnalysisTypesResponse {
        analysis_types: ANALYSIS_TYPES.to_vec(),
    })
}

/// 创建代码生成路由
pub fn generate_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/generate-code", post(generate_code))
        .route("/analysis-types", get(analysis_types))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::create_api_routes;
    use crate::config::ServiceConfig;
    use crate::llm::MockProvider;
    use crate::utils::RequestLogger;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    fn test_state(provider: Arc<MockProvider>) -> Arc<AppState> {
        let config = ServiceConfig {
            api_key: "sk-test".to_string(),
            base_url: "https://api.openai.com".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            port: 8000,
            frontend_origin: "http://localhost:3000".to_string(),
        };
        let log_path =
            std::env::temp_dir().join(format!("omic-codegen-test-{}.jsonl", Uuid::new_v4()));
        Arc::new(AppState::new(
            config,
            provider,
            RequestLogger::new(log_path),
        ))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_generate(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/generate-code")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_welcome_returns_fixed_message() {
        let app = create_api_routes(test_state(Arc::new(MockProvider::with_reply("unused"))));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Welcome to Omic Code Generation API");
    }

    #[tokio::test]
    async fn test_analysis_types_returns_fixed_list() {
        let app = create_api_routes(test_state(Arc::new(MockProvider::with_reply("unused"))));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/analysis-types")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(
            body["analysis_types"],
            json!(["RNA-seq", "DNA-seq", "Proteomics", "Metabolomics", "Single-cell"])
        );
    }

    #[tokio::test]
    async fn test_generate_code_splits_reply() {
        let provider = Arc::new(MockProvider::with_reply(
            "Use DESeq2.\n```\nlibrary(DESeq2)\ndds <- DESeqDataSetFromMatrix(counts, coldata, ~condition)\n```",
        ));
        let app = create_api_routes(test_state(Arc::clone(&provider)));

        let response = app
            .oneshot(post_generate(json!({
                "natural_language": "Normalize counts for an RNA-seq dataset",
                "analysis_type": "RNA-seq"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["explanation"], "Use DESeq2.");
        assert_eq!(
            body["generated_code"],
            "library(DESeq2)\ndds <- DESeqDataSetFromMatrix(counts, coldata, ~condition)"
        );
        assert_eq!(body["metadata"]["model"], "gpt-3.5-turbo");
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_generate_code_without_fence_returns_empty_code() {
        let provider = Arc::new(MockProvider::with_reply("The task is ambiguous."));
        let app = create_api_routes(test_state(provider));

        let response = app
            .oneshot(post_generate(json!({
                "natural_language": "Do the analysis"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["generated_code"], "");
        assert_eq!(body["explanation"], "The task is ambiguous.");
    }

    #[tokio::test]
    async fn test_provider_error_returns_500_with_detail() {
        let provider = Arc::new(MockProvider::with_error("quota exceeded"));
        let app = create_api_routes(test_state(provider));

        let response = app
            .oneshot(post_generate(json!({
                "natural_language": "Cluster the cells"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        let detail = body["detail"].as_str().unwrap();
        assert!(!detail.is_empty());
        assert!(detail.contains("quota exceeded"));
    }

    #[tokio::test]
    async fn test_empty_natural_language_is_rejected() {
        let provider = Arc::new(MockProvider::with_reply("unused"));
        let app = create_api_routes(test_state(Arc::clone(&provider)));

        let response = app
            .oneshot(post_generate(json!({
                "natural_language": "   "
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["detail"].as_str().unwrap().contains("natural_language"));
        assert_eq!(provider.call_count(), 0);
    }
}
