//! 根路径欢迎端点
//!
//! 仅作存活探针，与补全提供方可用性无关。

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;
use std::sync::Arc;

/// 欢迎消息处理器
async fn welcome() -> Json<Value> {
    Json(json!({
        "message": "Welcome to Omic Code Generation API"
    }))
}

/// 创建根路径路由
pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(welcome))
}
