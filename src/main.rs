//! Omic Code Generation API - Rust Backend
//!
//! 使用 axum 框架构建的后端服务，将组学分析任务的自然语言描述
//! 转发给外部补全接口，并拆分为代码与说明返回。

use anyhow::Context;
use axum::http::HeaderValue;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;
mod error;
mod llm;
mod models;
mod services;
mod state;
mod utils;

use api::create_api_routes;
use config::ServiceConfig;
use state::create_shared_state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 文件可选，缺失时忽略
    dotenvy::dotenv().ok();

    // 初始化日志
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "omic_codegen=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Omic Code Generation API backend...");

    // 加载配置，缺少 API Key 时直接启动失败
    let service_config =
        ServiceConfig::from_env().context("failed to load service configuration")?;

    // 创建共享状态
    let shared_state = create_shared_state(service_config.clone())
        .context("failed to initialize completion provider")?;

    // 配置 CORS：只允许固定的前端来源
    let origin = service_config
        .frontend_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("invalid frontend origin: {}", service_config.frontend_origin))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    // 构建路由
    let app = Router::new()
        .merge(create_api_routes(Arc::clone(&shared_state)))
        .layer(cors);

    // 绑定地址
    let addr = SocketAddr::from(([0, 0, 0, 0], service_config.port));
    info!("Server listening on: {}", addr);

    // 启动服务器
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
