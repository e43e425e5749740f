//! 应用状态管理
//!
//! 定义在请求处理器之间共享的状态。各请求之间不共享可变状态，
//! 仅共享只读配置、补全提供方句柄与追加式请求日志。

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::error::AppError;
use crate::llm::{CompletionProvider, OpenAiProvider};
use crate::utils::{default_log_path, RequestLogger};

/// 应用共享状态
///
/// 使用 Arc 包裹以便在多个处理器之间安全共享
pub struct AppState {
    /// 服务配置
    pub config: ServiceConfig,
    /// 补全提供方
    pub provider: Arc<dyn CompletionProvider>,
    /// LLM 请求日志
    pub request_log: RequestLogger,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(
        config: ServiceConfig,
        provider: Arc<dyn CompletionProvider>,
        request_log: RequestLogger,
    ) -> Self {
        Self {
            config,
            provider,
            request_log,
        }
    }
}

/// 创建可共享的应用状态，初始化 OpenAI 补全提供方
pub fn create_shared_state(config: ServiceConfig) -> Result<Arc<AppState>, AppError> {
    let provider = OpenAiProvider::new(&config.api_key, &config.base_url, &config.model)?;
    let request_log = RequestLogger::new(default_log_path());
    Ok(Arc::new(AppState::new(
        config,
        Arc::new(provider),
        request_log,
    )))
}
