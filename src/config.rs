//! 服务配置
//!
//! 启动时从环境变量一次性加载，随后作为显式值传递给各组件，
//! 不依赖全局可变状态。

use crate::error::AppError;

/// 固定生成参数：最大 token 数
pub const MAX_TOKENS: u32 = 800;

/// 固定生成参数：采样温度，偏向确定性输出
pub const TEMPERATURE: f64 = 0.2;

/// 服务配置
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// 补全接口 API 密钥（必需）
    pub api_key: String,
    /// 补全接口基础 URL
    pub base_url: String,
    /// 模型名称
    pub model: String,
    /// HTTP 监听端口
    pub port: u16,
    /// 允许跨域访问的前端来源
    pub frontend_origin: String,
}

fn default_base_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_frontend_origin() -> String {
    "http://localhost:3000".to_string()
}

impl ServiceConfig {
    /// 从环境变量加载配置
    ///
    /// `OPENAI_API_KEY` 缺失或为空时返回错误，服务启动失败。
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                AppError::Config("OPENAI_API_KEY not set in environment variables".to_string())
            })?;

        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| AppError::Config(format!("invalid PORT: {}", value)))?,
            Err(_) => 8000,
        };

        Ok(Self {
            api_key,
            base_url: std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| default_base_url()),
            model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| default_model()),
            port,
            frontend_origin: std::env::var("FRONTEND_ORIGIN")
                .unwrap_or_else(|_| default_frontend_origin()),
        })
    }
}
