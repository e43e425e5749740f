//! 代码生成服务
//!
//! 组装提示词，调用补全提供方，拆分回复并附加模型元数据。

use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::config::{MAX_TOKENS, TEMPERATURE};
use crate::error::{AppError, AppResult};
use crate::llm::{CompletionOptions, CompletionProvider};
use crate::models::{GenerateCodeRequest, GenerateCodeResponse};

use super::prompt::PromptService;
use super::reply::split_reply;

/// 固定的分析类别列表
// TODO: 接入真实的分析类别来源
pub const ANALYSIS_TYPES: [&str; 5] = [
    "RNA-seq",
    "DNA-seq",
    "Proteomics",
    "Metabolomics",
    "Single-cell",
];

/// 代码生成服务
pub struct CodegenService {
    provider: Arc<dyn CompletionProvider>,
    model: String,
}

impl CodegenService {
    /// 创建新的代码生成服务
    pub fn new(provider: Arc<dyn CompletionProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// 根据自然语言描述生成分析代码
    ///
    /// 每次请求只发起一次外部补全调用，失败不重试。
    pub async fn generate_code(
        &self,
        request: &GenerateCodeRequest,
    ) -> AppResult<GenerateCodeResponse> {
        let natural_language = request.natural_language.trim();
        if natural_language.is_empty() {
            return Err(AppError::BadRequest(
                "natural_language must not be empty".to_string(),
            ));
        }

        let prompt_service = PromptService::new();
        let user_prompt = prompt_service.build_user_prompt(
            natural_language,
            request.analysis_type.as_deref(),
            request.context.as_ref(),
        );

        let options = CompletionOptions {
            temperature: Some(TEMPERATURE),
            max_tokens: Some(MAX_TOKENS),
        };

        let content = self
            .provider
            .complete(prompt_service.system_prompt(), &user_prompt, &options)
            .await?;

        let reply = split_reply(&content);
        info!(
            "Code generation completed: model={}, code_len={}",
            self.model,
            reply.code.len()
        );

        Ok(GenerateCodeResponse {
            generated_code: reply.code,
            explanation: reply.explanation,
            metadata: Some(json!({ "model": self.model })),
        })
    }
}
