//! 补全提供方抽象
//!
//! 将外部文本补全服务抽象为 trait，便于替换提供方或在测试中注入离线桩。

use async_trait::async_trait;

use super::types::{CompletionOptions, LlmError};

/// 文本补全提供方
///
/// 契约：给定 system / user 两条角色提示词，返回单条文本补全或错误。
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// 执行一次补全调用
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        options: &CompletionOptions,
    ) -> Result<String, LlmError>;
}
