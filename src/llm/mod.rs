//! LLM 模块
//!
//! 提供补全提供方抽象与 OpenAI Chat Completions 客户端。

mod format;
mod openai;
mod provider;
mod types;

pub use openai::OpenAiProvider;
pub use provider::CompletionProvider;
pub use types::*;

#[cfg(test)]
pub use provider::mock::MockProvider;
