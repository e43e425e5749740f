//! Prompt 构建服务
//!
//! 负责构建发送给补全接口的 system / user 两条提示词

use serde_json::Value;

/// 系统提示词
const SYSTEM_PROMPT: &str = "You are an expert bioinformatics assistant. \
Given a natural language description of an omic analysis task, \
generate the appropriate code (in R or Python) to perform the analysis. \
Explain your reasoning and any assumptions. \
If a context or analysis type is provided, use it to inform your response.";

/// Prompt 服务
pub struct PromptService;

impl PromptService {
    /// 创建新的 Prompt 服务
    pub fn new() -> Self {
        Self
    }

    /// 系统提示词（固定）
    pub fn system_prompt(&self) -> &'static str {
        SYSTEM_PROMPT
    }

    /// 构建用户提示词
    ///
    /// 任务描述、分析类别、上下文各占一行，末尾附上输出要求。
    pub fn build_user_prompt(
        &self,
        natural_language: &str,
        analysis_type: Option<&str>,
        context: Option<&Value>,
    ) -> String {
        let mut prompt = format!("Task: {}\n", natural_language);

        if let Some(analysis_type) = analysis_type {
            if !analysis_type.is_empty() {
                prompt.push_str(&format!("Analysis type: {}\n", analysis_type));
            }
        }

        if let Some(context) = context {
            // 空对象和 null 视同未提供
            let has_content = match context {
                Value::Null => false,
                Value::Object(map) => !map.is_empty(),
                _ => true,
            };
            if has_content {
                prompt.push_str(&format!("Context: {}\n", context));
            }
        }

        prompt.push_str("\nPlease provide only the code and a brief explanation.");
        prompt
    }
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}
