//! REST API 请求/响应模型

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 代码生成请求
#[derive(Debug, Deserialize)]
pub struct GenerateCodeRequest {
    /// 分析任务的自然语言描述
    pub natural_language: String,
    /// 分析类别
    pub analysis_type: Option<String>,
    /// 附加上下文，原样并入提示词
    pub context: Option<Value>,
}

/// 代码生成响应
#[derive(Debug, Serialize)]
pub struct GenerateCodeResponse {
    /// 首个代码围栏内的片段，未识别到围栏时为空
    pub generated_code: String,
    /// 围栏之前的说明文本
    pub explanation: String,
    /// 元数据，目前记录产生结果的模型
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// 分析类别列表响应
#[derive(Debug, Serialize)]
pub struct AnalysisTypesResponse {
    pub analysis_types: Vec<&'static str>,
}
