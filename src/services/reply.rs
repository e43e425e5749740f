//! 补全回复拆分
//!
//! 将补全接口返回的整段文本按首个 ``` 围栏拆分为说明与代码。
//! 这是一个启发式拆分：多个围栏时只取第一、二个之间的片段，
//! 其他围栏风格不识别，退化为整段文本作为说明。

/// 拆分结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReply {
    /// 围栏之前的说明文本
    pub explanation: String,
    /// 首个围栏内的代码片段，未找到围栏时为空
    pub code: String,
}

/// 按首个 ``` 围栏拆分回复
///
/// 围栏之前的文本（去除首尾空白）为说明，第一、二个围栏之间的
/// 文本（去除首尾空白）为代码；没有围栏时整段文本原样作为说明返回。
pub fn split_reply(content: &str) -> SplitReply {
    match content.split_once("```") {
        Some((before, rest)) => {
            let code = rest.split("```").next().unwrap_or("");
            SplitReply {
                explanation: before.trim().to_string(),
                code: code.trim().to_string(),
            }
        }
        None => SplitReply {
            explanation: content.to_string(),
            code: String::new(),
        },
    }
}
