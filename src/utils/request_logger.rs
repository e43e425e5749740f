//! LLM 请求日志记录器
//!
//! 将每次外部补全调用以 JSONL 追加到日志文件，便于调试和分析。
//! 写入是尽力而为的：失败只记录告警，不影响请求本身。

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::warn;
use uuid::Uuid;

/// 请求日志条目
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// 请求 ID
    pub request_id: String,
    /// 时间戳
    pub timestamp: DateTime<Utc>,
    /// 模型名称
    pub model: String,
    /// API 密钥（脱敏）
    pub api_key_masked: String,
    /// 提示词字符数
    pub prompt_chars: usize,
    /// 状态
    pub status: String,
    /// 持续时间（毫秒）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    /// 响应字符数
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_chars: Option<usize>,
    /// 错误信息
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// 获取默认日志文件路径
///
/// 日志文件位于可执行文件同级目录
pub fn default_log_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("llm_requests.jsonl")
}

/// 请求日志记录器
pub struct RequestLogger {
    path: PathBuf,
    file_lock: Mutex<()>,
}

impl RequestLogger {
    /// 创建新的日志记录器
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file_lock: Mutex::new(()),
        }
    }

    /// 脱敏 API 密钥，仅保留前后各 4 位
    fn mask_api_key(key: &str) -> String {
        if key.len() <= 8 {
            "****".to_string()
        } else {
            format!("{}...{}", &key[..4], &key[key.len() - 4..])
        }
    }

    /// 创建一条新的日志条目
    pub fn start_entry(&self, model: &str, api_key: &str, prompt_chars: usize) -> LogEntry {
        LogEntry {
            request_id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            model: model.to_string(),
            api_key_masked: Self::mask_api_key(api_key),
            prompt_chars,
            status: "pending".to_string(),
            duration_ms: None,
            response_chars: None,
            error: None,
        }
    }

    /// 记录成功完成的请求
    pub fn log_success(&self, mut entry: LogEntry, duration_ms: u64, response_chars: usize) {
        entry.status = "success".to_string();
        entry.duration_ms = Some(duration_ms);
        entry.response_chars = Some(response_chars);
        self.append(&entry);
    }

    /// 记录失败的请求
    pub fn log_error(&self, mut entry: LogEntry, duration_ms: u64, error: &str) {
        entry.status = "error".to_string();
        entry.duration_ms = Some(duration_ms);
        entry.error = Some(error.to_string());
        self.append(&entry);
    }

    /// 追加写入 JSONL 文件
    fn append(&self, entry: &LogEntry) {
        let line = match serde_json::to_string(entry) {
            Ok(line) => line,
            Err(e) => {
                warn!("Failed to serialize request log entry: {}", e);
                return;
            }
        };

        let _guard = self.file_lock.lock();
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| writeln!(file, "{}", line));

        if let Err(e) = result {
            warn!("Failed to write request log: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_api_key() {
        assert_eq!(RequestLogger::mask_api_key("short"), "****");
        assert_eq!(
            RequestLogger::mask_api_key("sk-abcdefghijklmnop"),
            "sk-a...mnop"
        );
    }

    #[test]
    fn test_append_writes_jsonl() {
        let path = std::env::temp_dir().join(format!("request-log-test-{}.jsonl", Uuid::new_v4()));
        let logger = RequestLogger::new(&path);

        let entry = logger.start_entry("gpt-3.5-turbo", "sk-abcdefghijklmnop", 42);
        logger.log_success(entry, 120, 256);

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
        assert_eq!(parsed["model"], "gpt-3.5-turbo");
        assert_eq!(parsed["status"], "success");
        assert_eq!(parsed["api_key_masked"], "sk-a...mnop");
        assert_eq!(parsed["duration_ms"], 120);

        std::fs::remove_file(&path).ok();
    }
}
