//! 结构化错误记录（Error Record）
//!
//! 描述一次业务失败的最小记录：必填的 `message`、可选的分类 `kind`
//! 与产生时间 `occurred_at`。记录在追加进错误列表时转换为 JSON 对象，
//! 因此经由本类型追加的条目不会触发读取校验失败。
//!
use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 单条业务失败的结构化描述
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// 人类可读的失败描述
    message: String,
    /// 失败分类（如 "validation"、"not_found"）
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    /// 记录产生时间
    #[builder(default = Utc::now())]
    occurred_at: DateTime<Utc>,
}

impl ErrorRecord {
    /// 以消息创建一条最小错误记录
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: None,
            occurred_at: Utc::now(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn occurred_at(&self) -> &DateTime<Utc> {
        &self.occurred_at
    }
}

// 手动构造 JSON 对象，保证追加路径上不存在可失败的序列化环节
impl From<ErrorRecord> for Value {
    fn from(record: ErrorRecord) -> Self {
        let mut map = Map::new();
        map.insert("message".to_string(), Value::String(record.message));
        if let Some(kind) = record.kind {
            map.insert("kind".to_string(), Value::String(kind));
        }
        map.insert(
            "occurred_at".to_string(),
            Value::String(record.occurred_at.to_rfc3339()),
        );
        Value::Object(map)
    }
}
