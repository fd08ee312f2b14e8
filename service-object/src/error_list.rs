//! 错误列表（ErrorList）
//!
//! 保存一次服务执行期间追加的错误条目，严格按插入顺序排列。
//! 条目以 JSON 值存储：类型化追加（[`push`](ErrorList::push)）在追加时
//! 即保证条目为对象；原始追加（[`push_raw`](ErrorList::push_raw)）不做
//! 校验，非对象条目会在下一次读取校验时被拒绝。
//!
use crate::error::{ServiceObjectError, ServiceResult};
use crate::error_record::ErrorRecord;
use serde_json::Value;

/// 有序错误序列
#[derive(Debug, Clone, Default)]
pub struct ErrorList {
    entries: Vec<Value>,
}

impl ErrorList {
    /// 创建空错误列表
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条结构化错误记录
    pub fn push(&mut self, record: ErrorRecord) {
        self.entries.push(record.into());
    }

    /// 以消息追加一条最小错误记录
    pub fn push_message(&mut self, message: impl Into<String>) {
        self.push(ErrorRecord::new(message));
    }

    /// 追加一个未经校验的原始条目
    ///
    /// 调用方需自行保证条目为携带 `message` 字段的 JSON 对象；
    /// 非对象条目会使后续的 [`validated`](ErrorList::validated) 读取失败。
    pub fn push_raw(&mut self, entry: Value) {
        self.entries.push(entry);
    }

    /// 读取校验：逐条检查条目均为 JSON 对象
    ///
    /// 每次读取都重新校验，两次读取之间的追加在下一次读取时生效。
    /// 遇到首个非对象条目即失败，错误中携带该条目的运行时类型名。
    pub fn validated(&self) -> ServiceResult<&[Value]> {
        for entry in &self.entries {
            if !entry.is_object() {
                return Err(ServiceObjectError::InvalidErrorType {
                    found: json_type_name(entry),
                });
            }
        }
        Ok(&self.entries)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.entries.iter()
    }
}

/// JSON 值的运行时类型名（用于诊断信息）
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // 测试空列表读取
    #[test]
    fn test_empty_list_is_valid() {
        let list = ErrorList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.validated().unwrap(), &[] as &[Value]);
    }

    // 测试类型化追加后条目保持插入顺序
    #[test]
    fn test_push_preserves_order() {
        let mut list = ErrorList::new();
        list.push_message("first");
        list.push_message("second");

        let entries = list.validated().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["message"], "first");
        assert_eq!(entries[1]["message"], "second");
    }

    // 测试原始追加的对象条目可通过校验
    #[test]
    fn test_push_raw_object_is_valid() {
        let mut list = ErrorList::new();
        list.push_raw(json!({ "message": "raw but well-formed" }));
        assert!(list.validated().is_ok());
    }

    // 测试非对象条目在读取时被拒绝并携带类型名
    #[test]
    fn test_non_object_entry_rejected_on_read() {
        let mut list = ErrorList::new();
        list.push_message("fine");
        list.push_raw(json!(42));

        let err = list.validated().unwrap_err();
        match err {
            ServiceObjectError::InvalidErrorType { found } => assert_eq!(found, "number"),
        }
    }

    // 测试各 JSON 类型的诊断名称
    #[test]
    fn test_json_type_name() {
        assert_eq!(json_type_name(&Value::Null), "null");
        assert_eq!(json_type_name(&json!(true)), "boolean");
        assert_eq!(json_type_name(&json!(1.5)), "number");
        assert_eq!(json_type_name(&json!("oops")), "string");
        assert_eq!(json_type_name(&json!([])), "array");
        assert_eq!(json_type_name(&json!({})), "object");
    }
}
