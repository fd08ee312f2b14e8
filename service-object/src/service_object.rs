//! 服务对象编排器（ServiceObject）
//!
//! 封装"执行业务钩子 → 缓存结果 → 暴露成功与错误"的标准流程，
//! 以具体服务实现（[`Service`]）为依赖，保证钩子至多执行一次。
//!
use crate::{error::ServiceResult, error_list::ErrorList, service::Service};
use serde_json::Value;
use std::fmt;

/// 面向调用方的服务对象编排器。
///
/// - `S`：具体服务（实现 [`Service`]）
///
/// # 示例
///
/// ```
/// use service_object::{ErrorList, Service, ServiceObject};
///
/// struct ParseAmount {
///     raw: String,
/// }
///
/// impl Service for ParseAmount {
///     const NAME: &'static str = "parse_amount";
///     type Output = Option<i64>;
///
///     fn perform(&mut self, errors: &mut ErrorList) -> Self::Output {
///         match self.raw.parse() {
///             Ok(amount) => Some(amount),
///             Err(e) => {
///                 errors.push_message(e.to_string());
///                 None
///             }
///         }
///     }
/// }
///
/// let mut service = ServiceObject::new(ParseAmount { raw: "42".into() });
/// assert_eq!(service.result(), &Some(42));
/// assert!(service.success());
/// assert!(service.errors().unwrap().is_empty());
/// ```
pub struct ServiceObject<S: Service> {
    service: S,
    errors: ErrorList,
    result: Option<S::Output>,
}

impl<S: Service> ServiceObject<S> {
    /// 包装具体服务：空错误列表、未计算结果
    pub fn new(service: S) -> Self {
        Self {
            service,
            errors: ErrorList::new(),
            result: None,
        }
    }

    /// 显式触发执行并返回结果：
    /// 1. 钩子尚未执行时执行一次，缓存返回值；
    /// 2. 已执行过则直接返回缓存结果，钩子不会再次运行。
    pub fn call(&mut self) -> &S::Output {
        let Self {
            service,
            errors,
            result,
        } = self;

        result.get_or_insert_with(|| service.perform(errors))
    }

    /// 惰性读取缓存结果（未执行时先触发执行）
    ///
    /// 与 [`call`](Self::call) 共享同一道执行守卫：无论先读 `result`
    /// 还是先调 `call`，钩子在实例生命周期内至多执行一次，
    /// 缓存值不存在失效机制。
    pub fn result(&mut self) -> &S::Output {
        self.call()
    }

    /// 消费编排器并取回结果所有权（未执行时先触发执行）
    pub fn into_result(self) -> S::Output {
        let Self {
            mut service,
            mut errors,
            result,
        } = self;

        result.unwrap_or_else(|| service.perform(&mut errors))
    }

    /// 是否成功（错误列表为空即成功）
    ///
    /// 不触发钩子执行：执行前读取表示"尚无错误"，而非"已成功"。
    pub fn success(&self) -> bool {
        self.errors.is_empty()
    }

    /// 读取校验后的错误序列
    ///
    /// 每次读取都重新校验全部条目；存在非对象条目时返回
    /// [`InvalidErrorType`](crate::error::ServiceObjectError::InvalidErrorType)。
    pub fn errors(&self) -> ServiceResult<&[Value]> {
        self.errors.validated()
    }

    /// 业务钩子是否已执行
    pub fn has_run(&self) -> bool {
        self.result.is_some()
    }

    /// 服务的稳定名称
    pub fn name(&self) -> &'static str {
        S::NAME
    }

    /// 访问被包装的具体服务（如读取其携带的参数）
    pub fn service(&self) -> &S {
        &self.service
    }
}

impl<S: Service> fmt::Debug for ServiceObject<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceObject")
            .field("service", &S::NAME)
            .field("has_run", &self.has_run())
            .field("errors", &self.errors.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Recorder {
        calls: usize,
    }

    impl Service for Recorder {
        const NAME: &'static str = "recorder";
        type Output = usize;

        fn perform(&mut self, _errors: &mut ErrorList) -> Self::Output {
            self.calls += 1;
            self.calls
        }
    }

    // 测试执行前的预检状态
    #[test]
    fn test_preflight_state() {
        let service = ServiceObject::new(Recorder { calls: 0 });
        assert!(!service.has_run());
        assert!(service.success());
        assert_eq!(service.errors().unwrap().len(), 0);
        assert_eq!(service.service().calls, 0);
    }

    // 测试两次读取之间的追加在下一次读取时可见（校验视图不缓存）
    #[test]
    fn test_errors_reflect_live_mutation() {
        let mut service = ServiceObject::new(Recorder { calls: 0 });
        service.call();
        assert_eq!(service.errors().unwrap().len(), 0);

        // 绕过钩子直接追加，模拟两次读取之间的变化
        service.errors.push_message("late entry");
        assert_eq!(service.errors().unwrap().len(), 1);

        service.errors.push_raw(json!("malformed"));
        assert!(service.errors().is_err());
    }

    // 测试 Debug 输出携带服务名与执行状态
    #[test]
    fn test_debug_output() {
        let mut service = ServiceObject::new(Recorder { calls: 0 });
        let before = format!("{service:?}");
        assert!(before.contains("recorder"));
        assert!(before.contains("has_run: false"));

        service.call();
        let after = format!("{service:?}");
        assert!(after.contains("has_run: true"));
    }

    // 测试 name 访问器
    #[test]
    fn test_name() {
        let service = ServiceObject::new(Recorder { calls: 0 });
        assert_eq!(service.name(), "recorder");
    }
}
