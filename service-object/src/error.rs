//! 服务对象统一错误定义
//!
//! 区分两类失败：业务失败以结构化记录形式存放在错误列表中，
//! 由 `success`/`errors` 暴露；本模块定义的错误类型仅用于
//! 契约违规等程序性故障，属于实现方的编码错误信号。
//!
use thiserror::Error;

/// 统一错误类型（基础库最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ServiceObjectError {
    /// 错误列表中存在非 JSON 对象条目；`found` 为违规条目的运行时类型名
    #[error("Invalid error type. Valid error types are JSON objects. Received type '{found}'")]
    InvalidErrorType { found: &'static str },
}

/// 统一 Result 类型别名
pub type ServiceResult<T> = Result<T, ServiceObjectError>;
