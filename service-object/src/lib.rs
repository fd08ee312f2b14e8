//! 服务对象基础库（service-object）
//!
//! 提供以"单一业务操作"为中心的通用抽象，用于在应用中实现：
//! - 服务契约（`service`）：以钩子方式提供业务逻辑
//! - 编排器（`service_object`）：至多一次执行、结果缓存与成功判定
//! - 结构化错误记录（`error_record`）与有序错误列表（`error_list`）
//! - 统一错误类型（`error`）
//!
//! 本 crate 为纯进程内同步模式库：不持有 I/O、不引入异步执行，
//! 实例供单一逻辑调用方独占使用，彼此之间不共享任何全局状态。
//!
//! 典型用法：
//! 1. 定义具体服务类型并实现 `Service`，操作参数由其构造函数携带；
//! 2. 用 `ServiceObject::new` 包装，读取 `result` 获取惰性计算的结果；
//! 3. 经 `success` 判断是否失败，经 `errors` 获取校验后的错误序列；
//! 4. 也可先显式调用 `call` 再读取，执行守卫保证钩子至多运行一次。
//!
pub mod error;
pub mod error_list;
pub mod error_record;
pub mod service;
pub mod service_object;

pub use error::{ServiceObjectError, ServiceResult};
pub use error_list::ErrorList;
pub use error_record::ErrorRecord;
pub use service::Service;
pub use service_object::ServiceObject;
