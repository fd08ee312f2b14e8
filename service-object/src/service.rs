//! 服务契约（Service）
//!
//! 以"单一业务操作"为单位的执行约定：实现方只提供业务逻辑钩子
//! [`perform`](Service::perform)，执行时机、结果缓存与错误收敛由
//! [`ServiceObject`](crate::service_object::ServiceObject) 编排。
//!
use crate::error_list::ErrorList;

/// 服务接口：封装一次完整的业务操作
///
/// 实现方通过自身构造函数携带操作参数，失败时向错误列表追加
/// 结构化记录并返回约定的哨兵值（通常为 `Option::None`），
/// 而不是中断执行。
///
/// 未实现本接口的类型无法交给编排器执行：
///
/// ```compile_fail
/// use service_object::ServiceObject;
///
/// struct NotAService;
///
/// let service = ServiceObject::new(NotAService);
/// ```
pub trait Service {
    /// 服务的稳定名称（建议常量字符串，不随重构变化）
    const NAME: &'static str;

    /// 业务操作的返回值类型
    type Output;

    /// 业务逻辑钩子，由编排器保证至多执行一次
    ///
    /// 实现方不应自行调用本方法：经由编排器的任何读取路径
    /// （`call`/`result`/`into_result`）都会复用首次执行的缓存结果。
    fn perform(&mut self, errors: &mut ErrorList) -> Self::Output;
}
