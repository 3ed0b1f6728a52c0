use crate::{error::MediatorError, notification::Notification, request::Request};
use async_trait::async_trait;

/// 中介者（Mediator）
///
/// - 负责根据请求的具体类型路由到对应的处理器；
/// - 框架可提供不同实现（如进程内、消息队列等）；
/// - 该 trait 带有泛型方法，通常以具体实现类型注入使用。
///
/// 三种分发形态对应三种收窄程度的契约：
/// 显式（请求, 输出）类型对、由请求类型推导输出、fire-and-forget。
#[async_trait]
pub trait Mediator: Send + Sync {
    /// 按显式的（请求类型, 输出类型）键分发请求
    ///
    /// 两个类型参数共同构成注册表键；`R` 无需实现 [`Request`]。
    async fn dispatch<R, O>(&self, req: R) -> Result<O, MediatorError>
    where
        R: Send + Sync + 'static,
        O: Send + Sync + 'static;

    /// 分发请求，输出类型由请求类型推导（`R::Output`）
    async fn send<R>(&self, req: R) -> Result<R::Output, MediatorError>
    where
        R: Request;

    /// 分发通知到对应处理器（不返回业务数据）
    async fn publish<N>(&self, notification: N) -> Result<(), MediatorError>
    where
        N: Notification;
}
