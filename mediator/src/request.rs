/// 中介者请求（Request）
///
/// 表达“意图”的调度请求，由中介者按类型路由到唯一处理器并取回输出。
/// - 输出类型由请求类型推导（`type Output`），调用端无需显式声明；
/// - 与 [`Notification`](crate::notification::Notification) 相对，
///   `Request` 关注请求/响应语义；
/// - 建议保持语义化的“动宾结构”命名，如 `CreateAccount`、`CloseOrder`。
///
/// 关联常量：
/// - `NAME`：请求的稳定名称，用于日志、追踪与路由。避免依赖 `type_name::<T>()`。
pub trait Request: Send + Sync + 'static {
    /// 请求的稳定名称（建议常量字符串，不随重构变化）
    const NAME: &'static str;

    /// 请求对应的输出类型（由处理器返回）
    type Output: Send + Sync + 'static;
}
