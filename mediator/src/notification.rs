/// 中介者通知（Notification）
///
/// 表达 fire-and-forget 语义的单向消息，不返回业务数据。
/// - 与 [`Request`](crate::request::Request) 相对，`Notification` 仅表达执行结果（成功/失败）；
/// - 路由仅以通知类型本身为键。
///
/// 关联常量：
/// - `NAME`：通知的稳定名称，用于日志、追踪与路由。避免依赖 `type_name::<T>()`。
pub trait Notification: Send + Sync + 'static {
    /// 通知的稳定名称（建议常量字符串，不随重构变化）
    const NAME: &'static str;
}
