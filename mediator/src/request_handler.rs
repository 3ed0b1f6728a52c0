use crate::error::MediatorError;
use async_trait::async_trait;

/// 请求处理器（Request Handler）
///
/// 每个（请求类型, 输出类型）组合对应唯一实现。输出类型作为独立参数，
/// 允许同一请求类型注册不同输出的处理器。
#[async_trait]
pub trait RequestHandler<R, O>: Send + Sync
where
    R: Send + Sync + 'static,
    O: Send + Sync + 'static,
{
    async fn handle(&self, req: R) -> Result<O, MediatorError>;
}
