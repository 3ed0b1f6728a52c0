use crate::{error::MediatorError, notification::Notification};
use async_trait::async_trait;

#[async_trait]
pub trait NotificationHandler<N>: Send + Sync
where
    N: Notification,
{
    async fn handle(&self, notification: N) -> Result<(), MediatorError>;
}
