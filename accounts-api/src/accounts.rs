use async_trait::async_trait;
use mediator::error::MediatorError;
use mediator::notification::Notification;
use mediator::notification_handler::NotificationHandler;
use mediator::request::Request;
use mediator::request_handler::RequestHandler;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 创建账户请求，同时作为 HTTP 请求体：`{ "email": string }`
///
/// email 不做校验：空串或格式错误的地址同样被接受。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAccount {
    pub email: String,
}

impl Request for CreateAccount {
    const NAME: &'static str = "accounts.create";
    type Output = AccountCreated;
}

/// 创建结果：新生成的账户标识
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountCreated {
    pub account_id: Uuid,
}

pub struct CreateAccountHandler;

#[async_trait]
impl RequestHandler<CreateAccount, AccountCreated> for CreateAccountHandler {
    async fn handle(&self, cmd: CreateAccount) -> Result<AccountCreated, MediatorError> {
        tracing::info!(email = %cmd.email, "creating account");

        // 标识不落库：相同请求每次都会得到一个新的 account_id
        Ok(AccountCreated {
            account_id: Uuid::new_v4(),
        })
    }
}

/// [`CreateAccount`] 的 fire-and-forget 版本：同一工作单元，不向调用端返回标识
#[derive(Debug, Clone)]
pub struct AccountCreationRequested {
    pub email: String,
}

impl Notification for AccountCreationRequested {
    const NAME: &'static str = "accounts.creation_requested";
}

pub struct AccountCreationRequestedHandler;

#[async_trait]
impl NotificationHandler<AccountCreationRequested> for AccountCreationRequestedHandler {
    async fn handle(&self, notification: AccountCreationRequested) -> Result<(), MediatorError> {
        tracing::info!(
            email = %notification.email,
            account_id = %Uuid::new_v4(),
            "creating account"
        );
        Ok(())
    }
}
