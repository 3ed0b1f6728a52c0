use axum::{Extension, Json, Router, routing::get};
use mediator::InMemoryMediator;
use mediator::mediator::Mediator;
use std::sync::Arc;

use crate::accounts::{
    AccountCreated, AccountCreationRequested, AccountCreationRequestedHandler, CreateAccount,
    CreateAccountHandler,
};

/// 组装 HTTP 应用：处理器仅在启动期注册，路由挂载后注册表只读
pub fn build_app() -> Router {
    let mediator = Arc::new(InMemoryMediator::new());
    mediator
        .register::<CreateAccount, AccountCreated, _>(Arc::new(CreateAccountHandler))
        .expect("register create-account handler");
    mediator
        .register_notification::<AccountCreationRequested, _>(Arc::new(
            AccountCreationRequestedHandler,
        ))
        .expect("register account-creation notification handler");

    router(mediator)
}

/// 路由树；与处理器注册分离，便于测试时传入空注册表的 mediator
pub fn router(mediator: Arc<InMemoryMediator>) -> Router {
    Router::new()
        .route("/accounts", get(list_accounts).post(create_account))
        .layer(Extension(mediator))
}

/// GET /accounts：固定示例数据，与任何已提交的请求无关
async fn list_accounts() -> Json<[i32; 3]> {
    Json([1, 2, 3])
}

/// POST /accounts：经 mediator 分发创建请求，并原样回显请求体
///
/// 生成的 account_id 不进入响应；找不到处理器时 mediator 记录诊断，
/// 此处仍回显 200（边界吞错策略，见 DESIGN.md）。
async fn create_account(
    Extension(mediator): Extension<Arc<InMemoryMediator>>,
    Json(input): Json<CreateAccount>,
) -> Json<CreateAccount> {
    if let Ok(created) = mediator.send(input.clone()).await {
        tracing::debug!(account_id = %created.account_id, "account created");
    }

    Json(input)
}
