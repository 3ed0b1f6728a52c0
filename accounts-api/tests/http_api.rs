use mediator::InMemoryMediator;
use reqwest::StatusCode;
use serde_json::json;
use std::sync::Arc;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(app: axum::Router) -> Self {
        // 与生产相同的路由，但绑定到临时端口
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn get_accounts_returns_fixed_sample() {
    let srv = TestServer::spawn(accounts_api::app::build_app()).await;

    let res = reqwest::get(format!("{}/accounts", srv.base_url))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!([1, 2, 3]));
}

#[tokio::test]
async fn post_accounts_echoes_submitted_body() {
    let srv = TestServer::spawn(accounts_api::app::build_app()).await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/accounts", srv.base_url))
        .json(&json!({ "email": "x@y.com" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    // 回显的是提交的 email，而不是内部生成的 account_id
    assert_eq!(body, json!({ "email": "x@y.com" }));
}

#[tokio::test]
async fn get_accounts_unchanged_after_posts() {
    let srv = TestServer::spawn(accounts_api::app::build_app()).await;

    let client = reqwest::Client::new();
    for _ in 0..2 {
        let res = client
            .post(format!("{}/accounts", srv.base_url))
            .json(&json!({ "email": "a@b.com" }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    // 无持久化：固定示例数据不随 POST 变化
    let res = client
        .get(format!("{}/accounts", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!([1, 2, 3]));
}

#[tokio::test]
async fn post_still_echoes_when_no_handler_registered() {
    // 空注册表：分发返回 HandlerNotFound，但对调用方仍是 200 + 回显
    let srv = TestServer::spawn(accounts_api::app::router(Arc::new(InMemoryMediator::new()))).await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/accounts", srv.base_url))
        .json(&json!({ "email": "x@y.com" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "email": "x@y.com" }));
}
