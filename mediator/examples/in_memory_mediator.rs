use async_trait::async_trait;
use mediator::InMemoryMediator;
use mediator::error::MediatorError;
use mediator::mediator::Mediator;
use mediator::request::Request;
use mediator::request_handler::RequestHandler;
use std::sync::Arc;

#[derive(Debug)]
struct CreateUser {
    name: String,
}

#[derive(Debug)]
struct UserCreated {
    id: u32,
}

impl Request for CreateUser {
    const NAME: &'static str = "CreateUser";
    type Output = UserCreated;
}

struct CreateUserHandler;

#[async_trait]
impl RequestHandler<CreateUser, UserCreated> for CreateUserHandler {
    async fn handle(&self, req: CreateUser) -> Result<UserCreated, MediatorError> {
        println!("CreateUser: name={}", req.name);
        Ok(UserCreated { id: 42 })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let m = InMemoryMediator::new();
    m.register::<CreateUser, UserCreated, _>(Arc::new(CreateUserHandler))?;

    let created = m
        .send(CreateUser {
            name: "Alice".into(),
        })
        .await?;
    println!("UserCreated: id={}", created.id);

    // 未注册的请求 -> 返回 HandlerNotFound 错误
    #[allow(dead_code)]
    #[derive(Debug)]
    struct DeleteUser {
        id: u32,
    }

    impl Request for DeleteUser {
        const NAME: &'static str = "DeleteUser";
        type Output = ();
    }

    if let Err(MediatorError::HandlerNotFound(name)) = m.send(DeleteUser { id: 7 }).await {
        eprintln!("HandlerNotFound as expected for request: {}", name);
    }
    Ok(())
}
