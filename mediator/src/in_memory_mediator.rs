use crate::{
    error::MediatorError, mediator::Mediator, notification::Notification,
    notification_handler::NotificationHandler, request::Request, request_handler::RequestHandler,
};
use async_trait::async_trait;
use dashmap::DashMap;
use std::any::{Any, TypeId, type_name};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

type BoxAnySend = Box<dyn Any + Send>;

type RequestFuture = Pin<Box<dyn Future<Output = Result<BoxAnySend, MediatorError>> + Send>>;

type RequestFn = Arc<dyn Fn(BoxAnySend) -> RequestFuture + Send + Sync>;

type NotificationFuture = Pin<Box<dyn Future<Output = Result<(), MediatorError>> + Send>>;

type NotificationFn = Arc<dyn Fn(BoxAnySend) -> NotificationFuture + Send + Sync>;

/// 基于内存的 Mediator 实现
/// - 启动期通过 TypeId 注册不同 Request/Notification 对应的 Handler，之后只读
/// - 运行时以类型擦除（Any）方式进行调度，并在调用端进行结果还原
pub struct InMemoryMediator {
    // 使用 (RequestTypeId, OutputTypeId) 作为键，避免相同 Request 不同输出类型的冲突
    requests: DashMap<(TypeId, TypeId), (&'static str, RequestFn)>,
    notifications: DashMap<TypeId, (&'static str, NotificationFn)>,
}

impl Default for InMemoryMediator {
    fn default() -> Self {
        Self {
            requests: DashMap::new(),
            notifications: DashMap::new(),
        }
    }
}

impl InMemoryMediator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册请求处理器
    ///
    /// 同一（请求, 输出）键至多一个处理器；重复注册返回错误。
    pub fn register<R, O, H>(&self, handler: Arc<H>) -> Result<(), MediatorError>
    where
        R: Send + Sync + 'static,
        O: Send + Sync + 'static,
        H: RequestHandler<R, O> + 'static,
    {
        let key = (TypeId::of::<R>(), TypeId::of::<O>());

        if self.requests.contains_key(&key) {
            return Err(MediatorError::AlreadyRegisteredRequest {
                request: type_name::<R>(),
                output: type_name::<O>(),
            });
        }

        let f: RequestFn = {
            let handler = handler.clone();

            Arc::new(move |boxed_req| {
                let handler = handler.clone();

                Box::pin(async move {
                    match boxed_req.downcast::<R>() {
                        Ok(req) => {
                            let out = handler.handle(*req).await?;
                            Ok(Box::new(out) as BoxAnySend)
                        }
                        Err(_) => Err(MediatorError::TypeMismatch {
                            expected: type_name::<R>(),
                            found: "unknown",
                        }),
                    }
                })
            })
        };

        self.requests.insert(key, (type_name::<R>(), f));

        Ok(())
    }

    /// 注册通知处理器
    pub fn register_notification<N, H>(&self, handler: Arc<H>) -> Result<(), MediatorError>
    where
        N: Notification,
        H: NotificationHandler<N> + 'static,
    {
        let key = TypeId::of::<N>();

        if self.notifications.contains_key(&key) {
            return Err(MediatorError::AlreadyRegisteredNotification {
                notification: N::NAME,
            });
        }

        let f: NotificationFn = {
            let handler = handler.clone();

            Arc::new(move |boxed_notification| {
                let handler = handler.clone();

                Box::pin(async move {
                    match boxed_notification.downcast::<N>() {
                        Ok(notification) => handler.handle(*notification).await,
                        Err(_) => Err(MediatorError::TypeMismatch {
                            expected: type_name::<N>(),
                            found: "unknown",
                        }),
                    }
                })
            })
        };

        self.notifications.insert(key, (N::NAME, f));

        Ok(())
    }

    /// 获取已注册的请求类型名列表（只读视图）
    pub fn registered_requests(&self) -> Vec<&'static str> {
        self.requests.iter().map(|e| e.value().0).collect()
    }

    async fn dispatch_impl<R, O>(&self, req: R) -> Result<O, MediatorError>
    where
        R: Send + Sync + 'static,
        O: Send + Sync + 'static,
    {
        let key = (TypeId::of::<R>(), TypeId::of::<O>());
        let Some((name, f)) = self.requests.get(&key).map(|h| h.clone()) else {
            tracing::error!(
                request = type_name::<R>(),
                output = type_name::<O>(),
                "handler not found"
            );
            return Err(MediatorError::HandlerNotFound(type_name::<R>()));
        };

        tracing::debug!(request = name, "dispatching to handler");

        let out = (f)(Box::new(req)).await?;

        match out.downcast::<O>() {
            Ok(out) => Ok(*out),
            Err(_) => Err(MediatorError::TypeMismatch {
                expected: type_name::<O>(),
                found: "unknown",
            }),
        }
    }
}

#[async_trait]
impl Mediator for InMemoryMediator {
    async fn dispatch<R, O>(&self, req: R) -> Result<O, MediatorError>
    where
        R: Send + Sync + 'static,
        O: Send + Sync + 'static,
    {
        self.dispatch_impl::<R, O>(req).await
    }

    async fn send<R>(&self, req: R) -> Result<R::Output, MediatorError>
    where
        R: Request,
    {
        self.dispatch_impl::<R, R::Output>(req).await
    }

    async fn publish<N>(&self, notification: N) -> Result<(), MediatorError>
    where
        N: Notification,
    {
        let Some((name, f)) = self
            .notifications
            .get(&TypeId::of::<N>())
            .map(|h| h.clone())
        else {
            tracing::error!(notification = N::NAME, "handler not found");
            return Err(MediatorError::HandlerNotFound(N::NAME));
        };

        tracing::debug!(notification = name, "publishing to handler");

        (f)(Box::new(notification)).await
    }
}
