#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum MediatorError {
    #[error("handler not found: {0}")]
    HandlerNotFound(&'static str),

    #[error("handler already registered: request={request}, output={output}")]
    AlreadyRegisteredRequest {
        request: &'static str,
        output: &'static str,
    },

    #[error("handler already registered: notification={notification}")]
    AlreadyRegisteredNotification { notification: &'static str },

    #[error("type mismatch: expected={expected}, found={found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("handler failed: {0}")]
    Handler(String),
}
