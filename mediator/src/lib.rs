pub mod error;
pub mod in_memory_mediator;
pub mod mediator;
pub mod notification;
pub mod notification_handler;
pub mod request;
pub mod request_handler;

pub use in_memory_mediator::InMemoryMediator;
