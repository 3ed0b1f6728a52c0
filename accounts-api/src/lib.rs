pub mod accounts;
pub mod app;
pub mod telemetry;
