// Shared infrastructure
pub mod config;
pub mod error;
pub mod metrics;
pub mod storage;

// Domain layer
pub mod access;
pub mod identity;
pub mod notification;
pub mod reports;

// Application layer
pub mod api;
pub mod server;
