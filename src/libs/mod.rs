pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod notifier;
pub mod session;
pub mod view;
