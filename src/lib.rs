//! # Tempo - Personal Productivity CLI
//!
//! A command-line tool aggregating todo management, focus-session timing,
//! time tracking, and a learning-progress tracker, plus a dashboard
//! summarizing them.
//!
//! ## Features
//!
//! - **Focus Sessions**: Blocking countdown timer with optional breaks,
//!   desktop notification on completion, and per-day statistics
//! - **Todo Management**: Prioritized, optionally recurring tasks
//! - **Time Tracking**: Timesheets with check-in/check-out entries
//! - **Learning Tracker**: Log of coding problems with status and tags
//! - **Dashboard**: Combined weekly view over all modules
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tempo::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
pub mod store;
