//! Livestoq: a demo livestock marketplace backed by an in-memory data layer.
//!
//! The crate exposes the domain modules (scan assessments, marketplace
//! listings, the auth stub, and the Stoqy assistant) as a library so the
//! HTTP routers and services can be exercised directly in tests, plus the
//! CLI entry point used by the binary.

pub mod assistant;
pub mod auth;
mod cli;
pub mod config;
mod demo;
pub mod error;
pub mod format;
pub mod marketplace;
mod routes;
pub mod scan;
mod server;
pub mod store;
pub mod telemetry;

use error::AppError;

/// Run the Livestoq CLI (defaults to serving HTTP when no subcommand is given).
pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
