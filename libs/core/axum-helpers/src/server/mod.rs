//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with OpenAPI documentation, static docs and middleware
//! - Health and readiness helpers
//! - Graceful shutdown on SIGINT/SIGTERM
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router, health_router, RouterOptions};
//! use core_config::{app_info, server::ServerConfig, FromEnv};
//!
//! let router = create_router::<ApiDoc>(api_routes, RouterOptions::from_env()?)
//!     .merge(health_router(app_info!()));
//!
//! create_app(router, &ServerConfig::default()).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

// Re-export commonly used types and functions
pub use app::{create_app, create_router, RouterOptions};
pub use health::{health_router, run_health_checks, HealthCheckFuture, HealthResponse};
pub use shutdown::shutdown_signal;
