//! # HTTP Server Module
//!
//! This module provides the HTTP API for the inventory service.
//! It combines all endpoint routers into a unified Axum server.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/items`, `/items/{id}` - Item CRUD
//! - `/observability/*` - Health and metrics

pub mod config;
pub mod item_routes;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use item_routes::ItemState;
pub use server::HttpServer;
