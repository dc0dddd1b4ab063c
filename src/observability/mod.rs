//! Observability subsystem for the inventory service
//!
//! This module provides:
//! - Structured logging through `tracing`
//! - Operational counters
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on request handling
//! 3. No background threads
//!
//! # Usage
//!
//! ```ignore
//! use inventory_api::observability::{init_logging, LogConfig, MetricsRegistry};
//!
//! init_logging(&LogConfig::default());
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_created();
//! ```

mod logger;
mod metrics;

pub use logger::{init_logging, LogConfig, LogFormat, LOG_LEVELS};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
