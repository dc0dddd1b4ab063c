//! inventory-api - A small in-memory inventory management HTTP service
//!
//! Items (name, quantity, price) are created, listed, fetched, replaced and
//! deleted over a JSON REST interface. Storage lives in process memory only.

pub mod cli;
pub mod config;
pub mod http_server;
pub mod inventory;
pub mod observability;
