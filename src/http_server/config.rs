//! Listener and CORS settings for the inventory API

use std::net::SocketAddr;

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};

/// Where the API listens and which browser origins may call it.
///
/// An empty `cors_origins` list allows any origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// `host:port` as written in the config
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parsed listen address. The host must be an IP literal.
    pub fn bind_addr(&self) -> Result<SocketAddr, String> {
        self.socket_addr()
            .parse()
            .map_err(|e| format!("Invalid socket address '{}': {}", self.socket_addr(), e))
    }

    /// Each configured origin as a header value, or the first one that is
    /// not usable in `Access-Control-Allow-Origin`.
    pub fn allowed_origins(&self) -> Result<Vec<HeaderValue>, String> {
        self.cors_origins.iter().map(|origin| parse_origin(origin)).collect()
    }

    /// Check the listen address and every CORS origin
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("http.port must be > 0".to_string());
        }
        self.bind_addr()?;
        self.allowed_origins()?;
        Ok(())
    }
}

pub(crate) fn parse_origin(origin: &str) -> Result<HeaderValue, String> {
    // A wildcard cannot sit in an origin list; leave the list empty instead
    if origin.trim() == "*" {
        return Err("http.cors_origins: use an empty list to allow any origin, not '*'".to_string());
    }
    HeaderValue::from_str(origin)
        .map_err(|_| format!("http.cors_origins: invalid origin '{}'", origin))
}
