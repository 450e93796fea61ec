//! HTTP server configuration (`[server]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Socket address to listen on (default: "127.0.0.1:5080")
    pub bind: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:5080".to_string(),
        }
    }
}
