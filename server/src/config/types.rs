use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Main configuration structure, read from `bfhl.toml`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BfhlConfig {
    /// Listener settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Identity returned with every successful response
    pub identity: IdentityConfig,
}

/// Listener settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// Static identity fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct IdentityConfig {
    /// Explicit user id; derived from `full_name` when absent
    pub user_id: Option<String>,
    /// Full name used to derive the user id, e.g. "john doe"
    pub full_name: Option<String>,
    /// Date of birth as YYYY-MM-DD; the startup date is used when absent
    pub date_of_birth: Option<String>,
    pub email: String,
    pub roll_number: String,
}
