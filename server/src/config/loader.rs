use crate::config::types::BfhlConfig;
use crate::error::{Result, ServerError};
use std::path::Path;

/// Environment variable overriding the configured port
pub const PORT_ENV: &str = "PORT";

impl BfhlConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(ServerError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ServerError::ConfigParse(e) => ServerError::invalid_config(format!(
                "Failed to parse TOML in {}: {}",
                path_ref.display(),
                e
            )),
            other => other,
        })
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: BfhlConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration and apply the `PORT` environment override
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_from_file(path)?.with_port_override(std::env::var(PORT_ENV).ok().as_deref())
    }

    /// Replace the port with `value` when one is given.
    ///
    /// An empty or blank value counts as unset.
    pub fn with_port_override(mut self, value: Option<&str>) -> Result<Self> {
        if let Some(raw) = value.filter(|v| !v.trim().is_empty()) {
            let port = raw.trim().parse::<u16>().map_err(|_| {
                ServerError::invalid_config(format!("{PORT_ENV} must be a port number, got '{raw}'"))
            })?;
            self.server.port = port;
            self.validate()?;
        }
        Ok(self)
    }
}
