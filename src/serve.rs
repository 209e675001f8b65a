use crate::error::{CliError, Context, Result};
use crate::{logging, ui};
use server::BfhlConfig;
use std::path::Path;
use tokio::runtime::Runtime;

pub fn execute(config_path: String, host: Option<String>, port: Option<u16>, verbose: bool) -> Result<()> {
    logging::init(verbose);

    ui::status_message("Loading configuration");
    let config = BfhlConfig::load_with_env(Path::new(&config_path))
        .context(format!("Failed to load {config_path}"))?;
    let config = apply_overrides(config, host, port)?;

    ui::success_message(&format!(
        "Loaded configuration from {config_path}, serving on {}",
        config.server.address()
    ));
    ui::info_message("Press Ctrl+C to stop");

    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {e}")))?;

    rt.block_on(server::serve(config))?;
    Ok(())
}

/// Apply command line overrides on top of the loaded configuration
fn apply_overrides(mut config: BfhlConfig, host: Option<String>, port: Option<u16>) -> Result<BfhlConfig> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
[identity]
user_id = "john_doe_17091999"
email = "john@xyz.com"
roll_number = "ABCD123"
"#;

    #[test]
    fn test_overrides_replace_config_values() {
        let config = BfhlConfig::from_toml_str(CONFIG).unwrap();
        let config = apply_overrides(config, Some("127.0.0.1".to_string()), Some(8080)).unwrap();

        assert_eq!(config.server.address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_no_overrides_keep_defaults() {
        let config = BfhlConfig::from_toml_str(CONFIG).unwrap();
        let config = apply_overrides(config, None, None).unwrap();

        assert_eq!(config.server.address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let config = BfhlConfig::from_toml_str(CONFIG).unwrap();
        assert!(apply_overrides(config, None, Some(0)).is_err());
    }
}
