use crate::error::{Result, ServerError};
use std::fs;
use std::path::Path;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "bfhl.toml";

/// Generate default bfhl.toml template with examples
pub fn generate_default_config_template() -> String {
    r#"# bfhl configuration
# Identity fields are returned with every successful classification response.

[server]
# Address to listen on
host = "0.0.0.0"
# Port to listen on (the PORT environment variable takes precedence)
port = 3000

[identity]
# The user id is derived as <full_name>_<ddmmyyyy>, e.g. "john_doe_17091999"
full_name = "john doe"
# Date used for the user id suffix; the startup date is used when omitted
date_of_birth = "1999-09-17"
# Set user_id to skip derivation entirely
# user_id = "john_doe_17091999"
email = "john@xyz.com"
roll_number = "ABCD123"
"#
    .to_string()
}

/// Write the default configuration to `path`.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn write_default_config<P: AsRef<Path>>(path: P, force: bool) -> Result<()> {
    let path = path.as_ref();

    if path.exists() && !force {
        return Err(ServerError::ConfigExists {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, generate_default_config_template())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BfhlConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_is_valid_config() {
        let config = BfhlConfig::from_toml_str(&generate_default_config_template()).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.identity.full_name.as_deref(), Some("john doe"));
    }

    #[test]
    fn test_write_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join(DEFAULT_CONFIG_FILE);

        write_default_config(&path, false).unwrap();
        assert!(path.exists());

        let err = write_default_config(&path, false).unwrap_err();
        assert!(matches!(err, ServerError::ConfigExists { .. }));

        fs::write(&path, "garbage").unwrap();
        write_default_config(&path, true).unwrap();
        assert!(BfhlConfig::load_from_file(&path).is_ok());
    }
}
