pub mod loader;
pub mod templates;
pub mod types;
pub mod validator;

pub use loader::PORT_ENV;
pub use templates::{generate_default_config_template, write_default_config, DEFAULT_CONFIG_FILE};
pub use types::{BfhlConfig, IdentityConfig, ServerConfig, DEFAULT_HOST, DEFAULT_PORT};
