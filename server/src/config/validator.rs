use crate::config::types::BfhlConfig;
use crate::error::{Result, ServerError};
use crate::identity::parse_date;

impl BfhlConfig {
    /// Check the configuration for missing or malformed values
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(ServerError::invalid_config("server.host must not be empty"));
        }

        if self.server.port == 0 {
            return Err(ServerError::invalid_config("server.port must be between 1 and 65535"));
        }

        let identity = &self.identity;

        if identity.email.trim().is_empty() {
            return Err(ServerError::invalid_config("identity.email must not be empty"));
        }

        if identity.roll_number.trim().is_empty() {
            return Err(ServerError::invalid_config(
                "identity.roll_number must not be empty",
            ));
        }

        let has_user_id = identity
            .user_id
            .as_deref()
            .is_some_and(|id| !id.trim().is_empty());
        let has_full_name = identity
            .full_name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty());

        if !has_user_id && !has_full_name {
            return Err(ServerError::invalid_config(
                "Either identity.user_id or identity.full_name must be set",
            ));
        }

        if let Some(dob) = &identity.date_of_birth {
            parse_date(dob)?;
        }

        Ok(())
    }
}
