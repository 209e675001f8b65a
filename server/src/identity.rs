use crate::config::IdentityConfig;
use crate::error::{Result, ServerError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identity fields attached to every successful response.
///
/// Resolved once at startup and shared read-only across requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: String,
    pub email: String,
    pub roll_number: String,
}

impl Identity {
    /// Resolve configured identity, deriving the user id if needed.
    ///
    /// `today` stands in for a missing date of birth.
    pub fn resolve(config: &IdentityConfig, today: NaiveDate) -> Result<Self> {
        let user_id = match config.user_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => {
                let name = config.full_name.as_deref().unwrap_or_default();
                if name.trim().is_empty() {
                    return Err(ServerError::invalid_config(
                        "Either identity.user_id or identity.full_name must be set",
                    ));
                }
                let date = match &config.date_of_birth {
                    Some(dob) => parse_date(dob)?,
                    None => today,
                };
                derive_user_id(name, date)
            }
        };

        Ok(Self {
            user_id,
            email: config.email.trim().to_string(),
            roll_number: config.roll_number.trim().to_string(),
        })
    }
}

/// `"John  Doe"` + 1999-09-17 -> `"john_doe_17091999"`
pub fn derive_user_id(full_name: &str, date: NaiveDate) -> String {
    let name = full_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase();
    format!("{}_{}", name, date.format("%d%m%Y"))
}

/// Parse a YYYY-MM-DD date
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| {
        ServerError::invalid_config(format!(
            "identity.date_of_birth must be YYYY-MM-DD, got '{raw}': {e}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn identity_config() -> IdentityConfig {
        IdentityConfig {
            user_id: None,
            full_name: Some("varnit  singh".to_string()),
            date_of_birth: Some("2004-01-02".to_string()),
            email: "varnit@example.com".to_string(),
            roll_number: "22BIT0221".to_string(),
        }
    }

    #[test]
    fn test_derive_user_id() {
        assert_eq!(
            derive_user_id("varnit  singh", date(2004, 1, 2)),
            "varnit_singh_02012004"
        );
        assert_eq!(
            derive_user_id("  John Doe ", date(1999, 9, 17)),
            "john_doe_17091999"
        );
    }

    #[test]
    fn test_resolve_from_date_of_birth() {
        let identity = Identity::resolve(&identity_config(), date(2030, 1, 1)).unwrap();
        assert_eq!(identity.user_id, "varnit_singh_02012004");
        assert_eq!(identity.email, "varnit@example.com");
        assert_eq!(identity.roll_number, "22BIT0221");
    }

    #[test]
    fn test_resolve_falls_back_to_today() {
        let config = IdentityConfig {
            date_of_birth: None,
            ..identity_config()
        };
        let identity = Identity::resolve(&config, date(2026, 10, 17)).unwrap();
        assert_eq!(identity.user_id, "varnit_singh_17102026");
    }

    #[test]
    fn test_explicit_user_id_wins() {
        let config = IdentityConfig {
            user_id: Some("custom_id".to_string()),
            ..identity_config()
        };
        let identity = Identity::resolve(&config, date(2026, 10, 17)).unwrap();
        assert_eq!(identity.user_id, "custom_id");
    }

    #[test]
    fn test_resolve_requires_a_name() {
        let config = IdentityConfig {
            full_name: None,
            ..identity_config()
        };
        assert!(Identity::resolve(&config, date(2026, 10, 17)).is_err());
    }
}
