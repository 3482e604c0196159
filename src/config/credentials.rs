use crate::utils::error::Result;
use crate::utils::validation::{validate_digit_string, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// SAP logon credential set, matching the fields the RFC gateway expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SapCredentials {
    pub user: String,
    pub passwd: String,
    pub ashost: String,
    pub sysnr: String,
    pub client: String,
}

impl SapCredentials {
    /// Loads credentials from a TOML file. The password can be kept out of
    /// the file and supplied through `SAP_PASSWD` instead.
    pub fn from_toml_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let mut credentials: SapCredentials = toml::from_str(&raw)?;
        if let Ok(passwd) = std::env::var("SAP_PASSWD") {
            credentials.passwd = passwd;
        }
        Ok(credentials)
    }
}

impl Validate for SapCredentials {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("user", &self.user)?;
        validate_non_empty_string("passwd", &self.passwd)?;
        validate_non_empty_string("ashost", &self.ashost)?;
        validate_digit_string("sysnr", &self.sysnr, 2)?;
        validate_digit_string("client", &self.client, 3)?;
        Ok(())
    }
}
