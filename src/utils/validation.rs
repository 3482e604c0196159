use crate::utils::error::{IngestError, Result};
use regex::Regex;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(IngestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(IngestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(IngestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(IngestError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(IngestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// SAP logon fields like sysnr and client are fixed-width digit strings.
pub fn validate_digit_string(field_name: &str, value: &str, digits: usize) -> Result<()> {
    let pattern =
        Regex::new(&format!(r"^\d{{{}}}$", digits)).expect("digit pattern is always valid");
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(IngestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be exactly {} digits", digits),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("gateway", "https://example.com").is_ok());
        assert!(validate_url("gateway", "http://example.com").is_ok());
        assert!(validate_url("gateway", "").is_err());
        assert!(validate_url("gateway", "invalid-url").is_err());
        assert!(validate_url("gateway", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("batch_size", 5, 1).is_ok());
        assert!(validate_positive_number("batch_size", 0, 1).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("function", "Z_INGEST").is_ok());
        assert!(validate_non_empty_string("function", "   ").is_err());
    }

    #[test]
    fn test_validate_digit_string() {
        assert!(validate_digit_string("sysnr", "00", 2).is_ok());
        assert!(validate_digit_string("client", "100", 3).is_ok());
        assert!(validate_digit_string("sysnr", "0", 2).is_err());
        assert!(validate_digit_string("sysnr", "0a", 2).is_err());
        assert!(validate_digit_string("client", "1000", 3).is_err());
    }
}
