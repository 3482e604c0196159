pub mod credentials;

pub use credentials::SapCredentials;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "rfc-ingest")]
#[command(about = "Push a tabular dataset into an SAP system through an RFC gateway")]
pub struct CliConfig {
    /// CSV file with the rows to send
    #[arg(long)]
    pub input: PathBuf,

    /// Name of the RFC function to call
    #[arg(long)]
    pub function: String,

    /// Table parameter the RFC populates
    #[arg(long)]
    pub table: String,

    /// Rows sent per RFC call
    #[arg(long, default_value = "1000")]
    pub batch_size: usize,

    /// Base URL of the RFC gateway
    #[arg(long)]
    pub gateway: String,

    /// TOML file with the SAP logon credentials
    #[arg(long, default_value = "sap_credentials.toml")]
    pub credentials: PathBuf,

    /// Where to write the JSON ingestion report
    #[arg(long)]
    pub report: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn function_name(&self) -> &str {
        &self.function
    }

    fn target_table(&self) -> &str {
        &self.table
    }

    fn batch_size(&self) -> usize {
        self.batch_size
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("function", &self.function)?;
        validate_non_empty_string("table", &self.table)?;
        validate_positive_number("batch_size", self.batch_size, 1)?;
        validate_url("gateway", &self.gateway)?;
        Ok(())
    }
}
