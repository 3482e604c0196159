pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::gateway::GatewayConnector;
pub use crate::config::credentials::SapCredentials;
pub use crate::core::engine::IngestEngine;
pub use crate::domain::model::{BatchOutcome, BatchResult, Dataset, IngestReport, Record};
pub use crate::utils::error::{IngestError, Result};
