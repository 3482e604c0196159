pub mod engine;
pub mod ingest;
pub mod schema;
pub mod validate;

pub use crate::domain::model::{
    BatchOutcome, BatchResult, Dataset, FunctionDescription, IngestReport, Record, RfcParameter,
};
pub use crate::domain::ports::{ConfigProvider, RfcConnector, RfcSession};
pub use crate::utils::error::Result;
