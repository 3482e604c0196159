use crate::core::{ingest, schema, validate};
use crate::domain::model::{Dataset, IngestReport};
use crate::domain::ports::{ConfigProvider, RfcConnector};
use crate::utils::error::Result;
use chrono::Utc;

/// Runs the full pipeline: fetch the RFC parameter schema, validate the
/// dataset against it, then push the rows in batches.
pub struct IngestEngine<C: RfcConnector, P: ConfigProvider> {
    connector: C,
    config: P,
}

impl<C: RfcConnector, P: ConfigProvider> IngestEngine<C, P> {
    pub fn new(connector: C, config: P) -> Self {
        Self { connector, config }
    }

    pub async fn run(&self, dataset: &Dataset) -> Result<IngestReport> {
        let function = self.config.function_name();
        let table = self.config.target_table();
        let batch_size = self.config.batch_size();
        let started_at = Utc::now();

        tracing::info!(function, table, "Starting RFC ingestion");

        let parameters = schema::fetch_parameters(&self.connector, function).await?;

        validate::check_dataset(dataset, &parameters)?;

        let batches =
            ingest::push_dataset(&self.connector, function, table, dataset, batch_size).await?;

        let report = IngestReport {
            function: function.to_string(),
            table: table.to_string(),
            total_rows: dataset.row_count(),
            batch_size,
            started_at,
            finished_at: Utc::now(),
            batches,
        };

        tracing::info!(
            sent = report.sent_batches(),
            failed = report.failed_batches(),
            "RFC ingestion finished"
        );
        Ok(report)
    }
}
