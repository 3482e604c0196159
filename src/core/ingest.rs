use crate::domain::model::{BatchOutcome, BatchResult, Dataset};
use crate::domain::ports::{RfcConnector, RfcSession};
use crate::utils::error::{IngestError, Result};

/// Pushes the dataset through the RFC in row batches, one session for the
/// whole loop. A failed call is recorded against its row range and does not
/// stop the remaining batches; only session-level errors abort.
pub async fn push_dataset<C: RfcConnector>(
    connector: &C,
    function: &str,
    table: &str,
    dataset: &Dataset,
    batch_size: usize,
) -> Result<Vec<BatchResult>> {
    if batch_size == 0 {
        return Err(IngestError::InvalidConfigValueError {
            field: "batch_size".to_string(),
            value: "0".to_string(),
            reason: "Batch size must be at least 1".to_string(),
        });
    }

    let rows = dataset.rows();
    let batch_count = rows.len().div_ceil(batch_size);
    tracing::info!(
        function,
        table,
        rows = rows.len(),
        batch_size,
        batches = batch_count,
        "Start data ingestion process"
    );

    let mut results = Vec::with_capacity(batch_count);
    let mut session = connector.open().await?;

    for index in 0..batch_count {
        let first_row = index * batch_size;
        let end_row = usize::min(first_row + batch_size, rows.len());
        tracing::info!(first_row, end_row, "Start sending rows");

        let outcome = match session.call(function, table, &rows[first_row..end_row]).await {
            Ok(result) => {
                tracing::info!(first_row, end_row, "Rows sent");
                BatchOutcome::Sent { result }
            }
            Err(e) => {
                tracing::warn!(first_row, end_row, error = %e, "Batch transmission failed");
                BatchOutcome::Failed {
                    error: e.to_string(),
                }
            }
        };

        results.push(BatchResult {
            first_row,
            end_row,
            outcome,
        });
    }

    session.close().await?;
    tracing::info!("End data ingestion process");
    Ok(results)
}
