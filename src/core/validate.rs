use crate::domain::model::{Dataset, RfcParameter};
use crate::utils::error::{IngestError, Result};

/// Checks that the dataset's columns align 1:1 with the RFC parameters by
/// name and coarse type category. Any mismatch aborts the run before a
/// single row is transmitted.
pub fn check_dataset(dataset: &Dataset, parameters: &[RfcParameter]) -> Result<()> {
    tracing::info!("Start dataset format check");

    if dataset.columns().len() != parameters.len() {
        if dataset.columns().len() > parameters.len() {
            tracing::error!("There are more columns in the dataset than needed");
        } else {
            tracing::error!("There are less columns in the dataset than needed");
        }
        let required = parameters
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(IngestError::ColumnCountMismatch {
            expected: parameters.len(),
            actual: dataset.columns().len(),
            required,
        });
    }

    for column in dataset.columns() {
        let parameter = parameters
            .iter()
            .find(|p| p.name == column.name)
            .ok_or_else(|| IngestError::UnknownColumn {
                column: column.name.clone(),
            })?;

        if let Some(required) = parameter.field_type.required_kind() {
            if column.kind != required {
                return Err(IngestError::ColumnTypeMismatch {
                    column: column.name.clone(),
                    expected: parameter.field_type.type_name().to_string(),
                    actual: column.kind.to_string(),
                });
            }
        }
        tracing::debug!(column = %column.name, "Column format validated");
    }

    tracing::info!("Dataset format validated");
    Ok(())
}
