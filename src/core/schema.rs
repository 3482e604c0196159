use crate::domain::model::{FunctionDescription, RfcParameter};
use crate::domain::ports::{RfcConnector, RfcSession};
use crate::utils::error::Result;

/// Fetches the full description of a remote function. The session only lives
/// for this one introspection call.
pub async fn function_description<C: RfcConnector>(
    connector: &C,
    function: &str,
) -> Result<FunctionDescription> {
    tracing::info!(function, "Start getting function description from RFC");
    let mut session = connector.open().await?;
    let description = session.function_description(function).await;
    let closed = session.close().await;
    let description = description?;
    closed?;
    tracing::info!(
        function,
        parameters = description.parameters.len(),
        "RFC description loaded"
    );
    Ok(description)
}

/// Flattens the function description into the field/type pairs the dataset
/// must match.
pub async fn fetch_parameters<C: RfcConnector>(
    connector: &C,
    function: &str,
) -> Result<Vec<RfcParameter>> {
    let description = function_description(connector, function).await?;
    tracing::info!(function, "RFC description formatted");
    Ok(description.parameters)
}
