use crate::domain::model::{FunctionDescription, Record};
use crate::utils::error::Result;
use async_trait::async_trait;

/// One open session against the remote system. All transport belongs to the
/// implementation; core code only sequences the calls.
#[async_trait]
pub trait RfcSession: Send {
    /// Fetch the input schema of a remote function.
    async fn function_description(&mut self, function: &str) -> Result<FunctionDescription>;

    /// Invoke the function with a chunk of rows keyed under the table
    /// parameter name. Returns whatever the remote side answers.
    async fn call(
        &mut self,
        function: &str,
        table: &str,
        rows: &[Record],
    ) -> Result<serde_json::Value>;

    /// Release the session. Implementations must tolerate a second call.
    async fn close(&mut self) -> Result<()>;
}

#[async_trait]
pub trait RfcConnector: Send + Sync {
    type Session: RfcSession;

    async fn open(&self) -> Result<Self::Session>;
}

pub trait ConfigProvider: Send + Sync {
    fn function_name(&self) -> &str;
    fn target_table(&self) -> &str;
    fn batch_size(&self) -> usize;
}
