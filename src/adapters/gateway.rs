use crate::config::credentials::SapCredentials;
use crate::domain::model::{FunctionDescription, Record};
use crate::domain::ports::{RfcConnector, RfcSession};
use crate::utils::error::{IngestError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Connector for an HTTP/JSON RFC gateway. Logon yields a session token,
/// description and call requests are scoped to it, logoff releases it. The
/// wire shape is owned by the gateway; nothing here leaks into core code.
#[derive(Debug, Clone)]
pub struct GatewayConnector {
    endpoint: String,
    credentials: SapCredentials,
    client: Client,
}

impl GatewayConnector {
    pub fn new(endpoint: String, credentials: SapCredentials) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            credentials,
            client: Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LogonResponse {
    session_id: String,
}

#[async_trait]
impl RfcConnector for GatewayConnector {
    type Session = GatewaySession;

    async fn open(&self) -> Result<GatewaySession> {
        tracing::info!("Start RFC session");
        let response = self
            .client
            .post(format!("{}/sessions", self.endpoint))
            .json(&self.credentials)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(IngestError::RfcError {
                message: format!("Logon rejected with status {}", response.status()),
            });
        }

        let logon: LogonResponse = response.json().await?;
        tracing::info!("RFC session established");
        Ok(GatewaySession {
            endpoint: self.endpoint.clone(),
            client: self.client.clone(),
            session_id: logon.session_id,
            closed: false,
        })
    }
}

/// One logged-on gateway session. If it is dropped without `close`, release
/// falls to the gateway's own session expiry.
pub struct GatewaySession {
    endpoint: String,
    client: Client,
    session_id: String,
    closed: bool,
}

#[async_trait]
impl RfcSession for GatewaySession {
    async fn function_description(&mut self, function: &str) -> Result<FunctionDescription> {
        let url = format!(
            "{}/sessions/{}/functions/{}",
            self.endpoint, self.session_id, function
        );
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(IngestError::RfcError {
                message: format!(
                    "Description request for {} failed with status {}",
                    function,
                    response.status()
                ),
            });
        }

        Ok(response.json().await?)
    }

    async fn call(
        &mut self,
        function: &str,
        table: &str,
        rows: &[Record],
    ) -> Result<serde_json::Value> {
        // multirow input: the rows land under the table parameter name
        let body = serde_json::json!({
            "function": function,
            "parameters": { table: rows },
        });
        let response = self
            .client
            .post(format!(
                "{}/sessions/{}/call",
                self.endpoint, self.session_id
            ))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(IngestError::RfcError {
                message: format!("Call to {} failed with status {}: {}", function, status, detail),
            });
        }

        Ok(response.json().await?)
    }

    async fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        let response = self
            .client
            .delete(format!("{}/sessions/{}", self.endpoint, self.session_id))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(IngestError::RfcError {
                message: format!("Logoff failed with status {}", response.status()),
            });
        }

        self.closed = true;
        tracing::info!("RFC session closed");
        Ok(())
    }
}
