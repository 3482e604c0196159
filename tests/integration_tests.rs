use httpmock::prelude::*;
use rfc_ingest::domain::ports::ConfigProvider;
use rfc_ingest::{Dataset, GatewayConnector, IngestEngine, IngestError, SapCredentials};

struct TestConfig {
    batch_size: usize,
}

impl ConfigProvider for TestConfig {
    fn function_name(&self) -> &str {
        "Z_INGEST"
    }

    fn target_table(&self) -> &str {
        "T_ROWS"
    }

    fn batch_size(&self) -> usize {
        self.batch_size
    }
}

fn credentials() -> SapCredentials {
    SapCredentials {
        user: "ingest_user".to_string(),
        passwd: "secret".to_string(),
        ashost: "sap.example.com".to_string(),
        sysnr: "00".to_string(),
        client: "100".to_string(),
    }
}

fn dataset() -> Dataset {
    Dataset::from_csv_reader("MATNR,MENGE\nA100,1\nA200,2.5\nA300,3\n".as_bytes()).unwrap()
}

fn schema_body() -> serde_json::Value {
    serde_json::json!({
        "function": "Z_INGEST",
        "parameters": [
            {"name": "MATNR", "field_type": "RFCTYPE_CHAR"},
            {"name": "MENGE", "field_type": "RFCTYPE_BCD"}
        ]
    })
}

#[tokio::test]
async fn test_end_to_end_push_through_mock_gateway() {
    let server = MockServer::start();

    let logon = server.mock(|when, then| {
        when.method(POST).path("/sessions").body_contains("ingest_user");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"session_id": "s-1"}));
    });
    let describe = server.mock(|when, then| {
        when.method(GET).path("/sessions/s-1/functions/Z_INGEST");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(schema_body());
    });
    let call = server.mock(|when, then| {
        when.method(POST)
            .path("/sessions/s-1/call")
            .body_contains("T_ROWS");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"rows_written": 2}));
    });
    let logoff = server.mock(|when, then| {
        when.method(DELETE).path("/sessions/s-1");
        then.status(204);
    });

    let connector = GatewayConnector::new(server.base_url(), credentials());
    let engine = IngestEngine::new(connector, TestConfig { batch_size: 2 });

    let report = engine.run(&dataset()).await.unwrap();

    // one session for the schema fetch, one for the push loop
    logon.assert_hits(2);
    describe.assert();
    call.assert_hits(2);
    logoff.assert_hits(2);

    assert_eq!(report.total_rows, 3);
    assert_eq!(report.batches.len(), 2);
    assert_eq!(report.sent_batches(), 2);
    assert_eq!(report.failed_batches(), 0);
    assert_eq!(report.batches[0].rows(), 0..2);
    assert_eq!(report.batches[1].rows(), 2..3);
}

#[tokio::test]
async fn test_failed_batch_is_recorded_and_later_batches_still_sent() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/sessions");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"session_id": "s-1"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/sessions/s-1/functions/Z_INGEST");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(schema_body());
    });
    // the first batch (rows A100, A200) is rejected by the backend
    let rejected = server.mock(|when, then| {
        when.method(POST)
            .path("/sessions/s-1/call")
            .body_contains("A100");
        then.status(500).body("table locked");
    });
    let accepted = server.mock(|when, then| {
        when.method(POST)
            .path("/sessions/s-1/call")
            .body_contains("A300");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"rows_written": 1}));
    });
    let logoff = server.mock(|when, then| {
        when.method(DELETE).path("/sessions/s-1");
        then.status(204);
    });

    let connector = GatewayConnector::new(server.base_url(), credentials());
    let engine = IngestEngine::new(connector, TestConfig { batch_size: 2 });

    let report = engine.run(&dataset()).await.unwrap();

    rejected.assert();
    accepted.assert();
    logoff.assert_hits(2);

    assert_eq!(report.batches.len(), 2);
    assert!(!report.batches[0].is_sent());
    assert!(report.batches[1].is_sent());
    assert_eq!(report.batches[0].rows(), 0..2);
    assert_eq!(report.failed_batches(), 1);
}

#[tokio::test]
async fn test_validation_mismatch_halts_before_any_transmission() {
    let server = MockServer::start();

    let logon = server.mock(|when, then| {
        when.method(POST).path("/sessions");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"session_id": "s-1"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/sessions/s-1/functions/Z_INGEST");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "function": "Z_INGEST",
                "parameters": [
                    {"name": "MATNR", "field_type": "RFCTYPE_CHAR"},
                    {"name": "MENGE", "field_type": "RFCTYPE_BCD"},
                    {"name": "WERKS", "field_type": "RFCTYPE_CHAR"}
                ]
            }));
    });
    let call = server.mock(|when, then| {
        when.method(POST).path("/sessions/s-1/call");
        then.status(200).json_body(serde_json::json!({}));
    });
    let logoff = server.mock(|when, then| {
        when.method(DELETE).path("/sessions/s-1");
        then.status(204);
    });

    let connector = GatewayConnector::new(server.base_url(), credentials());
    let engine = IngestEngine::new(connector, TestConfig { batch_size: 2 });

    let err = engine.run(&dataset()).await.unwrap_err();

    assert!(matches!(err, IngestError::ColumnCountMismatch { .. }));
    // only the schema-fetch session ever existed
    logon.assert();
    call.assert_hits(0);
    logoff.assert();
}

#[tokio::test]
async fn test_logon_failure_surfaces_as_rfc_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/sessions");
        then.status(401);
    });

    let connector = GatewayConnector::new(server.base_url(), credentials());
    let engine = IngestEngine::new(connector, TestConfig { batch_size: 2 });

    let err = engine.run(&dataset()).await.unwrap_err();
    assert!(matches!(err, IngestError::RfcError { .. }));
}
