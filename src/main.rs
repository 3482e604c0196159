use clap::Parser;
use rfc_ingest::utils::{logger, validation::Validate};
use rfc_ingest::{CliConfig, Dataset, GatewayConnector, IngestEngine, SapCredentials};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting rfc-ingest CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let credentials = match SapCredentials::from_toml_path(&config.credentials) {
        Ok(credentials) => credentials,
        Err(e) => {
            tracing::error!("Could not load credentials: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = credentials.validate() {
        tracing::error!("Credential validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let dataset = match Dataset::from_csv_path(&config.input) {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::error!("Could not load dataset: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(
        rows = dataset.row_count(),
        columns = dataset.columns().len(),
        "Dataset loaded"
    );

    let connector = GatewayConnector::new(config.gateway.clone(), credentials);
    let engine = IngestEngine::new(connector, config.clone());

    match engine.run(&dataset).await {
        Ok(report) => {
            println!(
                "✅ Ingestion finished: {}/{} batches sent",
                report.sent_batches(),
                report.batches.len()
            );
            if let Some(path) = &config.report {
                std::fs::write(path, serde_json::to_string_pretty(&report)?)?;
                println!("📁 Report saved to: {}", path.display());
            }
            if report.failed_batches() > 0 {
                std::process::exit(2);
            }
        }
        Err(e) => {
            tracing::error!("Ingestion failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
