use physio_match::config::Settings;
use physio_match::models::PatientCondition;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Reads a patient condition as JSON on stdin and prints the recommended
/// doctors as JSON on stdout.
#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Logging settings come from the config when it loads, env vars win
    let settings = Settings::load();
    let logging = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();

    let log_level = std::env::var("LOG_LEVEL").unwrap_or(logging.level);
    let log_format = std::env::var("LOG_FORMAT").unwrap_or(logging.format);

    // stdout carries the result, logs go to stderr
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Configuration loaded successfully");

    let condition: PatientCondition = match serde_json::from_reader(io::stdin().lock()) {
        Ok(condition) => condition,
        Err(e) => {
            error!("Invalid patient condition JSON: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let service = settings.recommendation_service();

    let doctors = match service.recommend(&condition).await {
        Ok(doctors) => doctors,
        Err(e) => {
            error!("Failed to recommend doctors: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = serde_json::to_writer_pretty(&mut stdout, &doctors) {
        error!("Failed to write recommendations: {}", e);
        return ExitCode::FAILURE;
    }
    let _ = writeln!(stdout);

    ExitCode::SUCCESS
}
