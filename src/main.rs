mod config;
mod fetcher;
mod filter;
mod model;
mod normalizer;
mod pipeline;
mod schema;
mod storage;
mod utils;

#[cfg(test)]
mod test_support;

use chrono::Local;
use config::{DEFAULT_CONFIG_PATH, load_config};
use fetcher::ApiFetcher;
use model::{RunError, RunSummary};
use std::env;
use std::process::ExitCode;
use storage::{CsvExporter, csv_path};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

const LOG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Panic occurred: {:?}", panic_info);
    }));

    let config_path = env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = match load_config(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let started = Local::now();
    info!("Election Guide export running");
    info!("Run date/time: {}", started.format(LOG_TIME_FORMAT));

    let mut summary = RunSummary::default();
    let result = match ApiFetcher::new(&config) {
        Ok(fetcher) => {
            let mut exporter = CsvExporter::new(csv_path(&config.csv_dir, &started));
            let outcome = pipeline::run(&config, &fetcher, &mut exporter, &mut summary, started.naive_local()).await;
            // Close the file even when the run failed part-way.
            match exporter.finish() {
                Ok(_) => outcome,
                Err(e) => outcome.and(Err(RunError::Export(e))),
            }
        }
        Err(e) => Err(RunError::NoData(e)),
    };

    let code = match &result {
        Ok(()) => {
            info!("Election Guide data successfully exported");
            ExitCode::SUCCESS
        }
        Err(RunError::NoData(e)) => {
            error!("API returned error or invalid data: {}", e);
            info!("Script terminated");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("An error occurred: {}", e);
            ExitCode::FAILURE
        }
    };

    info!(
        "Inserted {} election records ({} skipped, {} before window, {} undated)",
        summary.inserted, summary.skipped, summary.before_window, summary.undated
    );
    info!("Terminating - {}", Local::now().format(LOG_TIME_FORMAT));
    code
}
