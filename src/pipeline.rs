use crate::config::AppConfig;
use crate::fetcher::Fetcher;
use crate::filter::{select_in_window, window_start};
use crate::model::{ElectionRecord, RunError, RunSummary};
use crate::normalizer::normalize;
use crate::schema::Field;
use crate::storage::CsvExporter;
use crate::utils::render_value;
use chrono::NaiveDateTime;
use serde_json::Value;
use tracing::{info, warn};

/// Fetches, filters, normalizes and exports one batch of elections.
///
/// `summary` is filled in as the run progresses so the caller can report it
/// even when the run fails part-way. A record that cannot be decoded or
/// normalized is logged and skipped; fetch and file errors end the run.
pub async fn run<F: Fetcher + ?Sized>(
    config: &AppConfig,
    fetcher: &F,
    exporter: &mut CsvExporter,
    summary: &mut RunSummary,
    now: NaiveDateTime,
) -> Result<(), RunError> {
    let records = fetcher.fetch().await?;
    info!("API returned payload is valid");

    let start = window_start(now.date(), config.window_days);
    let selection = select_in_window(&records, start);
    summary.total = selection.total;
    summary.in_window = selection.selected.len();
    summary.before_window = selection.before_window;
    summary.undated = selection.undated;

    info!("Found total of {} election IDs", summary.total);
    info!("Found {} election IDs starting from {}", summary.in_window, start);
    info!("Found {} election IDs with dates before {}", summary.before_window, start);
    if summary.undated > 0 {
        info!("Found {} election IDs without a usable range start date", summary.undated);
    }
    info!(
        "Exporting {} election IDs to {}",
        summary.in_window,
        exporter.path().display()
    );

    for raw in selection.selected {
        let row = match ElectionRecord::from_value(raw).and_then(|record| normalize(&record, now)) {
            Ok(row) => row,
            Err(e) => {
                summary.skipped += 1;
                let id = raw.get("election_id").unwrap_or(&Value::Null);
                warn!("Skipping election ID {}: {}", render_value(id), e);
                continue;
            }
        };

        exporter.append(&row)?;
        summary.inserted += 1;
        info!(
            "Inserting Election ID {} - {} - {}",
            row.get(Field::ElectionId).unwrap_or_default(),
            row.get(Field::ElectionName).unwrap_or_default(),
            row.get(Field::ElectionRangeStartDate).unwrap_or_default()
        );
    }

    Ok(())
}
