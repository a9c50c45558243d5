//! Entry point for the Dashboard Engine binary.
//!
//! Running this binary restores the dashboard store from its snapshot
//! (seeding it with the sample data on first run), prints the dashboard
//! report for the selected fiscal year as JSON on stdout and writes the
//! snapshot back.  See [`dashboard_engine::config`] for the environment
//! variables it reads.

use anyhow::{Context, Result};
use dashboard_engine::config::Settings;
use dashboard_engine::persist::Snapshot;
use dashboard_engine::report::DashboardReport;
use dashboard_engine::seed::sample_store;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let settings = Settings::from_env();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let snapshot = Snapshot::in_dir(&settings.data_dir);
    let mut store = snapshot.load_or_else(sample_store);
    if let Some(year) = &settings.year {
        store = store.set_selected_year(year.as_str());
    }
    info!(year = store.selected_year(), "building dashboard report");

    let report = DashboardReport::build(&store, chrono::Local::now().date_naive());
    let json = serde_json::to_string_pretty(&report).context("failed to serialise report")?;
    println!("{json}");

    if settings.persist {
        if let Err(err) = snapshot.save(&store) {
            warn!(error = %err, "snapshot not saved");
        }
    }
    Ok(())
}
