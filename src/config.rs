//! Runtime settings for the reporting binary.
//!
//! Settings come from environment variables, each with a default:
//!
//! | Variable             | Default | Meaning                                  |
//! |----------------------|---------|------------------------------------------|
//! | `DASHBOARD_DATA_DIR` | `data`  | directory holding the store snapshot     |
//! | `DASHBOARD_YEAR`     | unset   | fiscal year to select before reporting   |
//! | `DASHBOARD_LOG`      | `info`  | `tracing` filter directive               |
//! | `DASHBOARD_PERSIST`  | on      | `0`/`false`/`off` disables saving        |

use std::path::PathBuf;

/// Settings for one run of the reporting binary.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Directory holding `recruitment-storage.json`.
    pub data_dir: PathBuf,
    /// Fiscal year label to select, e.g. `"2024-25"`; `None` keeps the
    /// snapshot's selection.
    pub year: Option<String>,
    /// `tracing` filter directive, e.g. `"dashboard_engine=debug"`.
    pub log_filter: String,
    /// Whether the store is written back after reporting.
    pub persist: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = lookup("DASHBOARD_DATA_DIR").unwrap_or_else(|| "data".to_string());
        let year = lookup("DASHBOARD_YEAR").filter(|y| !y.trim().is_empty());
        let log_filter = lookup("DASHBOARD_LOG").unwrap_or_else(|| "info".to_string());
        let persist = lookup("DASHBOARD_PERSIST")
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "0" | "false" | "off" | "no"))
            .unwrap_or(true);
        Self {
            data_dir: PathBuf::from(data_dir),
            year,
            log_filter,
            persist,
        }
    }
}
