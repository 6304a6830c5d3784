//! Report output locations.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

fn default_dir() -> String {
    String::from("./dashboard")
}

fn default_html_file() -> String {
    String::from("traffic_dashboard.html")
}

fn default_csv_prefix() -> String {
    String::from("predictions_")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Directory receiving the dashboard and CSV export.
    #[serde(default = "default_dir")]
    pub dir: String,

    #[serde(default = "default_html_file")]
    pub html_file: String,

    /// CSV name is `<prefix><YYYYMMDD>.csv`.
    #[serde(default = "default_csv_prefix")]
    pub csv_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            html_file: default_html_file(),
            csv_prefix: default_csv_prefix(),
        }
    }
}

impl OutputConfig {
    #[must_use]
    pub fn dir_path(&self) -> &Path {
        Path::new(&self.dir)
    }

    #[must_use]
    pub fn html_path(&self) -> PathBuf {
        self.dir_path().join(&self.html_file)
    }

    #[must_use]
    pub fn csv_path(&self, run_date: NaiveDate) -> PathBuf {
        self.dir_path().join(format!(
            "{}{}.csv",
            self.csv_prefix,
            run_date.format("%Y%m%d")
        ))
    }
}
