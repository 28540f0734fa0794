use std::path::PathBuf;

/// Where the report goes and how chatty the logs are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Report file, created or overwritten on every run.
    pub report_path: PathBuf,
    /// Log filter used when `RUST_LOG` is not set.
    pub default_log_filter: String,
}

impl AppConfig {
    pub const DEFAULT_REPORT_PATH: &'static str = "reporte_inventario.txt";

    pub fn with_report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = path.into();
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            report_path: PathBuf::from(Self::DEFAULT_REPORT_PATH),
            default_log_filter: "info".to_string(),
        }
    }
}
