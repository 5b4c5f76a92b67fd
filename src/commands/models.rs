use std::path::PathBuf;

use crate::dataset::DataSource;
use crate::report::ReportSelection;
use crate::utils::config::DEFAULT_DATA_URL;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Where to load the sales CSV from
    pub data_source: DataSource,

    /// Selector values
    pub selection: ReportSelection,

    /// Output path for the JSON report
    pub output_json: PathBuf,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            data_source: DataSource::parse(DEFAULT_DATA_URL),
            selection: ReportSelection::default(),
            output_json: PathBuf::from("artifacts/report.json"),
            print_summary: false,
        }
    }
}
