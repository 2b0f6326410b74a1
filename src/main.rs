//! Record Exporter CLI
//!
//! Reads `Incoming/InputData.txt` under the current directory, writes
//! `Outgoing/OutputData.csv` and copies both files into `Backup/`.
//!
//! # Usage
//!
//! ```bash
//! cd /path/to/workdir && record-exporter
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `info` to control logging verbosity
//!
//! Every outcome, including failures, is reported on stdout and the process
//! exits with status 0.

use log::{info, warn};
use record_exporter::{exporter, ExportError, ExportSummary, Layout, Result};
use std::env;

const SUCCESS_MESSAGE: &str = "Input file processed and saved successfully.";

fn main() {
    env_logger::init();

    match run() {
        Ok(summary) => {
            info!(
                "Exported {} customers ({} lines)",
                summary.customers, summary.lines_written
            );
            println!("{}", SUCCESS_MESSAGE);
        }
        Err(e) => {
            warn!("Export stopped: {:?}", e);
            println!("{}", e);
        }
    }
}

fn run() -> Result<ExportSummary> {
    let base = env::current_dir().map_err(ExportError::io("resolve working directory", "."))?;
    let layout = Layout::new(base);

    println!("Path: {}", layout.input_file().display());

    exporter::run(&layout)
}
