//! Directory layout of an export run.
//!
//! Every path is fixed relative to a base directory:
//!
//! ```text
//! <base>/Incoming/InputData.txt
//! <base>/Outgoing/OutputData.csv
//! <base>/Backup/InputData_backup.txt
//! <base>/Backup/OutputData_backup.csv
//! ```

use std::path::{Path, PathBuf};

const INCOMING_DIR: &str = "Incoming";
const OUTGOING_DIR: &str = "Outgoing";
const BACKUP_DIR: &str = "Backup";

const INPUT_FILE: &str = "InputData.txt";
const OUTPUT_FILE: &str = "OutputData.csv";
const INPUT_BACKUP_FILE: &str = "InputData_backup.txt";
const OUTPUT_BACKUP_FILE: &str = "OutputData_backup.csv";

/// Resolves the input, output and backup locations under one base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    base: PathBuf,
}

impl Layout {
    /// Creates a layout rooted at `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Layout { base: base.into() }
    }

    /// Returns the base directory.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Directory the input file is read from.
    pub fn incoming_dir(&self) -> PathBuf {
        self.base.join(INCOMING_DIR)
    }

    /// Directory the output file is written to.
    pub fn outgoing_dir(&self) -> PathBuf {
        self.base.join(OUTGOING_DIR)
    }

    /// Directory holding copies of the last input and output.
    pub fn backup_dir(&self) -> PathBuf {
        self.base.join(BACKUP_DIR)
    }

    /// The three directories an export run makes sure exist.
    pub fn directories(&self) -> [PathBuf; 3] {
        [self.incoming_dir(), self.outgoing_dir(), self.backup_dir()]
    }

    /// Path of the pipe-delimited input file.
    pub fn input_file(&self) -> PathBuf {
        self.incoming_dir().join(INPUT_FILE)
    }

    /// Path of the comma-separated output file.
    pub fn output_file(&self) -> PathBuf {
        self.outgoing_dir().join(OUTPUT_FILE)
    }

    /// Backup copy of the input file.
    pub fn input_backup(&self) -> PathBuf {
        self.backup_dir().join(INPUT_BACKUP_FILE)
    }

    /// Backup copy of the output file.
    pub fn output_backup(&self) -> PathBuf {
        self.backup_dir().join(OUTPUT_BACKUP_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_rooted_at_base() {
        let layout = Layout::new("/data/run");
        assert_eq!(layout.input_file(), Path::new("/data/run/Incoming/InputData.txt"));
        assert_eq!(layout.output_file(), Path::new("/data/run/Outgoing/OutputData.csv"));
        assert_eq!(
            layout.input_backup(),
            Path::new("/data/run/Backup/InputData_backup.txt")
        );
        assert_eq!(
            layout.output_backup(),
            Path::new("/data/run/Backup/OutputData_backup.csv")
        );
    }

    #[test]
    fn test_directories() {
        let layout = Layout::new("base");
        let dirs = layout.directories();
        assert_eq!(dirs[0], Path::new("base/Incoming"));
        assert_eq!(dirs[1], Path::new("base/Outgoing"));
        assert_eq!(dirs[2], Path::new("base/Backup"));
        assert_eq!(layout.base(), Path::new("base"));
    }
}
