//! Error types for the export run.
//!
//! Only the file-handling layer produces these. The transformer itself never
//! fails; bad amounts are dropped and unbucketed amounts become `"ERROR"`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors that stop an export run before the output is complete.
///
/// The display text of each variant is the message shown on the console.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The input file is not present in the incoming directory
    #[error("The input file does not exist in the Incoming folder.")]
    InputMissing { path: PathBuf },

    /// The input file exists but contains no lines
    #[error("The input file is empty.")]
    InputEmpty { path: PathBuf },

    /// A filesystem operation failed
    #[error("An error occurred: could not {action} '{}': {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExportError {
    /// Builds a closure that wraps an `io::Error` for the given action and path.
    pub fn io(action: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| ExportError::Io {
            action,
            path,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let missing = ExportError::InputMissing {
            path: PathBuf::from("in.txt"),
        };
        assert_eq!(
            missing.to_string(),
            "The input file does not exist in the Incoming folder."
        );

        let err = ExportError::io("read input", "in.txt")(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(
            err.to_string(),
            "An error occurred: could not read input 'in.txt': denied"
        );
    }
}
