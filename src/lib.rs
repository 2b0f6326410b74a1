//! # Record Exporter
//!
//! Converts a pipe-delimited customer transaction file into a comma-separated
//! record file with bucket codes for every detail amount and a total per
//! customer.
//!
//! ## Design Principles
//!
//! - **Decimal arithmetic**: amounts are summed with `rust_decimal` and only
//!   rounded to two places when written
//! - **Pure core**: [`transform`] works on in-memory lines and never fails;
//!   malformed amounts are skipped
//! - **Errors at the edge**: only the file handling in [`exporter`] returns
//!   [`ExportError`]
//!
//! ## Example
//!
//! ```
//! use record_exporter::transform;
//!
//! let input = ["id|name", "7|Bo|c|d|e|f|g|h|i|j|Rent|1,200.50|Fee|n/a"];
//! let output = transform(&input);
//! assert_eq!(output, vec![
//!     "id,name",
//!     "CUSTOMER_RECORD,\"7\",\"Bo\",\"c\",\"d\",\"e\",\"f\",\"g\",\"h\",\"i\",\"j\",\"Rent\",\"1,200.50\",\"Fee\",\"n/a\"",
//!     "DETAILS_RECORD,\"Rent\",\"C\",\"$1200.50\"",
//!     "DETAILS_RECORD,\"TOTAL\",\"$1200.50\"",
//! ]);
//! ```

pub mod classifier;
pub mod decimal;
pub mod error;
pub mod exporter;
pub mod layout;
pub mod record;
pub mod transformer;

pub use classifier::{classify, UNCLASSIFIED};
pub use decimal::{Amount, ParseAmountError};
pub use error::{ExportError, Result};
pub use exporter::ExportSummary;
pub use layout::Layout;
pub use record::OutputRecord;
pub use transformer::transform;
