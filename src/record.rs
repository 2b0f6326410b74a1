//! Output record kinds and their line rendering.
//!
//! The header keeps the input's field text and only swaps delimiters, while
//! every data row wraps each field in double quotes after a bare tag. Field
//! text is written verbatim; embedded quotes are not escaped.

use crate::decimal::Amount;
use std::fmt;

/// Tag that starts every customer line.
pub const CUSTOMER_TAG: &str = "CUSTOMER_RECORD";

/// Tag that starts every detail and total line.
pub const DETAILS_TAG: &str = "DETAILS_RECORD";

/// Label used in place of a detail label on the per-customer total line.
pub const TOTAL_LABEL: &str = "TOTAL";

/// Field separator of the input file.
pub const INPUT_DELIMITER: char = '|';

/// A single line of the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputRecord<'a> {
    /// The input header with delimiters swapped, unquoted.
    Header(&'a str),

    /// Every field of a customer line, quoted.
    Customer(&'a [&'a str]),

    /// A parsed detail pair with its bucket code.
    Detail {
        label: &'a str,
        code: &'static str,
        amount: Amount,
    },

    /// Sum of every parsed amount on one customer line.
    Total(Amount),
}

impl fmt::Display for OutputRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputRecord::Header(header) => {
                f.write_str(&header.replace(INPUT_DELIMITER, ","))
            }
            OutputRecord::Customer(fields) => {
                f.write_str(CUSTOMER_TAG)?;
                for field in fields.iter() {
                    write!(f, ",\"{}\"", field)?;
                }
                Ok(())
            }
            OutputRecord::Detail {
                label,
                code,
                amount,
            } => write!(f, "{DETAILS_TAG},\"{label}\",\"{code}\",\"{amount}\""),
            OutputRecord::Total(amount) => {
                write!(f, "{DETAILS_TAG},\"{TOTAL_LABEL}\",\"{amount}\"")
            }
        }
    }
}
