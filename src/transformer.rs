//! Record transformer: turns pipe-delimited customer lines into output lines.
//!
//! The first input line is the header. Every following line is one customer:
//! fields 0-9 are attributes, then `(label, amount)` pairs from field 10 on.
//! Each customer expands to its own record, one detail line per amount that
//! parses, and a closing total line.

use crate::classifier::classify;
use crate::decimal::Amount;
use crate::record::{OutputRecord, INPUT_DELIMITER};
use log::{debug, warn};

/// Index of the first detail label on a customer line.
pub const FIRST_DETAIL_LABEL: usize = 10;

/// Index of the first detail amount on a customer line.
pub const FIRST_DETAIL_AMOUNT: usize = 11;

/// Transforms raw input lines into output lines.
///
/// Callers are expected to reject empty input before calling; an empty slice
/// yields no output. Malformed amounts never fail the transform, they are
/// left out of both the detail lines and the total.
///
/// # Example
///
/// ```
/// use record_exporter::transform;
///
/// let lines = ["id|name", "1|Ann|c|d|e|f|g|h|i|j|Widget|750"];
/// let output = transform(&lines);
/// assert_eq!(output[0], "id,name");
/// assert_eq!(output[2], "DETAILS_RECORD,\"Widget\",\"A\",\"$750.00\"");
/// assert_eq!(output[3], "DETAILS_RECORD,\"TOTAL\",\"$750.00\"");
/// ```
pub fn transform<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let Some((header, customers)) = lines.split_first() else {
        debug!("No input lines to transform");
        return Vec::new();
    };

    let mut output = vec![OutputRecord::Header(header.as_ref()).to_string()];

    for (idx, line) in customers.iter().enumerate() {
        let row = idx + 2; // 1-indexed, after the header
        let columns: Vec<&str> = line.as_ref().split(INPUT_DELIMITER).collect();

        output.push(OutputRecord::Customer(&columns).to_string());
        push_details(&columns, row, &mut output);
        output.push(OutputRecord::Total(customer_total(&columns, row)).to_string());
    }

    output
}

/// Emits one detail line per `(label, amount)` pair whose amount parses.
fn push_details(columns: &[&str], row: usize, output: &mut Vec<String>) {
    for label_idx in (FIRST_DETAIL_LABEL..columns.len()).step_by(2) {
        let amount_idx = label_idx + 1;
        if amount_idx >= columns.len() {
            debug!("Row {}: Detail {:?} has no amount field", row, columns[label_idx]);
            continue;
        }

        match columns[amount_idx].parse::<Amount>() {
            Ok(amount) => {
                let record = OutputRecord::Detail {
                    label: columns[label_idx],
                    code: classify(amount),
                    amount,
                };
                output.push(record.to_string());
            }
            Err(e) => debug!("Row {}: Skipping detail {:?}: {}", row, columns[label_idx], e),
        }
    }
}

/// Sums every amount field that parses, scanning independently of the details.
fn customer_total(columns: &[&str], row: usize) -> Amount {
    let mut total = Amount::ZERO;

    for amount_idx in (FIRST_DETAIL_AMOUNT..columns.len()).step_by(2) {
        let Ok(amount) = columns[amount_idx].parse::<Amount>() else {
            continue;
        };
        match total.checked_add(amount) {
            Some(sum) => total = sum,
            None => warn!(
                "Row {}: Total overflow adding {}, amount left out of total",
                row, columns[amount_idx]
            ),
        }
    }

    total
}
