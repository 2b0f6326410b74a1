//! Amount classification into single-letter bucket codes.

use crate::decimal::Amount;
use rust_decimal::Decimal;

/// Code returned when an amount falls outside every bucket.
pub const UNCLASSIFIED: &str = "ERROR";

/// One end of a bucket range.
#[derive(Debug, Clone, Copy)]
enum Bound {
    Min,
    At(i64),
    Max,
}

impl Bound {
    fn value(self) -> Decimal {
        match self {
            Bound::Min => Decimal::MIN,
            Bound::At(v) => Decimal::from(v),
            Bound::Max => Decimal::MAX,
        }
    }
}

/// Buckets as `(exclusive lower, inclusive upper, code)`, checked in order.
const BUCKETS: [(Bound, Bound, &str); 11] = [
    (Bound::Min, Bound::At(500), "N"),
    (Bound::At(500), Bound::At(1000), "A"),
    (Bound::At(1000), Bound::At(1500), "C"),
    (Bound::At(1500), Bound::At(2000), "L"),
    (Bound::At(2000), Bound::At(2500), "P"),
    (Bound::At(2500), Bound::At(3000), "X"),
    (Bound::At(3000), Bound::At(5000), "T"),
    (Bound::At(5000), Bound::At(10000), "S"),
    (Bound::At(10000), Bound::At(20000), "U"),
    (Bound::At(20000), Bound::At(30000), "R"),
    (Bound::At(30000), Bound::Max, "V"),
];

/// Returns the code of the first bucket with `min < amount <= max`.
///
/// The outer buckets stop at the decimal range limits, so the smallest
/// representable amount matches nothing and maps to [`UNCLASSIFIED`].
pub fn classify(amount: Amount) -> &'static str {
    let value = amount.value();
    BUCKETS
        .iter()
        .find(|(min, max, _)| value > min.value() && value <= max.value())
        .map(|(_, _, code)| *code)
        .unwrap_or(UNCLASSIFIED)
}
