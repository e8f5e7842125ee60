use crate::models::transaction::TransactionRecord;

/// Sum of `amount` over the records, in input order. `0.0` when empty.
///
/// No rounding happens here; two-decimal rounding is a formatting concern.
#[must_use]
pub fn aggregate(records: &[TransactionRecord]) -> f64 {
    records.iter().fold(0.0, |total, r| total + r.amount)
}
