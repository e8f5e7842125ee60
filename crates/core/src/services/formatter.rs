use crate::models::category::Category;
use crate::models::line_item::LineItem;
use crate::models::transaction::{TransactionKind, TransactionRecord};
use crate::services::category_resolver::resolve_icon_key;
use crate::services::date_normalizer::normalize_date;

/// Turn one record into a list row. `sign` is `-1.0` for expenses and
/// `1.0` for incomes (see [`TransactionKind::sign`]).
#[must_use]
pub fn to_line_item(record: &TransactionRecord, categories: &[Category], sign: f64) -> LineItem {
    LineItem {
        description: record.description.clone(),
        icon_key: resolve_icon_key(&record.category_id, categories).to_string(),
        signed_amount: sign * record.amount,
        display_date: normalize_date(&record.date),
    }
}

/// Map every record of one kind, keeping order.
#[must_use]
pub fn to_line_items(
    records: &[TransactionRecord],
    categories: &[Category],
    kind: TransactionKind,
) -> Vec<LineItem> {
    records
        .iter()
        .map(|r| to_line_item(r, categories, kind.sign()))
        .collect()
}

/// `+$12.50` for zero and above, `-$45.00` below. `-0.0` counts as zero
/// and prints as `+$0.00`.
#[must_use]
pub fn format_signed_amount(amount: f64) -> String {
    if amount >= 0.0 {
        format!("+${:.2}", amount.abs())
    } else {
        format!("-${:.2}", amount.abs())
    }
}

/// `$1234.50`. A negative value keeps its sign after the dollar: `$-12.50`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    format!("${amount:.2}")
}

/// `Spent: 133.3%` from an uncapped spending ratio.
#[must_use]
pub fn format_spent_percentage(ratio: f64) -> String {
    format!("Spent: {:.1}%", ratio * 100.0)
}
