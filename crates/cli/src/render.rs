//! Plain-text rendering of the dashboard and category picker.

use smartspend_core::models::form::CategoryOption;
use smartspend_core::models::line_item::LineItem;
use smartspend_core::models::summary::{HomeDashboard, SummaryTotals};
use smartspend_core::services::formatter::{format_currency, format_spent_percentage};

const BAR_WIDTH: usize = 30;

pub fn home(dashboard: &HomeDashboard) -> String {
    let mut out = String::new();
    out.push_str(&balance_card(&dashboard.totals));
    out.push('\n');
    out.push_str(&spending_overview(&dashboard.totals));
    out.push('\n');
    out.push_str(&section("Recent Expenses", &dashboard.recent_expenses));
    out.push('\n');
    out.push_str(&section("Recent Incomes", &dashboard.recent_incomes));
    out
}

pub fn balance_card(totals: &SummaryTotals) -> String {
    format!(
        "Balance: {}\n  Expenses: {}    Income: {}\n",
        format_currency(totals.balance()),
        format_currency(totals.total_expense),
        format_currency(totals.total_income),
    )
}

pub fn spending_overview(totals: &SummaryTotals) -> String {
    let filled = (totals.capped_spending_ratio() * BAR_WIDTH as f64).round() as usize;
    let mut out = format!(
        "Spending Overview\n  [{}{}]\n  {}",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        format_spent_percentage(totals.spending_ratio()),
    );
    if totals.exceeds_income() {
        out.push_str("  Exceeding Income!");
    }
    out.push('\n');
    out
}

pub fn section(title: &str, items: &[LineItem]) -> String {
    let mut out = format!("{title}\n");
    if items.is_empty() {
        out.push_str("  (none)\n");
    }
    for item in items {
        out.push_str(&format!(
            "  [{}] {} ({}) {}\n",
            item.icon_key,
            item.description,
            item.display_date,
            item.amount_text()
        ));
    }
    out
}

pub fn category_options(options: &[CategoryOption]) -> String {
    let mut out = String::new();
    for option in options {
        out.push_str(&format!(
            "{}\t{}\t[{}]\n",
            option.category.id, option.category.name, option.icon_key
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(amount: f64) -> LineItem {
        LineItem {
            description: "Milk".into(),
            icon_key: "groceries".into(),
            signed_amount: amount,
            display_date: "02/01/2024".into(),
        }
    }

    #[test]
    fn balance_card_shows_negative_balance() {
        let text = balance_card(&SummaryTotals::new(150.0, 200.0));
        assert!(text.starts_with("Balance: $-50.00"));
        assert!(text.contains("Expenses: $200.00"));
        assert!(text.contains("Income: $150.00"));
    }

    #[test]
    fn overview_warns_when_exceeding_income() {
        let text = spending_overview(&SummaryTotals::new(150.0, 200.0));
        assert!(text.contains("Spent: 133.3%"));
        assert!(text.contains("Exceeding Income!"));
        assert!(text.contains(&"#".repeat(BAR_WIDTH)));
    }

    #[test]
    fn overview_half_spent() {
        let text = spending_overview(&SummaryTotals::new(200.0, 100.0));
        assert!(text.contains("Spent: 50.0%"));
        assert!(!text.contains("Exceeding"));
        assert!(text.contains(&format!("[{}{}]", "#".repeat(15), "-".repeat(15))));
    }

    #[test]
    fn section_lists_items() {
        let text = section("Recent Expenses", &[item(-45.0)]);
        assert_eq!(
            text,
            "Recent Expenses\n  [groceries] Milk (02/01/2024) -$45.00\n"
        );
    }

    #[test]
    fn category_list_rows() {
        let options = [CategoryOption {
            category: smartspend_core::models::category::Category::new("c1", "Groceries"),
            icon_key: "groceries",
        }];
        assert_eq!(category_options(&options), "c1\tGroceries\t[groceries]\n");
    }

    #[test]
    fn empty_section() {
        assert_eq!(section("Recent Incomes", &[]), "Recent Incomes\n  (none)\n");
    }
}
