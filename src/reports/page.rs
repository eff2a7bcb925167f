//! Currency pages
//!
//! Markup documents combining every view of a ledger, plus the index page
//! listing stored currencies.

use crate::models::{Ledger, View};

use super::balance::BalanceReport;

/// Page sections in display order, with their headings
const SECTIONS: [(View, &str); 3] = [
    (View::Holdings, "holdings"),
    (View::Expenses, "expenses"),
    (View::Incomes, "income"),
];

/// One currency's page: holdings, expenses and income tables
#[derive(Debug, Clone)]
pub struct CurrencyPage {
    pub name: String,
    pub reports: Vec<BalanceReport>,
}

impl CurrencyPage {
    /// Compute all sections of a currency page
    pub fn generate(name: impl Into<String>, ledger: &Ledger) -> Self {
        Self {
            name: name.into(),
            reports: SECTIONS
                .iter()
                .map(|(view, _)| BalanceReport::generate(ledger, *view))
                .collect(),
        }
    }

    /// Format the page as markup
    pub fn format_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("# {}\n\n", self.name));
        output.push_str("## currency view\n\n");
        output.push_str(&format!("### _{}_\n\n", self.name));

        for ((_, heading), report) in SECTIONS.iter().zip(&self.reports) {
            output.push_str(&format!("\n#### _{}_\n\n", heading));
            output.push_str(&report.format_markdown());
        }

        output
    }
}

/// Landing page linking every stored currency
pub fn index_page(currencies: &[String]) -> String {
    let mut output = String::from("\n# fin\n\n## money\n\n### _fin_\n\n");
    for currency in currencies {
        output.push_str(&format!(
            "- [{}](/{})\n",
            currency.to_uppercase(),
            currency.to_lowercase()
        ));
    }
    output
}
