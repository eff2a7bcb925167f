//! Pipe-delimited markup tables
//!
//! Output is meant to be embedded in a larger markup page, so every table
//! ends with a blank line.

use crate::services::SnapshotRow;

/// Render snapshot rows as a pipe-delimited markup table
///
/// Row labels pad the year to four and the month to two places with
/// spaces, so January 2024 reads `2024- 1`.
pub fn render_markdown(accounts: &[String], rows: &[SnapshotRow]) -> String {
    let mut output = String::from("|**month**|");
    for name in accounts {
        output.push_str("**");
        output.push_str(name);
        output.push_str("**|");
    }
    output.push('\n');

    output.push_str("|---|");
    for _ in accounts {
        output.push_str("---|");
    }
    output.push('\n');

    for row in rows {
        output.push_str(&format!(
            "|**{:>4}-{:>2}**|",
            row.label.year, row.label.month
        ));
        for value in &row.values {
            output.push_str(&format!("{}|", value));
        }
        output.push('\n');
    }
    output.push('\n');

    output
}
