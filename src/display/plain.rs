//! Plain aligned text tables
//!
//! Every cell is right-aligned in a column as wide as its widest cell plus
//! a fixed padding. Widths count characters, not bytes.

use crate::services::SnapshotRow;

/// Spaces added to the widest cell of each column
pub const COLUMN_PADDING: usize = 2;

/// Label of the header row's first cell
pub const HEADER_LABEL: &str = "---";

/// A grid of text cells rendered with right-aligned, padded columns
#[derive(Debug, Clone)]
pub struct AlignedTable {
    rows: Vec<Vec<String>>,
    padding: usize,
}

impl AlignedTable {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            padding: COLUMN_PADDING,
        }
    }

    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        for row in &self.rows {
            for (col, cell) in row.iter().enumerate() {
                let width = cell.chars().count();
                match widths.get_mut(col) {
                    Some(w) => *w = (*w).max(width),
                    None => widths.push(width),
                }
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut output = String::new();

        for row in &self.rows {
            for (col, cell) in row.iter().enumerate() {
                let fill = widths[col] + self.padding - cell.chars().count();
                output.extend(std::iter::repeat(' ').take(fill));
                output.push_str(cell);
            }
            output.push('\n');
        }

        output
    }
}

impl Default for AlignedTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Render snapshot rows as a plain aligned table
pub fn render_plain(accounts: &[String], rows: &[SnapshotRow]) -> String {
    let mut table = AlignedTable::new();

    table.push_row(std::iter::once(HEADER_LABEL.to_string()).chain(accounts.iter().cloned()));

    for row in rows {
        table.push_row(
            std::iter::once(row.label.to_string())
                .chain(row.values.iter().map(|value| value.to_string())),
        );
    }

    table.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, MonthLabel};

    fn row(year: i64, month: i64, values: &[i64]) -> SnapshotRow {
        SnapshotRow {
            label: MonthLabel { year, month },
            values: values.iter().copied().map(Money::from_minor).collect(),
        }
    }

    #[test]
    fn test_right_aligned_padded_columns() {
        let accounts = vec!["Cash".to_string(), "Bank".to_string()];
        let rows = vec![row(2024, 1, &[0, 500000]), row(2024, 2, &[200000, 300000])];

        let expected = concat!(
            "     ---     Cash     Bank\n",
            "  2024-1     0.00  5000.00\n",
            "  2024-2  2000.00  3000.00\n",
        );
        assert_eq!(render_plain(&accounts, &rows), expected);
    }

    #[test]
    fn test_header_only_when_no_months() {
        let accounts = vec!["Salary".to_string()];
        assert_eq!(render_plain(&accounts, &[]), "  ---  Salary\n");
    }

    #[test]
    fn test_no_accounts_keeps_label_column() {
        let rows = vec![row(2024, 12, &[])];
        assert_eq!(render_plain(&[], &rows), "      ---\n  2024-12\n");
    }

    #[test]
    fn test_width_counts_characters() {
        let mut table = AlignedTable::new();
        table.push_row(["é", "ab"]);
        table.push_row(["xy", "c"]);
        assert_eq!(table.render(), "   é  ab\n  xy   c\n");
    }

    #[test]
    fn test_negative_values_align() {
        let accounts = vec!["Card".to_string()];
        let rows = vec![row(2024, 3, &[-5])];
        assert_eq!(
            render_plain(&accounts, &rows),
            "     ---   Card\n  2024-3  -0.05\n"
        );
    }
}
