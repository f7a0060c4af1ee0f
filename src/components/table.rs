//! # Table Component
//!
//! A compact table with a header row and fixed column classes.

use super::Component;
use crate::ir::{Op, Tag};

/// A table column: header text and the class applied to its cells.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: String,
    pub class: String,
}

impl Column {
    pub fn new(header: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            class: class.into(),
        }
    }
}

/// A table of text cells.
///
/// Rows shorter than the column list are padded with empty cells.
///
/// ## Example
///
/// ```
/// use advisory_receipt::components::*;
///
/// let table = Table::new("treatment-table")
///     .column(Column::new("Type", "col-type"))
///     .column(Column::new("Dose", "col-dose"))
///     .row(["Fungicide", "5ml/L"]);
///
/// let html = table.build();
/// assert!(html.contains(r#"<th class="col-type">Type</th>"#));
/// assert!(html.contains(r#"<td class="col-dose">5ml/L</td>"#));
/// ```
pub struct Table {
    class: String,
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Append a column.
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Append a row of cells.
    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }
}

impl Component for Table {
    fn emit(&self, ops: &mut Vec<Op>) {
        ops.push(Op::open(Tag::Table, self.class.clone()));

        ops.push(Op::open_plain(Tag::Thead));
        ops.push(Op::open_plain(Tag::Tr));
        for column in &self.columns {
            ops.push(Op::open(Tag::Th, column.class.clone()));
            ops.push(Op::Text(column.header.clone()));
            ops.push(Op::Close(Tag::Th));
        }
        ops.push(Op::Close(Tag::Tr));
        ops.push(Op::Close(Tag::Thead));

        ops.push(Op::open_plain(Tag::Tbody));
        for row in &self.rows {
            ops.push(Op::open_plain(Tag::Tr));
            for (i, column) in self.columns.iter().enumerate() {
                ops.push(Op::open(Tag::Td, column.class.clone()));
                ops.push(Op::Text(row.get(i).cloned().unwrap_or_default()));
                ops.push(Op::Close(Tag::Td));
            }
            ops.push(Op::Close(Tag::Tr));
        }
        ops.push(Op::Close(Tag::Tbody));

        ops.push(Op::Close(Tag::Table));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ComponentExt;

    #[test]
    fn test_header_only() {
        let table = Table::new("t").column(Column::new("A", "a"));
        assert_eq!(
            table.build(),
            r#"<table class="t"><thead><tr><th class="a">A</th></tr></thead><tbody></tbody></table>"#
        );
    }

    #[test]
    fn test_short_row_padded() {
        let table = Table::new("t")
            .column(Column::new("A", "a"))
            .column(Column::new("B", "b"))
            .row(["only"]);
        assert!(table.build().contains(r#"<tr><td class="a">only</td><td class="b"></td></tr>"#));
    }

    #[test]
    fn test_extra_cells_ignored() {
        let table = Table::new("t").column(Column::new("A", "a")).row(["x", "y"]);
        let ir = table.compile();
        assert_eq!(ir.texts(), vec!["A", "x"]);
    }
}
