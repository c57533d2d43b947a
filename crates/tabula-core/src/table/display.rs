//! Diagnostic text dump of a table. Metadata is not rendered.

use core::fmt;

use crate::Element;

use super::{DataTable, IndependentKey, RowPolicy};

const RULE: &str = "----------------------------------------------------------";

impl<X: IndependentKey, E: Element, P: RowPolicy<X>> fmt::Display for DataTable<X, E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "NumRows: {}", self.num_rows())?;
        writeln!(f, "NumCols: {}", self.num_columns())?;
        if let Ok(labels) = self.column_labels() {
            if !labels.is_empty() {
                let quoted: Vec<String> = labels.iter().map(|l| format!("'{l}'")).collect();
                writeln!(f, "Column-Labels: [{}]", quoted.join(" "))?;
            }
        }
        for (r, key) in self.independent.iter().enumerate() {
            writeln!(f, "{key} {}", self.matrix.row(r))?;
        }
        write!(f, "{RULE}")
    }
}
