//! Cell comparison for ascending column sorts.

use std::{cmp::Ordering, str::FromStr};

use crate::{
    multi_eq_ignore_ascii_case,
    utils::general::{parse_number, partial_ordering},
};

/// How the cells of a column are compared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColumnKind {
    /// Compare as numbers if both cells are numbers, otherwise as text.
    #[default]
    Auto,
    /// Compare as numbers; cells that are not numbers sort after every number, as text.
    Numeric,
    /// Always compare as text.
    Text,
}

impl FromStr for ColumnKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = s.trim();
        if multi_eq_ignore_ascii_case!(kind, "auto") {
            Ok(ColumnKind::Auto)
        } else if multi_eq_ignore_ascii_case!(kind, "numeric" | "number" | "num") {
            Ok(ColumnKind::Numeric)
        } else if multi_eq_ignore_ascii_case!(kind, "text" | "string" | "str") {
            Ok(ColumnKind::Text)
        } else {
            Err(format!("'{s}' is not a valid column kind"))
        }
    }
}

impl ColumnKind {
    /// Compares two cells in ascending order.
    ///
    /// Identical text is always [`Ordering::Equal`], so a stable sort keeps those rows in
    /// their prior relative order.
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }

        match self {
            ColumnKind::Auto => match (parse_number(a), parse_number(b)) {
                (Some(x), Some(y)) => partial_ordering(x, y),
                _ => a.cmp(b),
            },
            ColumnKind::Numeric => match (parse_number(a), parse_number(b)) {
                (Some(x), Some(y)) => partial_ordering(x, y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => a.cmp(b),
            },
            ColumnKind::Text => a.cmp(b),
        }
    }
}

/// Compares two rows by the cell at `column`, in ascending order.
pub fn compare_rows<S: AsRef<str>>(kind: ColumnKind, column: usize, a: &[S], b: &[S]) -> Ordering {
    kind.compare(a[column].as_ref(), b[column].as_ref())
}
