//! In-memory tabular data with named, ordered columns

use crate::csv::CsvEncoder;
use crate::types::Value;
use indexmap::IndexMap;
use std::fmt;

/// A small column-ordered data frame.
///
/// Columns are named, keep their insertion order, and always have equal
/// length. Missing cells are explicit `Value::Null` entries, so row count is
/// uniform across every column.
///
/// # Examples
///
/// ```
/// use txtframe::{Frame, Value};
///
/// let frame = Frame::from_rows(
///     vec!["name".to_string(), "age".to_string()],
///     vec![
///         vec![Value::from("alice"), Value::Int(30)],
///         vec![Value::from("bob"), Value::Int(25)],
///     ],
/// );
///
/// assert_eq!(frame.shape(), (2, 2));
/// assert_eq!(frame.column("age").unwrap()[1], Value::Int(25));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    columns: IndexMap<String, Vec<Value>>,
}

impl Frame {
    /// Create an empty frame
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a frame from column names and data rows.
    ///
    /// Rows shorter than the name list are padded with `Value::Null`; longer
    /// rows are truncated to it.
    pub fn from_rows(names: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        let width = names.len();
        let mut columns: IndexMap<String, Vec<Value>> = names
            .into_iter()
            .map(|name| (name, Vec::with_capacity(rows.len())))
            .collect();

        for mut row in rows {
            row.truncate(width);
            row.resize(width, Value::Null);
            for (column, value) in columns.values_mut().zip(row) {
                column.push(value);
            }
        }

        Frame { columns }
    }

    /// Number of data rows
    pub fn num_rows(&self) -> usize {
        self.columns
            .values()
            .next()
            .map(|column| column.len())
            .unwrap_or(0)
    }

    /// Number of columns
    pub fn num_cols(&self) -> usize {
        self.columns.len()
    }

    /// Shape as `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows(), self.num_cols())
    }

    /// Check if the frame has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column names in order
    pub fn names(&self) -> Vec<&str> {
        self.columns.keys().map(String::as_str).collect()
    }

    /// Get a column by name
    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Get a column by position
    pub fn column_at(&self, index: usize) -> Option<&[Value]> {
        self.columns
            .get_index(index)
            .map(|(_, column)| column.as_slice())
    }

    /// Get a row by position as references into each column
    pub fn row(&self, index: usize) -> Option<Vec<&Value>> {
        if index >= self.num_rows() {
            return None;
        }
        Some(self.columns.values().map(|column| &column[index]).collect())
    }

    /// Drop columns whose values are all `Null`.
    ///
    /// Useful for input with trailing delimiters, which otherwise produces a
    /// final column of nothing but missing values. A frame with zero rows is
    /// returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use txtframe::{Frame, Value};
    ///
    /// let frame = Frame::from_rows(
    ///     vec!["a".to_string(), "b".to_string()],
    ///     vec![vec![Value::Int(1), Value::Null]],
    /// );
    /// let frame = frame.drop_null_columns();
    /// assert_eq!(frame.names(), vec!["a"]);
    /// ```
    pub fn drop_null_columns(mut self) -> Self {
        if self.num_rows() == 0 {
            return self;
        }
        self.columns
            .retain(|_, column| column.iter().any(|value| !value.is_null()));
        self
    }

    /// Serialize the frame as delimited text, header row first.
    pub fn to_csv(&self, separator: &str) -> String {
        let encoder = CsvEncoder::new(separator);
        let mut out = String::new();

        let names: Vec<String> = self.columns.keys().cloned().collect();
        encoder.encode_header(&names, &mut out);
        out.push('\n');

        for row in 0..self.num_rows() {
            encoder.encode_row(self.columns.values().map(|column| &column[row]), &mut out);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Frame {
    /// Render as a space-aligned grid, header row first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.num_rows();
        let mut widths = Vec::with_capacity(self.num_cols());
        for (name, column) in &self.columns {
            let data_width = column
                .iter()
                .map(|value| value.as_string().len())
                .max()
                .unwrap_or(0);
            widths.push(name.len().max(data_width));
        }

        for (i, name) in self.columns.keys().enumerate() {
            if i > 0 {
                write!(f, "  ")?;
            }
            write!(f, "{:<width$}", name, width = widths[i])?;
        }
        for row in 0..rows {
            writeln!(f)?;
            for (i, column) in self.columns.values().enumerate() {
                if i > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:<width$}", column[row].as_string(), width = widths[i])?;
            }
        }
        Ok(())
    }
}
