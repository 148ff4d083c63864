//! Encoding frame values back to delimited text

use crate::types::Value;

/// Encoder for writing rows of typed values as delimited text.
pub struct CsvEncoder {
    separator: String,
    quote_char: char,
}

impl CsvEncoder {
    /// Create a new encoder with the given separator and `"` quoting.
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            quote_char: '"',
        }
    }

    /// Encode a header row into the buffer
    pub fn encode_header(&self, names: &[String], buffer: &mut String) {
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                buffer.push_str(&self.separator);
            }
            self.encode_field(name, buffer);
        }
    }

    /// Encode a row of values into the buffer
    pub fn encode_row<'a, I>(&self, values: I, buffer: &mut String)
    where
        I: IntoIterator<Item = &'a Value>,
    {
        for (i, value) in values.into_iter().enumerate() {
            if i > 0 {
                buffer.push_str(&self.separator);
            }
            self.encode_value(value, buffer);
        }
    }

    fn encode_value(&self, value: &Value, buffer: &mut String) {
        match value {
            // Missing values encode as empty fields
            Value::Null => {}
            Value::Int(i) => buffer.push_str(itoa::Buffer::new().format(*i)),
            Value::Str(s) => self.encode_field(s, buffer),
            other => buffer.push_str(&other.as_string()),
        }
    }

    /// Encode a single text field with proper quoting/escaping
    fn encode_field(&self, field: &str, buffer: &mut String) {
        if self.needs_quoting(field) {
            buffer.push(self.quote_char);
            for ch in field.chars() {
                if ch == self.quote_char {
                    // Escape quotes by doubling: " -> ""
                    buffer.push(self.quote_char);
                }
                buffer.push(ch);
            }
            buffer.push(self.quote_char);
        } else {
            buffer.push_str(field);
        }
    }

    /// Check if a field requires quoting
    fn needs_quoting(&self, field: &str) -> bool {
        field.contains(&self.separator)
            || field.contains(self.quote_char)
            || field.contains('\n')
            || field.contains('\r')
    }
}
