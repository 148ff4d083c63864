//! Splitting a single line of delimited text into fields

/// Field splitter for one line of delimited text.
///
/// Separators are plain strings (one character or several), quotes are only
/// recognized at the start of a field, and a doubled quote inside a quoted
/// field is an escaped quote. With `trim_start` enabled, spaces directly
/// after a separator are skipped.
pub struct FieldParser {
    separator: String,
    quote_char: char,
    trim_start: bool,
}

impl FieldParser {
    /// Create a new parser with the given separator, `"` quoting and no
    /// leading-space trimming.
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            quote_char: '"',
            trim_start: false,
        }
    }

    /// Set a custom quote character (builder pattern)
    pub fn quote_char(mut self, quote: char) -> Self {
        self.quote_char = quote;
        self
    }

    /// Skip spaces immediately following a separator (builder pattern)
    pub fn trim_start(mut self, trim: bool) -> Self {
        self.trim_start = trim;
        self
    }

    /// Split a line into fields. An empty separator yields the whole line
    /// as a single field.
    pub fn parse_line(&self, line: &str) -> Vec<String> {
        if self.separator.is_empty() {
            return vec![line.to_string()];
        }
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;
        let mut at_field_start = true;
        let mut chars = line.char_indices().peekable();

        while let Some((idx, ch)) = chars.next() {
            if self.trim_start && at_field_start && !in_quotes && ch == ' ' {
                continue;
            }
            if ch == self.quote_char {
                if in_quotes {
                    // Doubled quote is an escaped quote
                    if matches!(chars.peek(), Some(&(_, next)) if next == self.quote_char) {
                        current.push(self.quote_char);
                        chars.next();
                    } else {
                        in_quotes = false;
                    }
                } else if current.is_empty() && at_field_start {
                    in_quotes = true;
                } else {
                    // Mid-field quotes are literal
                    current.push(ch);
                }
                at_field_start = false;
                continue;
            }
            if !in_quotes && line[idx..].starts_with(&self.separator) {
                // First separator char is already consumed
                for _ in 0..self.separator.chars().count() - 1 {
                    chars.next();
                }
                fields.push(std::mem::take(&mut current));
                at_field_start = true;
                continue;
            }
            current.push(ch);
            at_field_start = false;
        }

        fields.push(current);
        fields
    }
}
