//! Reading delimited text into a frame

use crate::csv::FieldParser;
use crate::error::{FrameError, Result};
use crate::frame::Frame;
use crate::types::Value;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

/// Reader that converts delimited text into rows of typed values.
///
/// Reads line by line over any `BufRead` source, skipping blank lines. The
/// first non-blank line fixes the declared width; with `headers` enabled it
/// is consumed as column names instead of data. In the default strict mode a
/// later row with more fields than declared is an error; in lenient mode all
/// rows are accepted and the frame widens to the widest row seen.
///
/// # Examples
///
/// ```
/// use txtframe::FrameReader;
///
/// let frame = FrameReader::from_text("name,age\nalice,30\nbob,25\n")
///     .headers(true)
///     .read_frame()
///     .unwrap();
///
/// assert_eq!(frame.names(), vec!["name", "age"]);
/// assert_eq!(frame.num_rows(), 2);
/// ```
#[derive(Debug)]
pub struct FrameReader<R: BufRead> {
    input: R,

    // Parser state
    line_buffer: String,
    line_no: usize,
    width: Option<usize>,
    header_names: Option<Vec<String>>,

    // Configuration
    separator: String,
    quote_char: char,
    has_headers: bool,
    lenient: bool,
    trim: bool,
}

impl FrameReader<Cursor<Vec<u8>>> {
    /// Read from an in-memory text buffer.
    pub fn from_text(text: &str) -> Self {
        FrameReader::new(Cursor::new(text.as_bytes().to_vec()))
    }
}

impl FrameReader<BufReader<File>> {
    /// Read from a delimited text file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())
            .map_err(|e| FrameError::ReadError(format!("failed to open file: {}", e)))?;
        Ok(FrameReader::new(BufReader::new(file)))
    }
}

impl<R: BufRead> FrameReader<R> {
    /// Create a reader over any buffered source with default settings:
    /// comma separator, `"` quoting, no headers, strict, no trimming.
    pub fn new(input: R) -> Self {
        FrameReader {
            input,
            line_buffer: String::with_capacity(1024),
            line_no: 0,
            width: None,
            header_names: None,
            separator: ",".to_string(),
            quote_char: '"',
            has_headers: false,
            lenient: false,
            trim: false,
        }
    }

    /// Set a custom separator (builder pattern)
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set a custom quote character (builder pattern)
    pub fn quote_char(mut self, quote: char) -> Self {
        self.quote_char = quote;
        self
    }

    /// Treat the first non-blank line as column names (builder pattern)
    pub fn headers(mut self, has: bool) -> Self {
        self.has_headers = has;
        self
    }

    /// Accept rows wider than the first row instead of failing
    /// (builder pattern)
    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    /// Skip spaces directly after each separator (builder pattern)
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Get the header row if one has been consumed.
    pub fn headers_row(&self) -> Option<&[String]> {
        self.header_names.as_deref()
    }

    /// Read the next data row.
    ///
    /// Returns `Ok(None)` at end of input. Blank lines are skipped; a header
    /// line is consumed internally and never returned. In strict mode a row
    /// with more fields than the first row fails with
    /// [`FrameError::TooManyColumns`].
    pub fn read_row(&mut self) -> Result<Option<Vec<Value>>> {
        loop {
            self.line_buffer.clear();
            let bytes_read = self
                .input
                .read_line(&mut self.line_buffer)
                .map_err(|e| FrameError::ReadError(format!("failed to read line: {}", e)))?;
            if bytes_read == 0 {
                return Ok(None); // EOF
            }
            self.line_no += 1;

            // Remove trailing newline
            if self.line_buffer.ends_with('\n') {
                self.line_buffer.pop();
                if self.line_buffer.ends_with('\r') {
                    self.line_buffer.pop();
                }
            }
            if self.line_buffer.trim().is_empty() {
                continue;
            }

            let parser = FieldParser::new(self.separator.as_str())
                .quote_char(self.quote_char)
                .trim_start(self.trim);
            let fields = parser.parse_line(&self.line_buffer);

            match self.width {
                None => {
                    self.width = Some(fields.len());
                    if self.has_headers {
                        self.header_names = Some(fields);
                        continue;
                    }
                    return Ok(Some(infer_row(fields)));
                }
                Some(width) if !self.lenient && fields.len() > width => {
                    return Err(FrameError::TooManyColumns {
                        row: self.line_no,
                        expected: width,
                        found: fields.len(),
                    });
                }
                Some(_) => return Ok(Some(infer_row(fields))),
            }
        }
    }

    /// Get iterator over data rows
    pub fn rows(&mut self) -> Rows<'_, R> {
        Rows { reader: self }
    }

    /// Consume the reader and assemble a [`Frame`].
    ///
    /// Column names come from the header row when enabled, otherwise they
    /// are generated as `column_0 … column_{k-1}`. Duplicate header names
    /// get `.1`, `.2`, … suffixes. Rows narrower than the final width are
    /// padded with `Value::Null`. Fails with [`FrameError::EmptyInput`] when
    /// the input has no non-blank lines.
    pub fn read_frame(mut self) -> Result<Frame> {
        let mut rows = Vec::new();
        while let Some(row) = self.read_row()? {
            rows.push(row);
        }

        let declared = self.width.ok_or(FrameError::EmptyInput)?;
        let width = rows.iter().map(Vec::len).fold(declared, usize::max);

        let names = match self.header_names.take() {
            Some(mut header) => {
                // columns past the end of the header keep positional names
                for i in header.len()..width {
                    header.push(format!("column_{}", i));
                }
                dedupe_names(header)
            }
            None => (0..width).map(|i| format!("column_{}", i)).collect(),
        };
        Ok(Frame::from_rows(names, rows))
    }
}

/// Iterator over data rows
pub struct Rows<'a, R: BufRead> {
    reader: &'a mut FrameReader<R>,
}

impl<R: BufRead> Iterator for Rows<'_, R> {
    type Item = Result<Vec<Value>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.read_row().transpose()
    }
}

fn infer_row(fields: Vec<String>) -> Vec<Value> {
    fields.iter().map(|field| Value::infer(field)).collect()
}

/// Make every name unique by suffixing repeats with `.1`, `.2`, …
fn dedupe_names(names: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::with_capacity(names.len());
    for name in names {
        let mut unique = name.clone();
        let mut suffix = 1;
        while !seen.insert(unique.clone()) {
            unique = format!("{}.{}", name, suffix);
            suffix += 1;
        }
        out.push(unique);
    }
    out
}
