//! The `%%txt2df` cell-magic surface: flag parsing, the two-attempt text
//! parse, and namespace binding.

use crate::error::{FrameError, Result};
use crate::frame::Frame;
use crate::reader::FrameReader;
use clap::Parser;
use std::collections::HashMap;

/// Caller-owned mapping from variable names to frames.
pub type Namespace = HashMap<String, Frame>;

/// Flags accepted on the magic line.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "%%txt2df",
    about = "Convert cell text to a data frame",
    no_binary_name = true
)]
pub struct MagicArgs {
    /// Column separator/delimiter to use.
    #[arg(short, long, default_value = ",")]
    pub sep: String,

    /// If specified, the frame will be assigned to the named variable.
    #[arg(short, long)]
    pub name: Option<String>,

    /// If supplied, the first line is treated as the header row.
    #[arg(short = 'e', long)]
    pub headers: bool,

    /// Don't drop columns that are all NA (the default is to drop them,
    /// which is useful for data with trailing delimiters).
    #[arg(short, long)]
    pub keepna: bool,
}

impl MagicArgs {
    /// Parse the flag line.
    ///
    /// Tokens are split on spaces with empty tokens dropped, so a literal
    /// tab typed as a separator value survives intact. Any parse failure
    /// maps to [`FrameError::InvalidArgument`]; `--help` prints the usage
    /// text to stdout before failing the invocation.
    ///
    /// # Examples
    ///
    /// ```
    /// use txtframe::MagicArgs;
    ///
    /// let args = MagicArgs::parse_line("--sep ; --headers -n out").unwrap();
    /// assert_eq!(args.sep, ";");
    /// assert!(args.headers);
    /// assert_eq!(args.name.as_deref(), Some("out"));
    /// assert!(!args.keepna);
    /// ```
    pub fn parse_line(line: &str) -> Result<Self> {
        let tokens = line.split(' ').filter(|token| !token.is_empty());
        match Self::try_parse_from(tokens) {
            Ok(args) if args.sep.is_empty() => Err(FrameError::InvalidArgument {
                detail: "separator must not be empty".to_string(),
            }),
            Ok(args) => Ok(args),
            Err(err) if err.kind() == clap::error::ErrorKind::DisplayHelp => {
                print!("{}", err);
                Err(FrameError::InvalidArgument {
                    detail: "help requested".to_string(),
                })
            }
            Err(err) => Err(FrameError::InvalidArgument {
                detail: err.to_string(),
            }),
        }
    }

    /// Effective separator: the two-character escape `\t` typed on the flag
    /// line resolves to a real tab.
    pub fn separator(&self) -> &str {
        match self.sep.as_str() {
            "\\t" => "\t",
            other => other,
        }
    }
}

/// Convert cell text to a [`Frame`].
///
/// `line` carries the flags, `cell` the raw delimited text, and `local_ns`
/// an optional caller namespace to bind the result into. The frame is
/// returned unconditionally, whether or not a binding occurred.
///
/// Parsing is a two-attempt procedure: the strict attempt fails when a data
/// row has more fields than the first row declares, in which case the text
/// is re-read from scratch in lenient mode with headers off, a one-line
/// notice is printed, and every row is kept with auto-named columns sized to
/// the widest row. Any other failure propagates unchanged.
///
/// Unless `--keepna` is given, columns that are entirely missing are
/// dropped afterwards.
///
/// # Examples
///
/// ```
/// use txtframe::{txt2df, Namespace, Value};
///
/// let mut ns = Namespace::new();
/// let frame = txt2df(
///     "--headers --name people",
///     "name,age\nalice,30\nbob,25\n",
///     Some(&mut ns),
/// )
/// .unwrap();
///
/// assert_eq!(frame.shape(), (2, 2));
/// assert_eq!(frame.column("age").unwrap()[0], Value::Int(30));
/// assert_eq!(ns.get("people"), Some(&frame));
/// ```
pub fn txt2df(line: &str, cell: &str, local_ns: Option<&mut Namespace>) -> Result<Frame> {
    let args = MagicArgs::parse_line(line)?;
    let frame = parse_cell(cell, &args)?;
    let frame = if args.keepna {
        frame
    } else {
        frame.drop_null_columns()
    };
    if let (Some(ns), Some(name)) = (local_ns, args.name.as_deref()) {
        ns.insert(name.to_string(), frame.clone());
    }
    Ok(frame)
}

/// Strict attempt first; on a width overflow, retry leniently with headers
/// off. The original stream is consumed, so the retry re-reads the text.
fn parse_cell(cell: &str, args: &MagicArgs) -> Result<Frame> {
    let strict = FrameReader::from_text(cell)
        .separator(args.separator())
        .headers(args.headers)
        .trim(true);
    match strict.read_frame() {
        Ok(frame) => Ok(frame),
        Err(FrameError::TooManyColumns { .. }) => {
            let frame = FrameReader::from_text(cell)
                .separator(args.separator())
                .lenient(true)
                .trim(true)
                .read_frame()?;
            println!(
                "One or more rows had more columns than specified in first row. \
                 Ignoring header row."
            );
            Ok(frame)
        }
        Err(err) => Err(err),
    }
}
