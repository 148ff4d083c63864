//! # txtframe
//!
//! Convert freeform delimited text into typed data frames.
//!
//! The crate implements the core of a notebook `%%txt2df` cell magic: a flag
//! line is parsed for a handful of options, the cell body is read as
//! delimited text into a [`Frame`], and the result is optionally bound into
//! a caller-supplied [`Namespace`].
//!
//! - **Typed cells** - fields are inferred as integers, floats, booleans,
//!   strings, or missing values
//! - **Header or positional columns** - first line as names, or
//!   `column_0 … column_{k-1}`
//! - **Graceful width overflow** - a row wider than the first row triggers a
//!   single lenient retry with a printed notice instead of a hard failure
//! - **NA cleanup** - columns that are entirely missing are dropped by
//!   default (useful for trailing delimiters)
//!
//! # Examples
//!
//! ```
//! use txtframe::{txt2df, Namespace};
//!
//! let mut ns = Namespace::new();
//! let frame = txt2df(
//!     "--headers --name people",
//!     "name,age\nalice,30\nbob,25\n",
//!     Some(&mut ns),
//! )
//! .unwrap();
//!
//! assert_eq!(frame.names(), vec!["name", "age"]);
//! assert_eq!(frame.num_rows(), 2);
//! assert!(ns.contains_key("people"));
//! ```
//!
//! The lower-level [`FrameReader`] is available for direct use:
//!
//! ```
//! use txtframe::FrameReader;
//!
//! let frame = FrameReader::from_text("x;y\n1;2\n")
//!     .separator(";")
//!     .headers(true)
//!     .read_frame()
//!     .unwrap();
//! assert_eq!(frame.shape(), (1, 2));
//! ```

pub mod csv;
pub mod error;
pub mod frame;
pub mod magic;
pub mod reader;
pub mod types;

pub use error::{FrameError, Result};
pub use frame::Frame;
pub use magic::{txt2df, MagicArgs, Namespace};
pub use reader::FrameReader;
pub use types::Value;
