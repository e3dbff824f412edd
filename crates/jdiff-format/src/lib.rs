//! JSON canonicalization for jdiff.
//!
//! Raw text goes in; canonical pretty-printed text (two-space indent, object
//! keys sorted) or a [`FormatError`] with a 1-based line/column location
//! comes out. The diff engine works on the canonical text so that key order
//! and whitespace differences never show up as changes.

pub mod error;
pub mod formatter;
pub mod location;

pub use error::{FormatError, FormatResult, ParseErrorKind};
pub use formatter::{canonicalize, validate};
pub use location::{location_from_offset, ParseLocation};
