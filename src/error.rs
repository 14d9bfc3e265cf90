use std::fmt::{self, Display};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal decode failures. Everything else the reader tolerates and records
/// as a [`Warning`].
#[derive(Debug, Error)]
pub enum Error {
  /// The pattern file could not be opened or read.
  #[error("cannot read pattern file {}: {source}", .path.display())]
  FileUnavailable {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// A run tried to write a cell outside the declared dimensions.
  #[error("cell ({x}, {y}) is outside the declared board")]
  CellOutOfBounds { x: u32, y: u32 },
}

/// Tolerated irregularities in the input, collected in input order.
///
/// The format is intentionally extensible, so none of these stop the decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
  /// A `#` comment whose tag character is not one of the known directives.
  /// `None` for a comment with nothing after the marker.
  UnknownDirective(Option<char>),
  /// A field on the dimension line that is not `key=value`.
  MalformedDimensionField(String),
  /// A well-formed dimension field with a key other than `x`, `y`, `rule`.
  UnknownDimensionKey(String),
  /// A pattern-body character outside the run-length grammar.
  UnknownBodyToken(char),
}

impl Display for Warning {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Warning::UnknownDirective(Some(tag)) => write!(f, "unknown directive #{}", tag),
      Warning::UnknownDirective(None) => write!(f, "empty comment directive"),
      Warning::MalformedDimensionField(field) => {
        write!(f, "malformed field {:?} on the dimension line", field)
      }
      Warning::UnknownDimensionKey(key) => write!(f, "unknown dimension key {:?}", key),
      Warning::UnknownBodyToken(c) => write!(f, "unknown character {:?} in pattern body", c),
    }
  }
}
