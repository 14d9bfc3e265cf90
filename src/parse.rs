use std::fs;
use std::path::Path;
use regex::Regex;
use crate::board::Board;
use crate::error::{Error, Warning};

/// Read a Life pattern from an RLE string.
///
/// RLE format: <https://www.conwaylife.com/wiki/Run_Length_Encoded>.
pub fn read(src: impl AsRef<str>) -> Result<Board, Error> {
  Parser::new().read(src)
}

/// Read a Life pattern from an RLE file.
pub fn read_file(path: impl AsRef<Path>) -> Result<Board, Error> {
  Parser::new().read_file(path)
}

/// Decodes RLE pattern files into [`Board`]s.
///
/// One `Parser` can decode any number of inputs; [`Parser::warnings`] holds
/// the irregularities tolerated during the most recent decode.
pub struct Parser {
  field_re: Regex,
  warnings: Vec<Warning>,
}

/// The write position inside the pattern body, plus the pending run count.
///
/// The count survives line breaks (a run may be split by wrapping) but is
/// consumed by every tag.
#[derive(Default)]
struct Cursor {
  x: u32,
  y: u32,
  quantity: Option<u32>,
}

impl Cursor {
  fn take_quantity(&mut self) -> u32 {
    self.quantity.take().unwrap_or(1)
  }
}

impl Parser {
  pub fn new() -> Self {
    Self {
      // key=value, the value either a number or a rule token like B3/S23
      field_re: Regex::new(r"^(\w+)=([\w/]+)$").unwrap(),
      warnings: vec![],
    }
  }

  pub fn read_file(&mut self, path: impl AsRef<Path>) -> Result<Board, Error> {
    let path = path.as_ref();
    let src = fs::read_to_string(path).map_err(|source| Error::FileUnavailable {
      path: path.to_owned(),
      source,
    })?;
    self.read(src)
  }

  /// Read a Life pattern from an RLE string.
  ///
  /// Lines are classified in order: `#` comments feed the metadata
  /// directives, the first remaining line declares the dimensions and rule,
  /// and everything after it is run-length pattern body until `!` or the end
  /// of the input.
  pub fn read(&mut self, src: impl AsRef<str>) -> Result<Board, Error> {
    self.warnings.clear();

    let mut board = Board::new();
    let mut dimensions_gotten = false;
    let mut cursor = Cursor::default();

    for line in src.as_ref().lines() {
      let line = line.trim();
      if line.is_empty() {
        continue;
      }

      if let Some(comment) = line.strip_prefix('#') {
        self.directive(&mut board, comment);
      } else if !dimensions_gotten {
        self.dimensions(&mut board, line);
        board.populate();
        dimensions_gotten = true;
      } else if !self.body(&mut board, line, &mut cursor)? {
        // forced end of file, everything after `!` is skipped
        break;
      }
    }

    Ok(board)
  }

  /// Warnings recorded by the most recent `read`.
  pub fn warnings(&self) -> &[Warning] {
    &self.warnings
  }

  fn directive(&mut self, board: &mut Board, comment: &str) {
    let mut chars = comment.chars();
    match chars.next() {
      // Name of the pattern
      Some('N') => board.set_name(chars.as_str().trim()),
      // Author and creation date, usually produced by XLife
      Some('O') => {}
      // Free-text comment; lowercase `c` is the discouraged spelling
      Some('C') | Some('c') => {}
      // Top-left corner coordinates, meant to center the pattern at the
      // origin; `P` is the Life32 spelling
      Some('P') | Some('R') => {}
      // Rule in `survival/birth` form; the standard place for the rule is
      // the dimension line, not a comment
      Some('r') => {}
      other => self.warnings.push(Warning::UnknownDirective(other)),
    }
  }

  fn dimensions(&mut self, board: &mut Board, line: &str) {
    let line: String = line.chars().filter(|c| !c.is_whitespace()).collect();

    for field in line.split(',') {
      let caps = match self.field_re.captures(field) {
        Some(caps) => caps,
        None => {
          self
            .warnings
            .push(Warning::MalformedDimensionField(field.to_owned()));
          continue;
        }
      };

      let key = caps.get(1).unwrap().as_str();
      let value = caps.get(2).unwrap().as_str();
      match key {
        "x" | "y" => match value.parse() {
          Ok(n) if key == "x" => board.set_width(n),
          Ok(n) => board.set_height(n),
          Err(_) => self
            .warnings
            .push(Warning::MalformedDimensionField(field.to_owned())),
        },
        "rule" => board.set_rule(value),
        _ => self.warnings.push(Warning::UnknownDimensionKey(key.to_owned())),
      }
    }
  }

  /// Decode one line of pattern body. Returns `false` when `!` ends the
  /// whole pattern.
  fn body(&mut self, board: &mut Board, line: &str, cursor: &mut Cursor) -> Result<bool, Error> {
    for c in line.chars() {
      match c {
        '0'..='9' => {
          let digit = c as u32 - '0' as u32;
          let quantity = cursor.quantity.unwrap_or(0);
          cursor.quantity = Some(quantity.saturating_mul(10).saturating_add(digit));
        }
        'b' => {
          cursor.x = cursor.x.saturating_add(cursor.take_quantity());
        }
        'o' => {
          let quantity = cursor.take_quantity();
          for i in 0..quantity {
            board.set(cursor.x + i, cursor.y, true)?;
          }
          cursor.x += quantity;
        }
        '$' => {
          // a count before `$` skips that many rows
          cursor.y = cursor.y.saturating_add(cursor.take_quantity());
          cursor.x = 0;
        }
        '!' => return Ok(false),
        c if c.is_whitespace() => {}
        other => {
          cursor.quantity = None;
          self.warnings.push(Warning::UnknownBodyToken(other));
        }
      }
    }
    Ok(true)
  }
}
