use itertools::Itertools;
use crate::error::Error;
use crate::rule::{ParseRuleError, Rule};

/// A rectangular Life board decoded from a pattern file.
///
/// Cells are stored row-major; dead is the default state. The dimensions are
/// set once, before `populate` allocates the grid, and no cell can be written
/// until that has happened.
#[derive(Debug)]
pub struct Board {
  width: u32,
  height: u32,
  name: String,
  rule: String,
  cells: Vec<bool>,
}

impl Board {
  pub fn new() -> Self {
    Self {
      width: 0,
      height: 0,
      name: "unknown".to_owned(),
      rule: String::new(),
      cells: vec![],
    }
  }

  pub fn width(&self) -> u32 {
    self.width
  }

  pub fn height(&self) -> u32 {
    self.height
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  /// The rule string exactly as the file supplied it, empty if it didn't.
  pub fn rule(&self) -> &str {
    &self.rule
  }

  /// The rule string as a typed [`Rule`], `None` if the file supplied none.
  pub fn parsed_rule(&self) -> Option<Result<Rule, ParseRuleError>> {
    if self.rule.is_empty() {
      None
    } else {
      Some(self.rule.parse())
    }
  }

  pub fn get(&self, x: u32, y: u32) -> Option<bool> {
    if x < self.width && y < self.height {
      Some(self.cells[y as usize * self.width as usize + x as usize])
    } else {
      None
    }
  }

  /// Render the grid as text, `#` for alive cells, one line per row.
  pub fn render(&self) -> String {
    (0..self.height)
      .map(|y| {
        (0..self.width)
          .map(|x| {
            if self.cells[y as usize * self.width as usize + x as usize] {
              '#'
            } else {
              ' '
            }
          })
          .collect::<String>()
      })
      .join("\n")
  }

  pub(crate) fn set_name(&mut self, name: impl Into<String>) {
    self.name = name.into();
  }

  pub(crate) fn set_rule(&mut self, rule: impl Into<String>) {
    self.rule = rule.into();
  }

  pub(crate) fn set_width(&mut self, width: u32) {
    self.width = width;
  }

  pub(crate) fn set_height(&mut self, height: u32) {
    self.height = height;
  }

  /// Allocate the cell grid, all dead. Runs exactly once, after the
  /// dimensions are known and before any cell write.
  pub(crate) fn populate(&mut self) {
    self.cells = vec![false; self.width as usize * self.height as usize];
  }

  pub(crate) fn set(&mut self, x: u32, y: u32, alive: bool) -> Result<(), Error> {
    if x >= self.width || y >= self.height {
      return Err(Error::CellOutOfBounds { x, y });
    }
    self.cells[y as usize * self.width as usize + x as usize] = alive;
    Ok(())
  }
}
