use std::fmt::{Debug, Display};

/// A stack of error messages.  The first entry is the root cause; each call to `wrap` pushes
/// another layer of context on top of it.
#[derive(Clone, PartialEq)]
pub struct ErrorStack {
  pub errors: Vec<String>,
}

impl ErrorStack {
  #[cold]
  pub fn new(msg: impl Into<String>) -> Self {
    ErrorStack {
      errors: vec![msg.into()],
    }
  }

  #[cold]
  pub fn wrap(mut self, msg: impl Into<String>) -> Self {
    self.errors.push(msg.into());
    self
  }

  /// The innermost message, i.e. the one that caused the error in the first place.
  pub fn root_cause(&self) -> &str {
    self.errors.first().map(String::as_str).unwrap_or_default()
  }
}

// Outermost context first, each deeper layer indented one more level.
impl Display for ErrorStack {
  #[cold]
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let indent = "  ";
    for (ix, err) in self.errors.iter().rev().enumerate() {
      let mut lines = err.lines().peekable();
      while let Some(line) = lines.next() {
        for _ in 0..ix {
          write!(f, "{indent}")?;
        }

        write!(f, "{line}")?;

        if lines.peek().is_some() {
          writeln!(f)?;
        }
      }

      if ix < self.errors.len() - 1 {
        writeln!(f)?;
      }
    }
    Ok(())
  }
}

impl Debug for ErrorStack {
  #[cold]
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{self}")
  }
}

impl std::error::Error for ErrorStack {}
