use thiserror::Error;

/// Errors returned by a failed attempt to allocate from an arena.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
  /// The aligned request does not fit in what is left of the arena.
  ///
  /// The arena is left exactly as it was, so the caller may reset and retry
  /// or ask for less.
  #[error("out of memory: requested {requested} bytes, {remaining} remaining")]
  OutOfMemory {
    /// Size of the request after alignment rounding.
    requested: usize,
    /// Bytes still free at the time of the request.
    remaining: usize,
  },
}

pub type AllocResult<T> = Result<T, AllocError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_display() {
    let error = AllocError::OutOfMemory {
      requested: 8,
      remaining: 4,
    };

    assert_eq!("out of memory: requested 8 bytes, 4 remaining", error.to_string());
  }
}
