use std::{fmt, ops::Range};

/// A span of bytes handed out by a [`BumpAllocator`](crate::BumpAllocator).
///
/// A region is only a capability to ask the arena for its bytes: it holds an
/// offset, a length and the arena generation it was issued in. Once the arena
/// is reset the generation no longer matches and the arena refuses to hand
/// out the bytes again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
  offset: usize,
  len: usize,
  generation: u64,
}

impl Region {
  pub(crate) const fn new(
    offset: usize,
    len: usize,
    generation: u64,
  ) -> Self {
    Self {
      offset,
      len,
      generation,
    }
  }

  /// Start of the region inside the arena.
  #[inline]
  pub const fn offset(&self) -> usize {
    self.offset
  }

  /// Length in bytes, already rounded to the arena alignment.
  #[inline]
  pub const fn len(&self) -> usize {
    self.len
  }

  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// One past the last byte of the region.
  #[inline]
  pub const fn end(&self) -> usize {
    self.offset + self.len
  }

  #[inline]
  pub const fn range(&self) -> Range<usize> {
    self.offset..self.end()
  }

  /// Reset generation of the arena when this region was allocated.
  #[inline]
  pub const fn generation(&self) -> u64 {
    self.generation
  }

  /// Whether the two regions share at least one byte.
  ///
  /// Empty regions never overlap anything.
  pub fn overlaps(
    &self,
    other: &Region,
  ) -> bool {
    !self.is_empty() && !other.is_empty() && self.offset < other.end() && other.offset < self.end()
  }
}

impl fmt::Display for Region {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    write!(f, "[{}, {}) gen={}", self.offset, self.end(), self.generation)
  }
}
