use std::fmt;

use tracing::{debug, trace};

use crate::{
  align::align_up,
  error::{AllocError, AllocResult},
  mem::{copy_bytes, fill_bytes},
  region::Region,
};

/// Alignment used when none is given: every region is a multiple of 4 bytes.
pub const DEFAULT_ALIGN: usize = 4;

/// Byte written over the whole store by [`ResetPolicy::Zero`].
pub const FILL_BYTE: u8 = 0;

/// What [`BumpAllocator::reset`] does with the bytes of the backing store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResetPolicy {
  /// Overwrite every byte with [`FILL_BYTE`]. Costs O(capacity), but no data
  /// from before the reset can be read through a new region.
  #[default]
  Zero,
  /// Only rewind the cursor. O(1); new regions may contain old data.
  Keep,
}

/// Linear allocator over a fixed-size, owned byte store.
///
/// Each call to [`allocate`](Self::allocate) rounds the request up to `ALIGN`
/// and hands out the next span of the store. Nothing is ever freed on its own:
/// [`reset`](Self::reset) releases everything at once.
///
/// ```text
///   storage (capacity bytes)
///   ┌──────┬──────────┬─────────────────────────────┐
///   │  R0  │    R1    │           free              │
///   └──────┴──────────┴─────────────────────────────┘
///   0                 ▲                             capacity
///                     └── cursor
/// ```
///
/// Regions are plain handles; the bytes are reached through
/// [`bytes`](Self::bytes) and [`bytes_mut`](Self::bytes_mut), which refuse
/// regions from before the last reset.
pub struct BumpAllocator<const ALIGN: usize = DEFAULT_ALIGN> {
  storage: Box<[u8]>,
  cursor: usize,
  generation: u64,
  policy: ResetPolicy,
}

impl BumpAllocator {
  /// Creates an arena of `capacity` bytes with the default 4 byte alignment
  /// and zeroing resets.
  pub fn new(capacity: usize) -> Self {
    Self::with_capacity(capacity)
  }
}

impl<const ALIGN: usize> BumpAllocator<ALIGN> {
  /// Creates an arena of `capacity` bytes that zeroes its store on reset.
  pub fn with_capacity(capacity: usize) -> Self {
    Self::with_policy(capacity, ResetPolicy::default())
  }

  /// Creates an arena of `capacity` bytes with the given reset behaviour.
  ///
  /// The store starts out filled with [`FILL_BYTE`].
  pub fn with_policy(
    capacity: usize,
    policy: ResetPolicy,
  ) -> Self {
    const { assert!(ALIGN.is_power_of_two(), "arena alignment must be a power of two") };

    Self {
      storage: vec![FILL_BYTE; capacity].into_boxed_slice(),
      cursor: 0,
      generation: 0,
      policy,
    }
  }

  /// Reserves `size` bytes, rounded up to `ALIGN`.
  ///
  /// A size of zero yields an empty region at the cursor. When the rounded
  /// size does not fit, [`AllocError::OutOfMemory`] is returned and the arena
  /// is unchanged.
  pub fn allocate(
    &mut self,
    size: usize,
  ) -> AllocResult<Region> {
    let remaining = self.remaining();

    let rounded = match align_up(size, ALIGN) {
      Some(rounded) if rounded <= remaining => rounded,
      Some(rounded) => return Err(self.out_of_memory(rounded)),
      None => return Err(self.out_of_memory(size)),
    };

    let region = Region::new(self.cursor, rounded, self.generation);
    self.cursor += rounded;

    trace!(
      offset = region.offset(),
      len = region.len(),
      cursor = self.cursor,
      "allocated region"
    );

    Ok(region)
  }

  /// Allocates `size` bytes and borrows them straight away.
  ///
  /// The slice has the rounded length. Holding it keeps the arena borrowed,
  /// so it cannot outlive a reset.
  pub fn alloc_bytes(
    &mut self,
    size: usize,
  ) -> AllocResult<&mut [u8]> {
    let region = self.allocate(size)?;

    Ok(&mut self.storage[region.range()])
  }

  /// Allocates room for `src` and copies it in.
  ///
  /// Padding bytes past `src.len()` are left as they are in the store.
  pub fn alloc_copy(
    &mut self,
    src: &[u8],
  ) -> AllocResult<Region> {
    let region = self.allocate(src.len())?;
    copy_bytes(&mut self.storage[region.range()], src);

    Ok(region)
  }

  /// Bytes of a region issued since the last reset.
  ///
  /// Returns `None` for regions from an earlier generation or that reach past
  /// the cursor. A region from another arena with a matching generation is
  /// not detected.
  pub fn bytes(
    &self,
    region: &Region,
  ) -> Option<&[u8]> {
    if !self.is_live(region) {
      return None;
    }

    self.storage.get(region.range())
  }

  /// Mutable form of [`bytes`](Self::bytes).
  pub fn bytes_mut(
    &mut self,
    region: &Region,
  ) -> Option<&mut [u8]> {
    if !self.is_live(region) {
      return None;
    }

    self.storage.get_mut(region.range())
  }

  /// Releases every allocation at once.
  ///
  /// All regions handed out so far become stale. Under
  /// [`ResetPolicy::Zero`] the whole store is filled with [`FILL_BYTE`].
  pub fn reset(&mut self) {
    let cleared = match self.policy {
      ResetPolicy::Zero => {
        fill_bytes(&mut self.storage, FILL_BYTE);
        self.storage.len()
      }
      ResetPolicy::Keep => 0,
    };

    self.cursor = 0;
    self.generation = self.generation.wrapping_add(1);

    debug!(
      generation = self.generation,
      policy = ?self.policy,
      cleared,
      "arena reset"
    );
  }

  /// The whole backing store, allocated or not.
  #[inline]
  pub fn storage(&self) -> &[u8] {
    &self.storage
  }

  #[inline]
  pub fn capacity(&self) -> usize {
    self.storage.len()
  }

  /// Bytes handed out since the last reset, i.e. the cursor.
  #[inline]
  pub fn used(&self) -> usize {
    self.cursor
  }

  #[inline]
  pub fn remaining(&self) -> usize {
    self.storage.len() - self.cursor
  }

  #[inline]
  pub const fn alignment(&self) -> usize {
    ALIGN
  }

  /// Number of resets so far.
  #[inline]
  pub fn generation(&self) -> u64 {
    self.generation
  }

  #[inline]
  pub fn reset_policy(&self) -> ResetPolicy {
    self.policy
  }

  fn is_live(
    &self,
    region: &Region,
  ) -> bool {
    region.generation() == self.generation && region.end() <= self.cursor
  }

  fn out_of_memory(
    &self,
    requested: usize,
  ) -> AllocError {
    let remaining = self.remaining();

    debug!(requested, remaining, "arena out of memory");

    AllocError::OutOfMemory {
      requested,
      remaining,
    }
  }
}

impl<const ALIGN: usize> fmt::Debug for BumpAllocator<ALIGN> {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    f.debug_struct("BumpAllocator")
      .field("align", &ALIGN)
      .field("capacity", &self.capacity())
      .field("cursor", &self.cursor)
      .field("generation", &self.generation)
      .field("policy", &self.policy)
      .finish()
  }
}
