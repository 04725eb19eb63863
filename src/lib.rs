//! # rarena - A Fixed-Capacity Bump Arena
//!
//! This crate provides a **bump allocator** (also known as a linear or arena
//! allocator) over a fixed-size byte store that the arena owns. It is meant
//! for bare-metal style code: one buffer sized up front, O(1) allocations,
//! and everything released at once.
//!
//! ## Overview
//!
//! ```text
//!   Bump Arena:
//!
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                        OWNED STORAGE                                 │
//!   │                                                                      │
//!   │   ┌─────┬─────────┬─────┬─────────────────────────────────────────┐  │
//!   │   │ R0  │   R1    │ R2  │              Free Space                 │  │
//!   │   └─────┴─────────┴─────┴─────────────────────────────────────────┘  │
//!   │   0                     ▲                                         ▲  │
//!   │                         │                                         │  │
//!   │                       Cursor                                 Capacity │
//!   │                    (next alloc)                                      │
//!   │                                                                      │
//!   └──────────────────────────────────────────────────────────────────────┘
//!
//!   Each allocation "bumps" the cursor forward by the aligned size.
//!   A reset moves the cursor back to 0 and clears the storage.
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//!   rarena
//!   ├── align      - Alignment macros and helpers (align!, align_to!, align_up)
//!   ├── bump       - BumpAllocator and ResetPolicy
//!   ├── error      - AllocError
//!   ├── mem        - memcpy/memset/strlen style byte routines
//!   └── region     - Region handles into an arena
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use rarena::{AllocError, BumpAllocator};
//!
//! let mut arena = BumpAllocator::new(16);
//!
//! let first = arena.allocate(3).unwrap();    // [0, 4)
//! let second = arena.allocate(5).unwrap();   // [4, 12)
//! assert_eq!(12, arena.used());
//!
//! arena.bytes_mut(&first).unwrap().copy_from_slice(&[1, 2, 3, 4]);
//!
//! // 8 more bytes do not fit in the 4 that are left.
//! assert!(matches!(arena.allocate(5), Err(AllocError::OutOfMemory { .. })));
//!
//! arena.reset();
//! assert_eq!(None, arena.bytes(&second));
//! assert_eq!(0..16, arena.allocate(16).unwrap().range());
//! ```
//!
//! ## How It Works
//!
//! Every request is rounded up to the arena alignment `ALIGN` (4 bytes unless
//! chosen otherwise) before the cursor moves:
//!
//! ```text
//!   allocate(5) with ALIGN = 4:
//!
//!   rounded = (5 + 4 - 1) & !(4 - 1) = 8
//!
//!   before   ┌────┬────────────────────────┐
//!            │ R0 │          free          │   cursor = 4
//!            └────┴────────────────────────┘
//!   after    ┌────┬────────┬───────────────┐
//!            │ R0 │   R1   │     free      │   cursor = 12
//!            └────┴────────┴───────────────┘
//! ```
//!
//! If `cursor + rounded` would pass the capacity the call fails with
//! [`AllocError::OutOfMemory`] and nothing moves.
//!
//! A [`Region`] is an `(offset, len)` handle tagged with the arena's reset
//! generation. The arena only gives out bytes for regions of the current
//! generation, so reading through a region after a reset yields `None`
//! instead of someone else's data.
//!
//! ## Limitations
//!
//! - **No individual free**: memory comes back only through `reset`
//! - **Single owner**: mutation takes `&mut self`; share behind a lock
//! - **Reset cost**: the default [`ResetPolicy::Zero`] touches every byte;
//!   [`ResetPolicy::Keep`] is O(1) but leaves old data in place

pub mod align;
mod bump;
mod error;
pub mod mem;
mod region;

pub use bump::{BumpAllocator, DEFAULT_ALIGN, FILL_BYTE, ResetPolicy};
pub use error::{AllocError, AllocResult};
pub use region::Region;
