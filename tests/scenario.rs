//! End-to-end walks through the arena's public API.

use rarena::{AllocError, BumpAllocator, FILL_BYTE, ResetPolicy, mem};

#[test]
fn sixteen_byte_arena() {
  let mut arena = BumpAllocator::new(16);
  assert_eq!(4, arena.alignment());

  let first = arena.allocate(3).unwrap();
  assert_eq!((0, 4), (first.offset(), first.end()));

  let second = arena.allocate(5).unwrap();
  assert_eq!((4, 12), (second.offset(), second.end()));

  assert_eq!(
    Err(AllocError::OutOfMemory {
      requested: 8,
      remaining: 4
    }),
    arena.allocate(5)
  );
  assert_eq!(12, arena.used());

  arena.reset();
  assert_eq!(0, arena.used());
  assert_eq!(&[FILL_BYTE; 16], arena.storage());

  let whole = arena.allocate(16).unwrap();
  assert_eq!((0, 16), (whole.offset(), whole.end()));
  assert_eq!(16, arena.used());
  assert!(arena.allocate(1).is_err());
}

#[test]
fn full_then_reset_cycles() {
  let mut arena = BumpAllocator::new(64);

  for round in 0..4u8 {
    let region = arena.allocate(64).unwrap();
    assert_eq!(0, region.offset());
    assert_eq!(u64::from(round), region.generation());

    arena.bytes_mut(&region).unwrap().fill(round + 1);
    assert!(arena.allocate(1).is_err());

    arena.reset();
    assert!(arena.storage().iter().all(|b| *b == FILL_BYTE));
  }
}

#[test]
fn string_table() {
  let mut arena = BumpAllocator::<8>::with_capacity(64);
  let words: [&[u8]; 3] = [b"bump\0", b"arena\0", b"reset\0"];

  let regions: Vec<_> = words
    .iter()
    .map(|word| arena.alloc_copy(word).unwrap())
    .collect();

  for (word, region) in words.iter().zip(&regions) {
    let bytes = arena.bytes(region).unwrap();
    assert_eq!(word.len() - 1, mem::c_strlen(bytes));
    assert_eq!(0, region.offset() % 8);
  }

  assert_eq!(24, arena.used());
}

#[test]
fn keep_policy_reuses_without_clearing() {
  let mut arena = BumpAllocator::<4>::with_policy(8, ResetPolicy::Keep);

  let region = arena.alloc_copy(b"old!").unwrap();
  arena.reset();

  assert_eq!(None, arena.bytes(&region));

  let reused = arena.allocate(4).unwrap();
  assert_eq!(Some(&b"old!"[..]), arena.bytes(&reused));
}

#[test]
fn arenas_are_independent() {
  let handles: Vec<_> = (0..4)
    .map(|id| {
      std::thread::spawn(move || {
        let mut arena = BumpAllocator::new(128);
        let region = arena.allocate(id * 8 + 1).unwrap();
        arena.bytes_mut(&region).unwrap().fill(id as u8);
        arena.used()
      })
    })
    .collect();

  let used: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();

  assert_eq!(vec![4, 12, 20, 28], used);
}
