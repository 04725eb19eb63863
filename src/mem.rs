//! Byte routines for environments without a C library.
//!
//! These mirror `memcpy`, `memset` and `strlen`, but work on slices so a
//! length mismatch can never run off the end of a buffer.

/// Copies bytes from `src` into `dest`, front to back.
///
/// Copies `min(dest.len(), src.len())` bytes and returns that count.
pub fn copy_bytes(
  dest: &mut [u8],
  src: &[u8],
) -> usize {
  let count = dest.len().min(src.len());

  for (d, s) in dest.iter_mut().zip(src.iter()) {
    *d = *s;
  }

  count
}

/// Sets every byte of `dest` to `value`.
pub fn fill_bytes(
  dest: &mut [u8],
  value: u8,
) {
  for byte in dest.iter_mut() {
    *byte = value;
  }
}

/// Length of the NUL-terminated string at the start of `bytes`.
///
/// Returns `bytes.len()` when no terminator is present.
#[must_use]
pub fn c_strlen(bytes: &[u8]) -> usize {
  let mut len = 0;

  while len < bytes.len() && bytes[len] != 0 {
    len += 1;
  }

  len
}

#[cfg(test)]
mod tests {
  use std::ffi::c_void;

  use super::*;

  #[test]
  fn test_copy_bytes() {
    let mut dest = [0u8; 4];

    assert_eq!(4, copy_bytes(&mut dest, &[1, 2, 3, 4, 5, 6]));
    assert_eq!([1, 2, 3, 4], dest);

    let mut dest = [9u8; 6];
    assert_eq!(2, copy_bytes(&mut dest, &[7, 8]));
    assert_eq!([7, 8, 9, 9, 9, 9], dest);

    assert_eq!(0, copy_bytes(&mut [], &[1, 2]));
  }

  #[test]
  fn test_copy_bytes_matches_libc() {
    let src: Vec<u8> = (0..=255).collect();
    let mut ours = vec![0u8; src.len()];
    let mut theirs = vec![0u8; src.len()];

    copy_bytes(&mut ours, &src);
    unsafe {
      libc::memcpy(
        theirs.as_mut_ptr() as *mut c_void,
        src.as_ptr() as *const c_void,
        src.len(),
      );
    }

    assert_eq!(theirs, ours);
  }

  #[test]
  fn test_fill_bytes_matches_libc() {
    for value in [0u8, 0x5A, 0xFF] {
      let mut ours = vec![1u8; 37];
      let mut theirs = vec![1u8; 37];

      fill_bytes(&mut ours, value);
      unsafe {
        libc::memset(theirs.as_mut_ptr() as *mut c_void, value as i32, theirs.len());
      }

      assert_eq!(theirs, ours);
    }
  }

  #[test]
  fn test_c_strlen_matches_libc() {
    let samples: [&[u8]; 4] = [b"\0", b"a\0", b"hello\0world\0", b"bare metal\0"];

    for sample in samples {
      let expected = unsafe { libc::strlen(sample.as_ptr() as *const libc::c_char) };
      assert_eq!(expected, c_strlen(sample));
    }
  }

  #[test]
  fn test_c_strlen_without_terminator() {
    assert_eq!(0, c_strlen(b""));
    assert_eq!(3, c_strlen(b"abc"));
  }
}
