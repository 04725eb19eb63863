/// Rounds `value` up to the machine word alignment.
///
/// # Examples
///
/// ```rust
/// use rarena::align;
///
/// match core::mem::size_of::<usize>() {
///     8 => assert_eq!(align!(13), 16), // 64 bit machine.
///     4 => assert_eq!(align!(11), 12), // 32 bit machine.
///     _ => {},
/// };
/// ```
#[macro_export]
macro_rules! align {
  ($value:expr) => {
    $crate::align_to!($value, ::core::mem::size_of::<usize>())
  };
}

/// Rounds `value` up to the next multiple of `align`.
///
/// `align` must be a power of two. The addition is unchecked, so values near
/// `usize::MAX` overflow; use [`align_up`](crate::align::align_up) when the
/// input is not trusted.
///
/// ```rust
/// use rarena::align_to;
///
/// assert_eq!(align_to!(3, 4), 4);
/// assert_eq!(align_to!(8, 4), 8);
/// assert_eq!(align_to!(0, 16), 0);
/// ```
#[macro_export]
macro_rules! align_to {
  ($value:expr, $align:expr) => {
    ($value + $align - 1) & !($align - 1)
  };
}

/// Checked form of [`align_to!`]: `None` when rounding would overflow.
#[inline]
#[must_use]
pub const fn align_up(
  value: usize,
  align: usize,
) -> Option<usize> {
  debug_assert!(align.is_power_of_two());

  match value.checked_add(align - 1) {
    Some(padded) => Some(padded & !(align - 1)),
    None => None,
  }
}

/// Whether `align` can be used as an arena alignment.
#[inline]
#[must_use]
pub const fn is_valid_alignment(align: usize) -> bool {
  align.is_power_of_two()
}
