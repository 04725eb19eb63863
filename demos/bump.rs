use rarena::{AllocError, BumpAllocator, Region};

/// Prints one step of the walk through together with the arena state.
fn print_step(
  label: &str,
  arena: &BumpAllocator,
  region: Option<&Region>,
) {
  match region {
    Some(region) => println!(
      "[{}] region = {}, cursor = {}/{}",
      label,
      region,
      arena.used(),
      arena.capacity()
    ),
    None => println!("[{}] cursor = {}/{}", label, arena.used(), arena.capacity()),
  }
}

fn main() -> Result<(), AllocError> {
  let mut arena = BumpAllocator::new(16);
  print_step("start", &arena, None);

  // --------------------------------------------------------------------
  // 1) 3 bytes round up to 4.
  // --------------------------------------------------------------------
  let first = arena.allocate(3)?;
  print_step("1: allocate(3)", &arena, Some(&first));

  if let Some(bytes) = arena.bytes_mut(&first) {
    bytes.copy_from_slice(&0xDEADBEEFu32.to_le_bytes());
  }

  // --------------------------------------------------------------------
  // 2) 5 bytes round up to 8.
  // --------------------------------------------------------------------
  let second = arena.allocate(5)?;
  print_step("2: allocate(5)", &arena, Some(&second));

  // --------------------------------------------------------------------
  // 3) Another 8 bytes do not fit in the 4 left. The cursor stays put.
  // --------------------------------------------------------------------
  match arena.allocate(5) {
    Ok(region) => print_step("3: allocate(5)", &arena, Some(&region)),
    Err(err) => println!("[3: allocate(5)] {}, cursor = {}", err, arena.used()),
  }

  // --------------------------------------------------------------------
  // 4) Reset: cursor back to 0, every byte zeroed, old regions stale.
  // --------------------------------------------------------------------
  arena.reset();
  print_step("4: reset", &arena, None);
  println!(
    "[4] first region still readable? {}",
    arena.bytes(&first).is_some()
  );
  println!("[4] storage = {:?}", arena.storage());

  // --------------------------------------------------------------------
  // 5) The whole arena in one request.
  // --------------------------------------------------------------------
  let whole = arena.allocate(16)?;
  print_step("5: allocate(16)", &arena, Some(&whole));

  Ok(())
}
