// core/src/store/id.rs

/// Hands out product identifiers.
///
/// A plain counter: every call yields a value never returned before by this
/// allocator, regardless of how close together the calls are. Deleted ids are
/// not recycled.
#[derive(Debug, Clone)]
pub struct IdAllocator {
  // None once u64::MAX has been handed out
  next: Option<u64>,
}

impl IdAllocator {
  pub fn new() -> Self {
    Self { next: Some(1) }
  }

  /// The next unused id, or `None` once the counter is exhausted.
  pub fn next_id(&mut self) -> Option<String> {
    let id = self.next?;
    self.next = id.checked_add(1);
    Some(id.to_string())
  }

  /// Advances past an id assigned elsewhere (e.g. seed data), so it is never handed out again.
  ///
  /// Returns `false` when `id` is numeric but the counter cannot move past it.
  pub fn reserve(&mut self, id: &str) -> bool {
    let Ok(n) = id.parse::<u64>() else {
      return true;
    };
    match self.next {
      Some(next) if n < next => true,
      Some(_) => match n.checked_add(1) {
        Some(after) => {
          self.next = Some(after);
          true
        }
        None => false,
      },
      None => true,
    }
  }
}

impl Default for IdAllocator {
  fn default() -> Self {
    Self::new()
  }
}
