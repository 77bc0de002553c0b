use thiserror::Error;

/// Largest index whose Fibonacci value fits in a `u64`.
pub const MAX_INDEX: i64 = 93;

#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FibError {
  #[error("fibonacci index {0} is negative")]
  NegativeIndex(i64),
  #[error("fibonacci({0}) does not fit in 64 bits (max index is {MAX_INDEX})")]
  Overflow(i64),
}

/// Computes F(n) by plain double recursion.
///
/// The recursion is deliberately left unmemoized: the point of calling this is
/// to measure the cost of the naive call tree, which grows as O(2^n).
pub fn fibonacci(n: i64) -> Result<u64, FibError> {
  if n < 0 {
    return Err(FibError::NegativeIndex(n));
  }
  if n > MAX_INDEX {
    return Err(FibError::Overflow(n));
  }
  Ok(naive(n as u64))
}

fn naive(n: u64) -> u64 {
  if n <= 1 {
    return n;
  }
  naive(n - 1) + naive(n - 2)
}
