/// Exclusive upper bound used when none is given.
pub const DEFAULT_BOUND: u32 = 30;

/// Options for a [`crate::Driver`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FibCoreOpts {
  bound: u32,
}

impl FibCoreOpts {
  pub fn new() -> Self {
    Self::default()
  }

  /// Applies each option in order; later options override earlier ones.
  pub fn with_options(mut self, opts: impl IntoIterator<Item = impl FnOnce(&mut Self)>) -> Self {
    for opt in opts {
      opt(&mut self);
    }
    self
  }

  /// Indices `0..bound` are computed by a run.
  pub fn bound(&self) -> u32 {
    self.bound
  }
}

impl Default for FibCoreOpts {
  fn default() -> Self {
    Self {
      bound: DEFAULT_BOUND,
    }
  }
}

/// Sets the exclusive upper bound on the indices a run prints.
pub fn with_bound(value: u32) -> impl FnOnce(&mut FibCoreOpts) {
  move |opts: &mut FibCoreOpts| {
    opts.bound = value;
  }
}
