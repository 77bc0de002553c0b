use std::fmt;
use std::ops::Add;

use web_time::{Duration, SystemTime, UNIX_EPOCH};

/// A wall-clock reading, as seconds since the Unix epoch.
///
/// Readings keep microsecond resolution, which is exactly what `Display`
/// prints, so differences between printed timestamps are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(Duration);

impl Timestamp {
  pub fn now() -> Self {
    // A clock set before 1970 reads as the epoch itself.
    let since_epoch = SystemTime::now()
      .duration_since(UNIX_EPOCH)
      .unwrap_or_default();
    Self::from_unix(since_epoch)
  }

  pub fn from_unix(since_epoch: Duration) -> Self {
    Self(truncate_to_micros(since_epoch))
  }

  /// Time elapsed from `earlier` to `self`, or zero if `earlier` is later.
  pub fn duration_since(&self, earlier: Timestamp) -> Duration {
    self.0.saturating_sub(earlier.0)
  }

  pub fn as_secs_f64(&self) -> f64 {
    self.0.as_secs_f64()
  }
}

impl Add<Duration> for Timestamp {
  type Output = Timestamp;

  fn add(self, rhs: Duration) -> Timestamp {
    Timestamp::from_unix(self.0.saturating_add(rhs))
  }
}

fn truncate_to_micros(d: Duration) -> Duration {
  Duration::new(d.as_secs(), d.subsec_micros() * 1_000)
}

impl fmt::Display for Timestamp {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}.{:06}", self.0.as_secs(), self.0.subsec_micros())
  }
}
