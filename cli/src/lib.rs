pub mod commands;
mod util;

pub const FIBENCH_VERSION_MESSAGE: &str = concat!(
  env!("CARGO_PKG_VERSION"),
  " (",
  env!("VERGEN_GIT_SHA"),
  " ",
  env!("VERGEN_BUILD_TIMESTAMP"),
  ")"
);
