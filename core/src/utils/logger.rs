use tracing_forest::{printer::PrettyPrinter, ForestLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Installs a `fmt` subscriber on stderr, filtered by `RUST_LOG`.
///
/// Stdout is left to the program's results. Calling it twice is a no-op.
pub fn setup_logger() {
  let _ = tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(EnvFilter::from_default_env())
    .try_init();
}

/// Installs a span tree printer on stderr, filtered by `RUST_TRACER`.
pub fn setup_tracer() {
  let _ = Registry::default()
    .with(EnvFilter::from_env("RUST_TRACER"))
    .with(ForestLayer::from(
      PrettyPrinter::new().writer(std::io::stderr),
    ))
    .try_init();
}
