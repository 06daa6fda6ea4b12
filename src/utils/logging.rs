//! Logging setup for the SDK
//!
//! Built on `tracing_subscriber`. Filtering is driven by `RUST_LOG` and
//! defaults to INFO for this crate only, so embedding applications keep
//! control of their own log levels.
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

const DEFAULT_FILTER: &str = "polychain_client=info";

/// Setup logging to stderr
pub fn setup_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
	setup_logging_with_writer(std::io::stderr)?;
	Ok(())
}

/// Setup logging with a custom writer
///
/// Useful for capturing log output in tests or redirecting it to a file.
pub fn setup_logging_with_writer<W>(
	writer: W,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

	tracing_subscriber::registry()
		.with(filter)
		.with(
			fmt::layer()
				.with_writer(writer)
				.with_target(true)
				.compact(),
		)
		.try_init()?;
	Ok(())
}
