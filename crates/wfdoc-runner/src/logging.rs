use crate::run::RunnerError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the stderr subscriber. Level comes from `RUST_LOG`, default `warn`,
/// so stdout stays reserved for reports.
pub fn init_tracing() -> Result<(), RunnerError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .map_err(|error| RunnerError::Logging(error.to_string()))?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(false),
        )
        .with(env_filter)
        .try_init()
        .map_err(|error| RunnerError::Logging(error.to_string()))
}
