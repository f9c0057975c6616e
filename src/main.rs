use std::io;
use std::process::ExitCode;

use smsnotify::notifier::{self, report};
use smsnotify::{Config, Error};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("smsnotify=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let outcome = match Config::from_env() {
        Ok(config) => notifier::run(&config).await,
        Err(err) => Err(Error::from(err)),
    };

    if let Err(err) = &outcome {
        tracing::debug!(error = ?err, "failed to send SMS");
    }

    match report(&outcome, &mut io::stdout().lock(), &mut io::stderr().lock()) {
        Ok(code) => ExitCode::from(code),
        Err(_) => ExitCode::FAILURE,
    }
}
