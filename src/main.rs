use shiftly::commands::Cli;
use shiftly::libs::messages::macros::is_debug_mode;
use shiftly::msg_error;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
            .init();
    }

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(e);
            ExitCode::FAILURE
        }
    }
}
