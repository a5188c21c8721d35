use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    match logplex_drain::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
