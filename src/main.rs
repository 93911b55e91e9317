use esshell::constants::MIN_JAVA_MINOR;
use esshell::{probe, proxy};
use std::io;
use std::process::ExitCode;
use tracing::{debug, error};

fn main() -> ExitCode {
    let format = tracing_subscriber::fmt::format()
        .without_time()
        .with_level(false)
        .with_target(false);

    tracing_subscriber::fmt()
        .event_format(format)
        .with_writer(io::stderr)
        .init();

    let version = match probe::probe() {
        Ok(version) => version,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    debug!("found Java {version}");

    if !version.meets_minimum_minor(MIN_JAVA_MINOR) {
        error!("Java {MIN_JAVA_MINOR} or above is required");
        return ExitCode::FAILURE;
    }

    match proxy::run_shell() {
        Ok(code) => code,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
