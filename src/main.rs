use tracing::debug;
use tracing_subscriber::EnvFilter;

use mdb_report::{build_report, Config, JsonFileSource};

/// Only user-facing message on failure; details go to the log
const FAILURE_MESSAGE: &str = "We have a problem/Error";

fn main() {
    init_logging();

    let config = Config::from_env();
    let source = JsonFileSource::new(&config.input_path);

    match build_report(&source) {
        Ok(report) => print!("{}", report),
        Err(err) => {
            // Error chain only under RUST_LOG=debug; stdout stays one line
            debug!("{:#}", err);
            println!("{}", FAILURE_MESSAGE);
        }
    }
}

/// Logs go to stderr so stdout only carries the report.
/// Default level is warn, RUST_LOG overrides it.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
