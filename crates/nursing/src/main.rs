//! Nursing record: vital signs and nursing notes for one patient.

use anyhow::Result;
use nursing_lib::logging::{self, LogSink};
use nursing_lib::{app, config};

fn main() -> Result<()> {
    // Initialize tracing
    let logs = LogSink::new();
    logging::init(logs.clone());

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    app::run(&config, &logs)
}
