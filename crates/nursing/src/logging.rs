//! Tracing setup.
//!
//! Events go to stderr, except while the TUI owns the terminal: then they
//! are held in memory and written out once the screen is restored.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Build the event filter from a `RUST_LOG`-style spec, `warn` when unset.
#[must_use]
pub fn log_filter(spec: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(spec.unwrap_or_default())
}

#[derive(Default)]
struct SinkState {
    held: bool,
    pending: Vec<u8>,
}

/// Log sink that can be switched between stderr and an in-memory buffer.
#[derive(Clone, Default)]
pub struct LogSink {
    state: Arc<Mutex<SinkState>>,
}

impl LogSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start holding events in memory.
    pub fn hold(&self) {
        self.state.lock().held = true;
    }

    /// Stop holding and write everything held so far to `out`.
    pub fn release_into<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let pending = {
            let mut state = self.state.lock();
            state.held = false;
            std::mem::take(&mut state.pending)
        };
        out.write_all(&pending)?;
        out.flush()
    }

    /// Stop holding and write everything held so far to stderr.
    pub fn release(&self) -> io::Result<()> {
        self.release_into(&mut io::stderr().lock())
    }
}

/// Writer handed to the fmt layer for a single event.
pub struct LogSinkWriter {
    sink: LogSink,
}

impl Write for LogSinkWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.sink.state.lock();
        if state.held {
            state.pending.extend_from_slice(buf);
            Ok(buf.len())
        } else {
            drop(state);
            io::stderr().write(buf)
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

impl<'a> MakeWriter<'a> for LogSink {
    type Writer = LogSinkWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogSinkWriter { sink: self.clone() }
    }
}

/// Install the global subscriber writing through `sink`.
pub fn init(sink: LogSink) {
    let spec = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_writer(sink)
        .with_ansi(false)
        .with_env_filter(log_filter(spec.as_deref()))
        .init();
}
