//! Rolling Logger
//!
//! Installs a `tracing` fmt subscriber whose output is kept in a bounded
//! in-memory buffer (oldest lines are dropped first) and mirrored to the
//! browser console on wasm32, or stderr elsewhere.

use std::collections::VecDeque;
use std::io;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::{Level, Subscriber};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;

pub const DEFAULT_CAPACITY: usize = 200;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("a global logger is already installed")]
    AlreadyInitialized,
    #[error("unknown log level: {0}")]
    InvalidLevel(String),
}

/// Settings for `init_logger`
#[derive(Debug, Clone)]
pub struct LoggerOptions {
    /// Maximum level, e.g. "debug" or "warn"
    pub level: String,
    /// Lines kept in memory
    pub capacity: usize,
    /// Mirror each line to the console
    pub echo: bool,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            capacity: DEFAULT_CAPACITY,
            echo: true,
        }
    }
}

/// Shared circular buffer of formatted log lines
#[derive(Debug, Clone)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
    echo: bool,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
            echo: false,
        }
    }

    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Append a line, evicting the oldest once full
    pub fn push(&self, line: String) {
        if self.echo {
            echo_line(&line);
        }
        // A poisoned lock only means another writer panicked mid-push.
        let mut lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Retained lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        let lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        lines.iter().cloned().collect()
    }

    /// Retained lines joined into one report, oldest first
    pub fn dump(&self) -> String {
        self.recent().join("\n")
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|l| l.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Writer handed out per event by the fmt layer
pub struct BufferWriter {
    buffer: LogBuffer,
}

impl io::Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        for line in text.lines().filter(|l| !l.is_empty()) {
            self.buffer.push(line.to_string());
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        BufferWriter {
            buffer: self.clone(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn echo_line(line: &str) {
    web_sys::console::log_1(&line.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn echo_line(line: &str) {
    eprintln!("{}", line);
}

/// Timestamp layout of every line, e.g. `14:02:33.517`
pub const TIME_FORMAT: &str = "%H:%M:%S%.3f";

/// fmt subscriber writing into `buffer`. The chrono timer relies on chrono's
/// `wasmbind` feature for a clock on wasm32.
fn subscriber(buffer: &LogBuffer, level: Level) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .with_timer(ChronoLocal::new(TIME_FORMAT.to_string()))
        .with_max_level(level)
        .finish()
}

/// Install the global subscriber and return its buffer
pub fn init_logger(app_name: &str, options: LoggerOptions) -> Result<LogBuffer, LoggerError> {
    let level = Level::from_str(&options.level)
        .map_err(|_| LoggerError::InvalidLevel(options.level.clone()))?;
    let buffer = LogBuffer::new(options.capacity).with_echo(options.echo);

    subscriber(&buffer, level)
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    tracing::info!(app = app_name, "Logger initialized");
    Ok(buffer)
}

/// Log an info line through the global subscriber
pub fn info(message: &str) {
    tracing::info!("{}", message);
}

/// Log an error line through the global subscriber
pub fn error(message: &str) {
    tracing::error!("{}", message);
}
