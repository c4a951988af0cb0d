// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Injectable diagnostic logging.
//!
//! Signing code never writes to process-global log handles. It receives a
//! [`Logger`] through [`crate::Context`] and emits lines through whatever
//! [`LogSink`] the host configured. The default sink forwards to the `log`
//! facade, so hosts that already run `env_logger` see signing diagnostics
//! under the `websign` target.

use crate::{Context, Error, Result};
use log::{Level, LevelFilter};
use serde::{Deserialize, Deserializer};
use std::fmt::{self, Debug};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Arc, Mutex};

/// Env value used to pick the log sink: `nil`, `log`, `stdout`, `stderr`, `file` or `both`.
pub const WEBSIGN_LOG_SINK: &str = "WEBSIGN_LOG_SINK";
/// Env value used to pick the minimum severity: `off`, `error`, `warn`, `info`, `debug` or `trace`.
pub const WEBSIGN_LOG_LEVEL: &str = "WEBSIGN_LOG_LEVEL";
/// Env value used as the log file path of `file` and `both` sinks.
pub const WEBSIGN_LOG_PATH: &str = "WEBSIGN_LOG_PATH";

const LOG_TARGET: &str = "websign";

/// LogSink receives formatted diagnostic lines.
///
/// Sinks are shared between threads, so implementations must synchronize
/// internally. A sink must swallow its own write failures.
pub trait LogSink: Debug + Send + Sync + 'static {
    /// Write one line at the given level.
    fn write_line(&self, level: Level, line: &str);
}

/// Destination of diagnostic lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogSinkKind {
    /// Discard everything.
    Nil,
    /// Forward to the `log` facade.
    #[default]
    Log,
    /// Write to standard output.
    Stdout,
    /// Write to standard error.
    Stderr,
    /// Append to the file at [`LogConfig::path`].
    File,
    /// Append to the file at [`LogConfig::path`] and echo to standard output.
    Both,
}

impl FromStr for LogSinkKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nil" => Ok(LogSinkKind::Nil),
            "log" => Ok(LogSinkKind::Log),
            "stdout" => Ok(LogSinkKind::Stdout),
            "stderr" => Ok(LogSinkKind::Stderr),
            "file" => Ok(LogSinkKind::File),
            "both" => Ok(LogSinkKind::Both),
            v => Err(Error::config_invalid(format!("unknown log sink: {v}"))),
        }
    }
}

/// LogConfig carries the logger configuration: `{sink, level}` plus the
/// file path used by file-backed sinks.
///
/// ```
/// use websign_core::LogConfig;
///
/// let cfg = LogConfig::from_json(r#"{"sink": "stderr", "level": "trace"}"#).unwrap();
/// assert_eq!(cfg.level, log::LevelFilter::Trace);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogConfig {
    /// `sink` will be loaded from
    ///
    /// - this field
    /// - env value: [`WEBSIGN_LOG_SINK`]
    #[serde(default)]
    pub sink: LogSinkKind,
    /// `level` will be loaded from
    ///
    /// - this field
    /// - env value: [`WEBSIGN_LOG_LEVEL`]
    #[serde(default = "default_level", deserialize_with = "deserialize_level")]
    pub level: LevelFilter,
    /// `path` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`WEBSIGN_LOG_PATH`]
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            sink: LogSinkKind::default(),
            level: default_level(),
            path: None,
        }
    }
}

fn default_level() -> LevelFilter {
    LevelFilter::Trace
}

fn deserialize_level<'de, D>(d: D) -> std::result::Result<LevelFilter, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(d)?;
    LevelFilter::from_str(&s).map_err(serde::de::Error::custom)
}

impl LogConfig {
    /// Parse config from a json document like `{"sink": "file", "level": "trace", "path": "logs/errlog.txt"}`.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load config from env, env values override fields.
    pub fn from_env(mut self, ctx: &Context) -> Result<Self> {
        if let Some(v) = ctx.env_var(WEBSIGN_LOG_SINK) {
            self.sink = v.parse()?;
        }
        if let Some(v) = ctx.env_var(WEBSIGN_LOG_LEVEL) {
            self.level = LevelFilter::from_str(v.trim())
                .map_err(|_| Error::config_invalid(format!("invalid log level: {v}")))?;
        }
        if let Some(v) = ctx.env_var(WEBSIGN_LOG_PATH) {
            self.path.get_or_insert(PathBuf::from(v));
        }

        Ok(self)
    }
}

/// Logger is the diagnostic capability handed to signing code.
///
/// Cloning is cheap, clones share the same sink.
#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn LogSink>,
    level: LevelFilter,
}

impl Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("sink", &self.sink)
            .field("level", &self.level)
            .finish()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::with_sink(LogCrateSink, default_level())
    }
}

impl Logger {
    /// Build a logger from config, opening log files if needed.
    pub fn new(config: &LogConfig) -> Result<Self> {
        let sink: Arc<dyn LogSink> = match config.sink {
            LogSinkKind::Nil => Arc::new(NoopSink),
            LogSinkKind::Log => Arc::new(LogCrateSink),
            LogSinkKind::Stdout => Arc::new(WriterSink::stdout()),
            LogSinkKind::Stderr => Arc::new(WriterSink::stderr()),
            LogSinkKind::File => Arc::new(WriterSink::file(required_path(config)?)?),
            LogSinkKind::Both => Arc::new(TeeSink::new(vec![
                Arc::new(WriterSink::file(required_path(config)?)?) as Arc<dyn LogSink>,
                Arc::new(WriterSink::stdout()),
            ])),
        };

        Ok(Self {
            sink,
            level: config.level,
        })
    }

    /// Build a logger from an existing sink.
    pub fn with_sink(sink: impl LogSink, level: LevelFilter) -> Self {
        Self {
            sink: Arc::new(sink),
            level,
        }
    }

    /// A logger that drops everything.
    pub fn disabled() -> Self {
        Self::with_sink(NoopSink, LevelFilter::Off)
    }

    /// The minimum severity this logger emits.
    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Check if lines at `level` will reach the sink.
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level <= self.level
    }

    /// Emit a line at `level`.
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        self.sink.write_line(level, &args.to_string());
    }

    /// Emit a trace line.
    pub fn trace(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Trace, args)
    }

    /// Emit a debug line.
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args)
    }

    /// Emit an info line.
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args)
    }

    /// Emit a warning line.
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args)
    }

    /// Emit an error line.
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args)
    }
}

fn required_path(config: &LogConfig) -> Result<&Path> {
    config.path.as_deref().ok_or_else(|| {
        Error::config_invalid(format!("log sink {:?} requires a path", config.sink))
    })
}

/// NoopSink discards every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    fn write_line(&self, _level: Level, _line: &str) {}
}

/// LogCrateSink forwards lines to the `log` facade under the `websign` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogCrateSink;

impl LogSink for LogCrateSink {
    fn write_line(&self, level: Level, line: &str) {
        log::log!(target: LOG_TARGET, level, "{line}");
    }
}

/// WriterSink writes `LEVEL: date time line` records into any writer.
pub struct WriterSink {
    name: String,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl Debug for WriterSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterSink").field("name", &self.name).finish()
    }
}

impl WriterSink {
    /// Wrap a writer.
    pub fn new(name: impl Into<String>, writer: impl Write + Send + 'static) -> Self {
        Self {
            name: name.into(),
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Write into standard output.
    pub fn stdout() -> Self {
        Self::new("stdout", io::stdout())
    }

    /// Write into standard error.
    pub fn stderr() -> Self {
        Self::new("stderr", io::stderr())
    }

    /// Append into the file at `path`, creating it if missing.
    pub fn file(path: &Path) -> Result<Self> {
        let f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                Error::config_invalid(format!("open log file {} failed", path.display()))
                    .with_source(e)
            })?;
        Ok(Self::new(path.display().to_string(), f))
    }
}

impl LogSink for WriterSink {
    fn write_line(&self, level: Level, line: &str) {
        let Ok(mut w) = self.writer.lock() else {
            return;
        };
        let ts = crate::time::now().format("%Y/%m/%d %H:%M:%S");
        let _ = writeln!(w, "{level}: {ts} {line}");
        let _ = w.flush();
    }
}

/// TeeSink copies every line into all inner sinks.
#[derive(Debug, Clone)]
pub struct TeeSink {
    sinks: Vec<Arc<dyn LogSink>>,
}

impl TeeSink {
    /// Create a tee over `sinks`.
    pub fn new(sinks: Vec<Arc<dyn LogSink>>) -> Self {
        Self { sinks }
    }
}

impl LogSink for TeeSink {
    fn write_line(&self, level: Level, line: &str) {
        for sink in &self.sinks {
            sink.write_line(level, line);
        }
    }
}

/// MemorySink keeps lines in memory.
///
/// This is useful for testing. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<(Level, String)>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of captured lines.
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, level: Level, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((level, line.to_string()));
        }
    }
}
