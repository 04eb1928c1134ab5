//! Structured logging with session context.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use glow_commerce::SessionId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A log level or format name that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log {kind}: {value}")]
pub struct ParseLogSettingError {
    kind: &'static str,
    value: String,
}

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_ascii_uppercase())
    }
}

impl FromStr for LogLevel {
    type Err = ParseLogSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ParseLogSettingError {
                kind: "level",
                value: s.to_string(),
            }),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line.
    Json,
    /// Human-readable format.
    #[default]
    Human,
}

impl FromStr for LogFormat {
    type Err = ParseLogSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "human" | "text" => Ok(Self::Human),
            _ => Err(ParseLogSettingError {
                kind: "format",
                value: s.to_string(),
            }),
        }
    }
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Session ID for correlation.
    pub session_id: String,
    /// CLI command or flow that produced the entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Additional structured fields.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
    /// Microseconds since the logger was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_us: Option<u64>,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = format!("[{}] {}", self.level, self.message);

        if let Some(command) = &self.command {
            s.push_str(&format!(" ({command})"));
        }

        if !self.fields.is_empty() {
            s.push_str(" | ");
            let fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            s.push_str(&fields.join(" "));
        }

        s
    }

    pub fn render(&self, format: LogFormat) -> String {
        match format {
            LogFormat::Json => self.to_json(),
            LogFormat::Human => self.to_human(),
        }
    }
}

/// Structured logger bound to one CLI session.
///
/// Entries go to stderr so stdout stays clean for command output.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    session_id: SessionId,
    command: Option<String>,
    start_time: Instant,
    min_level: LogLevel,
    format: LogFormat,
}

impl StructuredLogger {
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            command: None,
            start_time: Instant::now(),
            min_level: LogLevel::Info,
            format: LogFormat::Human,
        }
    }

    /// Set the command name.
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Set minimum log level.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Start an entry at `level`; nothing is written until [`LogBuilder::emit`].
    pub fn at(&self, level: LogLevel, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder {
            logger: self,
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn debug(&self, message: impl Into<String>) -> LogBuilder<'_> {
        self.at(LogLevel::Debug, message)
    }

    pub fn info(&self, message: impl Into<String>) -> LogBuilder<'_> {
        self.at(LogLevel::Info, message)
    }

    pub fn warn(&self, message: impl Into<String>) -> LogBuilder<'_> {
        self.at(LogLevel::Warn, message)
    }

    /// Build the entry that would be written, or `None` if filtered out.
    pub fn entry(
        &self,
        level: LogLevel,
        message: &str,
        fields: BTreeMap<String, serde_json::Value>,
    ) -> Option<LogEntry> {
        if level < self.min_level {
            return None;
        }

        Some(LogEntry {
            level,
            message: message.to_string(),
            session_id: self.session_id.to_string(),
            command: self.command.clone(),
            fields,
            elapsed_us: Some(self.elapsed_us()),
        })
    }

    fn write(&self, entry: &LogEntry) {
        eprintln!("{}", entry.render(self.format));
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Microseconds since the logger was created.
    pub fn elapsed_us(&self) -> u64 {
        self.start_time.elapsed().as_micros() as u64
    }
}

/// Fields collected for one entry.
#[must_use = "call .emit() to write the entry"]
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: BTreeMap<String, serde_json::Value>,
}

impl LogBuilder<'_> {
    /// Attach any value that converts to JSON.
    pub fn field(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn duration_ms(self, key: &str, duration: Duration) -> Self {
        let ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self.field(key, ms)
    }

    /// The entry as it would be emitted, or `None` below the minimum level.
    pub fn build(self) -> Option<LogEntry> {
        self.logger.entry(self.level, &self.message, self.fields)
    }

    pub fn emit(self) {
        let logger = self.logger;
        if let Some(entry) = self.build() {
            logger.write(&entry);
        }
    }
}
