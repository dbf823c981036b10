use chrono::{DateTime, Utc};
use colored::*;
use log::{Level, LevelFilter, Metadata, Record};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::future::Future;
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::config::GeminiConfig;

static LOGGER: Lazy<AdLogger> = Lazy::new(AdLogger::new);

tokio::task_local! {
    static ATTEMPT_ID: String;
}

/// Runs `future` with every record it logs tagged with `attempt_id`.
pub async fn scope_attempt<F: Future>(attempt_id: Uuid, future: F) -> F::Output {
    ATTEMPT_ID.scope(attempt_id.to_string(), future).await
}

pub fn current_attempt_id() -> Option<String> {
    ATTEMPT_ID.try_with(|id| id.clone()).ok()
}

pub fn init_with_config(config: LoggerConfig) -> Result<(), String> {
    let level = config.min_level;
    LOGGER.update_config(config)?;

    log::set_logger(&*LOGGER).map_err(|e| format!("Failed to set logger: {:?}", e))?;
    log::set_max_level(level.to_level_filter());
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn color(&self) -> Color {
        match self {
            LogLevel::Trace => Color::Cyan,
            LogLevel::Debug => Color::Blue,
            LogLevel::Info => Color::Green,
            LogLevel::Warn => Color::Yellow,
            LogLevel::Error => Color::Red,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    pub fn to_level(&self) -> Level {
        match self {
            LogLevel::Trace => Level::Trace,
            LogLevel::Debug => Level::Debug,
            LogLevel::Info => Level::Info,
            LogLevel::Warn => Level::Warn,
            LogLevel::Error => Level::Error,
        }
    }

    pub fn to_level_filter(&self) -> LevelFilter {
        self.to_level().to_level_filter()
    }

    pub fn from_level(level: Level) -> Self {
        match level {
            Level::Trace => LogLevel::Trace,
            Level::Debug => LogLevel::Debug,
            Level::Info => LogLevel::Info,
            Level::Warn => LogLevel::Warn,
            Level::Error => LogLevel::Error,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    pub module: String,
    pub file: String,
    pub line: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attempt_id: Option<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: String, module: String, file: String, line: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            level,
            message,
            module,
            file,
            line,
            attempt_id: None,
        }
    }

    pub fn with_attempt_id(mut self, attempt_id: String) -> Self {
        self.attempt_id = Some(attempt_id);
        self
    }

    fn from_record(record: &Record) -> Self {
        let entry = Self::new(
            LogLevel::from_level(record.level()),
            record.args().to_string(),
            record.module_path().unwrap_or("unknown").to_string(),
            record.file().unwrap_or("unknown").to_string(),
            record.line().unwrap_or(0),
        );
        match current_attempt_id() {
            Some(attempt_id) => entry.with_attempt_id(attempt_id),
            None => entry,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub min_level: LogLevel,
    pub show_colors: bool,
    pub show_file_location: bool,
    pub show_module: bool,
    pub include_timestamp: bool,
    pub timestamp_format: String,
    pub output_json: bool,
    pub log_file_path: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            show_colors: true,
            show_file_location: false,
            show_module: true,
            include_timestamp: true,
            timestamp_format: "%Y-%m-%d %H:%M:%S%.3f".to_string(),
            output_json: false,
            log_file_path: None,
        }
    }
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.show_colors = enabled;
        self
    }

    pub fn with_file_output(mut self, path: &str) -> Self {
        self.log_file_path = Some(path.to_string());
        self
    }

    pub fn with_json_output(mut self, enabled: bool) -> Self {
        self.output_json = enabled;
        self
    }

    pub fn production() -> Self {
        Self {
            min_level: LogLevel::Info,
            show_colors: false,
            output_json: true,
            ..Default::default()
        }
    }

    pub fn development() -> Self {
        Self {
            min_level: LogLevel::Debug,
            show_colors: true,
            show_file_location: true,
            ..Default::default()
        }
    }
}

/// `log` backend writing to stderr and optionally to a file.
pub struct AdLogger {
    config: Mutex<LoggerConfig>,
    log_file: Mutex<Option<File>>,
}

impl AdLogger {
    pub fn new() -> Self {
        Self {
            config: Mutex::new(LoggerConfig::default()),
            log_file: Mutex::new(None),
        }
    }

    pub fn update_config(&self, new_config: LoggerConfig) -> Result<(), String> {
        let file = match &new_config.log_file_path {
            Some(path) => Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| format!("Failed to open log file {}: {}", path, e))?,
            ),
            None => None,
        };

        if let Ok(mut log_file) = self.log_file.lock() {
            *log_file = file;
        }
        if let Ok(mut config) = self.config.lock() {
            *config = new_config;
        }
        Ok(())
    }

    pub fn format_line(&self, entry: &LogEntry, config: &LoggerConfig) -> String {
        let mut output = String::new();

        if config.include_timestamp {
            let timestamp = entry.timestamp.format(&config.timestamp_format).to_string();
            if config.show_colors {
                output.push_str(&format!("{} ", timestamp.bright_black()));
            } else {
                output.push_str(&format!("{} ", timestamp));
            }
        }

        let level = format!("{:<5}", entry.level.as_str());
        if config.show_colors {
            output.push_str(&format!("[{}] ", level.color(entry.level.color()).bold()));
        } else {
            output.push_str(&format!("[{}] ", level));
        }

        if config.show_module && !entry.module.is_empty() {
            if config.show_colors {
                output.push_str(&format!("{}: ", entry.module.bright_blue()));
            } else {
                output.push_str(&format!("{}: ", entry.module));
            }
        }

        output.push_str(&entry.message);

        if let Some(attempt_id) = &entry.attempt_id {
            if config.show_colors {
                output.push_str(&format!(" [attempt:{}]", attempt_id.bright_yellow()));
            } else {
                output.push_str(&format!(" [attempt:{}]", attempt_id));
            }
        }

        if config.show_file_location {
            let location = format!("{}:{}", entry.file, entry.line);
            if config.show_colors {
                output.push_str(&format!(" ({})", location.bright_black()));
            } else {
                output.push_str(&format!(" ({})", location));
            }
        }

        output
    }

    fn render(&self, entry: &LogEntry, config: &LoggerConfig) -> String {
        if config.output_json {
            serde_json::to_string(entry).unwrap_or_else(|_| entry.message.clone())
        } else {
            self.format_line(entry, config)
        }
    }
}

impl Default for AdLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl log::Log for AdLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        match self.config.lock() {
            Ok(config) => metadata.level() <= config.min_level.to_level(),
            Err(_) => true,
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry::from_record(record);

        let Ok(config) = self.config.lock() else {
            return;
        };
        eprintln!("{}", self.render(&entry, &config));

        if let Ok(mut log_file) = self.log_file.lock() {
            if let Some(file) = log_file.as_mut() {
                // Files never get ANSI colour codes.
                let plain = LoggerConfig {
                    show_colors: false,
                    ..config.clone()
                };
                let _ = writeln!(file, "{}", self.render(&entry, &plain));
            }
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
        if let Ok(mut log_file) = self.log_file.lock() {
            if let Some(file) = log_file.as_mut() {
                let _ = file.flush();
            }
        }
    }
}

/// Logs how long a scope took when dropped.
pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn new(name: &str) -> Self {
        log::debug!("Starting timer: {}", name);
        Self {
            start: Instant::now(),
            name: name.to_string(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        log::info!(
            "Timer '{}' completed in {}ms",
            self.name,
            self.elapsed().as_millis()
        );
    }
}

pub fn timer(name: &str) -> Timer {
    Timer::new(name)
}

pub fn log_startup_info(app_name: &str, version: &str) {
    log::info!("Starting {} v{}", app_name, version);
}

pub fn log_config_info(config: &GeminiConfig) {
    log::info!("Configuration loaded:");
    log::info!("   Model: {}", config.model);
    log::info!("   Endpoint: {}", config.endpoint);
    log::info!("   API key: {}", config.masked_api_key());
}
