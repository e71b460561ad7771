use std::fmt::{Display, Formatter, Result};

use clap::ValueEnum;
use env_logger::Env;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Logger {}

impl Logger {
    pub fn new() -> Self {
        Self {}
    }

    /// `RUST_LOG` wins over `level` when set.
    pub fn init(level: LogLevel) {
        env_logger::Builder::from_env(Env::default().default_filter_or(level.to_string()))
            .format_timestamp(None)
            .init();
    }

    pub fn debug<S: AsRef<str>>(&self, message: S) {
        log::debug!("{}", message.as_ref());
    }

    pub fn info<S: AsRef<str>>(&self, message: S) {
        log::info!("{}", message.as_ref());
    }

    pub fn warn<S: AsRef<str>>(&self, message: S) {
        log::warn!("{}", message.as_ref());
    }

    pub fn error<S: AsRef<str>>(&self, message: S) {
        log::error!("{}", message.as_ref());
    }
}
