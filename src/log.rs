use std::fmt::Display;

use clap::ValueEnum;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    Debug,
    Verbose,
    Info,
    Warn,
    Error,
    Fatal,
}

impl LogLevel {
    fn as_ansi(self) -> &'static str {
        match self {
            LogLevel::Debug => "\x1b[38;5;6m",
            LogLevel::Verbose => "\x1b[38;5;8m",
            LogLevel::Info => "\x1b[39m",
            LogLevel::Warn => "\x1b[38;5;3m",
            LogLevel::Error => "\x1b[38;5;1m",
            LogLevel::Fatal => "\x1b[38;5;0;48;5;1m",
        }
    }

    fn as_pre(self) -> &'static str {
        match self {
            LogLevel::Debug => "[DBG] ",
            LogLevel::Verbose => "[VRB] ",
            LogLevel::Info => "[INF] ",
            LogLevel::Warn => "[WRN] ",
            LogLevel::Error => "[ERR] ",
            LogLevel::Fatal => "[FTL] ",
        }
    }

    fn to_stderr(self) -> bool {
        self >= LogLevel::Warn
    }
}

const ANSI_RESET: &str = "\x1b[0m";

#[derive(Debug, Copy, Clone)]
pub struct Logger {
    use_ansi_color: bool,
    minimum_level: LogLevel,
}

impl Logger {
    pub fn new(use_ansi_color: bool, minimum_level: LogLevel) -> Self {
        Self {
            use_ansi_color,
            minimum_level,
        }
    }

    pub fn enabled(self, level: LogLevel) -> bool {
        level >= self.minimum_level
    }

    /// render a full line, without the trailing newline
    fn format<T: Display>(self, level: LogLevel, message: T) -> String {
        if self.use_ansi_color {
            format!("{}{}{message}{ANSI_RESET}", level.as_ansi(), level.as_pre())
        } else {
            format!("{}{message}", level.as_pre())
        }
    }

    pub fn log<T: Display>(self, level: LogLevel, message: T) {
        if !self.enabled(level) {
            return;
        }

        let line = self.format(level, message);
        if level.to_stderr() {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }

    pub fn debug<T: Display>(self, message: T) {
        self.log(LogLevel::Debug, message);
    }

    pub fn verbose<T: Display>(self, message: T) {
        self.log(LogLevel::Verbose, message);
    }

    pub fn info<T: Display>(self, message: T) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn<T: Display>(self, message: T) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error<T: Display>(self, message: T) {
        self.log(LogLevel::Error, message);
    }

    pub fn fatal<T: Display>(self, message: T) {
        self.log(LogLevel::Fatal, message);
    }
}
