// Singleton - process-wide logger and config.
// Same pattern, two lazy primitives: `lazy_static!` for the logger and
// `once_cell::sync::Lazy` for the config.

use std::collections::HashMap;
use std::io::Write;
use std::sync::{PoisonError, RwLock};

use chrono::Local;
use lazy_static::lazy_static;
use once_cell::sync::Lazy;

use crate::{PatternError, Result};

#[derive(Debug)]
pub struct Logger {
    format: &'static str,
}

lazy_static! {
    static ref LOGGER: Logger = Logger {
        format: "%Y-%m-%d %H:%M:%S",
    };
}

impl Logger {
    pub fn instance() -> &'static Logger {
        &LOGGER
    }

    pub fn write(&self, out: &mut dyn Write, message: &str) -> Result<()> {
        writeln!(out, "{}: {message}", Local::now().format(self.format))?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct Config {
    values: RwLock<HashMap<String, String>>,
}

static CONFIG: Lazy<Config> = Lazy::new(Config::default);

impl Config {
    pub fn instance() -> &'static Config {
        &CONFIG
    }

    pub fn get_value(&self, key: &str) -> Result<String> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
            .ok_or_else(|| PatternError::unknown_key("config key", key))
    }

    pub fn set_value(&self, key: &str, value: &str) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    Logger::instance().write(out, "Started!")?;

    let l1 = Logger::instance();
    let l2 = Logger::instance();

    if std::ptr::eq(l1, l2) {
        Logger::instance().write(out, "Logger has a single instance.")?;
    } else {
        Logger::instance().write(out, "Loggers are different.")?;
    }

    let c1 = Config::instance();
    c1.set_value("login", "test_login");
    c1.set_value("password", "test_password");

    let c2 = Config::instance();
    if c2.get_value("login")? == "test_login" && c2.get_value("password")? == "test_password" {
        Logger::instance().write(out, "Config singleton also works fine.")?;
    }

    Logger::instance().write(out, "Finished!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_messages() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let messages: Vec<&str> = text
            .lines()
            .map(|line| line.split_once(": ").map_or(line, |(_, message)| message))
            .collect();

        assert_eq!(
            messages,
            [
                "Started!",
                "Logger has a single instance.",
                "Config singleton also works fine.",
                "Finished!"
            ]
        );
    }

    #[test]
    fn test_missing_config_key() {
        assert!(matches!(
            Config::instance().get_value("no-such-key"),
            Err(PatternError::UnknownKey { .. })
        ));
    }
}
