//! Presentation and diagnostics settings.
//!
//! Nothing here changes what the address book accepts or rejects; it only
//! controls color, the pause between screens, screen clearing and the
//! tracing filter.

use std::env;

use crate::error::{ContactError, ContactResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Emit ANSI colors (default: true, off when `NO_COLOR` is set)
    pub color: bool,

    /// Wait for Enter after each action (default: true)
    pub pause: bool,

    /// Clear the terminal after each action (default: true)
    pub clear_screen: bool,

    /// Tracing filter directive (default: "off")
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            pause: true,
            clear_screen: true,
            log_filter: "off".to_string(),
        }
    }
}

impl Config {
    /// No color, no pause, no clearing. For scripted sessions.
    pub fn plain() -> Self {
        Self {
            color: false,
            pause: false,
            clear_screen: false,
            ..Self::default()
        }
    }

    /// Load settings from the process environment.
    ///
    /// - `NO_COLOR`: any value disables color
    /// - `CONTACTS_PAUSE`: boolean, default true
    /// - `CONTACTS_CLEAR`: boolean, default true
    /// - `CONTACTS_LOG`: tracing filter, default "off"
    pub fn from_env() -> ContactResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env` but reading from an arbitrary source.
    pub fn from_lookup<F>(lookup: F) -> ContactResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            color: lookup("NO_COLOR").is_none(),
            pause: parse_bool("CONTACTS_PAUSE", lookup("CONTACTS_PAUSE"), defaults.pause)?,
            clear_screen: parse_bool("CONTACTS_CLEAR", lookup("CONTACTS_CLEAR"), defaults.clear_screen)?,
            log_filter: lookup("CONTACTS_LOG")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.log_filter),
        })
    }
}

fn parse_bool(var: &str, value: Option<String>, default: bool) -> ContactResult<bool> {
    let Some(raw) = value else {
        return Ok(default);
    };
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ContactError::Config {
            var: var.to_string(),
            reason: format!("expected a boolean, got: {}", raw),
        }),
    }
}
