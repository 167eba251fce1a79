//! crates/logstream/src/config.rs
//! Depth limits and time annotation settings for a prefix logger.

use std::str::FromStr;

use crate::error::ConfigError;

/// Depth limit that never suppresses output.
pub const UNLIMITED_DEPTH: usize = usize::MAX;

/// Environment variable consulted by [`LogStreamConfig::from_env`].
pub const ENV_VAR: &str = "LOGSTREAM";

/// Settings applied to a [`PrefixLogger`](crate::PrefixLogger).
///
/// The textual form is a comma-separated list of tokens:
///
/// | token | effect |
/// |-------|--------|
/// | `console=N` | console depth limit (`N` or `max`) |
/// | `file=N` | file depth limit (`N` or `max`) |
/// | `time` | enable elapsed-time annotation |
/// | `notime` | disable elapsed-time annotation |
///
/// # Examples
///
/// ```
/// use logstream::LogStreamConfig;
///
/// let config: LogStreamConfig = "console=1, file=max, time".parse().unwrap();
/// assert_eq!(config.console_depth, 1);
/// assert_eq!(config.file_depth, usize::MAX);
/// assert!(config.log_execution_time);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LogStreamConfig {
    /// Maximum number of active scopes for which console output is produced.
    pub console_depth: usize,
    /// Maximum number of active scopes for which file output is produced.
    pub file_depth: usize,
    /// Prefix each header with elapsed process time.
    pub log_execution_time: bool,
}

impl Default for LogStreamConfig {
    fn default() -> Self {
        Self {
            console_depth: UNLIMITED_DEPTH,
            file_depth: UNLIMITED_DEPTH,
            log_execution_time: false,
        }
    }
}

impl LogStreamConfig {
    /// Apply a single token (e.g., "console=2", "time").
    pub fn apply_token(&mut self, token: &str) -> Result<(), ConfigError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ConfigError::EmptyToken);
        }

        match token.split_once('=') {
            Some((name, value)) => {
                let depth = parse_depth(value.trim())?;
                match name.trim() {
                    "console" => self.console_depth = depth,
                    "file" => self.file_depth = depth,
                    _ => return Err(ConfigError::UnknownToken(token.to_owned())),
                }
            }
            None => match token {
                "time" => self.log_execution_time = true,
                "notime" => self.log_execution_time = false,
                _ => return Err(ConfigError::UnknownToken(token.to_owned())),
            },
        }
        Ok(())
    }

    /// Read the configuration from the `LOGSTREAM` environment variable.
    ///
    /// An unset or non-UTF-8 variable yields the default configuration.
    pub fn from_env() -> Result<Self, ConfigError> {
        std::env::var(ENV_VAR).map_or_else(|_| Ok(Self::default()), |value| value.parse())
    }
}

impl FromStr for LogStreamConfig {
    type Err = ConfigError;

    /// Empty entries between commas are ignored, so `""` parses to the default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut config = Self::default();
        for token in s.split(',').filter(|token| !token.trim().is_empty()) {
            config.apply_token(token)?;
        }
        Ok(config)
    }
}

/// Parse a depth value like "3" or "max".
fn parse_depth(value: &str) -> Result<usize, ConfigError> {
    match value {
        "max" | "unbounded" => Ok(UNLIMITED_DEPTH),
        _ => value
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidDepth(value.to_owned())),
    }
}
