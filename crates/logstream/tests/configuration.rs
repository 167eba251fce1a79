//! Integration tests for configuration parsing and application.

use logstream::{ConfigError, LogStreamConfig, PrefixLogger, SharedBuffer, StreamSink};

// ============================================================================
// Parsing
// ============================================================================

/// Verifies a full configuration string parses.
#[test]
fn parses_all_tokens() {
    let config: LogStreamConfig = "console=2,file=10,time".parse().unwrap();
    assert_eq!(
        config,
        LogStreamConfig {
            console_depth: 2,
            file_depth: 10,
            log_execution_time: true,
        }
    );
}

/// Verifies later tokens override earlier ones.
#[test]
fn later_tokens_win() {
    let config: LogStreamConfig = "console=2,console=0,time,notime".parse().unwrap();
    assert_eq!(config.console_depth, 0);
    assert!(!config.log_execution_time);
}

/// Verifies unknown settings are rejected by name.
#[test]
fn rejects_unknown_setting() {
    let error = "depth=2".parse::<LogStreamConfig>().unwrap_err();
    assert_eq!(error, ConfigError::UnknownToken("depth=2".to_owned()));
    assert_eq!(error.to_string(), "unknown configuration token: depth=2");
}

/// Verifies negative depths are rejected.
#[test]
fn rejects_negative_depth() {
    let error = "file=-3".parse::<LogStreamConfig>().unwrap_err();
    assert_eq!(error, ConfigError::InvalidDepth("-3".to_owned()));
}

// ============================================================================
// Application
// ============================================================================

/// Verifies a parsed configuration drives the logger's filtering.
#[test]
fn parsed_config_filters_console() {
    let console = SharedBuffer::new();
    let config: LogStreamConfig = "console=1".parse().unwrap();
    let mut log = PrefixLogger::from_config(StreamSink::new(console.clone()), &config);

    log.push("outer");
    log.write_line("visible").unwrap();
    log.push("inner");
    log.write_line("hidden").unwrap();

    assert_eq!(console.contents(), "outer:visible\n");
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::*;

    /// Verifies the configuration serializes with its field names.
    #[test]
    fn config_round_trips_through_json() {
        let config = LogStreamConfig {
            console_depth: 3,
            file_depth: 7,
            log_execution_time: true,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            r#"{"console_depth":3,"file_depth":7,"log_execution_time":true}"#
        );
        let back: LogStreamConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    /// Verifies missing fields fall back to defaults.
    #[test]
    fn missing_fields_use_defaults() {
        let config: LogStreamConfig = serde_json::from_str(r#"{"console_depth":1}"#).unwrap();
        assert_eq!(config.console_depth, 1);
        assert_eq!(config.file_depth, LogStreamConfig::default().file_depth);
        assert!(!config.log_execution_time);
    }
}
