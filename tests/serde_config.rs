//! Integration tests for the `serde` feature.
//!
//! With the feature enabled, levels, destinations, and whole logger
//! configurations round-trip through JSON, so a logger can be described in
//! a config file and opened at startup.
//!
//! Run with: cargo test --features serde

#![cfg(feature = "serde")]

use std::path::PathBuf;

use sublog::{LogConfig, LogDestination, LogLevel};

/// Verifies every level round-trips through JSON.
#[test]
fn levels_round_trip_through_json() {
    for level in LogLevel::ALL {
        let json = serde_json::to_string(&level).expect("serialize");
        let back: LogLevel = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, level);
    }
}

/// Verifies stream and file destinations round-trip through JSON.
#[test]
fn destinations_round_trip_through_json() {
    let destinations = [
        LogDestination::Stderr,
        LogDestination::Stdout,
        LogDestination::File(PathBuf::from("/var/log/svc.log")),
    ];
    for destination in destinations {
        let json = serde_json::to_string(&destination).expect("serialize");
        let back: LogDestination = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, destination);
    }
}

/// Verifies a full configuration survives JSON and still opens a logger.
#[test]
fn configs_round_trip_and_open() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = LogConfig {
        level: LogLevel::Notice,
        prefix: "svc".to_owned(),
        destination: LogDestination::File(dir.path().join("svc.log")),
    };

    let json = serde_json::to_string(&config).expect("serialize");
    assert!(json.contains("\"prefix\":\"svc\""));

    let back: LogConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, config);

    let logger = back.open_logger().expect("open logger");
    assert_eq!(logger.threshold(), LogLevel::Notice);
    assert_eq!(logger.prefix(), "svc");
}
