//! Integration tests for the `tracing` feature.
//!
//! With the feature enabled, a [`sublog::SublogLayer`] forwards events from
//! the tracing ecosystem into a sublog logger, which keeps its own
//! threshold, prefix, and destination in charge.
//!
//! Run with: cargo test --features tracing

#![cfg(feature = "tracing")]

use sublog::{LogLevel, Logger, SharedBuffer, SublogLayer, shared_sink};
use tracing_subscriber::layer::SubscriberExt;

fn capture_logger(threshold: LogLevel) -> (Logger, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let logger = Logger::new(threshold, "svc", shared_sink(buffer.clone()));
    (logger, buffer)
}

/// Verifies tracing events come out as prefixed, timestamped sublog lines.
#[test]
fn events_render_as_sublog_lines() {
    let (logger, buffer) = capture_logger(LogLevel::Info);
    let subscriber = tracing_subscriber::registry().with(SublogLayer::new(logger));

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("listening on {}", 8080);
    });

    let output = String::from_utf8(buffer.contents()).expect("utf8 output");
    assert!(output.starts_with("[svc] "));
    assert!(output.ends_with("listening on 8080\n"));
}

/// Verifies the logger threshold filters events by their mapped severity.
#[test]
fn threshold_applies_to_mapped_severities() {
    let (logger, buffer) = capture_logger(LogLevel::Warning);
    let subscriber = tracing_subscriber::registry().with(SublogLayer::new(logger));

    tracing::subscriber::with_default(subscriber, || {
        tracing::error!("kept");
        tracing::warn!("kept too");
        tracing::info!("dropped");
        tracing::debug!("dropped");
        tracing::trace!("dropped");
    });

    let output = String::from_utf8(buffer.contents()).expect("utf8 output");
    assert_eq!(output.lines().count(), 2);
    assert!(!output.contains("dropped"));
}
