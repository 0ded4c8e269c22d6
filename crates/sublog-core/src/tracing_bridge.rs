//! crates/sublog-core/src/tracing_bridge.rs
//! Bridge between the tracing crate and sublog's leveled loggers.
//!
//! This module provides a tracing subscriber layer that forwards tracing
//! events into a [`Logger`]. It enables using standard Rust tracing macros
//! (trace!, debug!, info!, warn!, error!) while keeping sublog's syslog
//! severities, threshold filtering, and prefix nesting in charge of what is
//! actually written.
//!
//! # Architecture
//!
//! - [`SublogLayer`]: a tracing-subscriber layer holding the target [`Logger`]
//! - Event levels are mapped onto syslog severities (there is no syslog
//!   trace, so TRACE shares the debug severity with DEBUG)
//! - The logger's threshold is consulted before an event's fields are visited
//!
//! # Usage
//!
//! ```rust,ignore
//! use sublog_core::{LogLevel, Logger, init_tracing};
//! use sublog_sink::shared_sink;
//!
//! let logger = Logger::new(LogLevel::Info, "svc", shared_sink(std::io::stderr()));
//! init_tracing(logger);
//!
//! // Now standard tracing macros land in the sublog destination
//! tracing::info!("listening");
//! tracing::warn!("slow response");
//! ```

use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::levels::LogLevel;
use crate::logger::Logger;

/// A tracing layer that forwards events into a sublog [`Logger`].
///
/// The event's level picks the syslog severity and the event's `message`
/// field becomes the logged text; events without a `message` field are
/// dropped. Filtering, prefixing, timestamping, and flushing all stay with
/// the target logger.
pub struct SublogLayer {
    logger: Logger,
}

impl SublogLayer {
    /// Creates a layer that forwards events into `logger`.
    #[must_use]
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// Maps a tracing level onto the syslog severity it is logged at.
    fn severity_for(level: &Level) -> LogLevel {
        match *level {
            Level::ERROR => LogLevel::Err,
            Level::WARN => LogLevel::Warning,
            Level::INFO => LogLevel::Info,
            // DEBUG and TRACE both land on the debug severity; syslog has
            // nothing below debug.
            _ => LogLevel::Debug,
        }
    }
}

impl<S> Layer<S> for SublogLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let severity = Self::severity_for(event.metadata().level());
        if !self.logger.threshold().permits(severity) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            self.logger.log(severity, &message);
        }
    }
}

/// Visitor to extract the message from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a global tracing subscriber that forwards events into `logger`.
///
/// # Example
///
/// ```rust,ignore
/// use sublog_core::{LogLevel, Logger, init_tracing};
/// use sublog_sink::shared_sink;
///
/// let logger = Logger::new(LogLevel::Debug, "svc", shared_sink(std::io::stderr()));
/// init_tracing(logger);
///
/// tracing::error!("upstream unreachable");
/// ```
pub fn init_tracing(logger: Logger) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let layer = SublogLayer::new(logger);

    tracing_subscriber::registry().with(layer).init();
}

/// Installs a global tracing subscriber with a custom filter layer in front
/// of the sublog forwarding.
///
/// This combines sublog's threshold with standard tracing filters for more
/// fine-grained control over which events are forwarded at all.
///
/// # Example
///
/// ```rust,ignore
/// use sublog_core::{LogLevel, Logger, init_tracing_with_filter};
/// use sublog_sink::shared_sink;
/// use tracing_subscriber::EnvFilter;
///
/// let logger = Logger::new(LogLevel::Debug, "svc", shared_sink(std::io::stderr()));
/// init_tracing_with_filter(logger, EnvFilter::from_default_env());
/// ```
pub fn init_tracing_with_filter<F>(logger: Logger, filter: F)
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let layer = SublogLayer::new(logger);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .init();
}
