//! Logging for Prism
//!
//! A compact colored formatter on top of tracing-subscriber. Filtering
//! follows `RUST_LOG`, defaulting to info.

use std::fmt;
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::registry::LookupSpan;

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const GRAY: &str = "\x1b[90m";
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const GREEN: &str = "\x1b[32m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
}

/// Formats the current time as HH:MM:SS.mmm
fn format_current_time() -> String {
    let now = time::OffsetDateTime::now_utc();
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        now.hour(),
        now.minute(),
        now.second(),
        now.millisecond()
    )
}

/// Returns the colored level tag for a log level
fn format_level(level: &tracing::Level) -> String {
    match *level {
        tracing::Level::ERROR => format!("{}[ERROR]{}", colors::RED, colors::RESET),
        tracing::Level::WARN => format!("{}[WARN]{}", colors::YELLOW, colors::RESET),
        tracing::Level::INFO => format!("{}[INFO]{}", colors::GREEN, colors::RESET),
        tracing::Level::DEBUG => format!("{}[DEBUG]{}", colors::BLUE, colors::RESET),
        tracing::Level::TRACE => format!("{}[TRACE]{}", colors::MAGENTA, colors::RESET),
    }
}

/// Event formatter producing `HH:MM:SS.mmm [LEVEL] message`
struct CompactFormat;

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for CompactFormat
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> fmt::Result {
        write!(
            writer,
            "{}{}{} ",
            colors::GRAY,
            format_current_time(),
            colors::RESET
        )?;
        write!(writer, "{} ", format_level(event.metadata().level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Initialize the logging system
///
/// Respects the `RUST_LOG` environment variable for filtering, falling back
/// to the info level.
pub fn init() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_target(false)
        .with_ansi(true)
        .with_env_filter(env_filter)
        .event_format(CompactFormat)
        .init();
}
