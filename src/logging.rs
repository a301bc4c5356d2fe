use std::{fmt::Result as FmtResult, io};

use eyre::{Context as _, Result};
use time::{format_description::FormatItem, macros::format_description};
use tracing::{metadata::LevelFilter, Event, Subscriber};
use tracing_appender::{
    non_blocking::{NonBlocking, WorkerGuard},
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    fmt::{
        format::Writer,
        time::{FormatTime, UtcTime},
        FmtContext, FormatEvent, FormatFields, Layer,
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer as _,
};

use crate::config::Config;

static TIMESTAMP: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Console logs go to stderr so that stdout only carries echoed documents.
pub fn init(quiet: bool) -> Result<WorkerGuard> {
    let config = Config::get();

    let console_layer = Layer::default()
        .event_format(EventFormat::console())
        .with_writer(io::stderr);

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(&*config.log_file)
        .build(&*config.log_dir)
        .wrap_err_with(|| format!("failed to create log directory `{}`", config.log_dir))?;
    let (file_writer, guard) = NonBlocking::new(file_appender);

    let file_layer = Layer::default()
        .event_format(EventFormat::file())
        .with_writer(file_writer);

    // Failures are still shown when quiet
    let console_filter = if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy()
    };

    let file_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(console_layer.with_filter(console_filter))
        .with(file_layer.with_filter(file_filter))
        .init();

    Ok(guard)
}

struct EventFormat {
    timer: UtcTime<&'static [FormatItem<'static>]>,
    location: bool,
}

impl EventFormat {
    fn console() -> Self {
        Self {
            timer: UtcTime::new(TIMESTAMP),
            location: false,
        }
    }

    fn file() -> Self {
        Self {
            timer: UtcTime::new(TIMESTAMP),
            location: true,
        }
    }
}

impl<S, N> FormatEvent<S, N> for EventFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> FmtResult {
        self.timer.format_time(&mut writer)?;
        let metadata = event.metadata();

        write!(writer, " {:>5} ", metadata.level())?;

        if self.location {
            write!(
                writer,
                "[{}:{}] ",
                metadata.file().unwrap_or_else(|| metadata.target()),
                metadata.line().unwrap_or(0),
            )?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}
