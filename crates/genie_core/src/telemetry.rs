//! Tracing subscriber initialisation.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn env_filter(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

/// Initialize console logging.
///
/// `RUST_LOG` takes precedence over `default_directives`. With the `otel`
/// feature enabled, spans are additionally exported to stdout through
/// OpenTelemetry.
///
/// # Errors
///
/// Returns error if a global subscriber is already installed.
pub fn init_tracing(default_directives: &str) -> Result<(), Box<dyn std::error::Error>> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true);

    let registry = tracing_subscriber::registry()
        .with(env_filter(default_directives))
        .with(fmt_layer);

    #[cfg(feature = "otel")]
    {
        registry.with(otel_layer()).try_init()?;
    }
    #[cfg(not(feature = "otel"))]
    {
        registry.try_init()?;
    }

    Ok(())
}

/// Initialize logging into a file, leaving the terminal free for a TUI.
///
/// Lines are written from a background worker. Keep the returned guard
/// alive until the TUI exits so buffered lines are flushed.
///
/// # Errors
///
/// Returns error if the path has no file name, its directory cannot be
/// created, or a subscriber is already installed.
pub fn init_file_tracing(
    path: impl AsRef<Path>,
    default_directives: &str,
) -> Result<WorkerGuard, Box<dyn std::error::Error>> {
    let path = path.as_ref();
    let file_name = path.file_name().ok_or("log path has no file name")?;
    let directory = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(directory)?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(env_filter(default_directives))
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(writer))
        .try_init()?;

    Ok(guard)
}

#[cfg(feature = "otel")]
fn otel_layer<S>() -> impl tracing_subscriber::Layer<S>
where
    S: tracing::Subscriber + for<'span> tracing_subscriber::registry::LookupSpan<'span>,
{
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry_sdk::trace::{RandomIdGenerator, Sampler, TracerProvider};

    let provider = TracerProvider::builder()
        .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
        .with_id_generator(RandomIdGenerator::default())
        .with_sampler(Sampler::AlwaysOn)
        .build();
    let tracer = provider.tracer("genie");
    opentelemetry::global::set_tracer_provider(provider);

    tracing_opentelemetry::layer().with_tracer(tracer)
}

/// Flush pending spans before exit. A no-op without the `otel` feature.
pub fn shutdown_tracing() {
    #[cfg(feature = "otel")]
    opentelemetry::global::shutdown_tracer_provider();
}
