use std::fs::File;
use std::io::BufWriter;

use anyhow::Context;
use anyhow::Result;
use tracing::Level;
use tracing::event;
use tracing_appender::non_blocking::NonBlocking;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_flame::FlameLayer;
use tracing_flame::FlushGuard;
use tracing_subscriber::Registry;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::filter::Filtered;
use tracing_subscriber::fmt::Layer;
use tracing_subscriber::fmt::format::Format;
use tracing_subscriber::fmt::format::Json;
use tracing_subscriber::fmt::format::JsonFields;
use tracing_subscriber::fmt::{self};
use tracing_subscriber::prelude::*;
use tracing_subscriber::reload;
use tracing_subscriber::reload::Handle;

type LogLayer =
    Filtered<Layer<Registry, JsonFields, Format<Json>, NonBlocking>, EnvFilter, Registry>;
type ProfilingLayer = Filtered<FlameLayer<Registry, BufWriter<File>>, EnvFilter, Registry>;

/// Reload handles for the two layers, held so filters can be swapped at
/// runtime without tearing the subscriber down.
#[derive(Clone, Debug)]
pub struct LogHandles {
    pub file_handle: Handle<LogLayer, Registry>,
    pub _flame_handle: Handle<ProfilingLayer, Registry>,
}

/// Guards that flush the log file and the profiling data on shutdown. Whoever
/// owns the orchestrator owns these; dropping them early silences everything.
pub struct LoggingGuards {
    pub _worker_guard: WorkerGuard,
    pub _flame_guard: FlushGuard<BufWriter<File>>,
}

pub fn setup_logging() -> Result<(LogHandles, LoggingGuards)> {
    let log_dir =
        dotenvy::var("GUICHET_LOG_DIR").context("GUICHET_LOG_DIR has to be set, see .env.example")?;

    let file_appender = tracing_appender::rolling::daily(log_dir, "guichet.log");
    let (non_blocking, worker_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_current_span(true)
        .with_filter(EnvFilter::from_env("TRACING_LEVEL"));

    let (file_layer, file_handle) = reload::Layer::new(file_layer);

    let profiling_file = dotenvy::var("PROFILING_FILE")
        .context("PROFILING_FILE has to be set, see .env.example")?;
    let (flame_layer, flame_guard) = FlameLayer::with_file(&profiling_file)
        .with_context(|| format!("could not open the profiling file {profiling_file}"))?;
    let flame_layer = flame_layer.with_filter(EnvFilter::from_env("PROFILING_LEVEL"));
    let (flame_layer, _flame_handle) = reload::Layer::new(flame_layer);

    let layers = vec![file_layer.boxed(), flame_layer.boxed()];

    tracing_subscriber::registry().with(layers).init();

    event!(Level::INFO, "logging started");

    Ok((
        LogHandles {
            file_handle,
            _flame_handle,
        },
        LoggingGuards {
            _worker_guard: worker_guard,
            _flame_guard: flame_guard,
        },
    ))
}
