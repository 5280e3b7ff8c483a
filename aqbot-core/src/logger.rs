//! 日志初始化：一个 fmt layer，经 Tee 同时写入 stdout 与追加模式的日志文件。

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Filter used when RUST_LOG is unset or unparsable. `TraceLayer` emits its request spans at debug.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Opens `path` for appending, creating missing parent directories.
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// 安装全局 tracing 订阅者。
/// 级别取自 RUST_LOG，未设置时为 [`DEFAULT_LOG_FILTER`]；需在调用前加载 .env。
/// 文件与控制台内容一致，不含 ANSI 颜色码。
pub fn init_tracing(log_file: impl AsRef<Path>) -> anyhow::Result<()> {
    let log_file = log_file.as_ref();
    let file = open_log_file(log_file)
        .with_context(|| format!("cannot open log file {}", log_file.display()))?;
    let writer = io::stdout.and(Arc::new(file));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true)
        .with_thread_ids(true);

    Registry::default()
        .with(env_filter())
        .with(fmt_layer)
        .try_init()
        .context("global tracing subscriber already set")?;

    Ok(())
}
