//! 服务运行：在固定端口 8000 上监听 `/callback`，每个投递由独立的请求任务处理。
//! 与外部交互：绑定 TCP 端口、调用 axum::serve。

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::server::{router, AppState, CALLBACK_PATH};

/// Listening address; the port is fixed.
pub const LISTEN_ADDR: &str = "0.0.0.0:8000";

/// 绑定 [`LISTEN_ADDR`] 并一直运行，直到服务出错。
#[instrument(skip(state))]
pub async fn run_server(state: AppState) -> Result<()> {
    let listener = TcpListener::bind(LISTEN_ADDR).await?;
    info!(addr = %LISTEN_ADDR, path = %CALLBACK_PATH, "Listening for webhook deliveries");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
