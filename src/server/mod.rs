use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::info;
use uuid::Uuid;

use crate::common::config::AppConfig;
use crate::service::PlaylistService;

pub mod handlers;
pub mod response;

/// 显式传递给各个 handler 的应用状态
pub struct AppState {
    pub service: PlaylistService,
}

impl AppState {
    pub fn new(service: PlaylistService) -> Self {
        Self { service }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/youtube-playlist", get(handlers::get_playlist))
        .route("/api/youtube-playlist/resolve", get(handlers::resolve_title))
        .route("/healthz", get(handlers::healthz))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_tracing))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

// 为每个请求分配 request id 并记录耗时
async fn request_tracing(req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let mut resp = next.run(req).await;

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        status = resp.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "请求完成"
    );
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        resp.headers_mut().insert("x-request-id", value);
    }
    resp
}

pub async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let service = PlaylistService::from_config(&config)?;
    let state = Arc::new(AppState::new(service));

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("HTTP 服务已启动: http://{}", listener.local_addr()?);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP 服务已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("监听退出信号失败: {}", e);
    }
}
