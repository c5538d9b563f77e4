use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde_derive::Deserialize;
use tracing::debug;

use super::AppState;
use super::response::{cache_headers, required};
use crate::common::client::error::FetchError;
use crate::resolver::CatalogItem;

#[derive(Debug, Deserialize)]
pub struct PlaylistQuery {
    #[serde(rename = "playlistId")]
    pub playlist_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    #[serde(rename = "playlistId")]
    pub playlist_id: Option<String>,
    pub title: Option<String>,
    pub slug: Option<String>,
}

/// GET /api/youtube-playlist?playlistId=...
pub async fn get_playlist(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PlaylistQuery>,
) -> Result<Response, FetchError> {
    let playlist_id = required(query.playlist_id.as_deref(), "playlistId")?;

    let entries = state.service.playlist(playlist_id).await?;
    debug!("返回播放列表 {} 的 {} 个视频", playlist_id, entries.len());

    Ok((
        cache_headers(state.service.revalidate()),
        Json(entries.to_vec()),
    )
        .into_response())
}

/// GET /api/youtube-playlist/resolve?playlistId=...&title=...&slug=...
pub async fn resolve_title(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ResolveQuery>,
) -> Result<Response, FetchError> {
    let playlist_id = required(query.playlist_id.as_deref(), "playlistId")?;
    let title = required(query.title.as_deref(), "title")?;
    let slug = query
        .slug
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(title);

    let item = CatalogItem::new(slug, title);
    let resolution = state.service.resolve(playlist_id, &item).await?;

    Ok((cache_headers(state.service.revalidate()), Json(resolution)).into_response())
}

pub async fn healthz() -> &'static str {
    "ok"
}
