use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::cache::{Playlist, PlaylistCache};
use crate::common::client::client::{FeedClient, FeedSource};
use crate::common::client::error::FetchError;
use crate::common::config::AppConfig;
use crate::parser::VideoEntry;
use crate::resolver::{self, CatalogItem, Resolution, ThumbnailRules, TitleKeys};

/// 带取消保护的匹配结果
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Matched(VideoEntry),
    /// 没有匹配或获取失败，调用方不显示视频区域
    NoVideo,
    /// 请求方已经放弃，结果被丢弃
    Abandoned,
}

/// 播放列表获取 + 标题匹配
pub struct PlaylistService {
    cache: PlaylistCache,
    keys: TitleKeys,
    thumbnails: ThumbnailRules,
}

impl PlaylistService {
    pub fn new(source: Arc<dyn FeedSource>, ttl: Duration) -> Self {
        Self {
            cache: PlaylistCache::new(source, ttl),
            keys: TitleKeys::default(),
            thumbnails: ThumbnailRules::default(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        let client = FeedClient::new(config.clone())?;
        let thumbnails = config.hq_thumbnail_slugs.iter().cloned().collect();
        Ok(Self::new(Arc::new(client), config.revalidate).with_thumbnail_rules(thumbnails))
    }

    pub fn with_title_keys(mut self, keys: TitleKeys) -> Self {
        self.keys = keys;
        self
    }

    pub fn with_thumbnail_rules(mut self, thumbnails: ThumbnailRules) -> Self {
        self.thumbnails = thumbnails;
        self
    }

    pub fn thumbnail_rules(&self) -> &ThumbnailRules {
        &self.thumbnails
    }

    pub fn revalidate(&self) -> Duration {
        self.cache.ttl()
    }

    pub async fn playlist(&self, playlist_id: &str) -> Result<Playlist, FetchError> {
        let playlist_id = playlist_id.trim();
        if playlist_id.is_empty() {
            return Err(FetchError::MissingParameter("playlistId"));
        }
        self.cache.get(playlist_id).await
    }

    pub async fn resolve(
        &self,
        playlist_id: &str,
        item: &CatalogItem,
    ) -> Result<Resolution, FetchError> {
        let entries = self.playlist(playlist_id).await?;
        Ok(resolver::resolve_resolution(
            item,
            &entries,
            &self.keys,
            &self.thumbnails,
        ))
    }

    pub async fn resolve_catalog(
        &self,
        playlist_id: &str,
        items: &[CatalogItem],
    ) -> Result<Vec<Resolution>, FetchError> {
        let entries = self.playlist(playlist_id).await?;
        Ok(resolver::resolve_catalog(
            items,
            &entries,
            &self.keys,
            &self.thumbnails,
        ))
    }

    /// 页面侧使用的入口: 获取失败按无视频处理，
    /// token 取消后不再返回任何结果
    pub async fn resolve_guarded(
        &self,
        token: &CancellationToken,
        playlist_id: &str,
        item: &CatalogItem,
    ) -> Outcome {
        let result = tokio::select! {
            biased;
            _ = token.cancelled() => {
                debug!("{} 的请求已取消", item.slug);
                return Outcome::Abandoned;
            }
            result = self.resolve(playlist_id, item) => result,
        };

        if token.is_cancelled() {
            return Outcome::Abandoned;
        }

        match result {
            Ok(Resolution {
                entry: Some(entry), ..
            }) => {
                info!("{} 匹配到视频 {}", item.slug, entry.video_id);
                Outcome::Matched(entry)
            }
            Ok(_) => Outcome::NoVideo,
            Err(e) => {
                warn!("{} 的视频获取失败，不显示视频: {}", item.slug, e);
                Outcome::NoVideo
            }
        }
    }
}
