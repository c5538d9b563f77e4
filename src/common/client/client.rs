use async_trait::async_trait;
use reqwest::{
    Client, ClientBuilder,
    header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, USER_AGENT},
};
use tracing::{debug, error, info};

use crate::common::client::error::FetchError;
use crate::common::config::AppConfig;
use crate::parser::{self, VideoEntry};

// 获取播放列表的抽象，方便在缓存和测试中替换
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch_playlist(&self, playlist_id: &str) -> Result<Vec<VideoEntry>, FetchError>;
}

/// 请求 YouTube 播放列表 feed 的客户端
#[derive(Debug, Clone)]
pub struct FeedClient {
    pub inner: Client,
    config: AppConfig,
}

impl FeedClient {
    pub fn new(config: AppConfig) -> Result<Self, FetchError> {
        let inner = ClientBuilder::new()
            .timeout(config.http_timeout)
            .default_headers(Self::get_default_headers())
            .build()
            .map_err(|e| {
                error!("创建 HTTP 客户端失败: {}", e);
                FetchError::UnexpectedError(format!("创建 HTTP 客户端失败: {}", e))
            })?;

        Ok(Self { inner, config })
    }

    pub fn get_default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/atom+xml,application/xml;q=0.9,*/*;q=0.8"),
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("ja-JP,ja;q=0.9,en;q=0.8"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/135.0.0.0 Safari/537.36"));

        headers
    }

    // 获取原始 feed 文本，只请求一次，不重试
    pub async fn get_feed_text(&self, playlist_id: &str) -> Result<String, FetchError> {
        let url = self.config.feed_url(playlist_id);
        debug!("请求 feed: {}", url);

        let resp = self.inner.get(&url).send().await.map_err(|e| {
            error!("请求失败: {}", e);
            FetchError::UnexpectedError(format!("请求失败: {}", e))
        })?;

        let status = resp.status();
        if !status.is_success() {
            error!("feed 返回非成功状态: {} ({})", status, url);
            return Err(FetchError::UpstreamUnavailable {
                status: status.as_u16(),
            });
        }

        Ok(resp.text().await?)
    }
}

#[async_trait]
impl FeedSource for FeedClient {
    async fn fetch_playlist(&self, playlist_id: &str) -> Result<Vec<VideoEntry>, FetchError> {
        if playlist_id.trim().is_empty() {
            return Err(FetchError::MissingParameter("playlistId"));
        }

        let xml = self.get_feed_text(playlist_id).await?;
        let entries = parser::parse_feed(&xml);
        info!("播放列表 {} 解析到 {} 个视频", playlist_id, entries.len());

        Ok(entries)
    }
}
