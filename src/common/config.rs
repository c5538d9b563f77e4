use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_FEED_BASE: &str = "https://www.youtube.com/feeds/videos.xml";

// Artworks 用的播放列表（视频作品都在这里）
pub const ARTWORK_PLAYLIST_ID: &str = "PLLM2ZXSPjDlMVliPsBX7VWxTZQLunGjid";

const DEFAULT_REVALIDATE_SECS: u64 = 60;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
const DEFAULT_BIND: &str = "127.0.0.1:3000";

// maxresdefault 不稳定，列表里改用 hqdefault 的作品
const DEFAULT_HQ_THUMBNAIL_SLUGS: [&str; 1] = ["cinema24"];

/// 运行配置: 默认值 -> 环境变量 -> 命令行参数
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub feed_base: String,
    pub revalidate: Duration, // 缓存重新验证窗口
    pub http_timeout: Duration,
    pub bind: SocketAddr,
    pub hq_thumbnail_slugs: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            feed_base: DEFAULT_FEED_BASE.to_string(),
            revalidate: Duration::from_secs(DEFAULT_REVALIDATE_SECS),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            bind: default_bind(),
            hq_thumbnail_slugs: DEFAULT_HQ_THUMBNAIL_SLUGS
                .iter()
                .map(|slug| slug.to_string())
                .collect(),
        }
    }
}

impl AppConfig {
    /// 读取环境变量，无法解析的值沿用默认
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let feed_base = std::env::var("PLAYLIST_FEED_BASE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.feed_base);
        let revalidate = std::env::var("PLAYLIST_REVALIDATE_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.revalidate);
        let http_timeout = std::env::var("PLAYLIST_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.http_timeout);
        let bind = std::env::var("PLAYLIST_BIND")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.bind);
        // 逗号分隔，空值表示不使用 hqdefault
        let hq_thumbnail_slugs = std::env::var("PLAYLIST_HQ_THUMBNAIL_SLUGS")
            .ok()
            .map(|s| split_slugs(&s))
            .unwrap_or(defaults.hq_thumbnail_slugs);

        Self {
            feed_base,
            revalidate,
            http_timeout,
            bind,
            hq_thumbnail_slugs,
        }
    }

    /// 拼出某个播放列表的 feed 地址
    pub fn feed_url(&self, playlist_id: &str) -> String {
        format!(
            "{}?playlist_id={}",
            self.feed_base,
            urlencoding::encode(playlist_id)
        )
    }
}

fn split_slugs(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|slug| !slug.is_empty())
        .map(str::to_string)
        .collect()
}

fn default_bind() -> SocketAddr {
    DEFAULT_BIND
        .parse()
        .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 3000)))
}
