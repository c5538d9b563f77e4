use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use serde_derive::Deserialize;
use std::borrow::Cow;
use std::fmt;

const WATCH_BASE: &str = "https://www.youtube.com/watch?v=";
const EMBED_BASE: &str = "https://www.youtube.com/embed/";
const THUMBNAIL_BASE: &str = "https://i.ytimg.com/vi/";

/// feed 中的一个视频条目
///
/// 序列化字段名与前端约定一致: `videoId` / `title` / `url` / `thumbnailUrl` / `published`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoEntry {
    pub video_id: String,
    pub title: String,
    pub url: String,           // 观看页地址
    pub thumbnail_url: String, // maxresdefault 缩略图，不做存在性检查
    pub published: String,     // 缺失时为空字符串
}

impl VideoEntry {
    pub fn new(
        video_id: impl Into<String>,
        title: impl Into<String>,
        published: impl Into<String>,
    ) -> Self {
        let video_id = video_id.into();
        Self {
            url: watch_url(&video_id),
            thumbnail_url: thumbnail_url(&video_id),
            video_id,
            title: title.into(),
            published: published.into(),
        }
    }

    /// iframe 嵌入地址
    pub fn embed_url(&self) -> String {
        embed_url(&self.video_id)
    }

    /// 解析发布时间，仅用于展示
    pub fn published_at(&self) -> Option<DateTime<FixedOffset>> {
        if self.published.is_empty() {
            return None;
        }
        DateTime::parse_from_rfc3339(&self.published).ok()
    }
}

impl fmt::Display for VideoEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.video_id)
    }
}

pub fn watch_url(video_id: &str) -> String {
    format!("{}{}", WATCH_BASE, video_id)
}

pub fn thumbnail_url(video_id: &str) -> String {
    ThumbnailQuality::MaxRes.url(video_id)
}

/// maxresdefault 不稳定的视频使用的 480x360 缩略图
pub fn hq_thumbnail_url(video_id: &str) -> String {
    ThumbnailQuality::High.url(video_id)
}

pub fn embed_url(video_id: &str) -> String {
    format!("{}{}", EMBED_BASE, video_id)
}

/// 缩略图尺寸
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailQuality {
    #[default]
    #[serde(alias = "maxresdefault")]
    MaxRes,
    #[serde(alias = "hq", alias = "hqdefault")]
    High,
}

impl ThumbnailQuality {
    pub fn file_name(self) -> &'static str {
        match self {
            ThumbnailQuality::MaxRes => "maxresdefault.jpg",
            ThumbnailQuality::High => "hqdefault.jpg",
        }
    }

    pub fn url(self, video_id: &str) -> String {
        format!("{}{}/{}", THUMBNAIL_BASE, video_id, self.file_name())
    }
}

/// 从单个 entry 中抽取出的原始字段
#[derive(Debug, Default)]
pub(crate) struct RawFields<'a> {
    pub video_id: Option<Cow<'a, str>>,
    pub title: Option<Cow<'a, str>>,
    pub published: Option<Cow<'a, str>>,
}

impl RawFields<'_> {
    /// videoId 和 title 都存在（且非空）时才构造条目
    pub fn into_entry(self) -> Option<VideoEntry> {
        let video_id = self.video_id.filter(|s| !s.is_empty())?;
        let title = self.title.filter(|s| !s.is_empty())?;
        Some(VideoEntry::new(
            video_id,
            title,
            self.published.unwrap_or_default(),
        ))
    }
}
