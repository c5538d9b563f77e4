use serde::Serialize;
use serde_derive::Deserialize;
use std::collections::HashMap;

use super::normalize::normalize_title;
use crate::parser::models::{ThumbnailQuality, VideoEntry};

/// 作品 / 项目记录，由内容侧维护，这里只读
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub slug: String,
    pub title: String,
}

impl CatalogItem {
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
        }
    }
}

/// 按 slug 单独指定匹配 key，没有指定时使用标准化后的标题
#[derive(Debug, Clone, Default)]
pub struct TitleKeys {
    overrides: HashMap<String, String>,
}

impl TitleKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_override(mut self, slug: impl Into<String>, key: &str) -> Self {
        self.overrides.insert(slug.into(), normalize_title(key));
        self
    }

    pub fn key_for(&self, slug: &str, title: &str) -> String {
        match self.overrides.get(slug) {
            Some(key) => key.clone(),
            None => normalize_title(title),
        }
    }

    pub fn key_for_item(&self, item: &CatalogItem) -> String {
        self.key_for(&item.slug, &item.title)
    }
}

/// 按 slug 指定缩略图尺寸，默认 maxresdefault
#[derive(Debug, Clone, Default)]
pub struct ThumbnailRules {
    overrides: HashMap<String, ThumbnailQuality>,
}

impl ThumbnailRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quality(mut self, slug: impl Into<String>, quality: ThumbnailQuality) -> Self {
        self.overrides.insert(slug.into(), quality);
        self
    }

    pub fn quality_for(&self, slug: &str) -> ThumbnailQuality {
        self.overrides.get(slug).copied().unwrap_or_default()
    }

    /// 作品列表里显示的缩略图地址
    pub fn thumbnail_for(&self, slug: &str, entry: &VideoEntry) -> String {
        match self.quality_for(slug) {
            ThumbnailQuality::MaxRes => entry.thumbnail_url.clone(),
            quality => quality.url(&entry.video_id),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for ThumbnailRules {
    /// 列出的 slug 都使用 hqdefault
    fn from_iter<I: IntoIterator<Item = S>>(slugs: I) -> Self {
        slugs.into_iter().fold(Self::new(), |rules, slug| {
            rules.with_quality(slug, ThumbnailQuality::High)
        })
    }
}

/// 作品目录文件
///
/// `{"items": [...], "keys": {slug: key}, "thumbnails": {slug: "hq"}}`，
/// 也接受只有作品数组的写法
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogFile {
    pub items: Vec<CatalogItem>,
    #[serde(default)]
    pub keys: HashMap<String, String>,
    #[serde(default)]
    pub thumbnails: HashMap<String, ThumbnailQuality>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogRepr {
    Items(Vec<CatalogItem>),
    Full(CatalogFile),
}

impl CatalogFile {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        let repr: CatalogRepr = serde_json::from_str(raw)?;
        Ok(match repr {
            CatalogRepr::Items(items) => Self {
                items,
                ..Self::default()
            },
            CatalogRepr::Full(file) => file,
        })
    }

    pub fn title_keys(&self) -> TitleKeys {
        self.keys
            .iter()
            .fold(TitleKeys::new(), |keys, (slug, key)| {
                keys.with_override(slug.as_str(), key)
            })
    }

    /// 在已有规则上叠加文件里的设置
    pub fn thumbnail_rules(&self, base: ThumbnailRules) -> ThumbnailRules {
        self.thumbnails
            .iter()
            .fold(base, |rules, (slug, quality)| {
                rules.with_quality(slug.as_str(), *quality)
            })
    }
}
