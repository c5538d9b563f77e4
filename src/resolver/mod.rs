use serde::Serialize;
use tracing::debug;

use crate::parser::VideoEntry;

pub mod catalog;
pub mod normalize;

pub use catalog::{CatalogFile, CatalogItem, ThumbnailRules, TitleKeys};
pub use normalize::normalize_title;

/// 单个作品的匹配结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub slug: String,
    pub key: String,
    #[serde(rename = "match")]
    pub entry: Option<VideoEntry>,
    /// 列表视图使用的缩略图，没有匹配时为 null
    #[serde(rename = "thumbnailUrl")]
    pub thumbnail_url: Option<String>,
}

impl Resolution {
    pub fn new(
        item: &CatalogItem,
        key: String,
        entry: Option<VideoEntry>,
        thumbnails: &ThumbnailRules,
    ) -> Self {
        let thumbnail_url = entry
            .as_ref()
            .map(|entry| thumbnails.thumbnail_for(&item.slug, entry));
        Self {
            slug: item.slug.clone(),
            key,
            entry,
            thumbnail_url,
        }
    }
}

/// 按作品标题查找对应的视频
///
/// 标准化后双向包含即视为匹配，按顺序取第一个；没有匹配不算错误
pub fn resolve<'a>(catalog_title: &str, entries: &'a [VideoEntry]) -> Option<&'a VideoEntry> {
    let key = normalize_title(catalog_title);
    find_by_key(&key, entries)
}

/// 用已经标准化的 key 查找
pub fn find_by_key<'a>(key: &str, entries: &'a [VideoEntry]) -> Option<&'a VideoEntry> {
    let found = entries
        .iter()
        .find(|entry| normalize::contains_either(&normalize_title(&entry.title), key));

    match found {
        Some(entry) => debug!("key '{}' 匹配到视频 {}", key, entry),
        None => debug!("key '{}' 没有匹配的视频", key),
    }
    found
}

pub fn resolve_item<'a>(
    item: &CatalogItem,
    entries: &'a [VideoEntry],
    keys: &TitleKeys,
) -> Option<&'a VideoEntry> {
    find_by_key(&keys.key_for_item(item), entries)
}

/// 匹配单个作品并选出缩略图
pub fn resolve_resolution(
    item: &CatalogItem,
    entries: &[VideoEntry],
    keys: &TitleKeys,
    thumbnails: &ThumbnailRules,
) -> Resolution {
    let key = keys.key_for_item(item);
    let entry = find_by_key(&key, entries).cloned();
    Resolution::new(item, key, entry, thumbnails)
}

/// 批量匹配，结果顺序与目录一致
pub fn resolve_catalog(
    items: &[CatalogItem],
    entries: &[VideoEntry],
    keys: &TitleKeys,
    thumbnails: &ThumbnailRules,
) -> Vec<Resolution> {
    items
        .iter()
        .map(|item| resolve_resolution(item, entries, keys, thumbnails))
        .collect()
}

/// 播放列表浏览时按 videoId 精确查找
pub fn find_by_video_id<'a>(entries: &'a [VideoEntry], video_id: &str) -> Option<&'a VideoEntry> {
    entries.iter().find(|entry| entry.video_id == video_id)
}
