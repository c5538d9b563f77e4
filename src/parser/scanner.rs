use std::borrow::Cow;

use super::models::{RawFields, VideoEntry};
use tracing::debug;

const ENTRY_OPEN: &str = "<entry>";
const ENTRY_CLOSE: &str = "</entry>";

/// 分段扫描: 按 `<entry>` 切分，逐段截取三个字段
///
/// 不要求文档是合法 XML，缺字段的条目直接跳过
pub fn scan_entries(xml: &str) -> Vec<VideoEntry> {
    xml.split(ENTRY_OPEN)
        .skip(1) // 第一个 <entry> 之前是 feed 级别的元数据
        .enumerate()
        .filter_map(|(index, part)| {
            let entry = part.split(ENTRY_CLOSE).next().unwrap_or(part);
            let fields = RawFields {
                video_id: extract_tag(entry, "yt:videoId").map(Cow::Borrowed),
                title: extract_tag(entry, "title").map(Cow::Borrowed),
                published: extract_tag(entry, "published").map(Cow::Borrowed),
            };
            let parsed = fields.into_entry();
            if parsed.is_none() {
                debug!("跳过第 {} 个 entry: 缺少 videoId 或 title", index);
            }
            parsed
        })
        .collect()
}

/// 取第一个 `<tag>` 与其后第一个 `</tag>` 之间的文本
pub fn extract_tag<'a>(chunk: &'a str, tag: &str) -> Option<&'a str> {
    let open = format!("<{}>", tag);
    let close = format!("</{}>", tag);

    let start = chunk.find(&open)? + open.len();
    let end = start + chunk[start..].find(&close)?;
    Some(chunk[start..end].trim())
}
