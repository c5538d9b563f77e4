use std::borrow::Cow;

use roxmltree::{Document, Node};

use super::models::{RawFields, VideoEntry};
use tracing::debug;

/// 使用 roxmltree 解析完整的 Atom feed
///
/// 按本地名匹配，不关心命名空间前缀；只看 entry 的直接子节点，
/// 避免取到 `media:group` 里的 `media:title`
pub fn parse_document(xml: &str) -> Result<Vec<VideoEntry>, roxmltree::Error> {
    let doc = Document::parse(xml)?;

    let entries = doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "entry")
        .enumerate()
        .filter_map(|(index, entry)| {
            let fields = RawFields {
                video_id: child_text(entry, "videoId"),
                title: child_text(entry, "title"),
                published: child_text(entry, "published"),
            };
            let parsed = fields.into_entry();
            if parsed.is_none() {
                debug!("跳过第 {} 个 entry: 缺少 videoId 或 title", index);
            }
            parsed
        })
        .collect();

    Ok(entries)
}

// 拼接元素内的全部文本节点，注释和 CDATA 分段的标题也能取完整
fn child_text<'a>(entry: Node<'a, 'a>, local_name: &str) -> Option<Cow<'a, str>> {
    let element = entry
        .children()
        .find(|n| n.is_element() && n.tag_name().name() == local_name)?;

    let mut texts = element
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text());
    let first = texts.next()?;
    let text = match texts.next() {
        None => Cow::Borrowed(first.trim()),
        Some(second) => {
            let mut joined = String::from(first);
            joined.push_str(second);
            texts.for_each(|rest| joined.push_str(rest));
            Cow::Owned(joined.trim().to_string())
        }
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_text_split_by_comments() {
        let xml = r#"<feed xmlns:yt="http://www.youtube.com/xml/schemas/2015">
            <entry>
                <yt:videoId>abc123</yt:videoId>
                <title> Lotus<!-- note --> - Live <![CDATA[Session]]> </title>
            </entry>
        </feed>"#;
        let entries = parse_document(xml).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Lotus - Live Session");
    }

    #[test]
    fn ignores_nested_media_title() {
        let xml = r#"<feed xmlns:yt="y" xmlns:media="m">
            <entry>
                <yt:videoId>abc123</yt:videoId>
                <media:group><media:title>wrong</media:title></media:group>
                <title>ruwet</title>
            </entry>
        </feed>"#;
        let entries = parse_document(xml).unwrap();
        assert_eq!(entries[0].title, "ruwet");
    }
}
