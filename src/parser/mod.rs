use tracing::debug;

pub mod detector;
pub mod errors;
pub mod models;
pub mod scanner;
pub mod xml_parser;

pub use models::{ThumbnailQuality, VideoEntry};

/// 解析 feed 文档，返回按文档顺序排列的视频条目
///
/// 优先按 XML 解析；文档不是合法 XML 时（例如缺少命名空间声明的片段）
/// 退回分段扫描。两种方式都只丢弃缺字段的条目，不报错
pub fn parse_feed(xml: &str) -> Vec<VideoEntry> {
    match xml_parser::parse_document(xml) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("feed 不是合法的 XML ({})，改用分段扫描", e);
            scanner::scan_entries(xml)
        }
    }
}
