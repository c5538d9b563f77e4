use super::errors::ParseError;
use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

// 播放列表 ID 只包含字母数字、下划线和连字符
lazy_static! {
    static ref PLAYLIST_ID_PATTERN: Regex = Regex::new(r"^[A-Za-z0-9_-]+$").unwrap();
}

const LIST_PARAMS: [&str; 2] = ["list", "playlist_id"];

/// 从裸 ID 或浏览器地址中识别播放列表 ID
///
/// 支持 `PL...`、`https://www.youtube.com/playlist?list=PL...`、
/// 带 `list=` 的观看页地址，以及省略协议头的地址
pub fn detect_playlist_id(input: &str) -> Result<String, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::InvalidPlaylist("输入为空".to_string()));
    }

    if let Some(url) = parse_url(input) {
        return playlist_from_url(&url)
            .ok_or_else(|| ParseError::InvalidPlaylist(format!("链接中没有播放列表参数: {}", input)));
    }

    if PLAYLIST_ID_PATTERN.is_match(input) {
        Ok(input.to_string())
    } else {
        Err(ParseError::InvalidPlaylist(input.to_string()))
    }
}

fn parse_url(input: &str) -> Option<Url> {
    if let Ok(url) = Url::parse(input) {
        if url.has_host() {
            return Some(url);
        }
    }
    // 省略协议头的地址，如 youtube.com/playlist?list=...
    if input.contains('/') || input.contains('?') {
        return Url::parse(&format!("https://{}", input)).ok();
    }
    None
}

fn playlist_from_url(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| LIST_PARAMS.iter().any(|param| key == param))
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| PLAYLIST_ID_PATTERN.is_match(value))
}
