use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("无效的播放列表: {0}")]
    InvalidPlaylist(String),
}
