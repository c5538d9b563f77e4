use thiserror::Error;

/// 获取播放列表时的错误
///
/// 需要在多个等待者之间共享同一次请求的结果，所以实现了 Clone
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("缺少参数: {0}")]
    MissingParameter(&'static str),

    #[error("上游 feed 不可用，状态码: {status}")]
    UpstreamUnavailable { status: u16 },

    #[error("获取播放列表时发生意外错误: {0}")]
    UnexpectedError(String),
}

impl FetchError {
    /// 对应的 HTTP 状态码
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingParameter(_) => 400,
            Self::UpstreamUnavailable { .. } => 502,
            Self::UnexpectedError(_) => 500,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        Self::UnexpectedError(e.to_string())
    }
}
