use clap::{Parser, Subcommand};
use std::path::PathBuf;

use playlist_resolver::common::config::ARTWORK_PLAYLIST_ID;

/// YouTube 播放列表解析与作品匹配
#[derive(Parser, Debug)]
#[command(name = "plresolve")]
#[command(version = "1.0")]
#[command(about = "获取 YouTube 播放列表并按作品标题匹配视频", long_about = None)]
pub struct Cli {
    /// 输出调试日志
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// feed 地址 (默认 YouTube)
    #[arg(long, value_name = "URL", global = true)]
    #[arg(value_hint = clap::ValueHint::Url)]
    pub feed_base: Option<String>,

    /// 请求超时秒数
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 列出播放列表中的视频
    Fetch {
        /// 播放列表 ID 或链接
        #[arg(value_name = "PLAYLIST", default_value = ARTWORK_PLAYLIST_ID)]
        playlist: String,

        /// 以 JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 按作品标题查找对应视频
    Resolve {
        /// 播放列表 ID 或链接
        #[arg(value_name = "PLAYLIST", default_value = ARTWORK_PLAYLIST_ID)]
        playlist: String,

        /// 作品标题
        #[arg(long, value_name = "TITLE", required_unless_present = "catalog")]
        title: Option<String>,

        /// 作品 slug (默认使用标题)
        #[arg(long, value_name = "SLUG")]
        slug: Option<String>,

        /// 作品目录 JSON 文件: [{"slug": "...", "title": "..."}]
        #[arg(long, value_name = "FILE", conflicts_with = "title")]
        #[arg(value_hint = clap::ValueHint::FilePath)]
        catalog: Option<PathBuf>,

        /// 指定某个 slug 的匹配 key，可重复: --key cinema-24=Cinema24
        #[arg(long = "key", value_name = "SLUG=KEY", value_parser = parse_slug_key)]
        keys: Vec<(String, String)>,

        /// 列表缩略图改用 hqdefault 的 slug，可重复
        #[arg(long = "hq-thumb", value_name = "SLUG")]
        hq_thumbs: Vec<String>,

        /// 以 JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 启动 HTTP 接口 (需要 http 功能)
    Serve {
        /// 监听地址
        #[arg(long, value_name = "ADDR")]
        bind: Option<std::net::SocketAddr>,

        /// 缓存重新验证窗口（秒）
        #[arg(long, value_name = "SECS")]
        revalidate: Option<u64>,
    },
}

fn parse_slug_key(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((slug, key)) if !slug.trim().is_empty() && !key.trim().is_empty() => {
            Ok((slug.trim().to_string(), key.trim().to_string()))
        }
        _ => Err(format!("格式应为 SLUG=KEY: {}", raw)),
    }
}
