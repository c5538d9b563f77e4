pub mod cache;
pub mod common;
pub mod parser;
pub mod resolver;
pub mod service;

#[cfg(feature = "http")]
pub mod server;

pub use common::client::client::{FeedClient, FeedSource};
pub use common::client::error::FetchError;
pub use common::config::AppConfig;
pub use parser::{ThumbnailQuality, VideoEntry, parse_feed};
pub use resolver::{
    CatalogFile, CatalogItem, Resolution, ThumbnailRules, TitleKeys, normalize_title, resolve,
};
pub use service::{Outcome, PlaylistService};
