use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use tracing::{debug, warn};

use crate::common::client::client::FeedSource;
use crate::common::client::error::FetchError;
use crate::parser::VideoEntry;

pub type Playlist = Arc<Vec<VideoEntry>>;
type SharedFetch = Shared<BoxFuture<'static, Result<Playlist, FetchError>>>;

enum Slot {
    Pending(SharedFetch),
    Ready { entries: Playlist, fetched_at: Instant },
}

enum Lookup {
    Hit(Playlist),
    Wait(SharedFetch),
}

/// 按播放列表 ID 合并请求的内存缓存
///
/// 同一 ID 的并发请求共享一次上游请求；成功结果在 ttl 内复用，失败不缓存，
/// 每次成功获取后清理过期的结果
pub struct PlaylistCache {
    source: Arc<dyn FeedSource>,
    slots: DashMap<String, Slot>,
    ttl: Duration,
}

impl PlaylistCache {
    pub fn new(source: Arc<dyn FeedSource>, ttl: Duration) -> Self {
        Self {
            source,
            slots: DashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub async fn get(&self, playlist_id: &str) -> Result<Playlist, FetchError> {
        // entry 持有分片锁，必须在 await 之前释放
        let lookup = match self.slots.entry(playlist_id.to_string()) {
            Entry::Occupied(mut slot) => {
                let current = match slot.get() {
                    Slot::Ready {
                        entries,
                        fetched_at,
                    } if fetched_at.elapsed() < self.ttl => Some(Lookup::Hit(Arc::clone(entries))),
                    Slot::Pending(fetch) => Some(Lookup::Wait(fetch.clone())),
                    Slot::Ready { .. } => None,
                };
                match current {
                    Some(lookup) => lookup,
                    None => {
                        debug!("播放列表 {} 缓存过期，重新获取", playlist_id);
                        let fetch = self.start_fetch(playlist_id);
                        slot.insert(Slot::Pending(fetch.clone()));
                        Lookup::Wait(fetch)
                    }
                }
            }
            Entry::Vacant(slot) => {
                let fetch = self.start_fetch(playlist_id);
                slot.insert(Slot::Pending(fetch.clone()));
                Lookup::Wait(fetch)
            }
        };

        let fetch = match lookup {
            Lookup::Hit(entries) => {
                debug!("播放列表 {} 命中缓存", playlist_id);
                return Ok(entries);
            }
            Lookup::Wait(fetch) => fetch,
        };

        // await 克隆；未被 poll 的原句柄才能用 ptr_eq 比较
        let result = fetch.clone().await;
        match &result {
            Ok(entries) => {
                // 只替换仍由这次请求占用的槽位，更新的请求不受影响
                if let Some(mut slot) = self.slots.get_mut(playlist_id) {
                    if matches!(&*slot, Slot::Pending(current) if current.ptr_eq(&fetch)) {
                        *slot = Slot::Ready {
                            entries: Arc::clone(entries),
                            fetched_at: Instant::now(),
                        };
                    }
                }
                self.purge_expired();
            }
            Err(e) => {
                warn!("获取播放列表 {} 失败: {}", playlist_id, e);
                self.slots.remove_if(playlist_id, |_, slot| {
                    matches!(slot, Slot::Pending(current) if current.ptr_eq(&fetch))
                });
            }
        }
        result
    }

    /// 当前缓存的播放列表数量（包括请求中的）
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    // 丢弃已过期的结果，请求中的槽位保留
    fn purge_expired(&self) {
        let before = self.slots.len();
        self.slots.retain(|_, slot| match slot {
            Slot::Ready { fetched_at, .. } => fetched_at.elapsed() < self.ttl,
            Slot::Pending(_) => true,
        });
        let purged = before.saturating_sub(self.slots.len());
        if purged > 0 {
            debug!("清理了 {} 个过期的播放列表缓存", purged);
        }
    }

    fn start_fetch(&self, playlist_id: &str) -> SharedFetch {
        let source = Arc::clone(&self.source);
        let playlist_id = playlist_id.to_string();
        async move { source.fetch_playlist(&playlist_id).await.map(Arc::new) }
            .boxed()
            .shared()
    }
}
