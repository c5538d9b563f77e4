pub mod coalesce;

pub use coalesce::{Playlist, PlaylistCache};
