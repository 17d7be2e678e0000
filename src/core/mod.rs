pub mod discovery;
pub mod session;

pub use crate::domain::model::{ArtworkRecord, BanList, ColorEntry, DiscoveredArtwork};
pub use crate::domain::ports::{ArtworkSource, ConfigProvider};
pub use crate::utils::error::Result;
