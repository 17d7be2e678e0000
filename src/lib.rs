pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::HarvardImageClient;
pub use crate::config::{CliConfig, ResolvedConfig};
pub use crate::core::discovery::{DiscoveryEngine, DiscoveryOutcome};
pub use crate::core::session::GallerySession;
pub use crate::domain::model::{ArtworkRecord, BanList, ColorEntry, DiscoveredArtwork};
pub use crate::utils::error::{DiscoveryError, Result};
