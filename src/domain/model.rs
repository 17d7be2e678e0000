use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Harvard artwork ids are numeric; treated as opaque beyond equality.
pub type ArtworkId = u64;

/// One artwork item as returned by the image API. Immutable once fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworkRecord {
    pub id: ArtworkId,
    #[serde(rename = "baseimageurl")]
    pub image_url: String,
    #[serde(default)]
    pub description: Option<String>,
    // Some records come back without a colors field at all.
    #[serde(default)]
    pub colors: Vec<ColorEntry>,
}

impl ArtworkRecord {
    pub fn has_banned_color(&self, banned: &BanList) -> bool {
        self.colors.iter().any(|entry| banned.contains(&entry.color))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorEntry {
    pub color: String,
    #[serde(default)]
    pub percent: Option<f64>,
    #[serde(default)]
    pub css3: Option<String>,
}

/// Response envelope of the image endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ImagePage {
    #[serde(default)]
    pub records: Vec<ArtworkRecord>,
}

/// A gallery history entry: the record plus when it was discovered.
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveredArtwork {
    pub record: ArtworkRecord,
    pub discovered_at: DateTime<Utc>,
}

/// Insertion-ordered set of banned hex colors. Banning an already-banned
/// color is a no-op, as is unbanning an absent one.
#[derive(Debug, Clone, Default)]
pub struct BanList {
    colors: Vec<String>,
}

impl BanList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the color was newly banned.
    pub fn ban(&mut self, color: &str) -> bool {
        if self.contains(color) {
            return false;
        }
        self.colors.push(color.to_string());
        true
    }

    /// Returns true if the color was present.
    pub fn unban(&mut self, color: &str) -> bool {
        let before = self.colors.len();
        self.colors.retain(|c| c != color);
        self.colors.len() != before
    }

    pub fn contains(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.colors.iter().map(String::as_str)
    }
}
