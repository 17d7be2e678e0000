use crate::core::discovery::{DiscoveryEngine, DiscoveryOutcome};
use crate::core::{ArtworkSource, BanList};
use crate::domain::model::{ArtworkId, ArtworkRecord, DiscoveredArtwork};
use crate::utils::error::{DiscoveryError, Result};
use chrono::Utc;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Loading,
}

/// In-memory presentation state for one session: everything discovered so
/// far (insertion-ordered, unique by id), the artwork currently on display,
/// and the user's banned colors. Discarded when the process exits.
pub struct GallerySession {
    history: Vec<DiscoveredArtwork>,
    seen_ids: HashSet<ArtworkId>,
    banned: BanList,
    current: Option<ArtworkRecord>,
    state: SessionState,
}

impl GallerySession {
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            seen_ids: HashSet::new(),
            banned: BanList::new(),
            current: None,
            state: SessionState::Idle,
        }
    }

    /// Runs one discovery against the engine. On success the record joins
    /// the history and becomes current; on exhaustion or error the current
    /// artwork is left untouched. Always returns the session to Idle.
    pub async fn discover_next<S: ArtworkSource>(
        &mut self,
        engine: &DiscoveryEngine<S>,
    ) -> Result<DiscoveryOutcome> {
        if self.state == SessionState::Loading {
            return Err(DiscoveryError::DiscoveryInProgress);
        }
        self.state = SessionState::Loading;

        let result = engine.discover(&self.banned, &self.seen_ids).await;
        self.state = SessionState::Idle;

        let outcome = result?;
        if let DiscoveryOutcome::Found(record) = &outcome {
            // The engine filters on seen_ids already; the insert guard keeps
            // the uniqueness invariant local to the history itself.
            if self.seen_ids.insert(record.id) {
                self.history.push(DiscoveredArtwork {
                    record: record.clone(),
                    discovered_at: Utc::now(),
                });
            }
            self.current = Some(record.clone());
            tracing::info!(id = record.id, total = self.history.len(), "artwork discovered");
        }
        Ok(outcome)
    }

    pub fn ban_color(&mut self, color: &str) -> bool {
        let added = self.banned.ban(color);
        if added {
            tracing::info!(color, "color banned");
        }
        added
    }

    pub fn unban_color(&mut self, color: &str) -> bool {
        let removed = self.banned.unban(color);
        if removed {
            tracing::info!(color, "color unbanned");
        }
        removed
    }

    pub fn current(&self) -> Option<&ArtworkRecord> {
        self.current.as_ref()
    }

    pub fn history(&self) -> &[DiscoveredArtwork] {
        &self.history
    }

    pub fn banned_colors(&self) -> &BanList {
        &self.banned
    }

    pub fn is_loading(&self) -> bool {
        self.state == SessionState::Loading
    }
}

impl Default for GallerySession {
    fn default() -> Self {
        Self::new()
    }
}
