use crate::core::{ArtworkRecord, ArtworkSource, BanList};
use crate::domain::model::ArtworkId;
use crate::utils::error::Result;
use std::collections::HashSet;

pub const DEFAULT_BATCH_SIZE: usize = 5;
pub const DEFAULT_MAX_ATTEMPTS: usize = 20;

/// Result of one discovery run.
#[derive(Debug, Clone)]
pub enum DiscoveryOutcome {
    Found(ArtworkRecord),
    /// Every batch across `attempts` fetches was filtered out. Happens when
    /// the ban list covers (nearly) all colors in the corpus.
    Exhausted { attempts: usize },
}

/// Fetches random batches from a source until one record passes the
/// ban-list and seen-id filters, up to a fixed number of attempts.
pub struct DiscoveryEngine<S: ArtworkSource> {
    source: S,
    max_attempts: usize,
}

impl<S: ArtworkSource> DiscoveryEngine<S> {
    pub fn new(source: S, max_attempts: usize) -> Self {
        Self {
            source,
            max_attempts: max_attempts.max(1),
        }
    }

    /// One discovery run. Network or parse failures abort immediately;
    /// an all-rejected batch is normal continuation.
    pub async fn discover(
        &self,
        banned: &BanList,
        seen: &HashSet<ArtworkId>,
    ) -> Result<DiscoveryOutcome> {
        for attempt in 1..=self.max_attempts {
            let batch = self.source.fetch_batch().await?;
            let batch_len = batch.len();

            let accepted = batch
                .into_iter()
                .find(|record| !record.has_banned_color(banned) && !seen.contains(&record.id));

            match accepted {
                Some(record) => {
                    tracing::debug!(
                        attempt,
                        id = record.id,
                        "accepted artwork after filtering batch of {}",
                        batch_len
                    );
                    return Ok(DiscoveryOutcome::Found(record));
                }
                None => {
                    tracing::debug!(
                        attempt,
                        max_attempts = self.max_attempts,
                        "all {} records in batch were banned or already seen, retrying",
                        batch_len
                    );
                }
            }
        }

        tracing::warn!(
            attempts = self.max_attempts,
            "discovery exhausted, no acceptable artwork found"
        );
        Ok(DiscoveryOutcome::Exhausted {
            attempts: self.max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ColorEntry;
    use crate::utils::error::DiscoveryError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn record(id: ArtworkId, colors: &[&str]) -> ArtworkRecord {
        ArtworkRecord {
            id,
            image_url: format!("https://example.com/{}.jpg", id),
            description: None,
            colors: colors
                .iter()
                .map(|c| ColorEntry {
                    color: c.to_string(),
                    percent: None,
                    css3: None,
                })
                .collect(),
        }
    }

    /// Scripted source: pops one pre-planned batch per fetch, counts calls.
    struct ScriptedSource {
        batches: Mutex<Vec<Vec<ArtworkRecord>>>,
        calls: AtomicUsize,
    }

    impl ScriptedSource {
        fn new(mut batches: Vec<Vec<ArtworkRecord>>) -> Self {
            batches.reverse();
            Self {
                batches: Mutex::new(batches),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ArtworkSource for ScriptedSource {
        async fn fetch_batch(&self) -> Result<Vec<ArtworkRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut batches = self.batches.lock().unwrap();
            match batches.pop() {
                Some(batch) => Ok(batch),
                None => Err(DiscoveryError::ConfigError {
                    message: "scripted source ran out of batches".to_string(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn returns_first_acceptable_record() {
        // 3 already seen, 1 banned, 1 acceptable.
        let batch = vec![
            record(1, &["#aaaaaa"]),
            record(2, &["#bbbbbb"]),
            record(3, &["#cccccc"]),
            record(4, &["#ff0000"]),
            record(5, &["#00ff00"]),
        ];
        let engine = DiscoveryEngine::new(ScriptedSource::new(vec![batch]), 20);

        let mut banned = BanList::new();
        banned.ban("#ff0000");
        let seen: HashSet<ArtworkId> = [1, 2, 3].into_iter().collect();

        match engine.discover(&banned, &seen).await.unwrap() {
            DiscoveryOutcome::Found(rec) => assert_eq!(rec.id, 5),
            DiscoveryOutcome::Exhausted { .. } => panic!("expected a record"),
        }
    }

    #[tokio::test]
    async fn fetches_second_batch_when_first_is_filtered_out() {
        let first = vec![record(1, &["#ff0000"]), record(2, &["#ff0000"])];
        let second = vec![record(3, &["#123456"])];
        let source = ScriptedSource::new(vec![first, second]);
        let engine = DiscoveryEngine::new(source, 20);

        let mut banned = BanList::new();
        banned.ban("#ff0000");

        let outcome = engine.discover(&banned, &HashSet::new()).await.unwrap();
        match outcome {
            DiscoveryOutcome::Found(rec) => assert_eq!(rec.id, 3),
            DiscoveryOutcome::Exhausted { .. } => panic!("expected a record"),
        }
        assert_eq!(engine.source.call_count(), 2);
    }

    #[tokio::test]
    async fn banned_record_never_wins_even_when_first_in_batch() {
        let batch = vec![record(1, &["#ff0000", "#ffffff"]), record(2, &["#ffffff"])];
        let engine = DiscoveryEngine::new(ScriptedSource::new(vec![batch]), 20);

        let mut banned = BanList::new();
        banned.ban("#ff0000");

        match engine.discover(&banned, &HashSet::new()).await.unwrap() {
            DiscoveryOutcome::Found(rec) => assert_eq!(rec.id, 2),
            DiscoveryOutcome::Exhausted { .. } => panic!("expected a record"),
        }
    }

    #[tokio::test]
    async fn exhausts_after_max_attempts() {
        let banned_batch = || vec![record(1, &["#ff0000"])];
        let source = ScriptedSource::new((0..3).map(|_| banned_batch()).collect());
        let engine = DiscoveryEngine::new(source, 3);

        let mut banned = BanList::new();
        banned.ban("#ff0000");

        match engine.discover(&banned, &HashSet::new()).await.unwrap() {
            DiscoveryOutcome::Exhausted { attempts } => assert_eq!(attempts, 3),
            DiscoveryOutcome::Found(_) => panic!("expected exhaustion"),
        }
        assert_eq!(engine.source.call_count(), 3);
    }

    #[tokio::test]
    async fn source_error_aborts_the_loop() {
        // Empty script: the first fetch fails.
        let engine = DiscoveryEngine::new(ScriptedSource::new(vec![]), 5);
        let result = engine.discover(&BanList::new(), &HashSet::new()).await;
        assert!(result.is_err());
        assert_eq!(engine.source.call_count(), 1);
    }
}
