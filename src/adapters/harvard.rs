use crate::core::{ArtworkSource, ConfigProvider};
use crate::domain::model::{ArtworkRecord, ImagePage};
use crate::utils::error::Result;
use async_trait::async_trait;
use rand::Rng;
use reqwest::Client;

/// HTTP client for the Harvard Art Museums image endpoint. Each fetch asks
/// for a random batch under a fresh sort seed so repeated calls see
/// different slices of the corpus.
pub struct HarvardImageClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> HarvardImageClient<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl<C: ConfigProvider> ArtworkSource for HarvardImageClient<C> {
    async fn fetch_batch(&self) -> Result<Vec<ArtworkRecord>> {
        let seed: u32 = rand::thread_rng().gen_range(0..100);

        tracing::debug!(
            endpoint = self.config.api_endpoint(),
            size = self.config.batch_size(),
            seed,
            "requesting artwork batch"
        );

        let response = self
            .client
            .get(self.config.api_endpoint())
            .query(&[
                ("size", self.config.batch_size().to_string()),
                ("sort", format!("random:{}", seed)),
                ("apikey", self.config.api_key().to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let page: ImagePage = response.json().await?;
        tracing::debug!("received {} records", page.records.len());
        Ok(page.records)
    }
}
