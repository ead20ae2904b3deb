// Simulated metadata provider - placeholder content behind the real-fetch seam

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use super::errors::ConvertError;
use super::models::{ContentRef, Platform, VideoMetadata};
use super::traits::{MetadataProvider, Sleeper, TokioSleeper};

/// Simulated network latency, platform-independent
const FETCH_DELAY: Duration = Duration::from_millis(1500);

/// Produces deterministic per-platform placeholder metadata after an
/// artificial suspension. A future implementation substitutes a real
/// platform client with the same signature and error taxonomy.
pub struct SimulatedMetadataProvider {
    delay: Duration,
    sleeper: Arc<dyn Sleeper>,
}

impl SimulatedMetadataProvider {
    pub fn new() -> Self {
        Self {
            delay: FETCH_DELAY,
            sleeper: Arc::new(TokioSleeper),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Template lookup keyed by platform. Platforms without a dedicated
    /// template fall back to a generic one that needs no content ID.
    fn template(content: &ContentRef) -> VideoMetadata {
        let id = content.content_id.as_deref().unwrap_or_default();
        let short_id: String = id.chars().take(8).collect();

        match content.platform {
            Platform::YouTube => VideoMetadata {
                platform: Platform::YouTube,
                title: format!("Sample Video Title - {}", short_id),
                source_url: content.source_url.clone(),
                duration: Some("3:45".to_string()),
                thumbnail: Some(format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", id)),
                author: Some("Sample Channel".to_string()),
                view_count: Some("1.2M views".to_string()),
            },
            Platform::Instagram => VideoMetadata {
                platform: Platform::Instagram,
                title: format!("Instagram Post - {}", short_id),
                source_url: content.source_url.clone(),
                duration: Some("0:30".to_string()),
                thumbnail: None,
                author: Some("@sample_user".to_string()),
                view_count: Some("15.6K views".to_string()),
            },
            Platform::TikTok => VideoMetadata {
                platform: Platform::TikTok,
                title: format!("TikTok Video - {}", short_id),
                source_url: content.source_url.clone(),
                duration: Some("0:15".to_string()),
                thumbnail: None,
                author: Some("@sample_tiktoker".to_string()),
                view_count: Some("892.1K views".to_string()),
            },
            other => VideoMetadata {
                platform: other,
                title: format!("{} Video Content", other.label()),
                source_url: content.source_url.clone(),
                duration: Some("2:30".to_string()),
                thumbnail: None,
                author: Some("Unknown Creator".to_string()),
                view_count: Some("N/A".to_string()),
            },
        }
    }
}

impl Default for SimulatedMetadataProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetadataProvider for SimulatedMetadataProvider {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn fetch(&self, content: &ContentRef) -> Result<VideoMetadata, ConvertError> {
        if !content.platform.is_supported() {
            return Err(ConvertError::UnsupportedPlatform);
        }
        if content.platform.requires_content_id() && content.content_id.is_none() {
            return Err(ConvertError::IdExtractionFailed);
        }

        self.sleeper.sleep(self.delay).await;

        Ok(Self::template(content))
    }
}
