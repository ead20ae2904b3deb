// Simulated conversion engine - timed job with a probabilistic outcome

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use time::OffsetDateTime;

use super::models::{ConversionOutcome, Resolution, VideoMetadata};
use super::traits::{ConversionEngine, RandomSource, Sleeper, ThreadRandom, TokioSleeper};

/// Probability that a job fails
const FAILURE_RATE: f64 = 0.1;

const FAILURE_REASON: &str = "Conversion failed due to video processing error";

/// Title characters kept when deriving the artifact filename
const FILENAME_TITLE_LIMIT: usize = 30;

/// Conversion time per target resolution
fn conversion_delay(resolution: Resolution) -> Duration {
    match resolution {
        Resolution::P480 => Duration::from_secs(3),
        Resolution::P720 => Duration::from_secs(5),
        Resolution::P1080 => Duration::from_secs(8),
        Resolution::P1440 => Duration::from_secs(12),
    }
}

fn file_size_label(resolution: Resolution) -> &'static str {
    match resolution {
        Resolution::P480 => "15.2 MB",
        Resolution::P720 => "32.8 MB",
        Resolution::P1080 => "78.5 MB",
        Resolution::P1440 => "156.3 MB",
    }
}

/// Runs a simulated conversion: resolution-dependent delay, then a single
/// random draw for the outcome. Delay and randomness are injected so tests
/// stay deterministic and fast.
pub struct SimulatedConversionEngine {
    failure_rate: f64,
    random: Arc<dyn RandomSource>,
    sleeper: Arc<dyn Sleeper>,
}

impl SimulatedConversionEngine {
    pub fn new() -> Self {
        Self {
            failure_rate: FAILURE_RATE,
            random: Arc::new(ThreadRandom),
            sleeper: Arc::new(TokioSleeper),
        }
    }

    pub fn with_failure_rate(mut self, rate: f64) -> Self {
        self.failure_rate = rate;
        self
    }

    pub fn with_random(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Derive the artifact filename from the title and target resolution
    fn build_filename(title: &str, resolution: Resolution) -> String {
        let stem: String = title.chars().take(FILENAME_TITLE_LIMIT).collect();
        format!("{}-{}.mp4", stem, resolution)
    }

    /// Opaque per-call handle standing in for a real artifact location
    fn build_download_ref() -> String {
        let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        format!("blob:converted-video-{}.mp4", millis)
    }
}

impl Default for SimulatedConversionEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConversionEngine for SimulatedConversionEngine {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn convert(&self, metadata: &VideoMetadata, resolution: Resolution) -> ConversionOutcome {
        let delay = conversion_delay(resolution);
        eprintln!(
            "[Engine] Converting '{}' to {} (~{}s)",
            metadata.title,
            resolution,
            delay.as_secs()
        );

        self.sleeper.sleep(delay).await;

        if self.random.roll() < self.failure_rate {
            eprintln!("[Engine] ✗ Conversion failed");
            return ConversionOutcome::Failure {
                reason: FAILURE_REASON.to_string(),
            };
        }

        eprintln!("[Engine] ✓ Conversion complete");
        ConversionOutcome::Success {
            download_ref: Self::build_download_ref(),
            filename: Self::build_filename(&metadata.title, resolution),
            file_size: file_size_label(resolution).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::models::Platform;
    use crate::converter::traits::{FixedRandom, NoopSleeper};
    use std::sync::Mutex;

    /// Records requested durations instead of sleeping
    struct RecordingSleeper {
        slept: Mutex<Vec<Duration>>,
    }

    #[async_trait]
    impl Sleeper for RecordingSleeper {
        async fn sleep(&self, duration: Duration) {
            self.slept.lock().unwrap().push(duration);
        }
    }

    fn sample_metadata(title: &str) -> VideoMetadata {
        VideoMetadata {
            platform: Platform::YouTube,
            title: title.to_string(),
            source_url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
            duration: Some("3:45".to_string()),
            thumbnail: None,
            author: Some("Sample Channel".to_string()),
            view_count: None,
        }
    }

    fn deterministic_engine(roll: f64) -> SimulatedConversionEngine {
        SimulatedConversionEngine::new()
            .with_random(Arc::new(FixedRandom(roll)))
            .with_sleeper(Arc::new(NoopSleeper))
    }

    #[tokio::test]
    async fn test_successful_conversion_at_1080p() {
        let engine = deterministic_engine(0.99);
        let outcome = engine
            .convert(&sample_metadata("My Video"), Resolution::P1080)
            .await;

        match outcome {
            ConversionOutcome::Success {
                download_ref,
                filename,
                file_size,
            } => {
                assert_eq!(file_size, "78.5 MB");
                assert_eq!(filename, "My Video-1080p.mp4");
                assert!(download_ref.starts_with("blob:converted-video-"));
                assert!(download_ref.ends_with(".mp4"));
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_forced_failure_regardless_of_resolution() {
        let engine = deterministic_engine(0.0);

        for res in Resolution::ALL {
            let outcome = engine.convert(&sample_metadata("My Video"), res).await;
            match outcome {
                ConversionOutcome::Failure { reason } => {
                    assert_eq!(reason, FAILURE_REASON);
                }
                other => panic!("expected failure at {}, got {:?}", res, other),
            }
        }
    }

    #[tokio::test]
    async fn test_long_title_is_truncated() {
        let engine = deterministic_engine(0.99);
        let title = "This Title Is Definitely Longer Than Thirty Characters";
        let outcome = engine.convert(&sample_metadata(title), Resolution::P480).await;

        match outcome {
            ConversionOutcome::Success { filename, .. } => {
                assert_eq!(filename, "This Title Is Definitely Longe-480p.mp4");
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delay_table() {
        let sleeper = Arc::new(RecordingSleeper {
            slept: Mutex::new(Vec::new()),
        });
        let engine = SimulatedConversionEngine::new()
            .with_random(Arc::new(FixedRandom(0.99)))
            .with_sleeper(sleeper.clone());

        for res in Resolution::ALL {
            engine.convert(&sample_metadata("My Video"), res).await;
        }

        let slept = sleeper.slept.lock().unwrap();
        assert_eq!(
            *slept,
            vec![
                Duration::from_secs(3),
                Duration::from_secs(5),
                Duration::from_secs(8),
                Duration::from_secs(12),
            ]
        );
    }
}
