// Provider traits and injection seams

use async_trait::async_trait;
use std::time::Duration;

use super::errors::ConvertError;
use super::models::{ContentRef, ConversionOutcome, Resolution, VideoMetadata};

/// Trait for metadata providers
///
/// The simulated implementation stands in for a future network client with
/// the same signature and error taxonomy.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Name of the provider (for logging)
    fn name(&self) -> &'static str;

    /// Produce metadata for a classified link
    async fn fetch(&self, content: &ContentRef) -> Result<VideoMetadata, ConvertError>;
}

/// Trait for conversion engines
#[async_trait]
pub trait ConversionEngine: Send + Sync {
    /// Name of the engine (for logging)
    fn name(&self) -> &'static str;

    /// Run a conversion job to completion. A failed job is an outcome,
    /// not an error.
    async fn convert(&self, metadata: &VideoMetadata, resolution: Resolution) -> ConversionOutcome;
}

/// Suspension seam for the simulated providers
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Default sleeper backed by the tokio timer
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Sleeper that returns immediately, for deterministic callers
pub struct NoopSleeper;

#[async_trait]
impl Sleeper for NoopSleeper {
    async fn sleep(&self, _duration: Duration) {}
}

/// Randomness seam for the conversion outcome draw
pub trait RandomSource: Send + Sync {
    /// Uniform value in [0, 1)
    fn roll(&self) -> f64;
}

/// Default source backed by the thread-local rng
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn roll(&self) -> f64 {
        rand::random::<f64>()
    }
}

/// Source that always returns the same value, for deterministic callers
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn roll(&self) -> f64 {
        self.0
    }
}
