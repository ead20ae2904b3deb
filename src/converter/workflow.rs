// Workflow controller - the stateful orchestrator driven by the presentation layer

use std::sync::{Mutex, MutexGuard};

use super::detector::PlatformDetector;
use super::engine::SimulatedConversionEngine;
use super::errors::ConvertError;
use super::metadata::SimulatedMetadataProvider;
use super::models::{ContentRef, ConversionOutcome, Resolution, VideoMetadata, WorkflowState};
use super::traits::{ConversionEngine, MetadataProvider};
use super::validator::UrlValidator;

/// Mutable workflow data, guarded by the controller's mutex. Only the
/// controller moves it, and only through the defined transitions.
struct WorkflowInner {
    url: String,
    /// Monotonically increasing edit counter. Each in-flight fetch or
    /// conversion carries the value captured at dispatch; a completion whose
    /// value no longer matches is stale and must not touch state.
    seq: u64,
    state: WorkflowState,
    content: Option<ContentRef>,
    metadata: Option<VideoMetadata>,
    resolution: Option<Resolution>,
}

/// Sequences UrlValidator, PlatformDetector, the metadata provider and the
/// conversion engine, and enforces the validation-before-conversion
/// precondition. All outcomes are returned as values; nothing here is fatal.
pub struct WorkflowController {
    validator: UrlValidator,
    provider: Box<dyn MetadataProvider>,
    engine: Box<dyn ConversionEngine>,
    inner: Mutex<WorkflowInner>,
}

impl WorkflowController {
    pub fn new() -> Self {
        Self::with_components(
            UrlValidator::default(),
            Box::new(SimulatedMetadataProvider::new()),
            Box::new(SimulatedConversionEngine::new()),
        )
    }

    pub fn with_components(
        validator: UrlValidator,
        provider: Box<dyn MetadataProvider>,
        engine: Box<dyn ConversionEngine>,
    ) -> Self {
        Self {
            validator,
            provider,
            engine,
            inner: Mutex::new(WorkflowInner {
                url: String::new(),
                seq: 0,
                state: WorkflowState::Idle,
                content: None,
                metadata: None,
                resolution: None,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, WorkflowInner> {
        self.inner.lock().expect("workflow state lock poisoned")
    }

    /// Handle a URL edit. The previous classification, metadata, resolution
    /// and result are discarded immediately; validation and the metadata
    /// fetch then run from scratch. A fetch dispatched for an earlier edit
    /// keeps running, but its result is discarded when it completes.
    pub async fn on_url_changed(&self, raw: &str) -> Result<(), ConvertError> {
        let (my_seq, content) = {
            let mut inner = self.lock();
            inner.seq += 1;
            inner.url = raw.to_string();
            inner.content = None;
            inner.metadata = None;
            inner.resolution = None;

            let trimmed = raw.trim();
            if trimmed.is_empty() {
                inner.state = WorkflowState::Idle;
                return Ok(());
            }
            if !self.validator.is_acceptable(trimmed) {
                inner.state = WorkflowState::Idle;
                return Err(ConvertError::InvalidUrlFormat);
            }

            inner.state = WorkflowState::Validating;
            let content = PlatformDetector::detect(trimmed);
            inner.content = Some(content.clone());
            (inner.seq, content)
        };

        eprintln!(
            "[Workflow] Fetching {} metadata via {} (request #{})",
            content.platform,
            self.provider.name(),
            my_seq
        );
        let fetched = self.provider.fetch(&content).await;

        let mut inner = self.lock();
        if inner.seq != my_seq {
            eprintln!("[Workflow] Discarding stale fetch #{}", my_seq);
            return Ok(());
        }

        match fetched {
            Ok(metadata) => {
                inner.metadata = Some(metadata);
                inner.state = WorkflowState::AwaitingResolution;
                Ok(())
            }
            Err(e) => {
                eprintln!("[Workflow] ✗ Metadata fetch failed: {}", e);
                inner.state = WorkflowState::Idle;
                Err(e)
            }
        }
    }

    /// Record the user's resolution choice. A pure field write: legal
    /// whenever metadata is held, and never advances the state machine.
    pub fn on_resolution_selected(&self, choice: Resolution) -> Result<(), ConvertError> {
        let mut inner = self.lock();
        if inner.metadata.is_none() {
            return Err(ConvertError::NoResolutionSelected);
        }

        inner.resolution = Some(choice);
        Ok(())
    }

    /// Trigger a conversion. Preconditions are checked in order: non-empty
    /// URL, acceptable URL, metadata plus chosen resolution. A violation is
    /// reported without invoking the engine and leaves state unchanged.
    /// Re-submission after Completed is permitted and re-enters Converting.
    pub async fn on_convert_requested(&self) -> Result<ConversionOutcome, ConvertError> {
        let (my_seq, metadata, resolution) = {
            let mut inner = self.lock();

            if inner.url.trim().is_empty() {
                return Err(ConvertError::EmptyInput);
            }
            if !self.validator.is_acceptable(&inner.url) {
                return Err(ConvertError::InvalidUrlFormat);
            }
            let (metadata, resolution) = match (&inner.metadata, inner.resolution) {
                (Some(m), Some(r)) => (m.clone(), r),
                _ => return Err(ConvertError::NoResolutionSelected),
            };

            inner.state = WorkflowState::Converting;
            (inner.seq, metadata, resolution)
        };

        eprintln!(
            "[Workflow] Converting '{}' at {} via {}",
            metadata.title,
            resolution,
            self.engine.name()
        );
        let outcome = self.engine.convert(&metadata, resolution).await;

        let mut inner = self.lock();
        if inner.seq == my_seq {
            inner.state = WorkflowState::Completed(outcome.clone());
        } else {
            eprintln!("[Workflow] Discarding stale conversion #{}", my_seq);
        }

        match outcome {
            ConversionOutcome::Failure { ref reason } => {
                Err(ConvertError::ConversionFailed(reason.clone()))
            }
            success => Ok(success),
        }
    }

    /// Read-only state snapshot for rendering
    pub fn state(&self) -> WorkflowState {
        self.lock().state.clone()
    }

    /// Current classification, if any
    pub fn content(&self) -> Option<ContentRef> {
        self.lock().content.clone()
    }

    /// Current metadata, if any
    pub fn metadata(&self) -> Option<VideoMetadata> {
        self.lock().metadata.clone()
    }

    /// Currently chosen resolution, if any
    pub fn resolution(&self) -> Option<Resolution> {
        self.lock().resolution
    }
}

impl Default for WorkflowController {
    fn default() -> Self {
        Self::new()
    }
}
