// Conversion workflow module - link classification and job orchestration

pub mod detector;
pub mod engine;
pub mod errors;
pub mod metadata;
pub mod models;
pub mod traits;
pub mod validator;
pub mod workflow;

pub use detector::PlatformDetector;
pub use engine::SimulatedConversionEngine;
pub use errors::ConvertError;
pub use metadata::SimulatedMetadataProvider;
pub use models::{
    ContentRef, ConversionOutcome, Platform, Resolution, VideoMetadata, WorkflowState,
};
pub use traits::{ConversionEngine, MetadataProvider, RandomSource, Sleeper};
pub use validator::{UrlValidator, ValidationPolicy};
pub use workflow::WorkflowController;
