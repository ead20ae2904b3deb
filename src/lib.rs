pub mod converter;

pub use converter::{
    ContentRef, ConversionEngine, ConversionOutcome, ConvertError, MetadataProvider,
    Platform, PlatformDetector, RandomSource, Resolution, SimulatedConversionEngine,
    SimulatedMetadataProvider, Sleeper, UrlValidator, ValidationPolicy, VideoMetadata,
    WorkflowController, WorkflowState,
};
