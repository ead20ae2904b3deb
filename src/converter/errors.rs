// Error types for the conversion workflow

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// URL field is empty at convert time
    EmptyInput,

    /// URL matches no supported platform pattern
    InvalidUrlFormat,

    /// Platform could not be recognized at all
    UnsupportedPlatform,

    /// Platform recognized, but a required content ID could not be extracted
    IdExtractionFailed,

    /// Provider-level failure (e.g. simulated network fault)
    MetadataFetchFailed(String),

    /// Convert was triggered without metadata or a chosen resolution
    NoResolutionSelected,

    /// The conversion job itself failed
    ConversionFailed(String),
}

impl ConvertError {
    /// Check if this error comes from the input stage (resets the workflow
    /// to Idle) rather than from a convert-time precondition.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrlFormat
                | Self::UnsupportedPlatform
                | Self::IdExtractionFailed
                | Self::MetadataFetchFailed(_)
        )
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Please enter a video URL to proceed with conversion"),
            Self::InvalidUrlFormat => write!(
                f,
                "Invalid video URL format: expected a link from a supported platform \
                 (YouTube, Instagram, TikTok, Facebook, Twitter, Rednote)"
            ),
            Self::UnsupportedPlatform => write!(f, "Unsupported video platform"),
            Self::IdExtractionFailed => write!(f, "Could not extract video ID from URL"),
            Self::MetadataFetchFailed(msg) => write!(f, "Failed to fetch video information: {}", msg),
            Self::NoResolutionSelected => write!(f, "Please select a resolution before converting"),
            Self::ConversionFailed(msg) => write!(f, "Conversion failed: {}", msg),
        }
    }
}

impl std::error::Error for ConvertError {}
