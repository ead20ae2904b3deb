// Common data models for the conversion workflow

use serde::{Deserialize, Serialize};
use std::fmt;

/// Source platforms, listed in detection priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    YouTube,
    Instagram,
    TikTok,
    Facebook,
    Twitter,
    Rednote,
    /// Any other http(s) link
    DirectLink,
    Unknown,
}

impl Platform {
    /// User-facing label
    pub fn label(&self) -> &'static str {
        match self {
            Self::YouTube => "YouTube",
            Self::Instagram => "Instagram",
            Self::TikTok => "TikTok",
            Self::Facebook => "Facebook",
            Self::Twitter => "Twitter",
            Self::Rednote => "Rednote",
            Self::DirectLink => "Direct Link",
            Self::Unknown => "Unknown",
        }
    }

    /// Check if metadata can be produced for this platform
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Check if this platform's metadata template is keyed by content ID
    pub fn requires_content_id(&self) -> bool {
        matches!(self, Self::YouTube | Self::Instagram | Self::TikTok)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classification result for a submitted URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRef {
    pub platform: Platform,
    /// Platform-specific ID; None when extraction is undefined or failed.
    /// Downstream treats this as "platform known, ID unknown", not an error.
    pub content_id: Option<String>,
    pub source_url: String,
}

/// Descriptive metadata for a classified video link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub platform: Platform,
    pub title: String,
    pub source_url: String,
    pub duration: Option<String>,
    pub thumbnail: Option<String>,
    pub author: Option<String>,
    pub view_count: Option<String>,
}

/// Target resolutions offered for conversion (closed set, no custom values)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    P480,
    P720,
    P1080,
    P1440,
}

impl Resolution {
    /// All options, in the order the UI presents them
    pub const ALL: [Resolution; 4] = [Self::P480, Self::P720, Self::P1080, Self::P1440];

    pub fn label(&self) -> &'static str {
        match self {
            Self::P480 => "480p",
            Self::P720 => "720p",
            Self::P1080 => "1080p",
            Self::P1440 => "1440p",
        }
    }

    /// Parse a UI label back into a resolution
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "480p" => Some(Self::P480),
            "720p" => Some(Self::P720),
            "1080p" => Some(Self::P1080),
            "1440p" => Some(Self::P1440),
            _ => None,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Final result of a conversion job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversionOutcome {
    Success {
        /// Opaque handle standing in for the artifact location
        download_ref: String,
        filename: String,
        file_size: String,
    },
    Failure {
        reason: String,
    },
}

impl ConversionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Controller state as observed by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkflowState {
    /// No URL, or URL just cleared
    Idle,
    /// URL accepted, metadata fetch in flight
    Validating,
    /// Metadata present, waiting for a resolution choice and/or convert
    AwaitingResolution,
    /// Conversion job in flight
    Converting,
    /// Terminal for this submission; holds the outcome until the next edit
    Completed(ConversionOutcome),
}

impl WorkflowState {
    /// Check if an asynchronous step is in flight
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Validating | Self::Converting)
    }
}
