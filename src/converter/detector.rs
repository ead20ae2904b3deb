// Platform detection and content ID extraction

use lazy_static::lazy_static;
use regex::Regex;

use super::models::{ContentRef, Platform};

lazy_static! {
    static ref YOUTUBE_ID_RE: Regex =
        Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([^&\n?#]+)").unwrap();
    static ref INSTAGRAM_ID_RE: Regex =
        Regex::new(r"instagram\.com/(?:p|reel|tv)/([\w-]+)").unwrap();
    static ref TIKTOK_ID_RE: Regex = Regex::new(r"tiktok\.com/.*/video/(\d+)").unwrap();
}

/// Classifies URLs into a platform tag and a platform-specific content ID
pub struct PlatformDetector;

impl PlatformDetector {
    /// Classify a URL. Never fails: an unrecognized string yields
    /// Platform::Unknown, and a recognized platform whose ID cannot be
    /// extracted yields content_id = None.
    pub fn detect(url: &str) -> ContentRef {
        let platform = Self::platform_of(url);

        ContentRef {
            platform,
            content_id: Self::extract_content_id(url, platform),
            source_url: url.to_string(),
        }
    }

    /// Substring-based recognition, checked in priority order
    fn platform_of(url: &str) -> Platform {
        let lower = url.to_lowercase();

        if lower.contains("youtube.com") || lower.contains("youtu.be") {
            Platform::YouTube
        } else if lower.contains("instagram.com") {
            Platform::Instagram
        } else if lower.contains("tiktok.com") {
            Platform::TikTok
        } else if lower.contains("facebook.com") {
            Platform::Facebook
        } else if lower.contains("twitter.com") || lower.contains("x.com") {
            Platform::Twitter
        } else if lower.contains("rednote.com") {
            Platform::Rednote
        } else if lower.contains("http") {
            Platform::DirectLink
        } else {
            Platform::Unknown
        }
    }

    /// Extract the content ID where the platform defines one
    pub fn extract_content_id(url: &str, platform: Platform) -> Option<String> {
        let re = match platform {
            Platform::YouTube => &*YOUTUBE_ID_RE,
            Platform::Instagram => &*INSTAGRAM_ID_RE,
            Platform::TikTok => &*TIKTOK_ID_RE,
            _ => return None,
        };

        re.captures(url).map(|caps| caps[1].to_string())
    }
}
