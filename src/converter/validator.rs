// URL validation against supported platform patterns

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Per-platform URL shapes. Scheme is optional, subdomain variants are
    /// allowed, and any single match suffices (the checks are independent).
    static ref PLATFORM_PATTERNS: Vec<Regex> = vec![
        // YouTube: watch/embed/v paths and the youtu.be short form
        Regex::new(r"(?i)^(https?://)?((www|m)\.)?(youtube\.com/(watch\?v=|embed/|v/)|youtu\.be/)[\w-]+").unwrap(),
        // Instagram posts, reels and tv
        Regex::new(r"(?i)^(https?://)?(www\.)?instagram\.com/(p|reel|tv)/[\w-]+").unwrap(),
        // TikTok, including vm. short links
        Regex::new(r"(?i)^(https?://)?(www\.)?(tiktok\.com|vm\.tiktok\.com)").unwrap(),
        // Facebook video pages
        Regex::new(r"(?i)^(https?://)?(www\.)?facebook\.com/.*/videos").unwrap(),
        // Twitter/X status links
        Regex::new(r"(?i)^(https?://)?(www\.)?(twitter\.com|x\.com)/.*/status").unwrap(),
        // Rednote
        Regex::new(r"(?i)^(https?://)?(www\.)?rednote\.com").unwrap(),
    ];
}

/// Validation strictness
///
/// Strict accepts only the per-platform patterns. Lenient additionally
/// accepts anything that looks like an http(s) link, at lower confidence.
/// Callers choose the policy; the workflow defaults to Strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    #[default]
    Strict,
    Lenient,
}

/// Decides whether a raw string is an acceptable link for a supported platform
#[derive(Debug, Clone, Copy)]
pub struct UrlValidator {
    policy: ValidationPolicy,
}

impl UrlValidator {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Check a raw string. Leading/trailing whitespace is ignored; an empty
    /// string is never acceptable.
    pub fn is_acceptable(&self, raw: &str) -> bool {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return false;
        }

        if PLATFORM_PATTERNS.iter().any(|p| p.is_match(trimmed)) {
            return true;
        }

        match self.policy {
            ValidationPolicy::Strict => false,
            ValidationPolicy::Lenient => trimmed.to_lowercase().contains("http"),
        }
    }
}

impl Default for UrlValidator {
    fn default() -> Self {
        Self::new(ValidationPolicy::Strict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict() -> UrlValidator {
        UrlValidator::default()
    }

    #[test]
    fn test_accepts_youtube_forms() {
        let v = strict();
        assert!(v.is_acceptable("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(v.is_acceptable("https://youtu.be/dQw4w9WgXcQ"));
        assert!(v.is_acceptable("youtube.com/embed/dQw4w9WgXcQ"));
        assert!(v.is_acceptable("http://m.youtube.com/watch?v=dQw4w9WgXcQ"));
    }

    #[test]
    fn test_accepts_instagram_post_shapes() {
        let v = strict();
        assert!(v.is_acceptable("https://www.instagram.com/reel/Cabc123/"));
        assert!(v.is_acceptable("instagram.com/p/Cabc123"));
        assert!(v.is_acceptable("https://instagram.com/tv/Cabc-123"));
    }

    #[test]
    fn test_accepts_other_platforms() {
        let v = strict();
        assert!(v.is_acceptable("https://www.tiktok.com/@user/video/1234567890"));
        assert!(v.is_acceptable("https://vm.tiktok.com/ZM8abcdef/"));
        assert!(v.is_acceptable("https://www.facebook.com/somepage/videos/123456"));
        assert!(v.is_acceptable("https://twitter.com/user/status/12345"));
        assert!(v.is_acceptable("https://x.com/user/status/12345"));
        assert!(v.is_acceptable("https://www.rednote.com/discovery/item/abc"));
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        let v = strict();
        assert!(!v.is_acceptable(""));
        assert!(!v.is_acceptable("   "));
    }

    #[test]
    fn test_rejects_non_urls() {
        let v = strict();
        assert!(!v.is_acceptable("not a url"));
        assert!(!v.is_acceptable("youtube"));
        assert!(!v.is_acceptable("watch?v=dQw4w9WgXcQ"));
    }

    #[test]
    fn test_strict_rejects_unlisted_domains() {
        let v = strict();
        assert!(!v.is_acceptable("https://example.com/video/123"));
    }

    #[test]
    fn test_lenient_accepts_any_http_link() {
        let v = UrlValidator::new(ValidationPolicy::Lenient);
        assert!(v.is_acceptable("https://example.com/video/123"));
        assert!(v.is_acceptable("some text with http inside"));
        assert!(!v.is_acceptable("not a url"));
    }
}
