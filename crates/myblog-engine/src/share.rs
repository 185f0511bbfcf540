/// Share targets recognized by the feed. A fixed set; anything else is a
/// no-op at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePlatform {
    WhatsApp,
    Facebook,
    Twitter,
}

impl SharePlatform {
    pub const ALL: [SharePlatform; 3] = [
        SharePlatform::WhatsApp,
        SharePlatform::Facebook,
        SharePlatform::Twitter,
    ];

    /// Parse a platform name. Unrecognized names yield `None`, which the
    /// caller treats as a no-op.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "whatsapp" => Some(SharePlatform::WhatsApp),
            "facebook" => Some(SharePlatform::Facebook),
            "twitter" => Some(SharePlatform::Twitter),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SharePlatform::WhatsApp => "WhatsApp",
            SharePlatform::Facebook => "Facebook",
            SharePlatform::Twitter => "Twitter",
        }
    }

    /// Platform deep link handing the given post URL off for sharing.
    pub fn share_url(&self, post_url: &str) -> String {
        let encoded = urlencoding::encode(post_url);
        match self {
            SharePlatform::WhatsApp => format!("whatsapp://send?text={}", encoded),
            SharePlatform::Facebook => {
                format!("https://www.facebook.com/sharer/sharer.php?u={}", encoded)
            }
            SharePlatform::Twitter => format!("https://twitter.com/intent/tweet?url={}", encoded),
        }
    }
}

/// Canonical URL of a post on the blog site.
pub fn post_url(origin: &str, post_id: &str) -> String {
    format!("{}/blog/{}", origin.trim_end_matches('/'), post_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_url_from_origin() {
        assert_eq!(
            post_url("http://localhost:3000", "p1"),
            "http://localhost:3000/blog/p1"
        );
        // Trailing slash on the origin does not double up.
        assert_eq!(
            post_url("http://localhost:3000/", "p1"),
            "http://localhost:3000/blog/p1"
        );
    }

    #[test]
    fn test_share_urls_encode_the_post_url() {
        let url = post_url("http://localhost:3000", "p1");

        assert_eq!(
            SharePlatform::WhatsApp.share_url(&url),
            "whatsapp://send?text=http%3A%2F%2Flocalhost%3A3000%2Fblog%2Fp1"
        );
        assert_eq!(
            SharePlatform::Facebook.share_url(&url),
            "https://www.facebook.com/sharer/sharer.php?u=http%3A%2F%2Flocalhost%3A3000%2Fblog%2Fp1"
        );
        assert_eq!(
            SharePlatform::Twitter.share_url(&url),
            "https://twitter.com/intent/tweet?url=http%3A%2F%2Flocalhost%3A3000%2Fblog%2Fp1"
        );
    }

    #[test]
    fn test_parse_is_a_fixed_set() {
        assert_eq!(SharePlatform::parse("WhatsApp"), Some(SharePlatform::WhatsApp));
        assert_eq!(SharePlatform::parse("twitter"), Some(SharePlatform::Twitter));
        assert_eq!(SharePlatform::parse("myspace"), None);
        assert_eq!(SharePlatform::parse(""), None);
    }
}
