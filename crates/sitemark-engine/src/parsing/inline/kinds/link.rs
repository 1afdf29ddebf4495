use std::sync::OnceLock;

use regex::Regex;

/// `[text](url)` links.
///
/// Text may hold escaped brackets but no bare `[`/`]`. The URL is non-empty
/// and may contain one level of balanced parentheses.
pub struct Link;

impl Link {
    pub fn pattern() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| {
            Regex::new(r"\[((?:\\.|[^\[\]\\])*)\]\(((?:[^()]|\([^()]*\))+)\)")
                .expect("Invalid link regex")
        })
    }
}

/// `![alt](url)` images. Same text and URL rules as [`Link`].
pub struct Image;

impl Image {
    pub const BANG: u8 = b'!';

    pub fn pattern() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| {
            Regex::new(r"!\[((?:\\.|[^\[\]\\])*)\]\(((?:[^()]|\([^()]*\))+)\)")
                .expect("Invalid image regex")
        })
    }
}
