use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::blocks::types::ListKind;

/// A list item marker found at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `-` or `*`.
    Bullet(char),
    /// `N.` with its number.
    Number(u64),
}

impl Marker {
    pub fn kind(self) -> ListKind {
        match self {
            Marker::Bullet(_) => ListKind::Unordered,
            Marker::Number(_) => ListKind::Ordered,
        }
    }
}

/// List marker syntax with owned constants.
pub struct ListMarker;

impl ListMarker {
    pub const BULLETS: [char; 2] = ['-', '*'];

    fn ordered_pattern() -> &'static Regex {
        static ORDERED_REGEX: OnceLock<Regex> = OnceLock::new();
        ORDERED_REGEX
            .get_or_init(|| Regex::new(r"^(\d+)\. ").expect("Invalid ordered list regex"))
    }

    /// Splits an indentation-stripped line into its marker and the content
    /// after the single space that follows the marker.
    pub fn parse(line: &str) -> Option<(Marker, &str)> {
        for bullet in Self::BULLETS {
            if let Some(rest) = line.strip_prefix(bullet)
                && let Some(content) = rest.strip_prefix(' ')
            {
                return Some((Marker::Bullet(bullet), content));
            }
        }

        let caps = Self::ordered_pattern().captures(line)?;
        let whole = caps.get(0)?;
        let number = caps[1].parse().ok()?;
        Some((Marker::Number(number), &line[whole.end()..]))
    }

    /// Whether a line starts with any list marker after indentation.
    pub fn starts_line(line: &str) -> bool {
        Self::parse(line.trim_start()).is_some()
    }
}
