use super::classify::classify;

/// The kind of a block, decided from its text alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Default when no other rule matches, including malformed lists and quotes.
    Paragraph,
    /// `#` to `######` followed by a space.
    Heading,
    /// Opened and closed by ```` ``` ````.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// `- ` or `* ` items.
    UnorderedList,
    /// `1. `, `2. `, … items.
    OrderedList,
}

/// Ordered or unordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    /// The container tag for a list of this kind.
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "ol",
            ListKind::Unordered => "ul",
        }
    }
}

/// A raw block paired with its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedBlock {
    pub kind: BlockKind,
    pub text: String,
}

impl ClassifiedBlock {
    /// Classifies `text` and keeps it alongside its kind.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            kind: classify(&text),
            text,
        }
    }
}
