use thiserror::Error;

/// Maximum recursion depth for nested inline formatting and nested lists/quotes.
pub const MAX_NESTING_DEPTH: usize = 10;

/// Errors raised while building or rendering a node tree.
///
/// Classification fallbacks (malformed lists or quotes) are not errors; such
/// blocks silently become paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Unmatched {delimiter:?} delimiter: no closing marker in {text:?}")]
    UnmatchedDelimiter {
        delimiter: &'static str,
        text: String,
    },

    #[error("Nesting deeper than {limit} levels, input is likely malformed")]
    NestingTooDeep { limit: usize },

    #[error("Container node must have a tag")]
    MissingTag,

    #[error("Container node <{tag}> must have at least one child")]
    EmptyChildren { tag: String },

    #[error("Invalid tag name: {tag:?}")]
    InvalidTag { tag: String },

    #[error("Attribute {key:?} holds a nested map, only flat attributes are supported")]
    NestedAttribute { key: String },

    #[error("Document has no top-level `# ` heading to use as a title")]
    MissingTitle,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
