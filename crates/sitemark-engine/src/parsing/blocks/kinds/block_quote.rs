/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Whether a line carries a quote prefix after optional indentation.
    pub fn is_quoted(line: &str) -> bool {
        line.trim_start().starts_with(Self::PREFIX)
    }

    /// Strips one quote level: leading indentation, the `>` and at most one
    /// following space. Returns `None` for unquoted lines.
    ///
    /// `> > text` and `>> text` both leave a line that is still quoted.
    pub fn strip_one(line: &str) -> Option<&str> {
        let rest = line.trim_start().strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}
