/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones": they are extracted before any other delimiter,
/// their content is never re-parsed, and backslashes inside them are literal.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that opens and closes a code span.
    pub const TICK: &'static str = "`";
}
