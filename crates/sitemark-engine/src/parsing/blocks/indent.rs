/// Columns a tab advances.
pub const TAB_WIDTH: usize = 4;

/// Columns of indentation per nesting level.
pub const INDENT_STEP: usize = 4;

/// Width of the leading whitespace of `line`, with tabs counted as
/// [`TAB_WIDTH`] columns.
pub fn indent_width(line: &str) -> usize {
    line.chars()
        .take_while(|c| matches!(c, ' ' | '\t'))
        .map(|c| if c == '\t' { TAB_WIDTH } else { 1 })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_spaces_and_tabs() {
        assert_eq!(indent_width("- a"), 0);
        assert_eq!(indent_width("    - a"), 4);
        assert_eq!(indent_width("\t- a"), 4);
        assert_eq!(indent_width("  \t- a"), 6);
    }
}
