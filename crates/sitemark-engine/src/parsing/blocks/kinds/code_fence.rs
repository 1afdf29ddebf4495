/// Fenced code block type with owned delimiter constant.
///
/// Fences are raw zones: blank lines inside them do not end the block and
/// their body is never span-parsed.
pub struct CodeFence;

/// The pieces of a fenced code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedCode<'a> {
    /// First word after the opening fence, e.g. `rust` in ```` ```rust ````.
    pub info: Option<&'a str>,
    /// Lines between the fences, verbatim.
    pub body: String,
}

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// Whether a line opens or closes a fence.
    pub fn is_fence_line(line: &str) -> bool {
        line.trim().starts_with(Self::FENCE)
    }

    /// A fence line that also closes itself, such as ```` ```code``` ````.
    pub fn is_single_line(line: &str) -> bool {
        let t = line.trim();
        t.len() >= 2 * Self::FENCE.len()
            && t.starts_with(Self::FENCE)
            && t[Self::FENCE.len()..].ends_with(Self::FENCE)
    }

    /// Whether a whole block is opened and closed by fences.
    pub fn is_closed_block(block: &str) -> bool {
        let t = block.trim();
        t.starts_with(Self::FENCE) && t[Self::FENCE.len()..].ends_with(Self::FENCE)
    }

    /// Info string of an opening fence line.
    pub fn info_string(opening: &str) -> Option<&str> {
        let rest = opening.trim().strip_prefix(Self::FENCE)?.trim();
        if rest.contains('`') {
            return None;
        }
        rest.split_whitespace().next()
    }

    /// Splits a closed fenced block into its info string and body.
    ///
    /// A trailing whitespace-only line before the closing fence is dropped.
    pub fn parts(block: &str) -> FencedCode<'_> {
        let t = block.trim();
        if !t.contains('\n') {
            let inner = t
                .strip_prefix(Self::FENCE)
                .and_then(|s| s.strip_suffix(Self::FENCE))
                .unwrap_or_default();
            return FencedCode {
                info: None,
                body: inner.to_string(),
            };
        }

        let mut lines: Vec<&str> = t.lines().collect();
        let opening = lines.remove(0);
        if lines.last().is_some_and(|l| Self::is_fence_line(l)) {
            lines.pop();
        }
        if lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        FencedCode {
            info: Self::info_string(opening),
            body: lines.join("\n"),
        }
    }
}
