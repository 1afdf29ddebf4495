use crate::parsing::inline::types::SpanKind;

use super::CodeSpan;

/// A paired delimiter and the span kind it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter {
    pub marker: &'static str,
    pub kind: SpanKind,
}

impl Delimiter {
    /// Extraction order. Code spans come first so their contents stay literal;
    /// two-character markers come before their one-character halves.
    pub const ORDER: [Delimiter; 5] = [
        Delimiter {
            marker: CodeSpan::TICK,
            kind: SpanKind::Code,
        },
        Delimiter {
            marker: Emphasis::BOLD_STAR,
            kind: SpanKind::Bold,
        },
        Delimiter {
            marker: Emphasis::BOLD_UNDERSCORE,
            kind: SpanKind::Bold,
        },
        Delimiter {
            marker: Emphasis::ITALIC_STAR,
            kind: SpanKind::Italic,
        },
        Delimiter {
            marker: Emphasis::ITALIC_UNDERSCORE,
            kind: SpanKind::Italic,
        },
    ];

    /// Code content is literal, so a backslash before the closing tick
    /// does not escape it.
    pub fn closer_honours_escapes(self) -> bool {
        self.kind != SpanKind::Code
    }

    /// The marker character, used to extend a closer to the end of a run.
    pub fn run_byte(self) -> u8 {
        self.marker.as_bytes()[0]
    }
}

/// Bold and italic markers.
pub struct Emphasis;

impl Emphasis {
    pub const BOLD_STAR: &'static str = "**";
    pub const BOLD_UNDERSCORE: &'static str = "__";
    pub const ITALIC_STAR: &'static str = "*";
    pub const ITALIC_UNDERSCORE: &'static str = "_";
}
