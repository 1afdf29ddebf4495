use super::{
    indent::indent_width,
    kinds::{BlockQuote, CodeFence, Heading, ListMarker},
    types::ListKind,
};

/// Line markers that start a block of their own kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Heading,
    Quote,
    List(ListKind),
}

fn line_kind(line: &str) -> Option<LineKind> {
    if Heading::starts_line(line) {
        Some(LineKind::Heading)
    } else if BlockQuote::is_quoted(line) {
        Some(LineKind::Quote)
    } else {
        ListMarker::parse(line.trim_start()).map(|(m, _)| LineKind::List(m.kind()))
    }
}

/// Splits a document into raw blocks one line at a time.
///
/// - Blank lines end a block, except inside a fence
/// - A fence line ends the open block and starts a fenced one
/// - A line whose marker kind differs from the block's first line starts a
///   new block, unless it is indented deeper or the previous line ends with `\`
#[derive(Debug, Default)]
pub struct Segmenter {
    current: Vec<String>,
    in_fence: bool,
    out: Vec<String>,
}

impl Segmenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: &str) {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if CodeFence::is_fence_line(line) {
            self.push_fence_line(line);
            return;
        }

        if self.in_fence {
            self.current.push(line.to_string());
            return;
        }

        if line.trim().is_empty() {
            self.flush();
            return;
        }

        if self.starts_new_block(line) {
            self.flush();
        }
        self.current.push(line.to_string());
    }

    pub fn finish(mut self) -> Vec<String> {
        // EOF flush, also for an unterminated fence
        self.flush();
        self.out
    }

    fn push_fence_line(&mut self, line: &str) {
        if self.in_fence {
            self.current.push(line.to_string());
            self.flush();
            self.in_fence = false;
            return;
        }

        self.flush();
        self.current.push(line.to_string());
        if CodeFence::is_single_line(line) {
            self.flush();
        } else {
            self.in_fence = true;
        }
    }

    fn starts_new_block(&self, line: &str) -> bool {
        let (Some(first), Some(prev)) = (self.current.first(), self.current.last()) else {
            return false;
        };
        if prev.ends_with('\\') {
            return false;
        }
        let Some(kind) = line_kind(line) else {
            return false;
        };
        let first_kind = line_kind(first);
        if kind == LineKind::Heading && first_kind == Some(LineKind::Heading) {
            return true;
        }
        if indent_width(line) > indent_width(first) {
            return false;
        }
        first_kind != Some(kind)
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.out.push(self.current.join("\n"));
            self.current.clear();
        }
    }
}

/// Splits a document into raw blocks.
///
/// Whitespace-only documents have no blocks.
pub fn segment(doc: &str) -> Vec<String> {
    let mut segmenter = Segmenter::new();
    for line in doc.split('\n') {
        segmenter.push(line);
    }
    let blocks = segmenter.finish();
    log::debug!("segmented document into {} blocks", blocks.len());
    blocks
}
