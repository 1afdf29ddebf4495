use super::{
    indent::indent_width,
    kinds::{BlockQuote, CodeFence, Heading, ListMarker, Marker},
    types::BlockKind,
};

/// Classifies one raw block.
///
/// Rules in priority order: quote, fenced code, heading, unordered list,
/// ordered list, paragraph. Malformed list and quote syntax is a paragraph,
/// never an error.
pub fn classify(block: &str) -> BlockKind {
    if block.trim().is_empty() {
        return BlockKind::Paragraph;
    }
    let lines: Vec<&str> = block.lines().collect();

    if lines.iter().all(|l| BlockQuote::is_quoted(l)) {
        return BlockKind::Quote;
    }
    if CodeFence::is_closed_block(block) {
        return BlockKind::Code;
    }
    if Heading::level(lines[0]).is_some() {
        return BlockKind::Heading;
    }
    list_kind(&lines).unwrap_or(BlockKind::Paragraph)
}

/// List rules apply to the lines at the block's baseline indentation.
/// Deeper lines only need some list marker, so a nested list may be of
/// either kind.
fn list_kind(lines: &[&str]) -> Option<BlockKind> {
    if lines.iter().any(|l| l.trim().is_empty()) {
        return None;
    }
    let baseline = lines.iter().map(|l| indent_width(l)).min()?;
    let top = lines.iter().find(|l| indent_width(l) == baseline)?;
    let (first, _) = ListMarker::parse(top.trim_start())?;

    let mut expected = 1;
    for line in lines {
        let (marker, content) = ListMarker::parse(line.trim_start())?;
        if indent_width(line) > baseline {
            continue;
        }
        match (first, marker) {
            (Marker::Bullet(a), Marker::Bullet(b)) if a == b => {}
            (Marker::Number(_), Marker::Number(n)) if n == expected && !content.starts_with(' ') => {
                expected += 1;
            }
            _ => return None,
        }
    }

    Some(match first {
        Marker::Bullet(_) => BlockKind::UnorderedList,
        Marker::Number(_) => BlockKind::OrderedList,
    })
}
