use crate::error::{Error, MAX_NESTING_DEPTH, Result};
use crate::nodes::{ContainerNode, Node};
use crate::parsing::blocks::kinds::BlockQuote;
use crate::parsing::inline::{parse_spans, spans_to_nodes};

/// Builds the `blockquote` container for a quote block.
///
/// One `>` level is stripped from every line. Runs of lines still quoted
/// after that form a nested `blockquote`, placed where the run ends. Other
/// lines are joined with spaces and span-parsed.
pub fn build_quote_node(block: &str) -> Result<ContainerNode> {
    let lines: Vec<&str> = block.lines().collect();
    quote_node(&lines, 0)
}

fn quote_node(lines: &[&str], depth: usize) -> Result<ContainerNode> {
    if depth > MAX_NESTING_DEPTH {
        return Err(Error::NestingTooDeep {
            limit: MAX_NESTING_DEPTH,
        });
    }

    let mut children = vec![];
    let mut text: Vec<&str> = vec![];
    let mut nested: Vec<&str> = vec![];

    for &line in lines {
        let line = BlockQuote::strip_one(line).unwrap_or(line);
        if BlockQuote::is_quoted(line) {
            flush_text(&mut children, &mut text)?;
            nested.push(line);
        } else {
            flush_nested(&mut children, &mut nested, depth)?;
            text.push(line);
        }
    }
    flush_text(&mut children, &mut text)?;
    flush_nested(&mut children, &mut nested, depth)?;

    log::trace!("quote at depth {depth} has {} children", children.len());
    ContainerNode::with_placeholder("blockquote", children)
}

fn flush_text(children: &mut Vec<Node>, lines: &mut Vec<&str>) -> Result<()> {
    let joined = lines
        .drain(..)
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if !joined.is_empty() {
        children.extend(spans_to_nodes(&parse_spans(&joined)?)?);
    }
    Ok(())
}

fn flush_nested(children: &mut Vec<Node>, lines: &mut Vec<&str>, depth: usize) -> Result<()> {
    if !lines.is_empty() {
        children.push(quote_node(lines, depth + 1)?.into());
        lines.clear();
    }
    Ok(())
}
