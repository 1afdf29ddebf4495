use crate::error::{Error, MAX_NESTING_DEPTH, Result};
use crate::nodes::{ContainerNode, Node};
use crate::parsing::blocks::{
    ListKind,
    indent::{INDENT_STEP, indent_width},
    kinds::ListMarker,
};
use crate::parsing::inline::{parse_spans, spans_to_nodes};

/// One list item with the items nested under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Nesting level relative to the block's least indented line.
    pub indent_level: usize,
    /// Inline text after the marker.
    pub content: String,
    pub kind: ListKind,
    pub children: Vec<ListItem>,
}

impl ListItem {
    pub fn new(indent_level: usize, content: impl Into<String>, kind: ListKind) -> Self {
        Self {
            indent_level,
            content: content.into(),
            kind,
            children: vec![],
        }
    }
}

/// Reads a list block into a flat sequence of items.
///
/// A line without a marker continues the previous item's content. If the
/// block starts with such a line it becomes a top-level item of `kind`.
///
/// Blocks from [`crate::classify`] always carry a marker on every line, so
/// both cases only arise when this is called on hand-built list text.
pub fn parse_list_items(block: &str, kind: ListKind) -> Vec<ListItem> {
    let lines: Vec<&str> = block.lines().filter(|l| !l.trim().is_empty()).collect();
    let baseline = lines.iter().map(|l| indent_width(l)).min().unwrap_or(0);

    let mut items: Vec<ListItem> = vec![];
    for line in lines {
        let level = (indent_width(line) - baseline) / INDENT_STEP;
        match ListMarker::parse(line.trim_start()) {
            Some((marker, content)) => {
                items.push(ListItem::new(level, content.trim(), marker.kind()));
            }
            None => match items.last_mut() {
                Some(prev) => {
                    if !prev.content.is_empty() {
                        prev.content.push(' ');
                    }
                    prev.content.push_str(line.trim());
                }
                None => items.push(ListItem::new(0, line.trim(), kind)),
            },
        }
    }
    log::trace!("parsed {} list items", items.len());
    items
}

/// Nests a flat item sequence by indentation level.
///
/// Keeps a stack of open items; a new item closes every open item at its
/// level or deeper and becomes a child of the item left on top.
///
/// # Errors
/// [`Error::NestingTooDeep`] when an item sits more than
/// [`MAX_NESTING_DEPTH`] levels below a top-level item.
pub fn nest_list_items(items: Vec<ListItem>) -> Result<Vec<ListItem>> {
    let mut roots = vec![];
    let mut stack: Vec<ListItem> = vec![];

    for item in items {
        while stack
            .last()
            .is_some_and(|top| top.indent_level >= item.indent_level)
        {
            close_top(&mut stack, &mut roots);
        }
        if stack.len() > MAX_NESTING_DEPTH {
            return Err(Error::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            });
        }
        log::trace!(
            "list item {:?} at level {} under {} open items",
            item.content,
            item.indent_level,
            stack.len()
        );
        stack.push(item);
    }
    while !stack.is_empty() {
        close_top(&mut stack, &mut roots);
    }
    Ok(roots)
}

fn close_top(stack: &mut Vec<ListItem>, roots: &mut Vec<ListItem>) {
    let Some(item) = stack.pop() else {
        return;
    };
    match stack.last_mut() {
        Some(parent) => parent.children.push(item),
        None => roots.push(item),
    }
}

/// Builds the `ul`/`ol` container for a list block.
pub fn build_list_node(block: &str, kind: ListKind) -> Result<ContainerNode> {
    let items = nest_list_items(parse_list_items(block, kind))?;
    list_container(kind, &items)
}

fn list_container(kind: ListKind, items: &[ListItem]) -> Result<ContainerNode> {
    let children = items.iter().map(item_node).collect::<Result<Vec<_>>>()?;
    ContainerNode::with_placeholder(kind.tag(), children)
}

/// An `li` holding the item's spans, then one nested list per run of
/// children of the same kind.
fn item_node(item: &ListItem) -> Result<Node> {
    let mut children = spans_to_nodes(&parse_spans(&item.content)?)?;
    for run in item.children.chunk_by(|a, b| a.kind == b.kind) {
        children.push(list_container(run[0].kind, run)?.into());
    }
    Ok(ContainerNode::with_placeholder("li", children)?.into())
}
