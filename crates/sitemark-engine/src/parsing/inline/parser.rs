use std::ops::Range;

use crate::error::{Error, MAX_NESTING_DEPTH, Result};

use super::{
    cursor::{Cursor, is_escaped_at},
    kinds::{Delimiter, Image, Link},
    types::{Span, SpanKind},
};

/// Characters a backslash may escape in plain text.
const ESCAPABLE: &str = "\\`*_{}[]()#+-.!>";

/// A span produced by one extraction pass whose contents are not parsed yet.
#[derive(Debug)]
enum Pending {
    Plain(String),
    Delimited { kind: SpanKind, inner: String },
    Link { text: String, url: String },
    Image { alt: String, url: String },
}

/// Parses inline text into a sequence of [`Span`]s.
///
/// # Extraction Order
/// Code spans first (raw zone), then bold (`**`, `__`), italic (`*`, `_`),
/// links and finally images. Each pass only splits text still marked plain.
///
/// # Errors
/// - [`Error::UnmatchedDelimiter`] when a marker opens but never closes. A
///   marker immediately followed by its closer (`****`) is literal text.
/// - [`Error::NestingTooDeep`] when bold/italic nesting passes the depth cap.
pub fn parse_spans(text: &str) -> Result<Vec<Span>> {
    parse_nested(text, 0, None)
}

/// Parses `text` found `depth` levels inside formatting of kind `enclosing`.
///
/// The enclosing kind is not extracted again, so bold never nests in bold.
pub(crate) fn parse_nested(
    text: &str,
    depth: usize,
    enclosing: Option<SpanKind>,
) -> Result<Vec<Span>> {
    if depth > MAX_NESTING_DEPTH {
        return Err(Error::NestingTooDeep {
            limit: MAX_NESTING_DEPTH,
        });
    }

    let mut pending = vec![Pending::Plain(text.to_string())];
    for delim in Delimiter::ORDER {
        if Some(delim.kind) == enclosing {
            continue;
        }
        pending = split_plain(pending, |s| split_delimiter(s, delim))?;
    }
    pending = split_plain(pending, |s| Ok(split_links(s)))?;
    pending = split_plain(pending, |s| Ok(split_images(s)))?;

    let mut spans = pending
        .into_iter()
        .map(|p| resolve(p, depth))
        .collect::<Result<Vec<_>>>()?;
    spans.retain(|s| !matches!(s, Span::Plain(t) if t.is_empty()));
    if spans.is_empty() {
        spans.push(Span::Plain(String::new()));
    }
    Ok(spans)
}

/// Applies `split` to every plain span, passing other spans through untouched.
fn split_plain(
    pending: Vec<Pending>,
    mut split: impl FnMut(&str) -> Result<Vec<Pending>>,
) -> Result<Vec<Pending>> {
    let mut out = Vec::with_capacity(pending.len());
    for p in pending {
        match p {
            Pending::Plain(s) => out.extend(split(&s)?),
            other => out.push(other),
        }
    }
    Ok(out)
}

/// Splits `text` on every pair of `delim`, left to right.
fn split_delimiter(text: &str, delim: Delimiter) -> Result<Vec<Pending>> {
    let protected = link_ranges(text);
    let marker = delim.marker;
    let mut out = vec![];
    let mut cur = Cursor::new(text, 0);
    let mut plain_start = 0;

    while let Some(open) = seek_marker(&mut cur, marker, true, &protected) {
        let inner_start = open + marker.len();
        cur.bump_n(marker.len());
        // Marker characters left over from the opening run, one in `***x***`.
        let surplus = match delim.kind {
            SpanKind::Code => 0,
            _ => cur.clone().skip_run(delim.run_byte()),
        };
        let Some(mut close) =
            seek_marker(&mut cur, marker, delim.closer_honours_escapes(), &protected)
        else {
            return Err(Error::UnmatchedDelimiter {
                delimiter: marker,
                text: text.to_string(),
            });
        };

        if close == inner_start {
            // Empty pair such as `****`: keep it as literal text.
            cur.bump_n(marker.len());
            continue;
        }

        if surplus > 0 {
            // The closer absorbs at most the opener's surplus, so `***x***`
            // closes on the last two stars while `**x***y*` closes on the first.
            cur.bump_n(marker.len());
            close += cur.skip_run(delim.run_byte()).min(surplus);
        }

        push_plain(&mut out, &text[plain_start..open]);
        out.push(Pending::Delimited {
            kind: delim.kind,
            inner: text[inner_start..close].to_string(),
        });
        plain_start = close + marker.len();
        cur.i = plain_start;
    }

    push_plain(&mut out, &text[plain_start..]);
    Ok(out)
}

/// Seeks the next `marker`, jumping over link and image syntax.
fn seek_marker(
    cur: &mut Cursor<'_>,
    marker: &str,
    skip_escaped: bool,
    protected: &[Range<usize>],
) -> Option<usize> {
    loop {
        let at = cur.seek(marker, skip_escaped)?;
        match protected.iter().find(|r| r.contains(&at)) {
            Some(r) => cur.i = r.end,
            None => return Some(at),
        }
    }
}

/// Byte ranges of unescaped link and image syntax in `text`.
///
/// Emphasis markers inside these ranges (typically underscores in URLs) are
/// not delimiters.
fn link_ranges(text: &str) -> Vec<Range<usize>> {
    Link::pattern()
        .find_iter(text)
        .filter(|m| !is_escaped_at(text, m.start()))
        .map(|m| m.range())
        .collect()
}

fn split_links(text: &str) -> Vec<Pending> {
    let bytes = text.as_bytes();
    let mut out = vec![];
    let mut last = 0;
    for caps in Link::pattern().captures_iter(text) {
        let (Some(m), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        let start = m.start();
        let is_image =
            start > 0 && bytes[start - 1] == Image::BANG && !is_escaped_at(text, start - 1);
        if is_image || is_escaped_at(text, start) {
            continue;
        }
        push_plain(&mut out, &text[last..start]);
        out.push(Pending::Link {
            text: label.as_str().to_string(),
            url: url.as_str().to_string(),
        });
        last = m.end();
    }
    push_plain(&mut out, &text[last..]);
    out
}

fn split_images(text: &str) -> Vec<Pending> {
    let mut out = vec![];
    let mut last = 0;
    for caps in Image::pattern().captures_iter(text) {
        let (Some(m), Some(alt), Some(url)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        if is_escaped_at(text, m.start()) {
            continue;
        }
        push_plain(&mut out, &text[last..m.start()]);
        out.push(Pending::Image {
            alt: alt.as_str().to_string(),
            url: url.as_str().to_string(),
        });
        last = m.end();
    }
    push_plain(&mut out, &text[last..]);
    out
}

fn push_plain(out: &mut Vec<Pending>, s: &str) {
    if !s.is_empty() {
        out.push(Pending::Plain(s.to_string()));
    }
}

fn resolve(p: Pending, depth: usize) -> Result<Span> {
    let span = match p {
        Pending::Plain(s) => Span::Plain(unescape(&s)),
        Pending::Delimited { kind, inner } => match kind {
            SpanKind::Code => Span::Code(inner),
            SpanKind::Bold => Span::Bold(parse_nested(&inner, depth + 1, Some(SpanKind::Bold))?),
            SpanKind::Italic => {
                Span::Italic(parse_nested(&inner, depth + 1, Some(SpanKind::Italic))?)
            }
            SpanKind::Plain | SpanKind::Link | SpanKind::Image => Span::Plain(unescape(&inner)),
        },
        Pending::Link { text, url } => Span::Link {
            text: unescape(&text),
            url,
        },
        Pending::Image { alt, url } => Span::Image {
            alt: unescape(&alt),
            url,
        },
    };
    Ok(span)
}

/// Drops the backslash from escaped markdown punctuation.
pub fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\'
            && let Some(&next) = chars.peek()
            && ESCAPABLE.contains(next)
        {
            out.push(next);
            chars.next();
            continue;
        }
        out.push(c);
    }
    out
}
