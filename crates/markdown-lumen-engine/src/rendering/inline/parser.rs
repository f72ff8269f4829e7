use crate::rendering::span::Span;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link, Strong},
    types::InlineNode,
};

const NEWLINE: u8 = b'\n';

/// Rewrites `**text**` as `<strong>text</strong>`.
pub fn strong(s: &str) -> String {
    rewrite(s, try_parse_strong)
}

/// Rewrites `*text*` as `<em>text</em>`.
pub fn emphasis(s: &str) -> String {
    rewrite(s, try_parse_emphasis)
}

/// Rewrites `` `text` `` as `<code>text</code>`.
pub fn code_spans(s: &str) -> String {
    rewrite(s, try_parse_code_span)
}

/// Rewrites `[text](url)` as an anchor with `target="_blank"` and
/// `rel="noopener noreferrer"`.
pub fn links(s: &str) -> String {
    rewrite(s, try_parse_link)
}

/// Scans `s` once, replacing every node `try_parse` recognizes with its
/// markup and copying all other text verbatim.
fn rewrite(s: &str, try_parse: fn(&mut Cursor<'_>) -> Option<InlineNode>) -> String {
    let mut cur = Cursor::new(s);
    let mut out = String::with_capacity(s.len());
    let mut text_start = cur.pos();

    while !cur.eof() {
        if let Some(node) = try_parse(&mut cur) {
            let full = node.full();
            out.push_str(&s[text_start..full.start]);
            node.render_into(s, &mut out);
            text_start = full.end;
            continue;
        }
        cur.bump();
    }

    out.push_str(&s[text_start..]);
    out
}

/// Runs `scan`, restoring the cursor if it does not produce a node.
fn attempt(
    cur: &mut Cursor<'_>,
    scan: impl FnOnce(&mut Cursor<'_>) -> Option<InlineNode>,
) -> Option<InlineNode> {
    let saved = cur.clone();
    let node = scan(cur);
    if node.is_none() {
        *cur = saved;
    }
    node
}

fn is_space(b: Option<u8>) -> bool {
    b.is_none_or(|b| b.is_ascii_whitespace())
}

fn try_parse_strong(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(Strong::DELIM) {
        return None;
    }
    let first = cur.peek_at(Strong::DELIM.len());
    if is_space(first) || first == Some(Emphasis::STAR) {
        return None;
    }

    attempt(cur, |cur| {
        let start = cur.pos();
        cur.bump_n(Strong::DELIM.len());
        let inner_start = cur.pos();

        while !cur.eof() {
            if cur.peek() == Some(NEWLINE) {
                return None;
            }
            if cur.starts_with(Strong::DELIM) && !is_space(cur.prev()) {
                let inner_end = cur.pos();
                cur.bump_n(Strong::DELIM.len());
                return Some(InlineNode::Strong {
                    full: Span {
                        start,
                        end: cur.pos(),
                    },
                    inner: Span {
                        start: inner_start,
                        end: inner_end,
                    },
                });
            }
            cur.bump();
        }
        None
    })
}

fn try_parse_emphasis(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(Emphasis::STAR) || cur.prev() == Some(Emphasis::STAR) {
        return None;
    }
    let first = cur.peek_at(1);
    if is_space(first) || first == Some(Emphasis::STAR) {
        return None;
    }

    attempt(cur, |cur| {
        let start = cur.pos();
        cur.bump(); // *
        let inner_start = cur.pos();

        while !cur.eof() {
            match cur.peek() {
                Some(NEWLINE) => return None,
                Some(Emphasis::STAR)
                    if !is_space(cur.prev())
                        && cur.prev() != Some(Emphasis::STAR)
                        && cur.peek_at(1) != Some(Emphasis::STAR) =>
                {
                    let inner_end = cur.pos();
                    cur.bump(); // closing *
                    return Some(InlineNode::Emphasis {
                        full: Span {
                            start,
                            end: cur.pos(),
                        },
                        inner: Span {
                            start: inner_start,
                            end: inner_end,
                        },
                    });
                }
                _ => {
                    cur.bump();
                }
            }
        }
        None
    })
}

fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    // Only a run of exactly one backtick opens a span.
    if cur.peek() != Some(CodeSpan::TICK)
        || cur.prev() == Some(CodeSpan::TICK)
        || cur.peek_at(1) == Some(CodeSpan::TICK)
    {
        return None;
    }

    attempt(cur, |cur| {
        let start = cur.pos();
        cur.bump(); // `
        let inner_start = cur.pos();

        while !cur.eof() {
            match cur.peek() {
                Some(NEWLINE) => return None,
                Some(CodeSpan::TICK) => {
                    if cur.peek_at(1) == Some(CodeSpan::TICK) {
                        return None;
                    }
                    let inner_end = cur.pos();
                    cur.bump(); // closing `
                    return Some(InlineNode::CodeSpan {
                        full: Span {
                            start,
                            end: cur.pos(),
                        },
                        inner: Span {
                            start: inner_start,
                            end: inner_end,
                        },
                    });
                }
                _ => {
                    cur.bump();
                }
            }
        }
        None
    })
}

fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(Link::OPEN) {
        return None;
    }

    attempt(cur, |cur| {
        let start = cur.pos();
        cur.bump(); // [
        let text_start = cur.pos();

        while !cur.eof() && !cur.starts_with(Link::MIDDLE) {
            match cur.peek() {
                Some(NEWLINE) | Some(Link::OPEN) | Some(b']') => return None,
                _ => {
                    cur.bump();
                }
            }
        }
        let text_end = cur.pos();
        if text_end == text_start || !cur.starts_with(Link::MIDDLE) {
            return None;
        }
        cur.bump_n(Link::MIDDLE.len());
        let href_start = cur.pos();

        while !cur.eof() && cur.peek() != Some(Link::CLOSE) {
            if is_space(cur.peek()) {
                return None;
            }
            cur.bump();
        }
        let href_end = cur.pos();
        if href_end == href_start || cur.peek() != Some(Link::CLOSE) {
            return None;
        }
        cur.bump(); // )

        Some(InlineNode::Link {
            full: Span {
                start,
                end: cur.pos(),
            },
            text: Span {
                start: text_start,
                end: text_end,
            },
            href: Span {
                start: href_start,
                end: href_end,
            },
        })
    })
}
