use crate::markdown::inline::{Inline, parse_inline};

/// Top-level structural unit of a rendered post body.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading {
        level: u8,
        content: Vec<Inline>,
    },
    CodeBlock {
        language: Option<String>,
        lines: Vec<String>,
    },
    OrderedList {
        items: Vec<Vec<Inline>>,
    },
    UnorderedList {
        items: Vec<Vec<Inline>>,
    },
    Paragraph {
        content: Vec<Inline>,
    },
}

impl Block {
    pub fn paragraph(text: &str) -> Self {
        Self::Paragraph {
            content: parse_inline(text),
        }
    }
}

const FENCE: &str = "```";

#[derive(Debug, PartialEq, Eq)]
enum LineKind<'a> {
    Blank,
    Heading(u8, &'a str),
    Fence(Option<&'a str>),
    Ordered(&'a str),
    Unordered(&'a str),
    Paragraph(&'a str),
}

/// Classify one line; the first matching rule wins.
fn classify(line: &str) -> LineKind<'_> {
    if line.trim().is_empty() {
        return LineKind::Blank;
    }
    if let Some(rest) = line.strip_prefix("## ") {
        return LineKind::Heading(2, rest.trim_end());
    }
    if let Some(rest) = line.strip_prefix("### ") {
        return LineKind::Heading(3, rest.trim_end());
    }
    if let Some(rest) = line.trim_start().strip_prefix(FENCE) {
        let lang = rest.trim();
        return LineKind::Fence((!lang.is_empty()).then_some(lang));
    }
    if let Some(rest) = strip_ordered_marker(line) {
        return LineKind::Ordered(rest);
    }
    if let Some(rest) = line.strip_prefix("- ") {
        return LineKind::Unordered(rest);
    }
    LineKind::Paragraph(line)
}

/// Strip a leading `N.` plus one whitespace character, as in `^\d+\.\s`.
fn strip_ordered_marker(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = line[digits..].strip_prefix('.')?;
    let ws = rest.chars().next().filter(|c| c.is_whitespace())?;
    Some(&rest[ws.len_utf8()..])
}

fn is_closing_fence(line: &str) -> bool {
    line.trim_start().starts_with(FENCE)
}

/// Convert the markdown subset into blocks in document order.
///
/// Never fails: anything unrecognized becomes a single-line paragraph. An unterminated code
/// fence runs to the end of the input.
pub fn parse_blocks(input: &str) -> Vec<Block> {
    let lines: Vec<&str> = input
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect();

    let mut blocks = Vec::new();
    let mut i = 0usize;
    while i < lines.len() {
        match classify(lines[i]) {
            LineKind::Blank => i += 1,
            LineKind::Heading(level, text) => {
                blocks.push(Block::Heading {
                    level,
                    content: parse_inline(text),
                });
                i += 1;
            }
            LineKind::Fence(language) => {
                let body_start = i + 1;
                let body_end = lines[body_start..]
                    .iter()
                    .position(|l| is_closing_fence(l))
                    .map(|p| body_start + p);
                let end = body_end.unwrap_or(lines.len());
                blocks.push(Block::CodeBlock {
                    language: language.map(str::to_string),
                    lines: lines[body_start..end]
                        .iter()
                        .map(|l| (*l).to_string())
                        .collect(),
                });
                // Skip the closing fence when there is one.
                i = body_end.map_or(end, |e| e + 1);
            }
            LineKind::Ordered(_) => {
                let (items, next) = gather(&lines, i, |l| match classify(l) {
                    LineKind::Ordered(text) => Some(text),
                    _ => None,
                });
                blocks.push(Block::OrderedList { items });
                i = next;
            }
            LineKind::Unordered(_) => {
                let (items, next) = gather(&lines, i, |l| match classify(l) {
                    LineKind::Unordered(text) => Some(text),
                    _ => None,
                });
                blocks.push(Block::UnorderedList { items });
                i = next;
            }
            LineKind::Paragraph(text) => {
                blocks.push(Block::paragraph(text));
                i += 1;
            }
        }
    }
    blocks
}

/// Consume consecutive list lines starting at `start`.
fn gather<'a>(
    lines: &[&'a str],
    start: usize,
    item_text: impl Fn(&'a str) -> Option<&'a str>,
) -> (Vec<Vec<Inline>>, usize) {
    let mut items = Vec::new();
    let mut i = start;
    while let Some(text) = lines.get(i).copied().and_then(&item_text) {
        items.push(parse_inline(text));
        i += 1;
    }
    (items, i)
}

#[cfg(test)]
#[path = "../../tests/unit/markdown/block.rs"]
mod tests;
