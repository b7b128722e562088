use std::fmt::Write as _;

use crate::markdown::{block::Block, inline::Inline};

/// Write inline nodes back in the markup they were parsed from.
pub fn inline_to_markdown(nodes: &[Inline]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            Inline::Plain(s) => out.push_str(s),
            Inline::Bold(s) => {
                let _ = write!(out, "**{s}**");
            }
            Inline::Code(s) => {
                let _ = write!(out, "`{s}`");
            }
            Inline::Link { text, url } => {
                let _ = write!(out, "[{text}]({url})");
            }
        }
    }
    out
}

/// Re-serialize blocks, separated by blank lines.
///
/// Parsing the output yields the same block sequence for any sequence produced by the parser.
pub fn blocks_to_markdown(blocks: &[Block]) -> String {
    let mut parts = Vec::with_capacity(blocks.len());
    for block in blocks {
        let mut s = String::new();
        match block {
            Block::Heading { level, content } => {
                s.push_str(&"#".repeat(usize::from(*level)));
                s.push(' ');
                s.push_str(&inline_to_markdown(content));
            }
            Block::CodeBlock { language, lines } => {
                s.push_str("```");
                if let Some(lang) = language {
                    s.push_str(lang);
                }
                s.push('\n');
                for line in lines {
                    s.push_str(line);
                    s.push('\n');
                }
                s.push_str("```");
            }
            Block::OrderedList { items } => {
                let lines: Vec<String> = items
                    .iter()
                    .enumerate()
                    .map(|(n, item)| format!("{}. {}", n + 1, inline_to_markdown(item)))
                    .collect();
                s.push_str(&lines.join("\n"));
            }
            Block::UnorderedList { items } => {
                let lines: Vec<String> = items
                    .iter()
                    .map(|item| format!("- {}", inline_to_markdown(item)))
                    .collect();
                s.push_str(&lines.join("\n"));
            }
            Block::Paragraph { content } => s.push_str(&inline_to_markdown(content)),
        }
        parts.push(s);
    }
    parts.join("\n\n")
}

#[cfg(test)]
#[path = "../../tests/unit/markdown/serialize.rs"]
mod tests;
