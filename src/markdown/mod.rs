//! Markdown-subset renderer for blog post bodies.
//!
//! Supported: `##`/`###` headings, fenced code blocks, `N.` and `-` lists, and inline
//! `**bold**`, `` `code` `` and `[label](url)`. Everything else is a plain paragraph.

pub(crate) mod block;
pub(crate) mod inline;
pub(crate) mod serialize;

use block::{Block, parse_blocks};

/// Render a post body into blocks.
///
/// Empty input gives an empty sequence; use [`render_markdown_or`] when the page must never
/// be blank.
#[tracing::instrument(level = "debug", skip(input), fields(bytes = input.len()))]
pub fn render_markdown(input: &str) -> Vec<Block> {
    let blocks = parse_blocks(input);
    tracing::debug!(blocks = blocks.len(), "rendered markdown");
    blocks
}

/// Render a possibly absent body, substituting `fallback` when nothing would be shown.
pub fn render_markdown_or(input: Option<&str>, fallback: &[Block]) -> Vec<Block> {
    let blocks = match input {
        Some(s) if !s.is_empty() => render_markdown(s),
        _ => Vec::new(),
    };
    if blocks.is_empty() {
        return fallback.to_vec();
    }
    blocks
}

/// Placeholder shown for posts that have no body yet.
pub fn default_fallback() -> Vec<Block> {
    vec![
        Block::paragraph(
            "This is a placeholder for the full blog post content. In a production setup, \
             you would store the full content in markdown files or a database.",
        ),
        Block::paragraph(
            "For now, Roshan is focusing on building amazing AI systems and autonomous \
             agents. Check back soon for the full article!",
        ),
    ]
}

/// [`render_markdown_or`] with [`default_fallback`].
pub fn render_post_body(input: Option<&str>) -> Vec<Block> {
    render_markdown_or(input, &default_fallback())
}

#[cfg(test)]
#[path = "../../tests/unit/markdown/mod.rs"]
mod tests;
