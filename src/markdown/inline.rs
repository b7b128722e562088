/// Span-level node inside a heading, paragraph or list item.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Inline {
    Plain(String),
    Bold(String),
    Code(String),
    Link { text: String, url: String },
}

impl Inline {
    /// Text a reader sees once markup is consumed.
    pub fn visible_text(&self) -> &str {
        match self {
            Self::Plain(s) | Self::Bold(s) | Self::Code(s) => s,
            Self::Link { text, .. } => text,
        }
    }
}

/// Concatenated visible text of a run of inline nodes.
pub fn visible_text(nodes: &[Inline]) -> String {
    nodes.iter().map(Inline::visible_text).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TokenKind {
    Star,
    Backtick,
    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,
    Text,
}

#[derive(Clone, Copy, Debug)]
struct Token<'a> {
    kind: TokenKind,
    text: &'a str,
}

/// Split a line into single-character markup tokens and maximal text runs.
fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut text_start = 0usize;
    for (idx, ch) in line.char_indices() {
        let kind = match ch {
            '*' => TokenKind::Star,
            '`' => TokenKind::Backtick,
            '[' => TokenKind::OpenBracket,
            ']' => TokenKind::CloseBracket,
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            _ => continue,
        };
        if text_start < idx {
            tokens.push(Token {
                kind: TokenKind::Text,
                text: &line[text_start..idx],
            });
        }
        tokens.push(Token {
            kind,
            text: &line[idx..idx + 1],
        });
        text_start = idx + 1;
    }
    if text_start < line.len() {
        tokens.push(Token {
            kind: TokenKind::Text,
            text: &line[text_start..],
        });
    }
    tokens
}

/// Parse one logical line into inline nodes.
///
/// Recognizes `**bold**`, `` `code` `` and `[label](url)` left to right without overlap.
/// Anything that does not close is kept as literal text, and adjacent literal text is merged
/// into a single [`Inline::Plain`].
pub fn parse_inline(line: &str) -> Vec<Inline> {
    let tokens = tokenize(line);
    let mut out = InlineSink::default();
    let mut i = 0usize;
    while i < tokens.len() {
        let matched = match tokens[i].kind {
            TokenKind::Star => match_bold(&tokens, i),
            TokenKind::Backtick => match_code(&tokens, i),
            TokenKind::OpenBracket => match_link(&tokens, i),
            _ => None,
        };
        match matched {
            Some((node, next)) => {
                out.push_node(node);
                i = next;
            }
            None => {
                out.push_text(tokens[i].text);
                i += 1;
            }
        }
    }
    out.finish()
}

/// Index of the first token of `kind` at or after `from`.
fn find(tokens: &[Token<'_>], from: usize, kind: TokenKind) -> Option<usize> {
    tokens
        .iter()
        .skip(from)
        .position(|t| t.kind == kind)
        .map(|p| p + from)
}

fn concat(tokens: &[Token<'_>]) -> String {
    tokens.iter().map(|t| t.text).collect()
}

fn match_bold(tokens: &[Token<'_>], i: usize) -> Option<(Inline, usize)> {
    if tokens.get(i + 1)?.kind != TokenKind::Star {
        return None;
    }
    let start = i + 2;
    let close = find(tokens, start, TokenKind::Star)?;
    // Content may not contain a star, so the first star must open the closing pair.
    if close == start || tokens.get(close + 1)?.kind != TokenKind::Star {
        return None;
    }
    Some((Inline::Bold(concat(&tokens[start..close])), close + 2))
}

fn match_code(tokens: &[Token<'_>], i: usize) -> Option<(Inline, usize)> {
    let start = i + 1;
    let close = find(tokens, start, TokenKind::Backtick)?;
    if close == start {
        return None;
    }
    Some((Inline::Code(concat(&tokens[start..close])), close + 1))
}

fn match_link(tokens: &[Token<'_>], i: usize) -> Option<(Inline, usize)> {
    let label_start = i + 1;
    let label_end = find(tokens, label_start, TokenKind::CloseBracket)?;
    if label_end == label_start {
        return None;
    }
    if tokens.get(label_end + 1)?.kind != TokenKind::OpenParen {
        return None;
    }
    let url_start = label_end + 2;
    let url_end = find(tokens, url_start, TokenKind::CloseParen)?;
    if url_end == url_start {
        return None;
    }
    let node = Inline::Link {
        text: concat(&tokens[label_start..label_end]),
        url: concat(&tokens[url_start..url_end]),
    };
    Some((node, url_end + 1))
}

#[derive(Default)]
struct InlineSink {
    nodes: Vec<Inline>,
    pending: String,
}

impl InlineSink {
    fn push_text(&mut self, text: &str) {
        self.pending.push_str(text);
    }

    fn push_node(&mut self, node: Inline) {
        self.flush();
        self.nodes.push(node);
    }

    fn flush(&mut self) {
        if !self.pending.is_empty() {
            self.nodes
                .push(Inline::Plain(std::mem::take(&mut self.pending)));
        }
    }

    fn finish(mut self) -> Vec<Inline> {
        self.flush();
        self.nodes
    }
}

#[cfg(test)]
#[path = "../../tests/unit/markdown/inline.rs"]
mod tests;
