use super::*;
use crate::markdown::block::parse_blocks;

const POST: &str = "## Lesson 2: Reward Engineering\n\
Getting the reward function right took **more** time than the model.\n\
\n\
```python\n\
def compute_reward(r, v):\n\
    return r / (v + 1e-8)\n\
```\n\
\n\
- **Action distributions** per user segment\n\
- `ttl` settings, see [docs](https://example.com/a)\n\
1. first\n\
2. second\n\
### Wrap-up\n\
Unclosed ** star and a [bracket.";

#[test]
fn reparsing_serialized_blocks_is_stable() {
    let blocks = parse_blocks(POST);
    let again = parse_blocks(&blocks_to_markdown(&blocks));
    assert_eq!(blocks, again);
}

#[test]
fn inline_markup_is_restored() {
    let nodes = vec![
        Inline::Plain("a ".to_string()),
        Inline::Bold("b".to_string()),
        Inline::Code("c".to_string()),
        Inline::Link {
            text: "d".to_string(),
            url: "e".to_string(),
        },
    ];
    assert_eq!(inline_to_markdown(&nodes), "a **b**`c`[d](e)");
}

#[test]
fn unterminated_fence_gains_a_closing_fence() {
    let blocks = parse_blocks("```\nx");
    assert_eq!(blocks_to_markdown(&blocks), "```\nx\n```");
}

#[test]
fn ordered_lists_are_renumbered() {
    let blocks = parse_blocks("7. a\n9. b");
    assert_eq!(blocks_to_markdown(&blocks), "1. a\n2. b");
}
