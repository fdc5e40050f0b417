//! Blockquote rendering.
//!
//! Only paragraph children of a blockquote are rendered; any other child
//! kind (nested lists, code, ...) is dropped. Multi-line section output
//! gets a `"> "` prefix on every line; single-line sections and
//! non-section blocks (images, rich-text paragraphs) pass through
//! unchanged.

use slackdown_blocks::Block;
use slackdown_config::ParseOptions;
use slackdown_core::Token;

use crate::inline;

/// Render a blockquote's children to blocks.
pub fn render_blockquote(tokens: &[Token], options: &ParseOptions) -> Vec<Block> {
    let mut blocks = Vec::new();
    for token in tokens {
        if let Token::Paragraph { tokens } = token {
            for block in inline::render_phrasing(tokens, options.use_rich_text) {
                blocks.push(quote_block(block));
            }
        }
    }
    blocks
}

fn quote_block(block: Block) -> Block {
    match block {
        Block::Section { mut text, expand } if text.text.contains('\n') => {
            text.text = format!("> {}", text.text.replace('\n', "\n> "));
            Block::Section { text, expand }
        }
        other => other,
    }
}
