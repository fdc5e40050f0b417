//! Slackdown Render
//!
//! This crate is the conversion engine: it walks an externally tokenized
//! document tree once, in document order, and emits Slack Block Kit
//! blocks.
//!
//! # Overview
//!
//! - [`parse_blocks`] - Convert a token sequence to blocks
//! - [`inline`] - Phrasing content in mrkdwn or rich-text encoding
//! - [`list`] - Ordered/unordered/checkbox lists, flat or flattened
//! - [`table`] - Pipe-table linearization
//! - [`quote`] - Blockquote paragraph prefixing
//! - [`html`] - `<img>` extraction from raw HTML blocks
//!
//! # Example
//!
//! ```
//! use slackdown_config::ParseOptions;
//! use slackdown_core::Token;
//! use slackdown_render::parse_blocks;
//!
//! let tokens = vec![Token::Heading {
//!     level: 1,
//!     tokens: vec![Token::text("Hello")],
//! }];
//! let blocks = parse_blocks(&tokens, &ParseOptions::default()).unwrap();
//! assert_eq!(blocks.len(), 1);
//! ```
//!
//! Renderers are pure functions of the token subtree and the options;
//! nothing is shared across calls, so conversions can run in parallel.

pub mod html;
pub mod inline;
pub mod list;
pub mod quote;
pub mod table;

pub use html::extract_images;
pub use inline::{mrkdwn, plain_text, render_phrasing, rich_text_part};
pub use list::render_list;
pub use quote::render_blockquote;
pub use table::render_table;

use slackdown_blocks::{divider, header, section, Block};
use slackdown_config::ParseOptions;
use slackdown_core::{Result, Token};

/// Convert a token sequence into blocks, in document order.
///
/// The only fallible path is image extraction from raw HTML; everything
/// else converts unconditionally, skipping token kinds it does not map.
pub fn parse_blocks(tokens: &[Token], options: &ParseOptions) -> Result<Vec<Block>> {
    let mut blocks = Vec::new();
    for token in tokens {
        blocks.extend(parse_token(token, options)?);
    }
    Ok(blocks)
}

/// Convert one top-level token into zero or more blocks.
pub fn parse_token(token: &Token, options: &ParseOptions) -> Result<Vec<Block>> {
    let blocks = match token {
        Token::Heading { tokens, .. } => vec![header(&inline::plain_text(tokens))],
        Token::Paragraph { tokens } => inline::render_phrasing(tokens, options.use_rich_text),
        Token::Code { text, .. } => vec![section(&format!("```\n{text}\n```"))],
        Token::Blockquote { tokens } => quote::render_blockquote(tokens, options),
        Token::List(list) => vec![list::render_list(list, options)],
        Token::Table(table) => vec![table::render_table(table)],
        Token::ThematicBreak => vec![divider()],
        Token::Html { raw } => html::extract_images(raw)?,
        // Phrasing tokens at the top level have no block form.
        _ => Vec::new(),
    };
    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> ParseOptions {
        ParseOptions::default()
    }

    #[test]
    fn test_heading_becomes_header() {
        let token = Token::Heading {
            level: 2,
            tokens: vec![
                Token::Strong {
                    tokens: vec![Token::text("Bold")],
                },
                Token::text(" title"),
            ],
        };
        let blocks = parse_token(&token, &options()).unwrap();
        assert_eq!(blocks.len(), 1);
        assert!(matches!(&blocks[0], Block::Header { text } if text.text == "Bold title"));
    }

    #[test]
    fn test_code_becomes_fenced_section() {
        let token = Token::Code {
            text: "let x = 1;".to_string(),
            lang: Some("rust".to_string()),
        };
        let blocks = parse_token(&token, &options()).unwrap();
        assert!(
            matches!(&blocks[0], Block::Section { text, .. } if text.text == "```\nlet x = 1;\n```")
        );
    }

    #[test]
    fn test_thematic_break_becomes_divider() {
        let blocks = parse_token(&Token::ThematicBreak, &options()).unwrap();
        assert_eq!(blocks, vec![divider()]);
    }

    #[test]
    fn test_unmapped_kinds_are_skipped_silently() {
        for token in [
            Token::text("stray"),
            Token::LineBreak,
            Token::Codespan {
                text: "x".to_string(),
            },
        ] {
            assert!(parse_token(&token, &options()).unwrap().is_empty());
        }
    }

    #[test]
    fn test_document_order_is_preserved() {
        let tokens = vec![
            Token::Heading {
                level: 1,
                tokens: vec![Token::text("Title")],
            },
            Token::ThematicBreak,
            Token::Paragraph {
                tokens: vec![Token::text("body")],
            },
        ];
        let blocks = parse_blocks(&tokens, &options()).unwrap();
        assert_eq!(blocks.len(), 3);
        assert!(matches!(blocks[0], Block::Header { .. }));
        assert!(matches!(blocks[1], Block::Divider));
        assert!(matches!(blocks[2], Block::Section { .. }));
    }

    #[test]
    fn test_html_images_flow_through_dispatch() {
        let token = Token::Html {
            raw: r#"<img src="https://example.com/a.png" alt="pic"/>"#.to_string(),
        };
        let blocks = parse_token(&token, &options()).unwrap();
        assert_eq!(blocks.len(), 1);
        assert!(matches!(blocks[0], Block::Image { .. }));
    }

    #[test]
    fn test_malformed_html_propagates_error() {
        let token = Token::Html {
            raw: "<img".to_string(),
        };
        assert!(parse_token(&token, &options()).is_err());
    }

    #[test]
    fn test_determinism() {
        let tokens = vec![
            Token::Paragraph {
                tokens: vec![
                    Token::text("a "),
                    Token::Strong {
                        tokens: vec![Token::text("b")],
                    },
                ],
            },
            Token::ThematicBreak,
        ];
        let first = parse_blocks(&tokens, &options()).unwrap();
        let second = parse_blocks(&tokens, &options()).unwrap();
        assert_eq!(first, second);
    }
}
