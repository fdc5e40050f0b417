//! Inline (phrasing) content rendering.
//!
//! Phrasing tokens render in one of two encodings:
//! - **mrkdwn**: flat marked-up text (`*bold*`, `_italic_`, `~strike~`,
//!   backticked code, `<url|label>` links). Nested styles compose
//!   textually because the output is plain string concatenation.
//! - **rich text**: one leaf per token with boolean style flags. A styled
//!   span flattens its descendants to plain text and keeps only its own
//!   flag, so the outermost style in a nesting chain wins.
//!
//! In both encodings an image among the phrasing children interrupts the
//! open text run: the accumulated text is closed off, the image becomes a
//! standalone block, and accumulation restarts after it.

use slackdown_blocks::{
    image, rich_text, section, Block, RichTextElement, RichTextPart, RichTextStyle,
    MAX_TEXT_LENGTH,
};
use slackdown_core::Token;

/// Render a paragraph's phrasing children to blocks.
///
/// # Arguments
/// * `tokens` - The phrasing children, in document order
/// * `rich` - `true` for rich-text output, `false` for mrkdwn sections
pub fn render_phrasing(tokens: &[Token], rich: bool) -> Vec<Block> {
    if rich {
        render_phrasing_rich(tokens)
    } else {
        render_phrasing_mrkdwn(tokens)
    }
}

fn render_phrasing_mrkdwn(tokens: &[Token]) -> Vec<Block> {
    let mut blocks = Vec::new();
    for token in tokens {
        if let Token::Image { href, title, text } = token {
            blocks.push(image_block(href, title.as_deref(), text));
        } else {
            push_mrkdwn(&mut blocks, &mrkdwn(token));
        }
    }
    blocks
}

fn render_phrasing_rich(tokens: &[Token]) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut parts: Vec<RichTextPart> = Vec::new();
    for token in tokens {
        if let Token::Image { href, title, text } = token {
            if !parts.is_empty() {
                blocks.push(rich_text(vec![RichTextElement::section(std::mem::take(
                    &mut parts,
                ))]));
            }
            blocks.push(image_block(href, title.as_deref(), text));
        } else {
            parts.push(rich_text_part(token));
        }
    }
    if !parts.is_empty() {
        blocks.push(rich_text(vec![RichTextElement::section(parts)]));
    }
    blocks
}

/// Render one phrasing token to mrkdwn markup.
///
/// Tokens outside the mrkdwn vocabulary (line breaks, raw HTML, stray
/// block tokens) render as the empty string.
pub fn mrkdwn(token: &Token) -> String {
    match token {
        Token::Link { href, tokens, .. } => {
            format!("<{}|{}> ", href, mrkdwn_children(tokens))
        }
        Token::Emphasis { tokens } => format!("_{}_", mrkdwn_children(tokens)),
        Token::Strong { tokens } => format!("*{}*", mrkdwn_children(tokens)),
        Token::Strikethrough { tokens } => format!("~{}~", mrkdwn_children(tokens)),
        Token::Codespan { text } => format!("`{text}`"),
        Token::Text { text } => text.clone(),
        _ => String::new(),
    }
}

fn mrkdwn_children(tokens: &[Token]) -> String {
    tokens.iter().map(mrkdwn).collect()
}

/// Render one phrasing token to a rich-text leaf.
///
/// Styled spans keep a single flag over the flattened text of their
/// descendants; tokens outside the vocabulary become empty plain leaves.
pub fn rich_text_part(token: &Token) -> RichTextPart {
    match token {
        Token::Link { href, tokens, .. } => {
            RichTextPart::link(href.clone(), flatten_parts(tokens))
        }
        Token::Emphasis { tokens } => {
            RichTextPart::styled(flatten_parts(tokens), RichTextStyle::ITALIC)
        }
        Token::Strong { tokens } => {
            RichTextPart::styled(flatten_parts(tokens), RichTextStyle::BOLD)
        }
        Token::Strikethrough { tokens } => {
            RichTextPart::styled(flatten_parts(tokens), RichTextStyle::STRIKE)
        }
        Token::Codespan { text } => RichTextPart::styled(text.clone(), RichTextStyle::CODE),
        Token::Text { text } => RichTextPart::plain(text.clone()),
        _ => RichTextPart::plain(String::new()),
    }
}

/// Flatten tokens through their rich-text leaves, discarding style flags.
/// A link leaf contributes its text, or its url when the text is empty.
fn flatten_parts(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| match rich_text_part(token) {
            RichTextPart::Link { url, text } => {
                if text.is_empty() {
                    url
                } else {
                    text
                }
            }
            RichTextPart::Text { text, .. } => text,
        })
        .collect()
}

/// Flatten phrasing tokens to unformatted text, for header blocks.
///
/// Code spans keep their raw backticked form; images contribute their
/// title (or href); raw HTML passes through as-is.
pub fn plain_text(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        append_plain(token, &mut out);
    }
    out
}

fn append_plain(token: &Token, out: &mut String) {
    match token {
        Token::Link { tokens, .. }
        | Token::Strong { tokens }
        | Token::Emphasis { tokens }
        | Token::Strikethrough { tokens } => {
            for child in tokens {
                append_plain(child, out);
            }
        }
        Token::LineBreak => {}
        Token::Image { href, title, .. } => out.push_str(title.as_deref().unwrap_or(href)),
        Token::Codespan { text } => {
            out.push('`');
            out.push_str(text);
            out.push('`');
        }
        Token::Text { text } => out.push_str(text),
        Token::Html { raw } | Token::RawHtml { raw } => out.push_str(raw),
        _ => {}
    }
}

/// Append a mrkdwn fragment to the last open section, or open a new one.
///
/// The merge check uses pre-truncation character counts: a fragment joins
/// the open section only while the combined length stays within
/// [`MAX_TEXT_LENGTH`]. This is the only buffering rule in the converter.
pub(crate) fn push_mrkdwn(blocks: &mut Vec<Block>, fragment: &str) {
    if let Some(Block::Section { text, .. }) = blocks.last_mut() {
        if text.text.chars().count() + fragment.chars().count() <= MAX_TEXT_LENGTH {
            text.text.push_str(fragment);
            return;
        }
    }
    blocks.push(section(fragment));
}

/// Build an image block with the documented alt-text fallback chain:
/// alt text, then title, then the url itself (empty strings skipped).
pub(crate) fn image_block(href: &str, title: Option<&str>, text: &str) -> Block {
    let alt = if !text.is_empty() {
        text
    } else if let Some(title) = title.filter(|t| !t.is_empty()) {
        title
    } else {
        href
    };
    image(href, alt, title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use slackdown_core::{List, Token};

    fn strong(children: Vec<Token>) -> Token {
        Token::Strong { tokens: children }
    }

    fn emphasis(children: Vec<Token>) -> Token {
        Token::Emphasis { tokens: children }
    }

    #[test]
    fn test_mrkdwn_markers() {
        assert_eq!(mrkdwn(&strong(vec![Token::text("b")])), "*b*");
        assert_eq!(mrkdwn(&emphasis(vec![Token::text("i")])), "_i_");
        assert_eq!(
            mrkdwn(&Token::Strikethrough {
                tokens: vec![Token::text("s")]
            }),
            "~s~"
        );
        assert_eq!(
            mrkdwn(&Token::Codespan {
                text: "c".to_string()
            }),
            "`c`"
        );
    }

    #[test]
    fn test_mrkdwn_link_has_trailing_space() {
        let link = Token::Link {
            href: "https://example.com".to_string(),
            title: None,
            tokens: vec![Token::text("label")],
        };
        assert_eq!(mrkdwn(&link), "<https://example.com|label> ");
    }

    #[test]
    fn test_mrkdwn_nested_styles_compose_textually() {
        let token = strong(vec![
            Token::text("bold "),
            emphasis(vec![Token::text("both")]),
        ]);
        assert_eq!(mrkdwn(&token), "*bold _both_*");
    }

    #[test]
    fn test_mrkdwn_ignores_linebreak_and_raw_html() {
        assert_eq!(mrkdwn(&Token::LineBreak), "");
        assert_eq!(
            mrkdwn(&Token::RawHtml {
                raw: "<br/>".to_string()
            }),
            ""
        );
    }

    #[test]
    fn test_rich_leaf_styles() {
        let part = rich_text_part(&strong(vec![Token::text("b")]));
        assert_eq!(part, RichTextPart::styled("b", RichTextStyle::BOLD));

        let part = rich_text_part(&Token::Codespan {
            text: "c".to_string(),
        });
        assert_eq!(part, RichTextPart::styled("c", RichTextStyle::CODE));
    }

    #[test]
    fn test_rich_leaf_keeps_outermost_style_only() {
        let token = strong(vec![
            Token::text("bold "),
            emphasis(vec![Token::text("inner")]),
        ]);
        assert_eq!(
            rich_text_part(&token),
            RichTextPart::styled("bold inner", RichTextStyle::BOLD)
        );
    }

    #[test]
    fn test_rich_link_flattens_children() {
        let link = Token::Link {
            href: "https://example.com".to_string(),
            title: None,
            tokens: vec![strong(vec![Token::text("label")])],
        };
        assert_eq!(
            rich_text_part(&link),
            RichTextPart::link("https://example.com", "label")
        );
    }

    #[test]
    fn test_rich_nested_link_falls_back_to_url() {
        let inner = Token::Link {
            href: "https://inner.example".to_string(),
            title: None,
            tokens: vec![],
        };
        let outer = Token::Link {
            href: "https://outer.example".to_string(),
            title: None,
            tokens: vec![inner],
        };
        assert_eq!(
            rich_text_part(&outer),
            RichTextPart::link("https://outer.example", "https://inner.example")
        );
    }

    #[test]
    fn test_plain_text_codespan_keeps_backticks() {
        let tokens = vec![
            Token::text("run "),
            Token::Codespan {
                text: "make".to_string(),
            },
        ];
        assert_eq!(plain_text(&tokens), "run `make`");
    }

    #[test]
    fn test_plain_text_image_prefers_title_then_href() {
        let with_title = Token::Image {
            href: "https://example.com/i.png".to_string(),
            title: Some("titled".to_string()),
            text: "alt".to_string(),
        };
        assert_eq!(plain_text(&[with_title]), "titled");

        let without_title = Token::Image {
            href: "https://example.com/i.png".to_string(),
            title: None,
            text: "alt".to_string(),
        };
        assert_eq!(plain_text(&[without_title]), "https://example.com/i.png");
    }

    #[test]
    fn test_push_mrkdwn_merges_within_cap() {
        let mut blocks = vec![section(&"a".repeat(1500))];
        push_mrkdwn(&mut blocks, &"b".repeat(1500));
        assert_eq!(blocks.len(), 1);
        match &blocks[0] {
            Block::Section { text, .. } => assert_eq!(text.text.len(), 3000),
            other => panic!("expected section, got {other:?}"),
        }
    }

    #[test]
    fn test_push_mrkdwn_splits_past_cap() {
        let mut blocks = vec![section(&"a".repeat(2999))];
        push_mrkdwn(&mut blocks, "bb");
        assert_eq!(blocks.len(), 2);
        match &blocks[1] {
            Block::Section { text, .. } => assert_eq!(text.text, "bb"),
            other => panic!("expected section, got {other:?}"),
        }
    }

    #[test]
    fn test_push_mrkdwn_exact_boundary_merges() {
        let mut blocks = vec![section(&"a".repeat(2999))];
        push_mrkdwn(&mut blocks, "b");
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_image_interrupts_mrkdwn_run() {
        let tokens = vec![
            Token::text("text-a "),
            Token::Image {
                href: "https://example.com/i.png".to_string(),
                title: None,
                text: "pic".to_string(),
            },
            Token::text("text-b"),
        ];
        let blocks = render_phrasing(&tokens, false);
        assert_eq!(blocks.len(), 3);
        assert!(matches!(&blocks[0], Block::Section { text, .. } if text.text == "text-a "));
        assert!(matches!(&blocks[1], Block::Image { .. }));
        assert!(matches!(&blocks[2], Block::Section { text, .. } if text.text == "text-b"));
    }

    #[test]
    fn test_image_interrupts_rich_run() {
        let tokens = vec![
            Token::text("text-a "),
            Token::Image {
                href: "https://example.com/i.png".to_string(),
                title: None,
                text: "pic".to_string(),
            },
            Token::text("text-b"),
        ];
        let blocks = render_phrasing(&tokens, true);
        assert_eq!(blocks.len(), 3);
        assert!(matches!(&blocks[0], Block::RichText { .. }));
        assert!(matches!(&blocks[1], Block::Image { .. }));
        assert!(matches!(&blocks[2], Block::RichText { .. }));
    }

    #[test]
    fn test_image_alt_fallback_chain() {
        let block = image_block("https://u", Some("t"), "a");
        assert!(matches!(block, Block::Image { alt_text, .. } if alt_text == "a"));

        let block = image_block("https://u", Some("t"), "");
        assert!(matches!(block, Block::Image { alt_text, .. } if alt_text == "t"));

        let block = image_block("https://u", None, "");
        assert!(matches!(block, Block::Image { alt_text, .. } if alt_text == "https://u"));
    }

    #[test]
    fn test_stray_block_token_renders_empty() {
        // A block token among phrasing children has no mrkdwn form.
        let stray = Token::List(List {
            ordered: false,
            items: vec![],
        });
        assert_eq!(mrkdwn(&stray), "");
        assert_eq!(
            rich_text_part(&stray),
            RichTextPart::plain(String::new())
        );
    }
}
