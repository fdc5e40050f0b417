//! List rendering.
//!
//! Renders ordered, unordered, and checkbox lists in one of two shapes:
//! - **mrkdwn**: exactly one section, one line per item, nested lists
//!   indented by two spaces per level.
//! - **rich text**: one rich-text block holding a *flat* run of
//!   `rich_text_list` nodes. Hierarchy is encoded as an `indent` integer,
//!   not as nesting: an item's own node comes first, then the nodes of any
//!   sublist at `indent + 1`, then the next sibling item.
//!
//! The mode is decided once per top-level list token and threaded
//! unchanged through nested-list recursion. Images inside items are
//! dropped in both shapes; a list renders to exactly one block.

use slackdown_blocks::{
    rich_text, section, Block, ListStyle, RichTextElement, RichTextPart,
};
use slackdown_config::{ListOptions, ParseOptions};
use slackdown_core::{List, Token};

use crate::inline;

/// Render a list token to a single block.
pub fn render_list(list: &List, options: &ParseOptions) -> Block {
    if options.rich_text_lists() {
        rich_text(rich_list_elements(list, 0))
    } else {
        section(&mrkdwn_list(list, &options.lists))
    }
}

/// Render a list to one mrkdwn string, newline-joined lines.
fn mrkdwn_list(list: &List, options: &ListOptions) -> String {
    let mut lines = Vec::with_capacity(list.items.len());
    let mut index = 0usize;

    for item in &list.items {
        let mut parts: Vec<String> = Vec::new();

        for token in &item.tokens {
            match token {
                Token::List(nested) => {
                    let nested_text = mrkdwn_list(nested, options);
                    if !nested_text.is_empty() {
                        parts.push(format!("\n{}", indent_lines(&nested_text)));
                    }
                }
                Token::Paragraph { tokens } => {
                    parts.push(paragraph_text(tokens));
                }
                Token::Image { .. } => {}
                other => parts.push(inline::mrkdwn(other)),
            }
        }

        let content = parts.concat().trim().to_string();
        let line = if list.ordered {
            // Counters are local to each list, reset per nesting level.
            index += 1;
            format!("{index}. {content}")
        } else if let Some(checked) = item.checked {
            let prefix = options
                .checkbox_prefix
                .as_deref()
                .map_or_else(|| "• ".to_string(), |prefix| prefix(checked));
            format!("{prefix}{content}")
        } else {
            format!("• {content}")
        };
        lines.push(line);
    }

    lines.join("\n")
}

/// Indent every non-empty line of a nested list's text by two spaces.
fn indent_lines(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                line.to_string()
            } else {
                format!("  {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a paragraph child inline: only the section text survives.
fn paragraph_text(tokens: &[Token]) -> String {
    inline::render_phrasing(tokens, false)
        .iter()
        .filter_map(|block| match block {
            Block::Section { text, .. } => Some(text.text.as_str()),
            _ => None,
        })
        .collect()
}

/// Flatten a list into rich-text list nodes at the given indent.
fn rich_list_elements(list: &List, indent: usize) -> Vec<RichTextElement> {
    let style = if list.ordered {
        ListStyle::Ordered
    } else {
        ListStyle::Bullet
    };
    let mut elements = Vec::new();

    for item in &list.items {
        let mut parts: Vec<RichTextPart> = Vec::new();

        for token in &item.tokens {
            match token {
                Token::List(nested) => {
                    // Flush the item's own node before its sublist so
                    // document order survives the flattening.
                    if !parts.is_empty() {
                        elements.push(list_node(style, indent, std::mem::take(&mut parts)));
                    }
                    elements.extend(rich_list_elements(nested, indent + 1));
                }
                Token::Paragraph { tokens } => {
                    for child in tokens {
                        if !matches!(child, Token::Image { .. }) {
                            parts.push(inline::rich_text_part(child));
                        }
                    }
                }
                Token::Image { .. } => {}
                other => parts.push(inline::rich_text_part(other)),
            }
        }

        if !parts.is_empty() {
            elements.push(list_node(style, indent, parts));
        }
    }

    elements
}

fn list_node(style: ListStyle, indent: usize, parts: Vec<RichTextPart>) -> RichTextElement {
    RichTextElement::list(style, indent, RichTextElement::section(parts))
}
