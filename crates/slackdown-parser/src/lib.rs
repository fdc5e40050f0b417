//! Slackdown Parser
//!
//! Markdown tokenizer adapter for slackdown. This crate turns raw markdown
//! text into the [`Token`] tree the converter consumes, using
//! `pulldown-cmark` with the tables, strikethrough, and task-list
//! extensions enabled.
//!
//! # Example
//!
//! ```
//! use slackdown_core::Token;
//! use slackdown_parser::tokenize;
//!
//! let tokens = tokenize("# Hello");
//! assert!(matches!(tokens[0], Token::Heading { level: 1, .. }));
//! ```
//!
//! The converter itself never depends on this crate; any producer of the
//! token tree works equally well.

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Parser, Tag};
use slackdown_core::{List, ListItem, Table, TableCell, Token};

/// Tokenize a markdown document into a token tree.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut events = Parser::new_ext(input, extensions());
    collect_tokens(&mut events)
}

/// Markdown extensions matching the block vocabulary of the converter.
fn extensions() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Collect tokens until the enclosing container's end event (or the end of
/// input at the top level). Relies on events being well nested.
fn collect_tokens<'a, I: Iterator<Item = Event<'a>>>(events: &mut I) -> Vec<Token> {
    let mut tokens = Vec::new();
    while let Some(event) = events.next() {
        if matches!(event, Event::End(_)) {
            break;
        }
        if let Some(token) = token_from(event, events) {
            tokens.push(token);
        }
    }
    tokens
}

/// Convert one event into a token, consuming the container's child events
/// when the event opens one. Events with no token counterpart yield `None`.
fn token_from<'a, I: Iterator<Item = Event<'a>>>(event: Event<'a>, events: &mut I) -> Option<Token> {
    match event {
        Event::Start(Tag::Paragraph) => Some(Token::Paragraph {
            tokens: collect_tokens(events),
        }),
        Event::Start(Tag::Heading { level, .. }) => Some(Token::Heading {
            level: level as u8,
            tokens: collect_tokens(events),
        }),
        Event::Start(Tag::BlockQuote(_)) => Some(Token::Blockquote {
            tokens: collect_tokens(events),
        }),
        Event::Start(Tag::CodeBlock(kind)) => Some(code_block(&kind, events)),
        Event::Start(Tag::HtmlBlock) => Some(html_block(events)),
        Event::Start(Tag::List(start)) => Some(list(start.is_some(), events)),
        Event::Start(Tag::Table(_)) => Some(table(events)),
        Event::Start(Tag::Emphasis) => Some(Token::Emphasis {
            tokens: collect_tokens(events),
        }),
        Event::Start(Tag::Strong) => Some(Token::Strong {
            tokens: collect_tokens(events),
        }),
        Event::Start(Tag::Strikethrough) => Some(Token::Strikethrough {
            tokens: collect_tokens(events),
        }),
        Event::Start(Tag::Link {
            dest_url, title, ..
        }) => Some(Token::Link {
            href: dest_url.into_string(),
            title: non_empty(title),
            tokens: collect_tokens(events),
        }),
        Event::Start(Tag::Image {
            dest_url, title, ..
        }) => {
            let alt = flatten_text(&collect_tokens(events));
            Some(Token::Image {
                href: dest_url.into_string(),
                title: non_empty(title),
                text: alt,
            })
        }
        // Containers outside the converter's vocabulary (footnote
        // definitions, metadata blocks, ...) are consumed and dropped.
        Event::Start(_) => {
            skip_container(events);
            None
        }
        Event::Text(text) => Some(Token::Text {
            text: text.into_string(),
        }),
        Event::Code(text) => Some(Token::Codespan {
            text: text.into_string(),
        }),
        Event::Html(raw) => Some(Token::Html {
            raw: raw.into_string(),
        }),
        Event::InlineHtml(raw) => Some(Token::RawHtml {
            raw: raw.into_string(),
        }),
        // Soft breaks stay part of the running text.
        Event::SoftBreak => Some(Token::text("\n")),
        Event::HardBreak => Some(Token::LineBreak),
        Event::Rule => Some(Token::ThematicBreak),
        _ => None,
    }
}

fn code_block<'a, I: Iterator<Item = Event<'a>>>(
    kind: &CodeBlockKind<'_>,
    events: &mut I,
) -> Token {
    let lang = match kind {
        CodeBlockKind::Fenced(info) => info.split_whitespace().next().map(str::to_string),
        CodeBlockKind::Indented => None,
    };
    let mut text = String::new();
    while let Some(event) = events.next() {
        match event {
            Event::End(_) => break,
            Event::Text(chunk) => text.push_str(&chunk),
            _ => {}
        }
    }
    // The final newline belongs to the fence, not the body.
    if text.ends_with('\n') {
        text.pop();
    }
    Token::Code { text, lang }
}

fn html_block<'a, I: Iterator<Item = Event<'a>>>(events: &mut I) -> Token {
    let mut raw = String::new();
    while let Some(event) = events.next() {
        match event {
            Event::End(_) => break,
            Event::Html(chunk) | Event::Text(chunk) => raw.push_str(&chunk),
            _ => {}
        }
    }
    Token::Html { raw }
}

fn list<'a, I: Iterator<Item = Event<'a>>>(ordered: bool, events: &mut I) -> Token {
    let mut items = Vec::new();
    while let Some(event) = events.next() {
        match event {
            Event::End(_) => break,
            Event::Start(Tag::Item) => items.push(list_item(events)),
            _ => {}
        }
    }
    Token::List(List { ordered, items })
}

fn list_item<'a, I: Iterator<Item = Event<'a>>>(events: &mut I) -> ListItem {
    let mut checked = None;
    let mut tokens = Vec::new();
    while let Some(event) = events.next() {
        match event {
            Event::End(_) => break,
            Event::TaskListMarker(state) => checked = Some(state),
            other => {
                if let Some(token) = token_from(other, events) {
                    tokens.push(token);
                }
            }
        }
    }
    ListItem { checked, tokens }
}

fn table<'a, I: Iterator<Item = Event<'a>>>(events: &mut I) -> Token {
    let mut header = Vec::new();
    let mut rows = Vec::new();
    while let Some(event) = events.next() {
        match event {
            Event::End(_) => break,
            Event::Start(Tag::TableHead) => header = row_cells(events),
            Event::Start(Tag::TableRow) => rows.push(row_cells(events)),
            _ => {}
        }
    }
    Token::Table(Table { header, rows })
}

fn row_cells<'a, I: Iterator<Item = Event<'a>>>(events: &mut I) -> Vec<TableCell> {
    let mut cells = Vec::new();
    while let Some(event) = events.next() {
        match event {
            Event::End(_) => break,
            Event::Start(Tag::TableCell) => cells.push(TableCell {
                tokens: collect_tokens(events),
            }),
            _ => {}
        }
    }
    cells
}

/// Consume a container we don't map, including anything nested in it.
fn skip_container<'a, I: Iterator<Item = Event<'a>>>(events: &mut I) {
    let mut depth = 1usize;
    for event in events {
        match event {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            _ => {}
        }
    }
}

/// Flatten tokens to their visible text, for image alt text.
fn flatten_text(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            Token::Text { text } | Token::Codespan { text } => out.push_str(text),
            Token::Strong { tokens }
            | Token::Emphasis { tokens }
            | Token::Strikethrough { tokens }
            | Token::Link { tokens, .. } => out.push_str(&flatten_text(tokens)),
            Token::Image { text, .. } => out.push_str(text),
            _ => {}
        }
    }
    out
}

fn non_empty(value: CowStr<'_>) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.into_string())
    }
}
