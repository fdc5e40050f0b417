//! Image extraction from raw HTML fragments.
//!
//! A raw HTML block is streamed through a generic markup reader; every
//! top-level `<img>` tag becomes one image block. Fragments without a
//! top-level `img` yield nothing. Reader errors on severely malformed
//! markup propagate to the caller; they are never downgraded to an empty
//! result.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use slackdown_blocks::{image, Block};
use slackdown_core::{Result, SlackdownError};

/// Extract image blocks from a raw HTML fragment.
pub fn extract_images(raw: &str) -> Result<Vec<Block>> {
    let mut reader = Reader::from_str(raw);
    reader.config_mut().trim_text(true);

    let mut blocks = Vec::new();
    let mut depth = 0usize;

    loop {
        match reader.read_event().map_err(markup_err)? {
            Event::Start(tag) => {
                if depth == 0 {
                    push_img(&tag, &mut blocks)?;
                }
                depth += 1;
            }
            Event::Empty(tag) => {
                if depth == 0 {
                    push_img(&tag, &mut blocks)?;
                }
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(blocks)
}

/// Append an image block for an `img` tag; other tags are ignored, as are
/// `img` tags without a `src` attribute.
fn push_img(tag: &BytesStart<'_>, blocks: &mut Vec<Block>) -> Result<()> {
    if tag.name().as_ref() != b"img" {
        return Ok(());
    }

    let mut src: Option<String> = None;
    let mut alt: Option<String> = None;
    for attr in tag.attributes() {
        let attr = attr.map_err(markup_err)?;
        let value = attr.unescape_value().map_err(markup_err)?.into_owned();
        match attr.key.as_ref() {
            b"src" => src = Some(value),
            b"alt" => alt = Some(value),
            _ => {}
        }
    }

    if let Some(url) = src {
        let alt = alt.filter(|a| !a.is_empty()).unwrap_or_else(|| url.clone());
        blocks.push(image(&url, &alt, None));
    }
    Ok(())
}

fn markup_err(err: impl std::fmt::Display) -> SlackdownError {
    SlackdownError::Markup(err.to_string())
}
