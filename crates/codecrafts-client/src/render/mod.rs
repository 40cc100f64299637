//! Output adapters.
//!
//! A [`Renderer`] turns a [`Frame`] into text for some sink. The shell
//! writes whatever the active renderer produces to stdout after every
//! event.

mod html;
mod json;
mod text;

pub use html::{escape_html, HtmlRenderer};
pub use json::JsonRenderer;
pub use text::TextRenderer;

use crate::views::Frame;

/// Converts view models into an output representation.
pub trait Renderer: Send {
    fn render(&self, frame: &Frame) -> anyhow::Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RendererKind {
    #[default]
    Text,
    Html,
    Json,
}

impl RendererKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "html" => Some(Self::Html),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn build(self) -> Box<dyn Renderer> {
        match self {
            Self::Text => Box::new(TextRenderer),
            Self::Html => Box::new(HtmlRenderer),
            Self::Json => Box::new(JsonRenderer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!(RendererKind::parse("HTML"), Some(RendererKind::Html));
        assert_eq!(RendererKind::parse(" json "), Some(RendererKind::Json));
        assert_eq!(RendererKind::parse("text"), Some(RendererKind::Text));
        assert_eq!(RendererKind::parse("markdown"), None);
    }
}
