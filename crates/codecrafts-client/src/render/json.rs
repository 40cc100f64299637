use super::Renderer;
use crate::views::Frame;

/// One JSON document per frame, on a single line.
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, frame: &Frame) -> anyhow::Result<String> {
        Ok(serde_json::to_string(frame)?)
    }
}
