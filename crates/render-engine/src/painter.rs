//! Text painters.
//!
//! A painter turns [`TextCommand`]s into pixels. The glyph painter
//! rasterizes with a real font; the recording painter only remembers what it
//! was asked to draw, which is enough for previews and placement checks.

use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;
use standcard_common::error::{StandcardError, StandcardResult};

use crate::compositor::TextCommand;

/// Trait for text drawing backends.
pub trait TextPainter {
    /// Draw one command onto the canvas.
    fn paint(&mut self, canvas: &mut RgbImage, command: &TextCommand);

    /// Backend name.
    fn name(&self) -> &str;
}

/// Rasterizes text with an outline font.
pub struct GlyphPainter {
    font: FontVec,
}

impl GlyphPainter {
    /// Load a TrueType/OpenType font from disk.
    pub fn load(path: impl AsRef<Path>) -> StandcardResult<Self> {
        let path = path.as_ref();
        let bytes =
            std::fs::read(path).map_err(|e| StandcardError::font_load(path, e.to_string()))?;
        Self::from_bytes(path, bytes)
    }

    /// Parse font data already in memory. `origin` is only used for errors.
    pub fn from_bytes(origin: impl AsRef<Path>, bytes: Vec<u8>) -> StandcardResult<Self> {
        let font = FontVec::try_from_vec(bytes)
            .map_err(|e| StandcardError::font_load(origin.as_ref(), e.to_string()))?;
        Ok(Self { font })
    }
}

impl TextPainter for GlyphPainter {
    fn paint(&mut self, canvas: &mut RgbImage, command: &TextCommand) {
        if command.text.is_empty() {
            return;
        }
        draw_text_mut(
            canvas,
            Rgb(command.color.0),
            command.anchor.x,
            command.anchor.y,
            PxScale::from(command.px),
            &self.font,
            &command.text,
        );
    }

    fn name(&self) -> &str {
        "glyph"
    }
}

/// Records commands without touching the canvas.
#[derive(Debug, Default)]
pub struct RecordingPainter {
    pub commands: Vec<TextCommand>,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextPainter for RecordingPainter {
    fn paint(&mut self, _canvas: &mut RgbImage, command: &TextCommand) {
        self.commands.push(command.clone());
    }

    fn name(&self) -> &str {
        "recording"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use standcard_table_model::layout::{Rgb as TextRgb, TextAnchor};

    use crate::compositor::TextRole;

    fn command(text: &str) -> TextCommand {
        TextCommand {
            role: TextRole::Title,
            text: text.to_string(),
            anchor: TextAnchor::new(4, 4),
            px: 12.0,
            color: TextRgb::WHITE,
        }
    }

    #[test]
    fn test_missing_font_is_font_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GlyphPainter::load(dir.path().join("arial.ttf"))
            .err()
            .expect("missing font must fail");
        assert!(matches!(err, StandcardError::FontLoad { .. }));
    }

    #[test]
    fn test_garbage_font_is_font_load_error() {
        let err = GlyphPainter::from_bytes("broken.ttf", b"definitely not a font".to_vec())
            .err()
            .expect("invalid font must fail");
        assert!(matches!(err, StandcardError::FontLoad { .. }));
    }

    #[test]
    fn test_recording_painter_leaves_canvas_untouched() {
        let mut canvas = RgbImage::from_pixel(16, 16, Rgb([1, 2, 3]));
        let before = canvas.clone();
        let mut painter = RecordingPainter::new();

        painter.paint(&mut canvas, &command("Alpha"));
        painter.paint(&mut canvas, &command("Bravo"));

        assert_eq!(canvas, before);
        assert_eq!(painter.commands.len(), 2);
        assert_eq!(painter.commands[1].text, "Bravo");
        assert_eq!(painter.name(), "recording");
    }
}
