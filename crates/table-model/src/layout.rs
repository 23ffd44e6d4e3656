//! Card layout geometry.
//!
//! A [`Layout`] fixes where every piece of text lands on a template: the
//! title and subtitle anchors, and for the left and right column the x
//! coordinate of each field. Rows advance by `step_y` from `base_y`; rows
//! 0-9 fill the left column and rows 10-19 the right one.
//!
//! All coordinates are template pixels, top-left origin.

use std::path::Path;

use serde::{Deserialize, Serialize};
use standcard_common::error::StandcardError;

use crate::record::Field;

/// Rows in each column before the next column starts.
pub const ROWS_PER_COLUMN: usize = 10;

/// Most rows a card can show: two full columns.
pub const MAX_DISPLAYED_ROWS: usize = 2 * ROWS_PER_COLUMN;

/// A text anchor (top-left of the rendered glyph box).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAnchor {
    pub x: i32,
    pub y: i32,
}

impl TextAnchor {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An opaque RGB text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const WHITE: Rgb = Rgb([255, 255, 255]);
}

/// Per-field x coordinates of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    pub team: i32,
    pub wwcd: i32,
    pub pp: i32,
    pub fp: i32,
    pub tp: i32,
}

impl ColumnLayout {
    /// X coordinate for a field in this column.
    pub fn x_for(&self, field: Field) -> i32 {
        match field {
            Field::Team => self.team,
            Field::Wwcd => self.wwcd,
            Field::Pp => self.pp,
            Field::Fp => self.fp,
            Field::Tp => self.tp,
        }
    }
}

/// Full geometry of a standings card template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Layout {
    /// Where the tournament name is drawn.
    pub title: TextAnchor,

    /// Where the stage name is drawn.
    pub subtitle: TextAnchor,

    /// Pixel height of title and subtitle text.
    pub header_font_px: f32,

    /// Pixel height of row text.
    pub row_font_px: f32,

    /// Y coordinate of the first row in every column.
    pub base_y: i32,

    /// Vertical distance between consecutive rows.
    pub step_y: i32,

    /// Rows 0-9.
    pub left: ColumnLayout,

    /// Rows 10-19.
    pub right: ColumnLayout,

    /// Color of all drawn text.
    #[serde(default = "default_text_color")]
    pub text_color: Rgb,
}

fn default_text_color() -> Rgb {
    Rgb::WHITE
}

impl Default for Layout {
    /// Geometry of the classic two-column `card_template.png`.
    fn default() -> Self {
        Self {
            title: TextAnchor::new(500, 100),
            subtitle: TextAnchor::new(500, 150),
            header_font_px: 36.0,
            row_font_px: 22.0,
            base_y: 240,
            step_y: 40,
            left: ColumnLayout {
                team: 105,
                wwcd: 410,
                pp: 460,
                fp: 515,
                tp: 575,
            },
            right: ColumnLayout {
                team: 765,
                wwcd: 1070,
                pp: 1120,
                fp: 1170,
                tp: 1230,
            },
            text_color: Rgb::WHITE,
        }
    }
}

impl Layout {
    /// Column for a column index: 0 is left, anything else right.
    pub fn column(&self, index: usize) -> &ColumnLayout {
        if index == 0 {
            &self.left
        } else {
            &self.right
        }
    }

    /// Y coordinate of the row at `slot` within its column.
    ///
    /// Saturates instead of overflowing on extreme coordinates.
    pub fn row_y(&self, slot: usize) -> i32 {
        let slot = i32::try_from(slot).unwrap_or(i32::MAX);
        self.base_y.saturating_add(self.step_y.saturating_mul(slot))
    }

    /// Check font sizes and row spacing.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.step_y <= 0 {
            return Err(LayoutError::BadRowStep {
                step_y: self.step_y,
            });
        }
        for (name, px) in [
            ("header_font_px", self.header_font_px),
            ("row_font_px", self.row_font_px),
        ] {
            if !(px.is_finite() && px > 0.0) {
                return Err(LayoutError::BadFontSize { name, px });
            }
        }
        Ok(())
    }

    /// Load and validate a layout from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| LayoutError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let layout: Layout = serde_json::from_str(&content).map_err(|e| LayoutError::Parse {
            path: path.display().to_string(),
            source: e,
        })?;
        layout.validate()?;
        Ok(layout)
    }

    /// Pretty JSON form, suitable as a starting point for a new template.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Errors raised while loading or validating a layout.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("Layout step_y must be positive, got {step_y}")]
    BadRowStep { step_y: i32 },

    #[error("Layout {name} must be a positive size, got {px}")]
    BadFontSize { name: &'static str, px: f32 },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

impl From<LayoutError> for StandcardError {
    fn from(err: LayoutError) -> Self {
        StandcardError::config(err.to_string())
    }
}
