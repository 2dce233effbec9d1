use unicode_width::UnicodeWidthChar;

/// Per-glyph geometry. The hosting environment owns typography; the effect
/// only asks how far each glyph advances and how tall a line is.
pub trait GlyphMetrics {
    /// Horizontal advance of `ch`, in pixel units.
    fn advance(&self, ch: char) -> f32;

    /// Height of one rendered line of the text, in pixel units.
    fn line_height(&self) -> f32;
}

/// Terminal-cell metrics: every glyph advances by its cell count.
///
/// The pixel scale is nominal — it exists so pointer distances keep the
/// same units as the falloff constants regardless of the emulator's real
/// font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub cell_width: f32,
    pub cell_height: f32,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            cell_width: 10.0,
            cell_height: 20.0,
        }
    }
}

impl CellMetrics {
    /// Cell containing the pixel position.
    pub fn cell_of(&self, x: f32, y: f32) -> (u16, u16) {
        let col = (x / self.cell_width).floor().max(0.0) as u16;
        let row = (y / self.cell_height).floor().max(0.0) as u16;
        (col, row)
    }

    /// Pixel position of a cell's center, for pointer events reported in
    /// cell coordinates.
    pub fn pointer_px(&self, column: u16, row: u16) -> (f32, f32) {
        (
            column as f32 * self.cell_width + self.cell_width / 2.0,
            row as f32 * self.cell_height + self.cell_height / 2.0,
        )
    }
}

impl GlyphMetrics for CellMetrics {
    fn advance(&self, ch: char) -> f32 {
        ch.width().unwrap_or(0) as f32 * self.cell_width
    }

    fn line_height(&self) -> f32 {
        self.cell_height
    }
}
