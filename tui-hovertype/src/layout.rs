use std::ops::Range;

use crate::field::BASELINE_WEIGHT;
use crate::measure::TileSize;
use crate::metrics::GlyphMetrics;

/// Visible extent of the container being tiled, in pixel units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerSize {
    pub width: f32,
    pub height: f32,
}

/// One character, individually weighted. `x`/`y` is the glyph center as of
/// the layout pass that created it — positions are never patched in place,
/// a relayout rebuilds every letter.
#[derive(Debug, Clone, PartialEq)]
pub struct Letter {
    pub ch: char,
    pub x: f32,
    pub y: f32,
    pub advance: f32,
    pub weight: u16,
}

/// One repetition of the display text within the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct TextTile {
    pub row: u16,
    pub col: u16,
    /// Pixel origin of the tile's top-left corner.
    pub x: f32,
    pub y: f32,
    /// This tile's letters in `GridLayout::letters`.
    pub letters: Range<usize>,
}

/// Tiles laid edge-to-edge, row-major, covering the container.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    pub rows: u16,
    pub columns: u16,
    pub tile: TileSize,
    pub tiles: Vec<TextTile>,
    pub letters: Vec<Letter>,
}

impl GridLayout {
    pub fn empty() -> Self {
        Self {
            rows: 0,
            columns: 0,
            tile: TileSize {
                width: 0.0,
                height: 0.0,
            },
            tiles: Vec::new(),
            letters: Vec::new(),
        }
    }

    /// Fills the container with enough tiles to cover it: ceil(height /
    /// tile height) rows by ceil(width / tile width) columns. Within a tile
    /// each letter sits at the running sum of preceding advances, so glyphs
    /// keep their natural widths despite absolute positioning. All weights
    /// start at the baseline.
    ///
    /// A container or tile without positive extent yields an empty grid.
    pub fn compute(
        text: &str,
        container: ContainerSize,
        tile: TileSize,
        metrics: &impl GlyphMetrics,
    ) -> Self {
        if tile.width <= 0.0
            || tile.height <= 0.0
            || container.width <= 0.0
            || container.height <= 0.0
        {
            return Self::empty();
        }

        let rows = (container.height / tile.height).ceil() as u16;
        let columns = (container.width / tile.width).ceil() as u16;

        let mut tiles = Vec::with_capacity(rows as usize * columns as usize);
        let mut letters = Vec::new();

        for row in 0..rows {
            for col in 0..columns {
                let origin_x = col as f32 * tile.width;
                let origin_y = row as f32 * tile.height;
                let start = letters.len();
                let mut acc = 0.0;

                for ch in text.chars() {
                    let advance = metrics.advance(ch);

                    letters.push(Letter {
                        ch,
                        x: origin_x + acc + advance / 2.0,
                        y: origin_y + tile.height / 2.0,
                        advance,
                        weight: BASELINE_WEIGHT,
                    });

                    acc += advance;
                }

                tiles.push(TextTile {
                    row,
                    col,
                    x: origin_x,
                    y: origin_y,
                    letters: start..letters.len(),
                });
            }
        }

        Self {
            rows,
            columns,
            tile,
            tiles,
            letters,
        }
    }
}
