use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::layout::GridLayout;
use crate::metrics::CellMetrics;
use crate::ramp::WeightRamp;

/// Renders a grid layout into a buffer region. Letter centers map back to
/// cells through the same metrics that produced them; anything outside the
/// region is clipped.
pub fn render_into(
    layout: &GridLayout,
    ramp: &WeightRamp,
    metrics: CellMetrics,
    area: Rect,
    buf: &mut Buffer,
) {
    for letter in &layout.letters {
        // Spaces keep their advance but paint nothing.
        if letter.ch == ' ' {
            continue;
        }

        let (col, row) = metrics.cell_of(letter.x, letter.y);

        if col >= area.width || row >= area.height {
            continue;
        }

        let x = area.x + col;
        let y = area.y + row;

        if x >= buf.area().right() || y >= buf.area().bottom() {
            continue;
        }

        let cell = &mut buf[(x, y)];
        cell.set_char(letter.ch);
        cell.set_style(ramp.style_for(letter.weight));
    }
}

/// Widget wrapper for `Frame::render_widget`.
pub struct HoverGrid<'a> {
    pub layout: &'a GridLayout,
    pub ramp: &'a WeightRamp,
    pub metrics: CellMetrics,
}

impl Widget for HoverGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_into(self.layout, self.ramp, self.metrics, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::{Color, Modifier};

    use crate::field::{FieldConfig, Pointer, WeightField};
    use crate::layout::ContainerSize;
    use crate::measure::TileSize;

    use super::*;

    fn small_grid(text: &str, cols: u16) -> (GridLayout, CellMetrics) {
        let metrics = CellMetrics::default();
        let width = text.chars().count() as f32 * metrics.cell_width;
        let layout = GridLayout::compute(
            text,
            ContainerSize {
                width: cols as f32 * metrics.cell_width,
                height: metrics.cell_height,
            },
            TileSize {
                width,
                height: metrics.cell_height,
            },
            &metrics,
        );

        (layout, metrics)
    }

    #[test]
    fn letters_land_in_their_cells() {
        let (layout, metrics) = small_grid("AB", 4);
        let ramp = WeightRamp::default();
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);

        render_into(&layout, &ramp, metrics, area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "A");
        assert_eq!(buf[(1, 0)].symbol(), "B");
        assert_eq!(buf[(2, 0)].symbol(), "A");
        assert_eq!(buf[(3, 0)].symbol(), "B");
    }

    #[test]
    fn resting_letters_use_the_baseline_style() {
        let (layout, metrics) = small_grid("AB", 2);
        let ramp = WeightRamp::default();
        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);

        render_into(&layout, &ramp, metrics, area, &mut buf);

        assert_eq!(buf[(0, 0)].fg, Color::Rgb(110, 110, 110));
        assert!(!buf[(0, 0)].modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn a_letter_under_the_pointer_renders_heavy() {
        let (mut layout, metrics) = small_grid("AB", 2);
        let field = WeightField::new(FieldConfig::default());
        let target = (layout.letters[0].x, layout.letters[0].y);

        field.apply(
            Pointer {
                x: target.0,
                y: target.1,
            },
            &mut layout.letters,
        );

        let ramp = WeightRamp::default();
        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        render_into(&layout, &ramp, metrics, area, &mut buf);

        assert_eq!(buf[(0, 0)].fg, Color::Rgb(255, 255, 255));
        assert!(buf[(0, 0)].modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn spaces_paint_nothing() {
        let (layout, metrics) = small_grid("A B", 3);
        let ramp = WeightRamp::default();
        let area = Rect::new(0, 0, 3, 1);
        let mut buf = Buffer::empty(area);

        render_into(&layout, &ramp, metrics, area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "A");
        assert_eq!(buf[(1, 0)].symbol(), " ");
        assert_eq!(buf[(2, 0)].symbol(), "B");
    }

    #[test]
    fn letters_outside_the_area_are_clipped() {
        let (layout, metrics) = small_grid("AB", 4);
        let ramp = WeightRamp::default();

        // Area narrower than the layout: the second tile falls off.
        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        render_into(&layout, &ramp, metrics, area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "A");
        assert_eq!(buf[(1, 0)].symbol(), "B");
    }

    #[test]
    fn renders_at_an_offset_area() {
        let (layout, metrics) = small_grid("AB", 2);
        let ramp = WeightRamp::default();
        let area = Rect::new(3, 2, 2, 1);
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 4));

        render_into(&layout, &ramp, metrics, area, &mut buf);

        assert_eq!(buf[(3, 2)].symbol(), "A");
        assert_eq!(buf[(4, 2)].symbol(), "B");
        assert_eq!(buf[(0, 0)].symbol(), " ");
    }
}
