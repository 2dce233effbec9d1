use std::time::Duration;

use crate::metrics::GlyphMetrics;

/// Measured extent of one text tile, in pixel units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileSize {
    pub width: f32,
    pub height: f32,
}

/// Geometry source for tile measurement.
///
/// Injected so the stabilization loop never touches a real rendering
/// surface — tests supply probes whose readings drift or never settle.
pub trait TileProbe {
    fn measure(&mut self) -> TileSize;
}

/// Measures a tile from glyph metrics: the sum of advance widths of one
/// rendering of the text, one line tall.
pub struct TextProbe<'a, M: GlyphMetrics> {
    text: &'a str,
    metrics: &'a M,
}

impl<'a, M: GlyphMetrics> TextProbe<'a, M> {
    pub fn new(text: &'a str, metrics: &'a M) -> Self {
        Self { text, metrics }
    }
}

impl<M: GlyphMetrics> TileProbe for TextProbe<'_, M> {
    fn measure(&mut self) -> TileSize {
        let width = self.text.chars().map(|ch| self.metrics.advance(ch)).sum();

        TileSize {
            width,
            height: self.metrics.line_height(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StabilizeConfig {
    /// Delay between consecutive probe readings.
    pub interval: Duration,
    /// Total readings taken before giving up.
    pub max_attempts: u32,
}

impl Default for StabilizeConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(100),
            max_attempts: 20,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Stabilization {
    pub size: TileSize,
    /// False when the attempt budget ran out before two consecutive
    /// readings agreed. `size` is then the last reading (fail-open).
    pub converged: bool,
    pub attempts: u32,
}

/// Polls the probe until two consecutive readings match, or the attempt
/// budget is exhausted. Always takes at least one reading and always
/// returns a usable size — a probe that never settles must not hang the
/// host, it only degrades the layout.
///
/// `sleep` runs between readings; pass `std::thread::sleep` in production,
/// a no-op recorder in tests.
pub fn stabilize<P: TileProbe>(
    probe: &mut P,
    config: StabilizeConfig,
    mut sleep: impl FnMut(Duration),
) -> Stabilization {
    let mut last = probe.measure();
    let mut attempts = 1;

    while attempts < config.max_attempts {
        sleep(config.interval);
        let next = probe.measure();
        attempts += 1;

        if next == last {
            return Stabilization {
                size: next,
                converged: true,
                attempts,
            };
        }

        last = next;
    }

    Stabilization {
        size: last,
        converged: false,
        attempts,
    }
}
