use ratatui::style::{Modifier, Style};

use crate::field::{BASELINE_WEIGHT, MAX_WEIGHT};
use crate::oklch::{self, Oklch};

/// Terminal cells have no variable-weight fonts, so weight renders as a
/// perceptual brightness ramp plus a bold cutover.
#[derive(Debug, Clone, Copy)]
pub struct WeightRamp {
    low: Oklch,
    high: Oklch,
    /// Weights at or above this gain the BOLD modifier.
    bold_at: u16,
}

impl Default for WeightRamp {
    fn default() -> Self {
        Self::from_srgb((110, 110, 110), (255, 255, 255), 600)
    }
}

impl WeightRamp {
    /// `low` is the resting color at the baseline weight, `high` the color
    /// at the maximum. For a ramp that reads heavier with weight, `low`
    /// should be the darker of the two.
    pub fn from_srgb(low: (u8, u8, u8), high: (u8, u8, u8), bold_at: u16) -> Self {
        Self {
            low: oklch::from_srgb(low.0, low.1, low.2),
            high: oklch::from_srgb(high.0, high.1, high.2),
            bold_at,
        }
    }

    pub fn style_for(&self, weight: u16) -> Style {
        let w = weight.clamp(BASELINE_WEIGHT, MAX_WEIGHT);
        let t = (w - BASELINE_WEIGHT) as f32 / (MAX_WEIGHT - BASELINE_WEIGHT) as f32;
        let style = Style::new().fg(oklch::to_color(oklch::lerp(self.low, self.high, t)));

        if w >= self.bold_at {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}
