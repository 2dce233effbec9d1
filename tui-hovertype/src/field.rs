use crate::layout::Letter;

/// Resting weight of an unemphasized letter.
pub const BASELINE_WEIGHT: u16 = 300;
/// Weight of a letter directly under the pointer.
pub const MAX_WEIGHT: u16 = 900;
/// Pointer distance beyond which a letter is unaffected, in pixels.
pub const INFLUENCE_RADIUS: f32 = 400.0;
/// Weight lost per pixel of distance from the pointer.
pub const FALLOFF_PER_PX: f32 = 3.0;

/// Most recent pointer position, in pixel units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldConfig {
    pub baseline: u16,
    pub max: u16,
    pub radius: f32,
    pub falloff: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            baseline: BASELINE_WEIGHT,
            max: MAX_WEIGHT,
            radius: INFLUENCE_RADIUS,
            falloff: FALLOFF_PER_PX,
        }
    }
}

/// Maps pointer distance to letter weight: linear falloff from `max` at the
/// pointer, clamped to `baseline`, zero influence past `radius`.
#[derive(Debug, Clone, Copy)]
pub struct WeightField {
    config: FieldConfig,
}

impl WeightField {
    pub fn new(config: FieldConfig) -> Self {
        Self { config }
    }

    /// Weight at the given distance. Clamped on both ends — the upper bound
    /// must hold for any falloff constant, not just the default.
    pub fn weight_at(&self, distance: f32) -> u16 {
        if distance >= self.config.radius {
            return self.config.baseline;
        }

        let raw = self.config.max as f32 - distance * self.config.falloff;
        raw.clamp(self.config.baseline as f32, self.config.max as f32)
            .round() as u16
    }

    /// Recomputes every letter's weight against the pointer. Letters outside
    /// the radius are written only if they currently exceed the baseline.
    /// Returns how many letters actually changed, so callers skip redraws
    /// when nothing did.
    pub fn apply(&self, pointer: Pointer, letters: &mut [Letter]) -> usize {
        let mut changed = 0;

        for letter in letters {
            let dx = pointer.x - letter.x;
            let dy = pointer.y - letter.y;
            let distance = (dx * dx + dy * dy).sqrt();

            if distance < self.config.radius {
                let next = self.weight_at(distance);

                if letter.weight != next {
                    letter.weight = next;
                    changed += 1;
                }
            } else if letter.weight > self.config.baseline {
                letter.weight = self.config.baseline;
                changed += 1;
            }
        }

        changed
    }

    /// Drops all emphasis, as if the pointer moved infinitely far away.
    pub fn clear(&self, letters: &mut [Letter]) -> usize {
        let mut changed = 0;

        for letter in letters {
            if letter.weight > self.config.baseline {
                letter.weight = self.config.baseline;
                changed += 1;
            }
        }

        changed
    }
}
