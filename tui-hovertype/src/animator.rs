use std::time::{Duration, Instant};

use crate::field::{FieldConfig, Pointer, WeightField};
use crate::layout::{ContainerSize, GridLayout};
use crate::measure::TileSize;
use crate::metrics::GlyphMetrics;
use crate::throttle::Throttle;

#[derive(Debug, Clone, Copy)]
pub struct AnimatorConfig {
    pub field: FieldConfig,
    /// Gate for hover-style pointer movement.
    pub hover_interval: Duration,
    /// Gate for drag-style movement. Tighter than hover: a dragging pointer
    /// has no resting state, so staleness shows immediately.
    pub drag_interval: Duration,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            hover_interval: Duration::from_millis(50),
            drag_interval: Duration::from_millis(10),
        }
    }
}

/// How a pointer movement arrived, for throttling purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Hover,
    Drag,
}

/// The whole effect behind one owner: display text, current layout, weight
/// field, throttles, and the last known pointer. Dropping the animator is
/// the teardown; there is no detached state to unbind.
pub struct GridAnimator {
    text: String,
    field: WeightField,
    hover_gate: Throttle,
    drag_gate: Throttle,
    layout: GridLayout,
    pointer: Option<Pointer>,
}

impl GridAnimator {
    pub fn new(text: impl Into<String>, config: AnimatorConfig) -> Self {
        Self {
            text: text.into(),
            field: WeightField::new(config.field),
            hover_gate: Throttle::new(config.hover_interval),
            drag_gate: Throttle::new(config.drag_interval),
            layout: GridLayout::empty(),
            pointer: None,
        }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Rebuilds every tile and letter for the given container. The last
    /// known pointer is re-applied against the fresh letters, so emphasis
    /// survives a resize without any handler re-registration dance.
    pub fn relayout(
        &mut self,
        container: ContainerSize,
        tile: TileSize,
        metrics: &impl GlyphMetrics,
    ) {
        self.layout = GridLayout::compute(&self.text, container, tile, metrics);

        if let Some(pointer) = self.pointer {
            self.field.apply(pointer, &mut self.layout.letters);
        }
    }

    /// Throttled pointer movement. Returns the number of letters whose
    /// weight changed; zero when the gate dropped the event.
    pub fn pointer_moved(&mut self, kind: PointerKind, x: f32, y: f32, now: Instant) -> usize {
        let gate = match kind {
            PointerKind::Hover => &mut self.hover_gate,
            PointerKind::Drag => &mut self.drag_gate,
        };

        if !gate.admit(now) {
            return 0;
        }

        self.update_pointer(x, y)
    }

    /// Immediate single-point update, bypassing the gates (touch-start
    /// semantics).
    pub fn pointer_pressed(&mut self, x: f32, y: f32) -> usize {
        self.update_pointer(x, y)
    }

    /// Clears all influence, as if the pointer left the surface entirely
    /// (touch-end semantics).
    pub fn pointer_released(&mut self) -> usize {
        self.pointer = None;
        self.field.clear(&mut self.layout.letters)
    }

    fn update_pointer(&mut self, x: f32, y: f32) -> usize {
        let pointer = Pointer { x, y };
        self.pointer = Some(pointer);
        self.field.apply(pointer, &mut self.layout.letters)
    }
}
