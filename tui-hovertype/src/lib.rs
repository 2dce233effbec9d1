//! A decorative background effect for terminals: the display text is tiled
//! across the whole area, and each letter's visual weight follows the mouse
//! pointer — heavy under the cursor, fading linearly back to the resting
//! weight within a fixed influence radius.
//!
//! The pipeline is measurement stabilization ([`measure`]) → grid layout
//! ([`layout`]) → pointer-driven weight updates ([`field`], [`animator`]) →
//! rendering ([`ramp`], [`widget`]). All geometry is in abstract pixel
//! units; [`metrics::CellMetrics`] maps terminal cells onto that space.

pub mod animator;
pub mod field;
pub mod layout;
pub mod measure;
pub mod metrics;
pub mod oklch;
pub mod ramp;
pub mod throttle;
pub mod widget;
