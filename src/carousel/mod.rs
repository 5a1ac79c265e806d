//! Circular "coverflow" carousel.
//!
//! A fixed ring of catalog items with one focused card. Every navigation
//! recomputes a layout for all cards from their circular distance to the
//! cursor: the focused card in the center, its two neighbors shrunk and
//! blurred on either side, everything else hidden.
//!
//! ## Modules
//!
//! - `slot` - Pure per-card projection (tier, side, transform params)
//! - `state` - The item ring and cursor with advance/retreat/jump
//! - `intent` - Click and tap resolution for cards
//! - `detail` - Flip-card detail view open/close state
//! - `coverflow` - The pieces above wired together

mod coverflow;
mod detail;
mod intent;
mod slot;
mod state;

pub use coverflow::{Coverflow, PressOutcome};
pub use detail::{DetailContent, DetailView};
pub use intent::{parse_card_index, Intent, InteractionResolver, NonCenterClick};
pub use slot::{
    circular_distance, compute_slot, compute_slot_with, forward_offset, signed_circular_offset,
    tier_for, CarouselGeometry, FarOffsetMode, RenderParams, Side, Tier, Transition,
};
pub use state::{CircularCarousel, NavigationUpdate};
