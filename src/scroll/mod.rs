//! Scroll-driven effects.
//!
//! - `smooth` - Eased follower of the window scroll position
//! - `momentum` - Wheel velocity with per-frame friction decay
//! - `parallax` - Layers translated at a fraction of the scroll offset

mod momentum;
mod parallax;
mod smooth;

pub use momentum::{MomentumConfig, MomentumController, MomentumStep};
pub use parallax::{Parallax, ParallaxLayer};
pub use smooth::{ScrollLayer, SmoothScroll};
