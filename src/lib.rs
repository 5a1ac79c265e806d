//! Interaction core for the studio's marketing site.
//!
//! Host-independent controllers for the hero slideshow, the project
//! coverflow carousel and its detail view, smooth scroll, wheel momentum,
//! parallax, reveal-on-scroll, the sticky navigation, and the contact form.
//! Each controller keeps in-memory UI state and returns style targets; the
//! host page applies them and animates the transitions.

pub mod carousel;
pub mod constants;
pub mod error;
pub mod form;
pub mod logging;
pub mod nav;
pub mod page;
pub mod perf;
pub mod reveal;
pub mod scroll;
pub mod settings;
pub mod settings_watcher;
pub mod slideshow;
pub mod types;

pub use carousel::{CircularCarousel, Coverflow, NavigationUpdate, RenderParams, Tier};
pub use error::{CarouselError, FormError, SettingsError};
pub use page::{FrameUpdate, Page, PageLayout};
pub use types::Item;
