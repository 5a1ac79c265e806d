//! Site-wide constants.
//!
//! Centralizes the layout offsets, timings and thresholds used by the
//! interaction controllers. Most of them are only defaults: `Settings`
//! can override the tunable ones.

// ============================================================================
// Coverflow Carousel
// ============================================================================

/// Horizontal offset of the two cards next to the center card, in pixels
pub const ADJACENT_OFFSET_PX: f32 = 150.0;

/// Scale of the two cards next to the center card
pub const ADJACENT_SCALE: f32 = 0.7;

/// Opacity of the two cards next to the center card
pub const ADJACENT_OPACITY: f32 = 0.5;

/// Blur radius applied to the adjacent cards, in pixels
pub const ADJACENT_BLUR_PX: f32 = 2.0;

/// Horizontal step per index of offset for hidden cards, in pixels
pub const FAR_STEP_PX: f32 = 75.0;

/// Scale of hidden cards
pub const FAR_SCALE: f32 = 0.5;

/// Stacking order per tier
pub const CENTER_Z_INDEX: i32 = 10;
pub const ADJACENT_Z_INDEX: i32 = 5;
pub const FAR_Z_INDEX: i32 = 1;

/// Card transition duration in milliseconds
pub const CAROUSEL_TRANSITION_MS: u32 = 500;

/// A touch shorter than this counts as a tap
pub const TAP_MAX_DURATION_MS: f64 = 200.0;

/// Call-to-action shown in the project detail view
pub const DETAIL_CTA_HREF: &str = "contact.html";
pub const DETAIL_CTA_LABEL: &str = "Start your own project";

// ============================================================================
// Hero Slideshow
// ============================================================================

/// Time each slide stays on screen, in milliseconds
pub const SLIDESHOW_INTERVAL_MS: f64 = 5000.0;

/// Cross-fade duration, in milliseconds (also the arrow lock duration)
pub const SLIDESHOW_FADE_MS: f64 = 1500.0;

// ============================================================================
// Scrolling
// ============================================================================

/// Fraction of the remaining distance covered per frame by smooth scroll
pub const SMOOTH_SCROLL_EASE: f32 = 0.1;

/// Distance below which smooth scroll snaps to its target
pub const SMOOTH_SCROLL_SNAP: f32 = 0.1;

/// Layer speed used when an element has no explicit speed
pub const DEFAULT_LAYER_SPEED: f32 = 0.5;

/// Parallax rate used when an element has no explicit rate
pub const DEFAULT_PARALLAX_RATE: f32 = 0.5;

/// Momentum velocity multiplier applied every frame
pub const MOMENTUM_FRICTION: f32 = 0.92;

/// Fraction of a wheel delta added to momentum velocity
pub const MOMENTUM_ACCELERATION: f32 = 0.2;

/// Velocity below which momentum stops
pub const MOMENTUM_STOP_THRESHOLD: f32 = 0.1;

// ============================================================================
// Navigation
// ============================================================================

/// Scroll distance after which the header switches to its compact style
pub const NAV_SCROLLED_THRESHOLD: f32 = 50.0;

/// Viewport line used to decide which section is active
pub const NAV_SECTION_PROBE_Y: f32 = 100.0;

/// Height reserved for the fixed header when scrolling to an anchor
pub const NAV_ANCHOR_OFFSET: f32 = 80.0;

/// Viewports at or below this width use the mobile menu
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;

// ============================================================================
// Reveal On Scroll
// ============================================================================

/// Visible fraction needed before an element counts as intersecting
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// Root margin handed to the host's intersection observer
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// ============================================================================
// Contact Form
// ============================================================================

/// Label shown on the submit button while a submission is in flight
pub const FORM_SENDING_LABEL: &str = "Sending...";

/// How long a status message stays below the form, in milliseconds
pub const FORM_MESSAGE_DURATION_MS: u64 = 5000;

pub const FORM_SUCCESS_TEXT: &str =
    "Thank you! Your message has been sent successfully. We'll get back to you soon.";

pub const FORM_ERROR_TEXT: &str =
    "Sorry, there was an error sending your message. Please try again or contact us directly.";

// ============================================================================
// Frame Timing
// ============================================================================

/// Frames between slow-page summaries from `Page::frame`
pub const PERF_SUMMARY_INTERVAL_FRAMES: u64 = 300;
