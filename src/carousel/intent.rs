//! Input intent resolution for carousel cards.
//!
//! Turns raw click and touch events on a card into an `Intent`. Only the
//! centered card opens the detail view; what a click on any other card does
//! is a policy choice (`NonCenterClick`).
//!
//! ## Touch handling
//!
//! ```text
//! touch start -> remember timestamp
//! touch end   -> tap if held < 200 ms, otherwise ignored
//! click       -> ignored on touch-capable hosts (the tap already fired)
//! ```

use crate::constants::TAP_MAX_DURATION_MS;
use crate::error::{CarouselError, CarouselResult};
use serde::{Deserialize, Serialize};

/// What a press on a non-centered card does
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonCenterClick {
    /// Nothing happens
    #[default]
    Ignore,
    /// Focus the card, then open its detail view
    NavigateThenSelect,
}

/// Resolved meaning of a card press
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    /// No action
    None,
    /// Open the detail view for the centered card
    Select,
    /// Focus `target` first, then open its detail view
    NavigateThenSelect { target: usize },
}

impl Intent {
    /// Returns true if the host should stop the event from propagating
    pub fn consumes_event(&self) -> bool {
        !matches!(self, Intent::None)
    }
}

/// Read a card's `data-index` attribute.
pub fn parse_card_index(raw: &str, len: usize) -> CarouselResult<usize> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| CarouselError::UnparsableIndex(raw.to_string()))?;
    usize::try_from(value)
        .ok()
        .filter(|index| *index < len)
        .ok_or(CarouselError::InvalidIndex { index: value, len })
}

/// Maps click and touch input on carousel cards to intents.
#[derive(Clone, Debug)]
pub struct InteractionResolver {
    /// Host reports touch support; mouse clicks are then ignored
    touch_capable: bool,
    non_center_click: NonCenterClick,
    tap_max_ms: f64,
    touch_started_at: Option<f64>,
}

impl InteractionResolver {
    pub fn new(touch_capable: bool, non_center_click: NonCenterClick) -> Self {
        Self {
            touch_capable,
            non_center_click,
            tap_max_ms: TAP_MAX_DURATION_MS,
            touch_started_at: None,
        }
    }

    pub fn with_tap_threshold(mut self, tap_max_ms: f64) -> Self {
        self.tap_max_ms = tap_max_ms;
        self
    }

    pub fn is_touch_capable(&self) -> bool {
        self.touch_capable
    }

    pub fn set_non_center_click(&mut self, policy: NonCenterClick) {
        self.non_center_click = policy;
    }

    pub fn tap_threshold(&self) -> f64 {
        self.tap_max_ms
    }

    /// Change the longest touch that still counts as a tap.
    pub fn set_tap_threshold(&mut self, tap_max_ms: f64) {
        self.tap_max_ms = tap_max_ms;
    }

    /// Record the start of a touch
    pub fn touch_start(&mut self, now_ms: f64) {
        self.touch_started_at = Some(now_ms);
    }

    /// Resolve the end of a touch on `card` (None when it ended off any card).
    pub fn touch_end(&mut self, now_ms: f64, card: Option<usize>, cursor: usize) -> Intent {
        let Some(started) = self.touch_started_at.take() else {
            return Intent::None;
        };
        if now_ms - started >= self.tap_max_ms {
            return Intent::None;
        }
        self.resolve(card, cursor)
    }

    /// Resolve a mouse click on `card`.
    pub fn click(&self, card: Option<usize>, cursor: usize) -> Intent {
        if self.touch_capable {
            return Intent::None;
        }
        self.resolve(card, cursor)
    }

    fn resolve(&self, card: Option<usize>, cursor: usize) -> Intent {
        match card {
            None => Intent::None,
            Some(index) if index == cursor => Intent::Select,
            Some(index) => match self.non_center_click {
                NonCenterClick::Ignore => Intent::None,
                NonCenterClick::NavigateThenSelect => Intent::NavigateThenSelect { target: index },
            },
        }
    }
}

impl Default for InteractionResolver {
    fn default() -> Self {
        Self::new(false, NonCenterClick::default())
    }
}
