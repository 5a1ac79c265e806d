//! Eased scroll follower for `.smooth-scroll-element` layers.

use crate::constants::{DEFAULT_LAYER_SPEED, SMOOTH_SCROLL_EASE, SMOOTH_SCROLL_SNAP};

/// A layer that moves against the scroll direction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollLayer {
    /// `data-speed`; unset means `DEFAULT_LAYER_SPEED`
    pub speed: Option<f32>,
}

impl ScrollLayer {
    pub fn new(speed: Option<f32>) -> Self {
        Self { speed }
    }

    pub fn speed(&self) -> f32 {
        self.speed.unwrap_or(DEFAULT_LAYER_SPEED)
    }

    /// Vertical translate for this layer at scroll position `current`
    pub fn translate_y(&self, current: f32) -> f32 {
        -(current * self.speed())
    }
}

/// Follows the window scroll position with exponential easing.
#[derive(Clone, Debug)]
pub struct SmoothScroll {
    current: f32,
    target: f32,
    ease: f32,
    scrolling: bool,
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new(SMOOTH_SCROLL_EASE)
    }
}

impl SmoothScroll {
    pub fn new(ease: f32) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            ease,
            scrolling: false,
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    pub fn set_ease(&mut self, ease: f32) {
        self.ease = ease;
    }

    /// Window scrolled to `scroll_y`
    pub fn on_scroll(&mut self, scroll_y: f32) {
        self.target = scroll_y;
        self.scrolling = true;
    }

    /// Step one frame. Returns the new position while moving.
    pub fn tick(&mut self) -> Option<f32> {
        if !self.scrolling {
            return None;
        }
        self.current += (self.target - self.current) * self.ease;
        if (self.target - self.current).abs() < SMOOTH_SCROLL_SNAP {
            self.current = self.target;
            self.scrolling = false;
        }
        Some(self.current)
    }

    /// Translates for `layers` at the current position
    pub fn layer_offsets(&self, layers: &[ScrollLayer]) -> Vec<f32> {
        layers.iter().map(|layer| layer.translate_y(self.current)).collect()
    }
}
