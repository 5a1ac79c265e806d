//! Hero slideshow - timed cross-fade between stacked slides.
//!
//! Driven by animation-frame timestamps in milliseconds. The host calls
//! `tick` every frame while running and applies the returned `SlideChange`.

use crate::constants::{SLIDESHOW_FADE_MS, SLIDESHOW_INTERVAL_MS};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Timing options
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideshowOptions {
    pub interval_ms: f64,
    pub fade_duration_ms: f64,
}

impl Default for SlideshowOptions {
    fn default() -> Self {
        Self {
            interval_ms: SLIDESHOW_INTERVAL_MS,
            fade_duration_ms: SLIDESHOW_FADE_MS,
        }
    }
}

/// Opacity and stacking for one slide
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideStyle {
    pub opacity: f32,
    pub z_index: i32,
}

impl SlideStyle {
    pub const VISIBLE: SlideStyle = SlideStyle { opacity: 1.0, z_index: 1 };
    pub const HIDDEN: SlideStyle = SlideStyle { opacity: 0.0, z_index: 0 };
}

/// A fade from one slide to another
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideChange {
    /// Slide fading out
    pub from: usize,
    /// Slide fading in
    pub to: usize,
}

impl SlideChange {
    pub fn styles(&self) -> [(usize, SlideStyle); 2] {
        [(self.from, SlideStyle::HIDDEN), (self.to, SlideStyle::VISIBLE)]
    }
}

/// Slideshow state. A slideshow without slides is inert.
#[derive(Clone, Debug)]
pub struct Slideshow {
    len: usize,
    current: usize,
    options: SlideshowOptions,
    last_timestamp: Option<f64>,
    running: bool,
}

impl Slideshow {
    pub fn new(len: usize, options: SlideshowOptions) -> Self {
        Self {
            len,
            current: 0,
            options,
            last_timestamp: None,
            running: false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn options(&self) -> &SlideshowOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: SlideshowOptions) {
        self.options = options;
    }

    /// Styles applied once when the slideshow is set up
    pub fn initial_styles(&self) -> Vec<SlideStyle> {
        (0..self.len)
            .map(|i| if i == 0 { SlideStyle::VISIBLE } else { SlideStyle::HIDDEN })
            .collect()
    }

    /// CSS transition shared by all slides
    pub fn transition_css(&self) -> String {
        format!("opacity {}ms ease-in-out", self.options.fade_duration_ms)
    }

    /// Start requesting frames. Returns false if already running or empty.
    pub fn start(&mut self) -> bool {
        if self.running || self.is_empty() {
            return false;
        }
        self.running = true;
        true
    }

    /// Stop requesting frames. Returns false if not running.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        true
    }

    /// Advance when more than one interval has passed since the last change.
    pub fn tick(&mut self, now_ms: f64) -> Option<SlideChange> {
        if !self.running {
            return None;
        }
        let last = *self.last_timestamp.get_or_insert(now_ms);
        if now_ms - last > self.options.interval_ms {
            self.last_timestamp = Some(now_ms);
            return self.next();
        }
        None
    }

    pub fn next(&mut self) -> Option<SlideChange> {
        if self.is_empty() {
            return None;
        }
        self.show((self.current + 1) % self.len)
    }

    pub fn prev(&mut self) -> Option<SlideChange> {
        if self.is_empty() {
            return None;
        }
        self.show((self.current + self.len - 1) % self.len)
    }

    /// Fade to `index`. No change for the current slide or an invalid index.
    pub fn show(&mut self, index: usize) -> Option<SlideChange> {
        if index == self.current || index >= self.len {
            return None;
        }
        let change = SlideChange {
            from: self.current,
            to: index,
        };
        self.current = index;
        debug!(from = change.from, to = change.to, "Slide changed");
        Some(change)
    }
}

/// Direction of a slideshow arrow
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrowDirection {
    Prev,
    Next,
}

/// Locks the arrows while a fade is in progress so rapid clicks don't stack.
#[derive(Clone, Debug, Default)]
pub struct ArrowDebounce {
    locked_until: Option<f64>,
}

impl ArrowDebounce {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self, now_ms: f64) -> bool {
        self.locked_until.is_some_and(|until| now_ms < until)
    }

    /// Handle an arrow click, moving the slideshow if not locked.
    pub fn click(
        &mut self,
        slideshow: &mut Slideshow,
        direction: ArrowDirection,
        now_ms: f64,
    ) -> Option<SlideChange> {
        if self.is_locked(now_ms) {
            return None;
        }
        self.locked_until = Some(now_ms + slideshow.options().fade_duration_ms);
        match direction {
            ArrowDirection::Prev => slideshow.prev(),
            ArrowDirection::Next => slideshow.next(),
        }
    }
}
