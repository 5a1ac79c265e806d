//! Sticky header navigation - mobile menu, dropdowns, scroll styling and
//! section highlighting.
//!
//! The host feeds viewport width, scroll offsets and section rectangles;
//! the state here decides which classes to toggle.

use crate::constants::{
    MOBILE_BREAKPOINT_PX, NAV_ANCHOR_OFFSET, NAV_SCROLLED_THRESHOLD, NAV_SECTION_PROBE_Y,
};
use tracing::debug;

/// Viewport-relative bounds of a `section[id]`
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f32,
    pub bottom: f32,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f32, bottom: f32) -> Self {
        Self {
            id: id.into(),
            top,
            bottom,
        }
    }

    fn spans(&self, y: f32) -> bool {
        self.top <= y && self.bottom >= y
    }
}

/// What the host should do with a click it forwarded
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickEffect {
    /// Let the browser handle it
    Default,
    /// preventDefault (and stopPropagation for arrow clicks); state changed
    Handled,
}

/// Navigation state.
#[derive(Clone, Debug)]
pub struct Navigation {
    mobile_open: bool,
    dropdowns: Vec<bool>,
    scrolled: bool,
    active_section: Option<String>,
    viewport_width: f32,
}

impl Navigation {
    pub fn new(dropdown_count: usize, viewport_width: f32) -> Self {
        Self {
            mobile_open: false,
            dropdowns: vec![false; dropdown_count],
            scrolled: false,
            active_section: None,
            viewport_width,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport_width <= MOBILE_BREAKPOINT_PX
    }

    pub fn is_mobile_open(&self) -> bool {
        self.mobile_open
    }

    /// Body scrolling is locked while the mobile menu is open
    pub fn body_scroll_locked(&self) -> bool {
        self.mobile_open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    pub fn is_dropdown_open(&self, index: usize) -> bool {
        self.dropdowns.get(index).copied().unwrap_or(false)
    }

    // ------------------------------------------------------------------
    // Mobile menu
    // ------------------------------------------------------------------

    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.mobile_open = !self.mobile_open;
        debug!(open = self.mobile_open, "Mobile menu toggled");
        self.mobile_open
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_open = false;
    }

    /// Viewport resized. Growing past the breakpoint closes the mobile menu.
    pub fn on_resize(&mut self, width: f32) {
        self.viewport_width = width;
        if !self.is_mobile() && self.mobile_open {
            self.close_mobile_menu();
        }
    }

    // ------------------------------------------------------------------
    // Dropdowns
    // ------------------------------------------------------------------

    /// Click on a dropdown's arrow glyph. Only acts on mobile.
    pub fn dropdown_arrow_click(&mut self, index: usize) -> ClickEffect {
        if self.is_mobile() {
            self.toggle_dropdown(index)
        } else {
            ClickEffect::Default
        }
    }

    /// Click on a dropdown's link. On desktop it opens the dropdown instead of navigating.
    pub fn dropdown_link_click(&mut self, index: usize) -> ClickEffect {
        if self.is_mobile() {
            ClickEffect::Default
        } else {
            self.toggle_dropdown(index)
        }
    }

    fn toggle_dropdown(&mut self, index: usize) -> ClickEffect {
        match self.dropdowns.get_mut(index) {
            Some(open) => {
                *open = !*open;
                ClickEffect::Handled
            }
            None => ClickEffect::Default,
        }
    }

    // ------------------------------------------------------------------
    // Scroll
    // ------------------------------------------------------------------

    /// Window scrolled. Updates header style and the highlighted section.
    pub fn on_scroll(&mut self, scroll_y: f32, sections: &[SectionBounds]) {
        self.scrolled = scroll_y > NAV_SCROLLED_THRESHOLD;
        self.active_section = sections
            .iter()
            .rev()
            .find(|section| section.spans(NAV_SECTION_PROBE_Y))
            .map(|section| section.id.clone());
    }

    /// Whether a nav link with `href` should carry the `active` class
    pub fn is_link_active(&self, href: &str) -> bool {
        match (&self.active_section, href.strip_prefix('#')) {
            (Some(active), Some(id)) => active == id,
            _ => false,
        }
    }

    /// Scroll target for a same-page anchor click, leaving room for the header.
    ///
    /// Returns None for links that are not `#anchors` or whose target is missing.
    pub fn anchor_target(href: &str, target_top: Option<f32>, page_y_offset: f32) -> Option<f32> {
        href.strip_prefix('#')?;
        target_top.map(|top| top + page_y_offset - NAV_ANCHOR_OFFSET)
    }
}
