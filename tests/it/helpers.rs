//! Test helpers and builders for reducing boilerplate in tests.

use showcase::carousel::{CircularCarousel, Tier};
use showcase::page::PageLayout;
use showcase::types::Item;

/// `n` items titled "Item 0", "Item 1", ...
pub fn items(n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| Item::new(format!("Item {i}"), format!("Summary {i}"), format!("images/{i}.png")))
        .collect()
}

/// Carousel over `n` generated items, focused on the first one.
pub fn carousel(n: usize) -> CircularCarousel {
    CircularCarousel::new(items(n)).expect("non-empty catalog")
}

/// Tiers of every card at the current cursor, in catalog order.
pub fn tiers(carousel: &CircularCarousel) -> Vec<Tier> {
    carousel.render_params().iter().map(|p| p.tier).collect()
}

/// Builder for a host page description.
pub struct TestPageBuilder {
    layout: PageLayout,
}

impl Default for TestPageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPageBuilder {
    pub fn new() -> Self {
        Self {
            layout: PageLayout {
                viewport_width: 1280.0,
                ..Default::default()
            },
        }
    }

    pub fn with_items(mut self, n: usize) -> Self {
        self.layout.catalog = items(n);
        self
    }

    pub fn with_slides(mut self, n: usize) -> Self {
        self.layout.slide_count = n;
        self
    }

    pub fn with_dropdowns(mut self, n: usize) -> Self {
        self.layout.dropdown_count = n;
        self
    }

    pub fn with_contact_form(mut self, action: &str) -> Self {
        self.layout.contact_form = Some((action.to_string(), "Send Message".to_string()));
        self
    }

    pub fn with_viewport(mut self, width: f32) -> Self {
        self.layout.viewport_width = width;
        self
    }

    pub fn touch(mut self) -> Self {
        self.layout.touch_capable = true;
        self
    }

    pub fn build(self) -> PageLayout {
        self.layout
    }
}
