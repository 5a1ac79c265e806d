//! Carousel state - the item ring and the cursor.

use super::slot::{compute_slot_with, CarouselGeometry, RenderParams, Transition};
use crate::error::{CarouselError, CarouselResult};
use crate::profile_scope;
use crate::types::Item;
use tracing::debug;

/// Result of a navigation: the new cursor and a full layout for every card.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationUpdate {
    pub cursor: usize,
    /// One entry per item, in catalog order
    pub params: Vec<RenderParams>,
    pub transition: Transition,
}

/// A fixed ring of items with a single focused position.
///
/// `cursor` is always a valid index into `items`; the item list never
/// changes after construction.
#[derive(Clone, Debug)]
pub struct CircularCarousel {
    items: Vec<Item>,
    cursor: usize,
    geometry: CarouselGeometry,
}

impl CircularCarousel {
    /// Build a carousel focused on the first item.
    pub fn new(items: Vec<Item>) -> CarouselResult<Self> {
        Self::with_geometry(items, CarouselGeometry::default())
    }

    pub fn with_geometry(items: Vec<Item>, geometry: CarouselGeometry) -> CarouselResult<Self> {
        if items.is_empty() {
            return Err(CarouselError::EmptyCatalog);
        }
        debug!(items = items.len(), "Carousel created");
        Ok(Self {
            items,
            cursor: 0,
            geometry,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn geometry(&self) -> &CarouselGeometry {
        &self.geometry
    }

    /// Replace the geometry, e.g. after a settings reload. The cursor is kept.
    pub fn set_geometry(&mut self, geometry: CarouselGeometry) {
        self.geometry = geometry;
    }

    /// Move focus one card forward, wrapping at the end.
    pub fn advance(&mut self) -> NavigationUpdate {
        self.cursor = (self.cursor + 1) % self.items.len();
        self.navigated()
    }

    /// Move focus one card back, wrapping at the start.
    pub fn retreat(&mut self) -> NavigationUpdate {
        let len = self.items.len();
        self.cursor = (self.cursor + len - 1) % len;
        self.navigated()
    }

    /// Focus `index` directly.
    ///
    /// Returns `Ok(None)` when `index` is already focused. Out-of-range
    /// indices are rejected and leave the state unchanged.
    pub fn jump_to(&mut self, index: usize) -> CarouselResult<Option<NavigationUpdate>> {
        let len = self.items.len();
        if index >= len {
            return Err(CarouselError::InvalidIndex {
                index: i64::try_from(index).unwrap_or(i64::MAX),
                len,
            });
        }
        if index == self.cursor {
            return Ok(None);
        }
        self.cursor = index;
        Ok(Some(self.navigated()))
    }

    /// The item currently in the center slot.
    pub fn select_current(&self) -> &Item {
        &self.items[self.cursor]
    }

    /// Whether `index` is the focused card
    pub fn is_centered(&self, index: usize) -> bool {
        index == self.cursor
    }

    /// Layout for every card at the current cursor.
    pub fn render_params(&self) -> Vec<RenderParams> {
        profile_scope!("carousel_layout");
        let len = self.items.len();
        (0..len)
            .map(|i| compute_slot_with(i, self.cursor, len, &self.geometry))
            .collect()
    }

    /// The very first layout, applied without a transition.
    pub fn initial_layout(&self) -> NavigationUpdate {
        NavigationUpdate {
            cursor: self.cursor,
            params: self.render_params(),
            transition: Transition::None,
        }
    }

    fn navigated(&self) -> NavigationUpdate {
        debug!(cursor = self.cursor, total = self.items.len(), "Carousel navigated");
        NavigationUpdate {
            cursor: self.cursor,
            params: self.render_params(),
            transition: Transition::Ease {
                duration_ms: self.geometry.transition_ms,
            },
        }
    }
}
