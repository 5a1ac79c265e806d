//! Flip-card detail view for the centered carousel item.
//!
//! Close behavior follows the backdrop press-tracking pattern: a press that
//! starts on the backdrop and is released on the backdrop closes the view,
//! a press that starts on the card content never does.

use crate::constants::{DETAIL_CTA_HREF, DETAIL_CTA_LABEL};
use crate::types::Item;
use serde::Serialize;
use tracing::debug;

/// Everything the host needs to draw the back of the flip card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DetailContent {
    pub title: String,
    /// Omitted from the card when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub summary: String,
    pub image_ref: String,
    pub cta_href: &'static str,
    pub cta_label: &'static str,
}

impl From<&Item> for DetailContent {
    fn from(item: &Item) -> Self {
        Self {
            title: item.title.clone(),
            category: item.category.clone(),
            summary: item.summary.clone(),
            image_ref: item.image_ref.clone(),
            cta_href: DETAIL_CTA_HREF,
            cta_label: DETAIL_CTA_LABEL,
        }
    }
}

/// Open/closed state of the detail view.
#[derive(Clone, Debug, Default)]
pub struct DetailView {
    content: Option<DetailContent>,
    /// Set when a press started on the backdrop
    backdrop_pressed: bool,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while the view is shown (the container's `active` class)
    pub fn is_open(&self) -> bool {
        self.content.is_some()
    }

    pub fn content(&self) -> Option<&DetailContent> {
        self.content.as_ref()
    }

    /// Show `item`. Replaces any content already shown.
    pub fn open(&mut self, item: &Item) -> &DetailContent {
        debug!(title = %item.title, "Detail view opened");
        self.backdrop_pressed = false;
        self.content.insert(DetailContent::from(item))
    }

    /// Hide the view. Returns true if it was open.
    pub fn close(&mut self) -> bool {
        self.backdrop_pressed = false;
        let was_open = self.content.take().is_some();
        if was_open {
            debug!("Detail view closed");
        }
        was_open
    }

    /// The dismiss control was pressed
    pub fn dismiss(&mut self) -> bool {
        self.close()
    }

    /// Mouse down landed on the backdrop itself
    pub fn backdrop_mouse_down(&mut self) {
        if self.is_open() {
            self.backdrop_pressed = true;
        }
    }

    /// Mouse down landed on the card content
    pub fn content_mouse_down(&mut self) {
        self.backdrop_pressed = false;
    }

    /// Mouse up on the backdrop. Closes when the press also started there.
    pub fn backdrop_mouse_up(&mut self) -> bool {
        if std::mem::take(&mut self.backdrop_pressed) {
            self.close()
        } else {
            false
        }
    }
}
