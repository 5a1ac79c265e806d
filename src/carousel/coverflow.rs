//! Coverflow - the carousel wired to its arrows, cards and detail view.

use super::detail::{DetailContent, DetailView};
use super::intent::{Intent, InteractionResolver, NonCenterClick};
use super::slot::CarouselGeometry;
use super::state::{CircularCarousel, NavigationUpdate};
use crate::error::CarouselResult;
use crate::settings::Settings;
use crate::types::Item;

/// Host-visible effect of a card press
#[derive(Clone, Debug, PartialEq)]
pub struct PressOutcome {
    /// Set when the press moved the cursor first
    pub navigation: Option<NavigationUpdate>,
    /// Set when the detail view was opened
    pub detail: Option<DetailContent>,
    /// Host should call preventDefault/stopPropagation
    pub consumed: bool,
}

impl PressOutcome {
    fn ignored() -> Self {
        Self {
            navigation: None,
            detail: None,
            consumed: false,
        }
    }
}

/// Carousel with its input handling and detail view.
#[derive(Clone, Debug)]
pub struct Coverflow {
    carousel: CircularCarousel,
    detail: DetailView,
    resolver: InteractionResolver,
}

impl Coverflow {
    pub fn new(items: Vec<Item>, geometry: CarouselGeometry, resolver: InteractionResolver) -> CarouselResult<Self> {
        Ok(Self {
            carousel: CircularCarousel::with_geometry(items, geometry)?,
            detail: DetailView::new(),
            resolver,
        })
    }

    /// Build from the carousel and interaction sections of `settings`.
    pub fn from_settings(items: Vec<Item>, settings: &Settings, touch_capable: bool) -> CarouselResult<Self> {
        let resolver = InteractionResolver::new(touch_capable, settings.interaction.non_center_click)
            .with_tap_threshold(settings.interaction.tap_max_ms);
        Self::new(items, settings.carousel.clone(), resolver)
    }

    pub fn carousel(&self) -> &CircularCarousel {
        &self.carousel
    }

    pub fn detail(&self) -> &DetailView {
        &self.detail
    }

    pub fn detail_mut(&mut self) -> &mut DetailView {
        &mut self.detail
    }

    /// Next arrow
    pub fn next(&mut self) -> NavigationUpdate {
        self.carousel.advance()
    }

    /// Previous arrow
    pub fn prev(&mut self) -> NavigationUpdate {
        self.carousel.retreat()
    }

    pub fn set_geometry(&mut self, geometry: CarouselGeometry) -> NavigationUpdate {
        self.carousel.set_geometry(geometry);
        self.carousel.initial_layout()
    }

    pub fn set_non_center_click(&mut self, policy: NonCenterClick) {
        self.resolver.set_non_center_click(policy);
    }

    pub fn set_tap_threshold(&mut self, tap_max_ms: f64) {
        self.resolver.set_tap_threshold(tap_max_ms);
    }

    pub fn touch_start(&mut self, now_ms: f64) {
        self.resolver.touch_start(now_ms);
    }

    pub fn touch_end(&mut self, now_ms: f64, card: Option<usize>) -> CarouselResult<PressOutcome> {
        let intent = self.resolver.touch_end(now_ms, card, self.carousel.cursor());
        self.apply(intent)
    }

    pub fn click(&mut self, card: Option<usize>) -> CarouselResult<PressOutcome> {
        let intent = self.resolver.click(card, self.carousel.cursor());
        self.apply(intent)
    }

    /// Carry out a resolved intent.
    pub fn apply(&mut self, intent: Intent) -> CarouselResult<PressOutcome> {
        match intent {
            Intent::None => Ok(PressOutcome::ignored()),
            Intent::Select => Ok(PressOutcome {
                navigation: None,
                detail: Some(self.open_current()),
                consumed: true,
            }),
            Intent::NavigateThenSelect { target } => {
                let navigation = self.carousel.jump_to(target)?;
                Ok(PressOutcome {
                    navigation,
                    detail: Some(self.open_current()),
                    consumed: true,
                })
            }
        }
    }

    fn open_current(&mut self) -> DetailContent {
        let item = self.carousel.select_current();
        self.detail.open(item).clone()
    }
}
