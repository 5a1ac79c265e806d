//! Page lifecycle - builds every controller once and drives them per frame.

use crate::carousel::{CarouselGeometry, Coverflow, NavigationUpdate};
use crate::constants::PERF_SUMMARY_INTERVAL_FRAMES;
use crate::error::SettingsResult;
use crate::form::FormHandler;
use crate::nav::Navigation;
use crate::perf::{measure, PerfMonitor};
use crate::reveal::RevealTracker;
use crate::scroll::{MomentumController, MomentumStep, Parallax, ParallaxLayer, ScrollLayer, SmoothScroll};
use crate::settings::Settings;
use crate::settings_watcher::{SettingsEvent, SettingsWatcher};
use crate::slideshow::{ArrowDebounce, SlideChange, Slideshow};
use crate::types::Item;
use anyhow::Context as _;

/// What the host page contains. Counts and attributes come from the DOM.
#[derive(Clone, Debug, Default)]
pub struct PageLayout {
    pub catalog: Vec<Item>,
    pub slide_count: usize,
    pub scroll_layers: Vec<ScrollLayer>,
    pub parallax_layers: Vec<ParallaxLayer>,
    pub dropdown_count: usize,
    pub reveal_count: usize,
    /// `action` and submit label of the contact form, if the page has one
    pub contact_form: Option<(String, String)>,
    pub viewport_width: f32,
    pub touch_capable: bool,
}

/// Style changes produced by one animation frame
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameUpdate {
    pub slide: Option<SlideChange>,
    /// Translate per scroll layer, only while smooth scroll is moving
    pub scroll_layers: Option<Vec<f32>>,
    pub momentum: Option<MomentumStep>,
}

impl FrameUpdate {
    pub fn is_idle(&self) -> bool {
        self.slide.is_none() && self.scroll_layers.is_none() && self.momentum.is_none()
    }
}

/// Owner of all interaction controllers for one page view.
pub struct Page {
    pub settings: Settings,
    pub coverflow: Option<Coverflow>,
    pub slideshow: Slideshow,
    pub slideshow_arrows: ArrowDebounce,
    pub smooth_scroll: SmoothScroll,
    pub scroll_layers: Vec<ScrollLayer>,
    pub momentum: MomentumController,
    pub parallax: Parallax,
    pub nav: Navigation,
    pub reveal: RevealTracker,
    pub form: Option<FormHandler>,
    pub perf: PerfMonitor,
    settings_watcher: Option<SettingsWatcher>,
}

impl Page {
    /// Build every controller. A page without a catalog has no carousel.
    pub fn new(layout: PageLayout, settings: Settings) -> anyhow::Result<Self> {
        settings.validate().context("invalid settings")?;

        let coverflow = if layout.catalog.is_empty() {
            None
        } else {
            let coverflow = Coverflow::from_settings(layout.catalog, &settings, layout.touch_capable)
                .context("failed to build carousel")?;
            Some(coverflow)
        };

        let mut slideshow = Slideshow::new(layout.slide_count, settings.slideshow.clone());
        slideshow.start();

        let form = layout
            .contact_form
            .and_then(|(action, label)| FormHandler::for_action(&action, label));

        tracing::info!(
            carousel = coverflow.is_some(),
            slides = layout.slide_count,
            form = form.is_some(),
            "Page initialized"
        );

        Ok(Self {
            coverflow,
            slideshow,
            slideshow_arrows: ArrowDebounce::new(),
            smooth_scroll: SmoothScroll::new(settings.scroll.ease),
            scroll_layers: layout.scroll_layers,
            momentum: MomentumController::new(settings.scroll.momentum.clone())?,
            parallax: Parallax::new(layout.parallax_layers),
            nav: Navigation::new(layout.dropdown_count, layout.viewport_width),
            reveal: RevealTracker::observe(layout.reveal_count),
            form,
            perf: PerfMonitor::new(),
            settings_watcher: None,
            settings,
        })
    }

    /// Build with settings from the default location and start watching them.
    pub fn from_default_settings(layout: PageLayout) -> anyhow::Result<Self> {
        let mut page = Self::new(layout, Settings::load())?;
        if let Some(path) = crate::settings_watcher::default_settings_path() {
            match SettingsWatcher::new(path) {
                Ok(watcher) => page.settings_watcher = Some(watcher),
                Err(e) => tracing::warn!("Settings hot reload unavailable: {}", e),
            }
        }
        Ok(page)
    }

    pub fn watch_settings(&mut self, watcher: SettingsWatcher) {
        self.settings_watcher = Some(watcher);
    }

    /// Window scrolled to `scroll_y`. Returns parallax translates.
    pub fn on_scroll(&mut self, scroll_y: f32, sections: &[crate::nav::SectionBounds]) -> Vec<f32> {
        self.smooth_scroll.on_scroll(scroll_y);
        self.momentum.set_position(scroll_y);
        self.nav.on_scroll(scroll_y, sections);
        self.parallax.on_scroll(scroll_y)
    }

    /// Run one animation frame at `now_ms`.
    pub fn frame(&mut self, now_ms: f64) -> FrameUpdate {
        self.perf.begin_frame();

        let slide = self.slideshow.tick(now_ms);
        let scroll_layers = self
            .smooth_scroll
            .tick()
            .map(|_| self.smooth_scroll.layer_offsets(&self.scroll_layers));
        let (momentum, momentum_ms) = measure(|| self.momentum.tick());
        self.perf.record_operation("momentum_tick", momentum_ms);

        self.perf.end_frame();
        if self.perf.total_frames() % PERF_SUMMARY_INTERVAL_FRAMES == 0 {
            self.perf.log_summary_if_slow();
        }
        FrameUpdate {
            slide,
            scroll_layers,
            momentum,
        }
    }

    /// Apply a changed settings file. Returns the new carousel layout if
    /// the carousel geometry changed.
    pub fn apply_settings(&mut self, settings: Settings) -> SettingsResult<Option<NavigationUpdate>> {
        settings.validate()?;
        self.momentum.set_config(settings.scroll.momentum.clone())?;
        self.smooth_scroll.set_ease(settings.scroll.ease);
        self.slideshow.set_options(settings.slideshow.clone());

        let relayout = match self.coverflow.as_mut() {
            Some(coverflow) => {
                coverflow.set_non_center_click(settings.interaction.non_center_click);
                coverflow.set_tap_threshold(settings.interaction.tap_max_ms);
                (settings.carousel != self.settings.carousel)
                    .then(|| coverflow.set_geometry(settings.carousel.clone()))
            }
            None => None,
        };
        self.settings = settings;
        Ok(relayout)
    }

    /// Check for settings file changes and reload if needed.
    pub fn check_settings_reload(&mut self) -> Option<NavigationUpdate> {
        let event = self.settings_watcher.as_mut()?.poll()?;
        match event {
            SettingsEvent::Modified | SettingsEvent::Created => {
                let path = self.settings_watcher.as_ref()?.path().to_path_buf();
                tracing::info!("Settings file changed, reloading...");
                match Settings::load_from(&path).and_then(|s| self.apply_settings(s)) {
                    Ok(relayout) => relayout,
                    Err(e) => {
                        tracing::warn!("Ignoring invalid settings: {}", e);
                        None
                    }
                }
            }
            SettingsEvent::Deleted => {
                tracing::warn!("Settings file deleted");
                None
            }
            SettingsEvent::Error(e) => {
                tracing::error!("Settings watch error: {}", e);
                None
            }
        }
    }

    /// Current carousel geometry, if the page has a carousel
    pub fn carousel_geometry(&self) -> Option<&CarouselGeometry> {
        self.coverflow.as_ref().map(|c| c.carousel().geometry())
    }
}
