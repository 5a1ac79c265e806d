//! Parallax layers (`[data-parallax]`).

use crate::constants::DEFAULT_PARALLAX_RATE;

/// A layer that moves with the scroll at a fraction of its speed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxLayer {
    /// `data-parallax`; unset means `DEFAULT_PARALLAX_RATE`
    pub rate: Option<f32>,
}

impl ParallaxLayer {
    pub fn new(rate: Option<f32>) -> Self {
        Self { rate }
    }

    pub fn rate(&self) -> f32 {
        self.rate.unwrap_or(DEFAULT_PARALLAX_RATE)
    }
}

/// All parallax layers on the page. Inert when there are none.
#[derive(Clone, Debug, Default)]
pub struct Parallax {
    layers: Vec<ParallaxLayer>,
}

impl Parallax {
    pub fn new(layers: Vec<ParallaxLayer>) -> Self {
        Self { layers }
    }

    pub fn is_active(&self) -> bool {
        !self.layers.is_empty()
    }

    pub fn layers(&self) -> &[ParallaxLayer] {
        &self.layers
    }

    /// Vertical translate per layer for page offset `scroll_y`
    pub fn on_scroll(&self, scroll_y: f32) -> Vec<f32> {
        self.layers.iter().map(|layer| scroll_y * layer.rate()).collect()
    }
}
