//! Wheel momentum.
//!
//! Wheel deltas feed a velocity that decays by `friction` every frame. The
//! controller is owned by the page and started/stopped explicitly; the
//! decay loop ends on its own once velocity drops below the threshold.

use crate::constants::{MOMENTUM_ACCELERATION, MOMENTUM_FRICTION, MOMENTUM_STOP_THRESHOLD};
use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Momentum tuning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MomentumConfig {
    /// Velocity multiplier per frame, in (0, 1)
    pub friction: f32,
    /// Fraction of each wheel delta added to velocity
    pub acceleration_factor: f32,
    /// Velocity magnitude at which the loop stops
    pub stop_threshold: f32,
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self {
            friction: MOMENTUM_FRICTION,
            acceleration_factor: MOMENTUM_ACCELERATION,
            stop_threshold: MOMENTUM_STOP_THRESHOLD,
        }
    }
}

impl MomentumConfig {
    pub fn validate(&self) -> SettingsResult<()> {
        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(SettingsError::Invalid {
                field: "momentum.friction",
                reason: format!("{} is not in (0, 1)", self.friction),
            });
        }
        if !(self.acceleration_factor > 0.0) {
            return Err(SettingsError::Invalid {
                field: "momentum.acceleration_factor",
                reason: format!("{} is not positive", self.acceleration_factor),
            });
        }
        if !(self.stop_threshold > 0.0) {
            return Err(SettingsError::Invalid {
                field: "momentum.stop_threshold",
                reason: format!("{} is not positive", self.stop_threshold),
            });
        }
        Ok(())
    }
}

/// Outcome of one momentum frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MomentumStep {
    /// Still moving; scroll to `position`
    Moving { position: f32, velocity: f32 },
    /// Velocity fell below the threshold; the loop is done
    Settled { position: f32 },
}

/// Wheel momentum state.
#[derive(Clone, Debug)]
pub struct MomentumController {
    config: MomentumConfig,
    velocity: f32,
    position: f32,
    running: bool,
}

impl MomentumController {
    pub fn new(config: MomentumConfig) -> SettingsResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            velocity: 0.0,
            position: 0.0,
            running: false,
        })
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn config(&self) -> &MomentumConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: MomentumConfig) -> SettingsResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Sync with the real scroll position (e.g. after the user drags the scrollbar)
    pub fn set_position(&mut self, position: f32) {
        self.position = position;
    }

    /// Add a wheel delta and make sure the decay loop is running.
    /// Non-finite deltas are dropped so the decay loop always settles.
    pub fn on_wheel(&mut self, delta_y: f32) {
        if !delta_y.is_finite() {
            return;
        }
        self.velocity += delta_y * self.config.acceleration_factor;
        self.start();
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop immediately, dropping any remaining velocity.
    pub fn stop(&mut self) {
        self.running = false;
        self.velocity = 0.0;
    }

    /// Step one frame. Returns None while stopped.
    pub fn tick(&mut self) -> Option<MomentumStep> {
        if !self.running {
            return None;
        }
        if self.velocity.abs() < self.config.stop_threshold {
            self.stop();
            return Some(MomentumStep::Settled {
                position: self.position,
            });
        }
        self.position += self.velocity;
        self.velocity *= self.config.friction;
        trace!(position = self.position, velocity = self.velocity, "Momentum step");
        Some(MomentumStep::Moving {
            position: self.position,
            velocity: self.velocity,
        })
    }
}
