//! Slot projection - maps a card's circular distance from the cursor to its
//! visual treatment.
//!
//! Everything here is a pure function of `(index, cursor, len, geometry)`.
//! It runs once per card on every navigation, so nothing allocates.

use crate::constants::{
    ADJACENT_BLUR_PX, ADJACENT_OFFSET_PX, ADJACENT_OPACITY, ADJACENT_SCALE, ADJACENT_Z_INDEX,
    CAROUSEL_TRANSITION_MS, CENTER_Z_INDEX, FAR_SCALE, FAR_STEP_PX, FAR_Z_INDEX,
};
use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};

/// Visual treatment bucket for a card
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// The focused card
    Center,
    /// One step away from the focused card
    Adjacent,
    /// Two or more steps away; fully transparent
    Far,
}

/// Which side of the center card an adjacent card sits on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Right when the forward offset is at most half the ring, left otherwise.
    #[inline]
    pub fn from_forward_offset(forward: usize, len: usize) -> Self {
        if forward * 2 <= len { Side::Right } else { Side::Left }
    }

    #[inline]
    fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// How hidden cards compute their horizontal offset
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FarOffsetMode {
    /// Signed shortest offset around the ring; cards mirror around the center
    #[default]
    Circular,
    /// Raw `index - cursor`; cards on the wrap side drift further out
    Raw,
}

/// Offsets, scales and timings for the three tiers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselGeometry {
    pub adjacent_offset_px: f32,
    pub adjacent_scale: f32,
    pub adjacent_opacity: f32,
    pub adjacent_blur_px: f32,
    pub far_step_px: f32,
    pub far_scale: f32,
    pub far_offset_mode: FarOffsetMode,
    pub transition_ms: u32,
}

impl Default for CarouselGeometry {
    fn default() -> Self {
        Self {
            adjacent_offset_px: ADJACENT_OFFSET_PX,
            adjacent_scale: ADJACENT_SCALE,
            adjacent_opacity: ADJACENT_OPACITY,
            adjacent_blur_px: ADJACENT_BLUR_PX,
            far_step_px: FAR_STEP_PX,
            far_scale: FAR_SCALE,
            far_offset_mode: FarOffsetMode::default(),
            transition_ms: CAROUSEL_TRANSITION_MS,
        }
    }
}

impl CarouselGeometry {
    /// Reject values the host cannot render: opacity outside [0, 1],
    /// non-positive scales, non-finite offsets or blur, or a zero-length transition.
    pub fn validate(&self) -> SettingsResult<()> {
        let invalid = |field: &'static str, reason: String| -> SettingsResult<()> {
            Err(SettingsError::Invalid { field, reason })
        };

        if !(0.0..=1.0).contains(&self.adjacent_opacity) {
            return invalid("carousel.adjacent_opacity", format!("{} is not in [0, 1]", self.adjacent_opacity));
        }
        for (field, scale) in [
            ("carousel.adjacent_scale", self.adjacent_scale),
            ("carousel.far_scale", self.far_scale),
        ] {
            if !(scale.is_finite() && scale > 0.0) {
                return invalid(field, format!("{scale} is not a positive scale"));
            }
        }
        for (field, px) in [
            ("carousel.adjacent_offset_px", self.adjacent_offset_px),
            ("carousel.far_step_px", self.far_step_px),
        ] {
            if !px.is_finite() {
                return invalid(field, "must be finite".to_string());
            }
        }
        if !(self.adjacent_blur_px.is_finite() && self.adjacent_blur_px >= 0.0) {
            return invalid("carousel.adjacent_blur_px", "must not be negative".to_string());
        }
        if self.transition_ms == 0 {
            return invalid("carousel.transition_ms", "must be positive".to_string());
        }
        Ok(())
    }
}

/// Style targets for one card. The host interpolates between successive values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderParams {
    pub tier: Tier,
    /// Only set for adjacent cards
    pub side: Option<Side>,
    pub translate_x: f32,
    pub scale: f32,
    pub opacity: f32,
    pub blur_px: f32,
    pub z_index: i32,
}

impl RenderParams {
    /// The identity transform used for the center card
    pub const CENTER: RenderParams = RenderParams {
        tier: Tier::Center,
        side: None,
        translate_x: 0.0,
        scale: 1.0,
        opacity: 1.0,
        blur_px: 0.0,
        z_index: CENTER_Z_INDEX,
    };

    /// CSS `transform` value, e.g. `translateX(150px) scale(0.7)`
    pub fn transform_css(&self) -> String {
        if self.translate_x == 0.0 {
            format!("translateX(0) scale({})", self.scale)
        } else {
            format!("translateX({}px) scale({})", self.translate_x, self.scale)
        }
    }

    /// CSS `filter` value
    pub fn filter_css(&self) -> String {
        if self.blur_px > 0.0 {
            format!("blur({}px)", self.blur_px)
        } else {
            "none".to_string()
        }
    }
}

/// Transition applied to cards for a layout pass
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// First layout: snap into place
    None,
    /// Later layouts: ease every animated property
    Ease { duration_ms: u32 },
}

impl Transition {
    pub fn css(&self) -> String {
        match self {
            Transition::None => "none".to_string(),
            Transition::Ease { duration_ms } => {
                let secs = *duration_ms as f32 / 1000.0;
                format!("transform {secs}s ease, opacity {secs}s ease, filter {secs}s ease")
            }
        }
    }
}

/// Steps forward from `cursor` to reach `index` on a ring of `len`.
#[inline]
pub fn forward_offset(index: usize, cursor: usize, len: usize) -> usize {
    (index + len - cursor % len) % len
}

/// Shortest number of steps between two positions on a ring of `len`.
#[inline]
pub fn circular_distance(a: usize, b: usize, len: usize) -> usize {
    let forward = forward_offset(a, b, len);
    let backward = forward_offset(b, a, len);
    forward.min(backward)
}

/// Signed shortest offset from `cursor` to `index`. Ties resolve forward.
#[inline]
pub fn signed_circular_offset(index: usize, cursor: usize, len: usize) -> i64 {
    let forward = forward_offset(index, cursor, len);
    if forward * 2 <= len {
        forward as i64
    } else {
        forward as i64 - len as i64
    }
}

/// Tier for a card at `index` with the carousel focused on `cursor`.
#[inline]
pub fn tier_for(index: usize, cursor: usize, len: usize) -> Tier {
    match circular_distance(index, cursor, len) {
        0 => Tier::Center,
        1 => Tier::Adjacent,
        _ => Tier::Far,
    }
}

/// Render params for one card using the default geometry.
#[inline]
pub fn compute_slot(index: usize, cursor: usize, len: usize) -> RenderParams {
    compute_slot_with(index, cursor, len, &CarouselGeometry::default())
}

/// Render params for one card.
///
/// `len` must be non-zero and `index`, `cursor` must be below it.
pub fn compute_slot_with(
    index: usize,
    cursor: usize,
    len: usize,
    geometry: &CarouselGeometry,
) -> RenderParams {
    match tier_for(index, cursor, len) {
        Tier::Center => RenderParams::CENTER,
        Tier::Adjacent => {
            let side = Side::from_forward_offset(forward_offset(index, cursor, len), len);
            RenderParams {
                tier: Tier::Adjacent,
                side: Some(side),
                translate_x: side.sign() * geometry.adjacent_offset_px,
                scale: geometry.adjacent_scale,
                opacity: geometry.adjacent_opacity,
                blur_px: geometry.adjacent_blur_px,
                z_index: ADJACENT_Z_INDEX,
            }
        }
        Tier::Far => {
            let offset = match geometry.far_offset_mode {
                FarOffsetMode::Circular => signed_circular_offset(index, cursor, len),
                FarOffsetMode::Raw => index as i64 - cursor as i64,
            };
            RenderParams {
                tier: Tier::Far,
                side: None,
                translate_x: offset as f32 * geometry.far_step_px,
                scale: geometry.far_scale,
                opacity: 0.0,
                blur_px: 0.0,
                z_index: FAR_Z_INDEX,
            }
        }
    }
}
