//! Reveal-on-scroll class state.
//!
//! Observed elements start with the `loading` class and switch to `loaded`
//! the first time the host's intersection observer reports them visible.

use crate::constants::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

/// Class state of one observed element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Loading,
    Loaded,
}

impl RevealState {
    pub fn class_name(&self) -> &'static str {
        match self {
            RevealState::Loading => "loading",
            RevealState::Loaded => "loaded",
        }
    }
}

/// Options handed to the host's intersection observer
#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f32,
    pub root_margin: &'static str,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin: REVEAL_ROOT_MARGIN,
        }
    }
}

/// One intersection observer callback entry
#[derive(Clone, Copy, Debug)]
pub struct IntersectionEntry {
    pub element: usize,
    pub is_intersecting: bool,
}

/// Tracks every observed element.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    states: Vec<RevealState>,
    options: RevealOptions,
}

impl RevealTracker {
    /// Observe `count` elements, all starting in `Loading`.
    pub fn observe(count: usize) -> Self {
        Self {
            states: vec![RevealState::Loading; count],
            options: RevealOptions::default(),
        }
    }

    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    pub fn state(&self, element: usize) -> Option<RevealState> {
        self.states.get(element).copied()
    }

    pub fn loaded_count(&self) -> usize {
        self.states.iter().filter(|s| **s == RevealState::Loaded).count()
    }

    /// Apply observer entries. Returns the elements that just became loaded.
    pub fn on_intersection(&mut self, entries: &[IntersectionEntry]) -> Vec<usize> {
        let mut revealed = Vec::new();
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            if let Some(state) = self.states.get_mut(entry.element) {
                if *state == RevealState::Loading {
                    *state = RevealState::Loaded;
                    revealed.push(entry.element);
                }
            }
        }
        revealed
    }
}
