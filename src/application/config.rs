use std::ops::Range;

use crate::domain::{is_valid_speed_range, SPEED_RANGE};

/// Tunables for building a `World`
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// Enemies on the board; lanes are filled round-robin
    pub enemy_count: usize,
    /// Fixed RNG seed for reproducible runs; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Enemy speeds in pixels per second, always a valid range
    speed_range: Range<f32>,
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_enemy_count(mut self, count: usize) -> Self {
        self.enemy_count = count;
        self
    }

    /// Use `range` for enemy speeds. A range that is empty, reversed,
    /// non-finite or not strictly positive is rejected and the current one kept.
    pub fn with_speed_range(mut self, range: Range<f32>) -> Self {
        if is_valid_speed_range(&range) {
            self.speed_range = range;
        } else {
            log::warn!("ignoring invalid enemy speed range {range:?}");
        }
        self
    }

    pub fn speed_range(&self) -> Range<f32> {
        self.speed_range.clone()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            enemy_count: 5,
            seed: None,
            speed_range: SPEED_RANGE,
        }
    }
}
