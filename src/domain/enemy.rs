//! Enemies travel left to right along a lane at a constant speed and
//! re-enter from the left after leaving the board.

use std::ops::Range;

use rand::Rng;

use super::collision::Span;
use super::grid::{cell_to_pixel, BOARD_WIDTH, CELL_WIDTH};

/// Vertical nudge that centres an enemy sprite in its lane
pub const ENEMY_VERTICAL_ADJUST: f32 = -20.0;

/// How far past the right edge an enemy travels before wrapping
pub const WRAP_MARGIN: f32 = 0.0;

/// Respawn slots are drawn from this range, then scaled by `RESPAWN_OFFSET`
pub const RESPAWN_SLOTS: std::ops::RangeInclusive<i32> = 1..=4;
pub const RESPAWN_OFFSET: f32 = CELL_WIDTH;

/// Default speed range in pixels per second
pub const SPEED_RANGE: Range<f32> = 100.0..400.0;

/// Finite, non-empty and strictly positive
pub fn is_valid_speed_range(range: &Range<f32>) -> bool {
    range.start.is_finite() && range.end.is_finite() && 0.0 < range.start && range.start < range.end
}

/// Enemy variants. Each one only decides how it is drawn;
/// movement comes from the `Motion` it carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum EnemyKind {
    #[default]
    Bug,
}

/// Horizontal motion profile, fixed for the enemy's lifetime
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    /// Pixels per second, rightward
    pub speed: f32,
}

impl Motion {
    pub const fn constant(speed: f32) -> Self {
        Self { speed }
    }

    /// Pick a speed uniformly from `range`, or from `SPEED_RANGE`
    /// when `range` is not a usable speed range
    pub fn random(rng: &mut impl Rng, range: Range<f32>) -> Self {
        let range = if is_valid_speed_range(&range) { range } else { SPEED_RANGE };
        Self { speed: rng.random_range(range) }
    }

    /// Horizontal displacement over `dt` seconds
    pub fn displacement(&self, dt: f32) -> f32 {
        self.speed * dt
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub lane: i32,
    pub x: f32,
    pub y: f32,
    pub motion: Motion,
}

impl Enemy {
    /// Create an enemy in `lane` at an explicit position and speed
    pub fn new(lane: i32, x: f32, motion: Motion) -> Self {
        let (_, y) = cell_to_pixel(0, lane, ENEMY_VERTICAL_ADJUST);
        Self {
            kind: EnemyKind::Bug,
            lane,
            x,
            y,
            motion,
        }
    }

    /// Create an enemy offscreen left with a random delay and speed
    pub fn spawn(lane: i32, speeds: Range<f32>, rng: &mut impl Rng) -> Self {
        let motion = Motion::random(rng, speeds);
        Self::new(lane, respawn_x(rng), motion)
    }

    pub fn speed(&self) -> f32 {
        self.motion.speed
    }

    /// Move right by `speed * dt`, wrapping back offscreen left once past
    /// the board. Returns true when a wrap happened.
    pub fn advance(&mut self, dt: f32, rng: &mut impl Rng) -> bool {
        self.x += self.motion.displacement(dt);
        if self.x >= BOARD_WIDTH + WRAP_MARGIN {
            self.x = respawn_x(rng);
            return true;
        }
        false
    }

    /// Horizontal extent of the sprite in pixels
    pub fn span(&self) -> Span {
        Span::new(self.x, self.x + CELL_WIDTH)
    }
}

/// Negative x offset used for both the initial spawn and wraparound
fn respawn_x(rng: &mut impl Rng) -> f32 {
    -(rng.random_range(RESPAWN_SLOTS) as f32) * RESPAWN_OFFSET
}
