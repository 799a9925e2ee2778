use super::collision::Span;
use super::grid::{Cell, Direction, CELL_WIDTH};

/// Lives at the start of a game
pub const MAX_LIVES: u32 = 3;
/// Points for reaching the goal row
pub const GOAL_BONUS: u32 = 100;
/// Vertical nudge that centres the player sprite in its row
pub const PLAYER_VERTICAL_ADJUST: f32 = -10.0;

/// The player occupies exactly one cell at a time.
/// `lives == 0` means the game is over; nothing but `restart` changes it then.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub cell: Cell,
    pub lives: u32,
    pub score: u32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            cell: Cell::START,
            lives: MAX_LIVES,
            score: 0,
        }
    }

    pub const fn is_game_over(&self) -> bool {
        self.lives == 0
    }

    /// Step one cell in `direction`, clamped to the board.
    /// Ignored while the game is over.
    pub fn apply_move(&mut self, direction: Direction) {
        if self.is_game_over() {
            return;
        }
        self.cell = self.cell.step(direction);
    }

    /// Start a fresh game. Only has an effect while the game is over.
    /// Returns true when the restart happened.
    pub fn restart(&mut self) -> bool {
        if !self.is_game_over() {
            return false;
        }
        self.lives = MAX_LIVES;
        self.score = 0;
        self.reset_position();
        true
    }

    pub fn reset_position(&mut self) {
        self.cell = Cell::START;
    }

    /// Hit by an enemy: back to start and one life fewer
    pub fn lose_life(&mut self) {
        self.reset_position();
        self.lives = self.lives.saturating_sub(1);
    }

    /// Reached the goal row: back to start with the bonus
    pub fn score_goal(&mut self) {
        self.reset_position();
        self.score = self.score.saturating_add(GOAL_BONUS);
    }

    /// Horizontal extent of the player sprite in pixels
    pub fn span(&self) -> Span {
        let left = self.cell.col as f32 * CELL_WIDTH;
        Span::new(left, left + CELL_WIDTH)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
