mod collision;
mod enemy;
mod grid;
mod intent;
mod player;

pub use collision::{check_collisions, check_goal, is_hit, Span, HIT_MARGIN};
pub use enemy::{
    is_valid_speed_range, Enemy, EnemyKind, Motion, ENEMY_VERTICAL_ADJUST, RESPAWN_OFFSET, RESPAWN_SLOTS, SPEED_RANGE,
    WRAP_MARGIN,
};
pub use grid::{
    cell_to_pixel, Cell, Direction, BOARD_HEIGHT, BOARD_WIDTH, CELL_HEIGHT, CELL_WIDTH,
    ENEMY_LANES, GOAL_ROW, NUM_COLS, NUM_ROWS,
};
pub use intent::Intent;
pub use player::{Player, GOAL_BONUS, MAX_LIVES, PLAYER_VERTICAL_ADJUST};
