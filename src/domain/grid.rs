/// Number of columns on the board
pub const NUM_COLS: i32 = 5;
/// Number of rows on the board (row 0 is the goal row)
pub const NUM_ROWS: i32 = 6;

/// Pixel width of one cell (also the width of every sprite)
pub const CELL_WIDTH: f32 = 101.0;
/// Pixel height of one cell
pub const CELL_HEIGHT: f32 = 83.0;

/// Board size in pixels. The extra height below the last row
/// holds the lower half of the bottom tile sprites.
pub const BOARD_WIDTH: f32 = NUM_COLS as f32 * CELL_WIDTH;
pub const BOARD_HEIGHT: f32 = 606.0;

/// Rows that enemies travel along
pub const ENEMY_LANES: [i32; 3] = [1, 2, 3];

/// Row index the player must reach to score
pub const GOAL_ROW: i32 = 0;

/// Direction of a single player step
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// (col, row) offset of one step
    const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// Discrete board coordinate.
/// Construct through `Cell::new` or `Cell::START` to keep it in bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    /// Where the player spawns and returns to after a collision or a goal
    pub const START: Cell = Cell { col: 2, row: NUM_ROWS - 1 };

    /// Create a cell, clamping both axes onto the board
    pub fn new(col: i32, row: i32) -> Self {
        Self {
            col: col.clamp(0, NUM_COLS - 1),
            row: row.clamp(0, NUM_ROWS - 1),
        }
    }

    pub const fn in_bounds(self) -> bool {
        self.col >= 0 && self.col < NUM_COLS && self.row >= 0 && self.row < NUM_ROWS
    }

    /// Neighbouring cell in `direction`; stepping off the board is a no-op
    pub fn step(self, direction: Direction) -> Self {
        let (dc, dr) = direction.delta();
        Self::new(self.col + dc, self.row + dr)
    }

    pub const fn is_goal(self) -> bool {
        self.row == GOAL_ROW
    }

    /// Pixel position of this cell for a sprite nudged by `vertical_adjust`
    pub fn to_pixel(self, vertical_adjust: f32) -> (f32, f32) {
        cell_to_pixel(self.col, self.row, vertical_adjust)
    }
}

/// Affine map from grid coordinates to pixel coordinates
pub fn cell_to_pixel(col: i32, row: i32, vertical_adjust: f32) -> (f32, f32) {
    (
        col as f32 * CELL_WIDTH,
        row as f32 * CELL_HEIGHT + vertical_adjust,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_cells() -> impl Iterator<Item = Cell> {
        (0..NUM_ROWS).flat_map(|row| (0..NUM_COLS).map(move |col| Cell { col, row }))
    }

    #[test]
    fn test_cell_to_pixel_is_affine() {
        assert_eq!(cell_to_pixel(0, 0, 0.0), (0.0, 0.0));
        assert_eq!(cell_to_pixel(2, 5, -10.0), (202.0, 405.0));
        assert_eq!(cell_to_pixel(4, 3, -20.0), (404.0, 229.0));
    }

    #[test]
    fn test_start_cell_is_bottom_middle() {
        assert_eq!(Cell::START, Cell { col: 2, row: 5 });
        assert!(Cell::START.in_bounds());
    }

    #[test]
    fn test_step_never_leaves_board() {
        for cell in all_cells() {
            for direction in Direction::ALL {
                assert!(cell.step(direction).in_bounds(), "{cell:?} {direction:?}");
            }
        }
    }

    #[test]
    fn test_step_at_boundary_is_noop() {
        let top_left = Cell { col: 0, row: 0 };
        assert_eq!(top_left.step(Direction::Left), top_left);
        assert_eq!(top_left.step(Direction::Up), top_left);

        let bottom_right = Cell { col: NUM_COLS - 1, row: NUM_ROWS - 1 };
        assert_eq!(bottom_right.step(Direction::Right), bottom_right);
        assert_eq!(bottom_right.step(Direction::Down), bottom_right);
    }

    #[test]
    fn test_step_moves_one_cell() {
        let cell = Cell { col: 2, row: 3 };
        assert_eq!(cell.step(Direction::Left), Cell { col: 1, row: 3 });
        assert_eq!(cell.step(Direction::Up), Cell { col: 2, row: 2 });
        assert_eq!(cell.step(Direction::Right), Cell { col: 3, row: 3 });
        assert_eq!(cell.step(Direction::Down), Cell { col: 2, row: 4 });
    }

    #[test]
    fn test_board_width_matches_columns() {
        assert_eq!(BOARD_WIDTH, 505.0);
    }
}
