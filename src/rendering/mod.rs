mod error;
pub mod greyscale;
mod sprites;

pub use error::RenderError;
pub use sprites::{SpriteKey, Sprites, SPRITE_HEIGHT, SPRITE_WIDTH};

use macroquad::prelude::*;
use crate::application::{GameLoop, Phase};
use crate::domain::{cell_to_pixel, Enemy, EnemyKind, Player, BOARD_HEIGHT, BOARD_WIDTH, NUM_COLS, NUM_ROWS, PLAYER_VERTICAL_ADJUST};

const HUD_FONT_SIZE: f32 = 30.0;
const BANNER_FONT_SIZE: u16 = 64;
const HINT_FONT_SIZE: u16 = 24;

/// Which tile a board row is paved with
pub fn row_tile(row: i32) -> SpriteKey {
    match row {
        0 => SpriteKey::WaterBlock,
        1..=3 => SpriteKey::StoneBlock,
        _ => SpriteKey::GrassBlock,
    }
}

fn enemy_sprite(kind: EnemyKind) -> SpriteKey {
    match kind {
        EnemyKind::Bug => SpriteKey::EnemyBug,
    }
}

/// Draw one full frame. In game over the frame is greyed out
/// and the banner drawn on top.
pub fn draw_frame(game: &GameLoop, sprites: &Sprites) -> Result<(), RenderError> {
    clear_background(WHITE);
    draw_board(sprites);
    draw_enemies(&game.world.enemies, sprites);
    draw_player(&game.world.player, sprites);
    draw_hud(&game.world.player);

    if game.phase() == Phase::GameOver {
        greyscale::desaturate_screen()?;
        draw_game_over(&game.world.player);
    }
    Ok(())
}

fn draw_board(sprites: &Sprites) {
    for row in 0..NUM_ROWS {
        let tile = sprites.get(row_tile(row));
        for col in 0..NUM_COLS {
            let (x, y) = cell_to_pixel(col, row, 0.0);
            draw_texture(tile, x, y, WHITE);
        }
    }
}

fn draw_enemies(enemies: &[Enemy], sprites: &Sprites) {
    for enemy in enemies {
        draw_texture(sprites.get(enemy_sprite(enemy.kind)), enemy.x, enemy.y, WHITE);
    }
}

fn draw_player(player: &Player, sprites: &Sprites) {
    let (x, y) = player.cell.to_pixel(PLAYER_VERTICAL_ADJUST);
    draw_texture(sprites.get(SpriteKey::CharBoy), x, y, WHITE);
}

fn draw_hud(player: &Player) {
    draw_text(&format!("Lives: {}", player.lives), 10.0, 35.0, HUD_FONT_SIZE, BLACK);

    let score = format!("Score: {}", player.score);
    let width = measure_text(&score, None, HUD_FONT_SIZE as u16, 1.0).width;
    draw_text(&score, BOARD_WIDTH - width - 10.0, 35.0, HUD_FONT_SIZE, BLACK);
}

/// Text with a dark outline so it reads on any tile
fn draw_outlined_text(text: &str, size: u16, y: f32) {
    let width = measure_text(text, None, size, 1.0).width;
    let x = (BOARD_WIDTH - width) / 2.0;
    for (dx, dy) in [(-2.0, 0.0), (2.0, 0.0), (0.0, -2.0), (0.0, 2.0)] {
        draw_text(text, x + dx, y + dy, size as f32, BLACK);
    }
    draw_text(text, x, y, size as f32, WHITE);
}

fn draw_game_over(player: &Player) {
    let middle = BOARD_HEIGHT / 2.0;
    draw_outlined_text("GAME OVER", BANNER_FONT_SIZE, middle);
    draw_outlined_text(&format!("Final score: {}", player.score), HINT_FONT_SIZE, middle + 45.0);
    draw_outlined_text("Press Space to restart", HINT_FONT_SIZE, middle + 80.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_layout() {
        let tiles: Vec<SpriteKey> = (0..NUM_ROWS).map(row_tile).collect();
        assert_eq!(
            tiles,
            vec![
                SpriteKey::WaterBlock,
                SpriteKey::StoneBlock,
                SpriteKey::StoneBlock,
                SpriteKey::StoneBlock,
                SpriteKey::GrassBlock,
                SpriteKey::GrassBlock,
            ]
        );
    }

    #[test]
    fn test_enemy_lanes_are_stone() {
        for lane in crate::domain::ENEMY_LANES {
            assert_eq!(row_tile(lane), SpriteKey::StoneBlock);
        }
    }
}
