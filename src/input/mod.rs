use macroquad::prelude::*;
use crate::application::GameLoop;
use crate::domain::{Direction, Intent};

/// Map a released key to an intent. Unbound keys give `None`.
pub fn decode(key: KeyCode) -> Option<Intent> {
    let intent = match key {
        KeyCode::Left | KeyCode::A => Intent::Move(Direction::Left),
        KeyCode::Up | KeyCode::W => Intent::Move(Direction::Up),
        KeyCode::Right | KeyCode::D => Intent::Move(Direction::Right),
        KeyCode::Down | KeyCode::S => Intent::Move(Direction::Down),
        KeyCode::Space | KeyCode::Enter => Intent::Restart,
        _ => return None,
    };
    Some(intent)
}

/// Queue every key released since the last frame
pub fn poll(game: &mut GameLoop) {
    get_keys_released()
        .into_iter()
        .filter_map(decode)
        .for_each(|intent| game.push_intent(intent));
}
