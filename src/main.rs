use macroquad::prelude::*;
use frogger::{
    GameConfig, GameLoop, World,
    domain::{BOARD_HEIGHT, BOARD_WIDTH},
    rendering::{self, Sprites},
    input,
};

const ASSET_DIR: &str = "assets";

fn window_conf() -> Conf {
    Conf {
        window_title: "Frogger".to_owned(),
        window_width: BOARD_WIDTH as i32,
        window_height: BOARD_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    // The loop only starts once every sprite is available
    let sprites = match Sprites::load(ASSET_DIR).await {
        Ok(sprites) => sprites,
        Err(err) => {
            log::warn!("{err}; falling back to placeholder sprites");
            Sprites::placeholder()
        }
    };

    let mut game = GameLoop::new(World::new(&GameConfig::default()));
    log::info!("starting with {} enemies", game.world.enemies.len());

    let mut render_failed = false;
    loop {
        input::poll(&mut game);
        game.step_dt(get_frame_time());

        // report a render failure once, not every frame
        match rendering::draw_frame(&game, &sprites) {
            Ok(()) => render_failed = false,
            Err(err) if !render_failed => {
                log::error!("render failed: {err}");
                render_failed = true;
            }
            Err(_) => {}
        }

        next_frame().await;
    }
}
