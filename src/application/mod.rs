mod config;
mod game_loop;
mod world;

pub use config::GameConfig;
pub use game_loop::{GameLoop, Phase};
pub use world::{TickReport, World};
