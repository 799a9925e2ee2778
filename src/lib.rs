// Domain layer - board, entities and the hit/goal rules
pub mod domain;

// Application layer - world context, clock and the game loop
pub mod application;

// Infrastructure layer - rendering and input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Direction, Enemy, Intent, Player};
pub use application::{GameConfig, GameLoop, Phase, TickReport, World};
pub use rendering::{RenderError, Sprites};
