use rand::SeedableRng;
use rand::rngs::StdRng;

use super::GameConfig;
use crate::domain::{check_collisions, check_goal, Enemy, Player, ENEMY_LANES};

/// Everything the simulation mutates, built once and handed to the loop
/// and the renderer.
pub struct World {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    rng: StdRng,
}

/// What a single simulation update did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Enemies that hit the player this tick
    pub collisions: u32,
    pub goal_reached: bool,
    /// Lives dropped to zero during this tick
    pub game_over_entered: bool,
    /// A restart intent was honoured this tick
    pub restarted: bool,
}

impl World {
    pub fn new(config: &GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let enemies = ENEMY_LANES
            .iter()
            .cycle()
            .take(config.enemy_count)
            .map(|&lane| Enemy::spawn(lane, config.speed_range(), &mut rng))
            .collect();

        Self {
            player: Player::new(),
            enemies,
            rng,
        }
    }

    /// Replace the enemy set, keeping the RNG
    pub fn with_enemies(mut self, enemies: Vec<Enemy>) -> Self {
        self.enemies = enemies;
        self
    }

    pub fn is_game_over(&self) -> bool {
        self.player.is_game_over()
    }

    /// Advance enemies, then test collisions, then the goal row.
    /// Collision runs first so an enemy on the goal approach wins the tie.
    pub fn update(&mut self, dt: f32) -> TickReport {
        let mut report = TickReport::default();
        if self.is_game_over() {
            return report;
        }

        for enemy in &mut self.enemies {
            if enemy.advance(dt, &mut self.rng) {
                log::debug!("enemy in lane {} wrapped to x={}", enemy.lane, enemy.x);
            }
        }

        report.collisions = check_collisions(&mut self.player, &self.enemies);
        if report.collisions > 0 {
            log::info!(
                "hit by {} enemy(s), {} lives left",
                report.collisions,
                self.player.lives
            );
        }

        report.goal_reached = check_goal(&mut self.player);
        if report.goal_reached {
            log::info!("goal reached, score {}", self.player.score);
        }

        report.game_over_entered = self.is_game_over();
        if report.game_over_entered {
            log::info!("game over with score {}", self.player.score);
        }
        report
    }
}
