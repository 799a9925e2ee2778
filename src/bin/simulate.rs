//! Headless run of the game loop with a scripted player
//!
//! Usage: simulate [seed] [ticks]

use std::time::Instant;
use frogger::{GameConfig, GameLoop, Intent, Phase, World, Direction};

const DT: f32 = 1.0 / 60.0;

#[derive(Default)]
struct Totals {
    goals: u32,
    collisions: u32,
    game_overs: u32,
    restarts: u32,
}

/// Hop up every `hop_every` ticks, restart as soon as the game ends
fn run(seed: u64, ticks: u32, hop_every: u32) -> (Totals, f64) {
    let mut game = GameLoop::new(World::new(&GameConfig::default().with_seed(seed)));
    let mut totals = Totals::default();

    let start = Instant::now();
    for tick in 0..ticks {
        match game.phase() {
            Phase::GameOver => game.push_intent(Intent::Restart),
            Phase::Running if tick % hop_every == 0 => game.push_intent(Direction::Up.into()),
            Phase::Running => {}
        }

        let report = game.step_dt(DT);
        totals.goals += report.goal_reached as u32;
        totals.collisions += report.collisions;
        totals.game_overs += report.game_over_entered as u32;
        totals.restarts += report.restarted as u32;
    }
    (totals, start.elapsed().as_secs_f64() * 1000.0)
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);
    let ticks: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(36_000);

    println!("=== Headless simulation: seed {}, {} ticks ({:.0}s of play) ===\n",
        seed, ticks, ticks as f32 * DT);

    println!("{:>10} {:>8} {:>11} {:>11} {:>9} {:>10}",
        "Hop every", "Goals", "Collisions", "Game overs", "Restarts", "Time");
    println!("{:-<64}", "");

    // Slower hopping spends longer in the lanes
    for hop_every in [5, 10, 20, 40, 80] {
        let (totals, elapsed_ms) = run(seed, ticks, hop_every);
        println!(
            "{:>10} {:>8} {:>11} {:>11} {:>9} {:>8.2}ms",
            format!("{} ticks", hop_every),
            totals.goals,
            totals.collisions,
            totals.game_overs,
            totals.restarts,
            elapsed_ms
        );
    }
}
