use std::collections::VecDeque;

use super::{TickReport, World};
use crate::domain::Intent;

/// Game phase, always derived from the player's lives
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

/// GameLoop owns the world and the pending input.
/// Input may be pushed at any time; it is applied at the start of the next step.
pub struct GameLoop {
    pub world: World,
    intents: VecDeque<Intent>,
}

impl GameLoop {
    pub fn new(world: World) -> Self {
        Self {
            world,
            intents: VecDeque::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        if self.world.is_game_over() {
            Phase::GameOver
        } else {
            Phase::Running
        }
    }

    pub fn push_intent(&mut self, intent: Intent) {
        self.intents.push_back(intent);
    }

    pub fn pending_intents(&self) -> usize {
        self.intents.len()
    }

    /// One frame, `dt` seconds after the previous one: drain input, then
    /// update the world. Movement scales with `dt`, so pass real elapsed time.
    pub fn step_dt(&mut self, dt: f32) -> TickReport {
        let restarted = self.drain_intents();
        let mut report = self.world.update(dt);
        report.restarted = restarted;
        report
    }

    /// Apply queued intents in arrival order. Returns true if a restart happened.
    fn drain_intents(&mut self) -> bool {
        let mut restarted = false;
        while let Some(intent) = self.intents.pop_front() {
            let player = &mut self.world.player;
            match intent {
                Intent::Move(direction) => player.apply_move(direction),
                Intent::Restart => {
                    if player.restart() {
                        log::info!("restarting");
                        restarted = true;
                    }
                }
            }
        }
        restarted
    }
}
