//! Per-tick hit and goal checks.
//!
//! Enemies move in continuous pixel space while the player sits on the grid,
//! so overlap is tested on horizontal pixel spans within a shared lane.

use super::enemy::Enemy;
use super::player::Player;

/// Inward margin applied to each side of the player's span
pub const HIT_MARGIN: f32 = 10.0;

/// Horizontal pixel interval `[left, right]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub left: f32,
    pub right: f32,
}

impl Span {
    pub const fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    /// Shrink both sides by `margin`
    pub fn inset(self, margin: f32) -> Self {
        Self::new(self.left + margin, self.right - margin)
    }

    /// Strict interval overlap; touching edges do not count
    pub fn overlaps(self, other: Span) -> bool {
        self.left < other.right && self.right > other.left
    }
}

/// The player is hit when its span, inset by `HIT_MARGIN`, overlaps the enemy
pub fn is_hit(player: Span, enemy: Span) -> bool {
    player.inset(HIT_MARGIN).overlaps(enemy)
}

/// Check every enemy in the player's lane against the position the player
/// held at the start of the check. Each overlapping enemy costs a life on
/// its own, so two enemies on the player in one tick cost two.
/// Returns the number of hits.
pub fn check_collisions(player: &mut Player, enemies: &[Enemy]) -> u32 {
    let lane = player.cell.row;
    let span = player.span();
    let hits = enemies
        .iter()
        .filter(|enemy| enemy.lane == lane && is_hit(span, enemy.span()))
        .count() as u32;
    for _ in 0..hits {
        player.lose_life();
    }
    hits
}

/// Score and reset if the player stands on the goal row
pub fn check_goal(player: &mut Player) -> bool {
    if !player.cell.is_goal() {
        return false;
    }
    player.score_goal();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enemy::Motion;
    use crate::domain::grid::Cell;

    fn player_at(col: i32, row: i32) -> Player {
        Player {
            cell: Cell::new(col, row),
            ..Player::new()
        }
    }

    fn enemy_at(lane: i32, x: f32) -> Enemy {
        Enemy::new(lane, x, Motion::constant(100.0))
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let spans = [
            Span::new(0.0, 101.0),
            Span::new(50.0, 151.0),
            Span::new(101.0, 202.0),
            Span::new(-101.0, 0.0),
            Span::new(300.0, 401.0),
        ];
        for a in spans {
            for b in spans {
                assert_eq!(a.overlaps(b), b.overlaps(a), "{a:?} {b:?}");
            }
        }
    }

    #[test]
    fn test_margin_forgives_edge_contact() {
        // player at col 2 spans 202..303, inset to 212..293
        let player = player_at(2, 3).span();
        assert!(!is_hit(player, Span::new(111.0, 212.0)));
        assert!(is_hit(player, Span::new(112.0, 213.0)));
        assert!(!is_hit(player, Span::new(293.0, 394.0)));
        assert!(is_hit(player, Span::new(292.0, 393.0)));
    }

    #[test]
    fn test_hit_resets_player_and_costs_life() {
        let mut player = player_at(2, 3);
        let hits = check_collisions(&mut player, &[enemy_at(3, 180.0)]);
        assert_eq!(hits, 1);
        assert_eq!(player.cell, Cell::START);
        assert_eq!(player.lives, 2);
    }

    #[test]
    fn test_enemy_in_other_lane_is_ignored() {
        let mut player = player_at(2, 3);
        let hits = check_collisions(&mut player, &[enemy_at(2, 202.0)]);
        assert_eq!(hits, 0);
        assert_eq!(player, player_at(2, 3));
    }

    #[test]
    fn test_simultaneous_hits_each_cost_a_life() {
        let mut player = player_at(2, 1);
        let enemies = [enemy_at(1, 150.0), enemy_at(1, 250.0)];
        let hits = check_collisions(&mut player, &enemies);
        assert_eq!(hits, 2);
        assert_eq!(player.lives, 1);
        assert_eq!(player.cell, Cell::START);
    }

    #[test]
    fn test_lives_never_go_negative() {
        let mut player = Player {
            lives: 1,
            ..player_at(2, 2)
        };
        let enemies = [enemy_at(2, 190.0), enemy_at(2, 200.0), enemy_at(2, 210.0)];
        assert_eq!(check_collisions(&mut player, &enemies), 3);
        assert_eq!(player.lives, 0);
        assert!(player.is_game_over());
    }

    #[test]
    fn test_goal_row_scores() {
        let mut player = player_at(2, 0);
        assert!(check_goal(&mut player));
        assert_eq!(player.score, 100);
        assert_eq!(player.cell, Cell::START);
        assert_eq!(player.lives, 3);
    }

    #[test]
    fn test_non_goal_row_does_nothing() {
        let mut player = player_at(2, 1);
        assert!(!check_goal(&mut player));
        assert_eq!(player, player_at(2, 1));
    }
}
