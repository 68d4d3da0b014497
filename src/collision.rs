//! Overlap tests, scoring and life loss.

use crate::audio::Cue;
use crate::compute;
use crate::entities::{Entity, GameState, EXTRA_LIFE_STEP, SHIP_START_X};
use crate::scheduler::Scheduler;

/// Half-open axis-aligned box intersection.  Boxes that only share an edge do
/// not overlap.
pub fn check_overlap(a: &Entity, b: &Entity) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

/// Overlap between two entities that are both still alive.
pub fn collides(a: &Entity, b: &Entity) -> bool {
    a.alive && b.alive && check_overlap(a, b)
}

/// Test player bullet `bullet_index` against every live alien, row by row.
///
/// There is no early exit: a bullet whose box covers several aliens destroys
/// all of them in the same frame.  Returns the number of aliens destroyed.
pub fn strike_formation(state: &mut GameState, bullet_index: usize) -> usize {
    let bullet = state.player_bullets[bullet_index].body.clone();
    let mut kills = 0;

    for r in 0..state.rows.len() {
        let kind = state.rows[r].kind;
        for a in 0..state.rows[r].aliens.len() {
            if !collides(&bullet, &state.rows[r].aliens[a]) {
                continue;
            }
            state.rows[r].aliens[a].alive = false;
            state.player_bullets[bullet_index].body.consumed = true;
            kills += 1;

            award_points(state, kind.score_value());
            state.emit(kind.explosion_cue());
            check_extra_life(state);
        }
    }

    kills
}

pub fn award_points(state: &mut GameState, points: u32) {
    state.score = state.score.saturating_add(points);
    state.high_score = state.high_score.max(state.score);
}

/// Grant one extra life once the score reaches the next threshold.
///
/// The threshold moves up by a single step per call, even if the score has
/// already passed several steps.
pub fn check_extra_life(state: &mut GameState) -> bool {
    if state.score < state.next_life_threshold {
        return false;
    }
    state.lives += 1;
    state.next_life_threshold = state.next_life_threshold.saturating_add(EXTRA_LIFE_STEP);
    state.emit(Cue::ExtraLife);
    log::debug!(
        "extra life at {} (lives {}, next at {})",
        state.score,
        state.lives,
        state.next_life_threshold
    );
    true
}

/// The ship was hit: lose a life, wipe every projectile, put the ship back at
/// its start column, and end the game when no lives remain.
pub fn ship_hit(state: &mut GameState, scheduler: &mut Scheduler) {
    state.lives = state.lives.saturating_sub(1);
    state.clear_projectiles();
    state.ship.x = SHIP_START_X;
    state.emit(Cue::ShipLoss);
    log::debug!("ship hit, {} lives left", state.lives);

    if state.lives == 0 {
        compute::end_game(state, scheduler);
    }
}
