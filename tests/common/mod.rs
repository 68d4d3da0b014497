#![allow(dead_code)]

use galaxian::assets::SpriteSet;
use galaxian::compute::init_state;
use galaxian::entities::{GameState, DEFAULT_FIRE_ODDS};
use galaxian::scheduler::Scheduler;
use rand::rngs::mock::StepRng;

/// A fresh game with no sprites, its start-up cues already drained.
pub fn make_state() -> GameState {
    let mut s = init_state(SpriteSet::default(), DEFAULT_FIRE_ODDS, 0);
    s.drain_cues();
    s
}

pub fn running_scheduler() -> Scheduler {
    let mut s = Scheduler::new(60.0);
    s.start();
    s
}

/// Every fire draw lands mid-range, so no alien ever shoots.
pub fn quiet_rng() -> StepRng {
    StepRng::new(1 << 31, 0)
}

/// Every fire draw is zero, so every live alien shoots.
pub fn trigger_happy_rng() -> StepRng {
    StepRng::new(0, 0)
}

pub fn kill_all_aliens(state: &mut GameState) {
    for row in state.rows.iter_mut() {
        for alien in row.aliens.iter_mut() {
            alien.alive = false;
        }
    }
}
