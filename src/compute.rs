//! Game flow: construction, the per-frame simulation step, player commands,
//! round clear, game over and restart.
//!
//! Every function takes the one `GameState` by mutable reference.  All
//! randomness comes through an injected `Rng`, so a seeded RNG gives a fully
//! reproducible game.

use rand::Rng;

use crate::assets::SpriteSet;
use crate::audio::Cue;
use crate::entities::{
    Entity, GameState, GameStatus, BOARD_WIDTH, DEFAULT_FIRE_ODDS, EXTRA_LIFE_STEP,
    INITIAL_ROW_VELOCITY, SHIP_HEIGHT, SHIP_PARKED_Y, SHIP_START_X, SHIP_START_Y, SHIP_STEP,
    SHIP_WIDTH, STARTING_LIVES,
};
use crate::formation;
use crate::input::Command;
use crate::projectiles;
use crate::scheduler::Scheduler;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the opening state and queue the start and background cues.
pub fn init_state(sprites: SpriteSet, fire_odds: u32, high_score: u32) -> GameState {
    let mut state = GameState {
        ship: Entity::new(
            SHIP_START_X,
            SHIP_START_Y,
            SHIP_WIDTH,
            SHIP_HEIGHT,
            sprites.ship.clone(),
        ),
        rows: formation::create_rows(&sprites),
        player_bullets: Vec::new(),
        enemy_bullets: Vec::new(),
        flagship_velocity: INITIAL_ROW_VELOCITY,
        alien_velocity: INITIAL_ROW_VELOCITY,
        score: 0,
        high_score,
        lives: STARTING_LIVES,
        round: 1,
        next_life_threshold: EXTRA_LIFE_STEP,
        status: GameStatus::Playing,
        frame: 0,
        fire_odds: if fire_odds == 0 { DEFAULT_FIRE_ODDS } else { fire_odds },
        sprites,
        cues: Vec::new(),
    };
    state.emit(Cue::Start);
    state.emit(Cue::BackgroundLoop);
    log::info!("game started");
    state
}

// ── Per-frame step ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.  Does nothing once the game is over.
pub fn tick(state: &mut GameState, scheduler: &mut Scheduler, rng: &mut impl Rng) {
    if state.is_game_over() {
        return;
    }

    // ── 1. Player bullets: move, hit-test, drop ──────────────────────────────
    projectiles::step_player_bullets(state);

    // ── 2. March the formation ───────────────────────────────────────────────
    formation::advance_all(state);

    // ── 3. Enemy bullets: move, hit the ship, drop ───────────────────────────
    projectiles::step_enemy_bullets(state, scheduler);
    if state.is_game_over() {
        return;
    }

    // ── 4. Round clear ───────────────────────────────────────────────────────
    clear_round_if_defeated(state);

    // ── 5. Aliens randomly shoot ─────────────────────────────────────────────
    formation::fire_all(state, rng);

    state.frame += 1;
}

/// Start the next round when every alien in every row is dead.  The score is
/// left as is; there is no clear bonus.
pub fn clear_round_if_defeated(state: &mut GameState) -> bool {
    if !formation::all_rows_defeated(&state.rows) {
        return false;
    }
    state.clear_projectiles();
    state.rows = formation::create_rows(&state.sprites);
    state.round += 1;
    log::info!("round {} begins (score {})", state.round, state.score);
    true
}

// ── State transitions ────────────────────────────────────────────────────────

/// Enter the terminal state: halt the scheduler, silence the music, park the
/// ship below the board.
pub fn end_game(state: &mut GameState, scheduler: &mut Scheduler) {
    state.status = GameStatus::GameOver;
    scheduler.stop();
    state.emit(Cue::BackgroundStop);
    state.clear_projectiles();
    state.ship.y = SHIP_PARKED_Y;
    log::info!(
        "game over: score {}, round {}, best {}",
        state.score,
        state.round,
        state.high_score
    );
}

/// Start a fresh game after a game over.  The high score survives.
pub fn restart(state: &mut GameState, scheduler: &mut Scheduler) {
    state.status = GameStatus::Playing;
    state.ship.x = SHIP_START_X;
    state.ship.y = SHIP_START_Y;
    state.score = 0;
    state.lives = STARTING_LIVES;
    state.round = 1;
    state.next_life_threshold = EXTRA_LIFE_STEP;
    state.rows = formation::create_rows(&state.sprites);
    state.clear_projectiles();
    state.emit(Cue::BackgroundLoop);
    scheduler.start();
    log::info!("game restarted");
}

// ── Input-driven transitions ─────────────────────────────────────────────────

/// Move one step left unless that would leave the board.
pub fn move_ship_left(state: &mut GameState) {
    if state.ship.x - SHIP_STEP >= 0.0 {
        state.ship.x -= SHIP_STEP;
    }
}

/// Move one step right unless that would leave the board.
pub fn move_ship_right(state: &mut GameState) {
    if state.ship.right() + SHIP_STEP <= BOARD_WIDTH {
        state.ship.x += SHIP_STEP;
    }
}

pub fn fire(state: &mut GameState) {
    let bullet = projectiles::player_bullet_from(&state.ship);
    state.player_bullets.push(bullet);
    state.emit(Cue::Shoot);
}

/// Apply one key command between steps.  Movement and fire only count while
/// playing; restart only counts after a game over.
pub fn apply_command(state: &mut GameState, scheduler: &mut Scheduler, command: Command) {
    match (state.status, command) {
        (GameStatus::Playing, Command::MoveLeft) => move_ship_left(state),
        (GameStatus::Playing, Command::MoveRight) => move_ship_right(state),
        (GameStatus::Playing, Command::Fire) => fire(state),
        (GameStatus::GameOver, Command::Restart) => restart(state, scheduler),
        _ => {}
    }
}
