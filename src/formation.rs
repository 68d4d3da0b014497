//! Enemy formation: row creation, the sweep-and-bounce march, random fire.

use rand::Rng;

use crate::assets::{Sprite, SpriteSet};
use crate::entities::{
    Entity, FormationRow, GameState, Projectile, RowKind, ALIENS_PER_ROW, ALIEN_HEIGHT,
    ALIEN_WIDTH, BOARD_WIDTH, ROW_START_X,
};
use crate::projectiles::enemy_bullet_from;

// ── Constructors ─────────────────────────────────────────────────────────────

/// A full-strength row of `kind`, laid out side by side from the left margin.
pub fn create_row(kind: RowKind, visual: Option<Sprite>) -> FormationRow {
    let aliens = (0..ALIENS_PER_ROW)
        .map(|c| {
            Entity::new(
                ROW_START_X + c as f32 * ALIEN_WIDTH,
                kind.start_y(),
                ALIEN_WIDTH,
                ALIEN_HEIGHT,
                visual.clone(),
            )
        })
        .collect();
    FormationRow { kind, aliens }
}

/// All four rows at full strength, in `RowKind::ALL` order.
pub fn create_rows(sprites: &SpriteSet) -> [FormationRow; 4] {
    RowKind::ALL.map(|kind| create_row(kind, sprites.for_row(kind)))
}

// ── Movement ─────────────────────────────────────────────────────────────────

/// Move every live alien in `row` by `velocity` and return the row's velocity
/// afterwards.
///
/// When an alien reaches either side of the board the velocity flips and that
/// alien is pushed back by twice the new velocity, so it does not sit on the
/// edge and flip again next tick.  Aliens later in the row continue with the
/// flipped velocity.
pub fn advance_row(row: &mut FormationRow, velocity: f32) -> f32 {
    let mut velocity = velocity;
    for alien in row.aliens.iter_mut().filter(|a| a.alive) {
        alien.x += velocity;
        if alien.right() >= BOARD_WIDTH || alien.x <= 0.0 {
            velocity = -velocity;
            alien.x += velocity * 2.0;
        }
    }
    velocity
}

/// Advance the flagship row with its own velocity, then red, pink and cyan
/// with the shared alien velocity.
pub fn advance_all(state: &mut GameState) {
    let [flagship, escorts @ ..] = &mut state.rows;
    state.flagship_velocity = advance_row(flagship, state.flagship_velocity);
    for row in escorts.iter_mut() {
        state.alien_velocity = advance_row(row, state.alien_velocity);
    }
}

// ── Fire ─────────────────────────────────────────────────────────────────────

/// Give every live alien in `row` one independent chance in `odds` to drop a
/// bullet from the middle of its underside.
pub fn fire_from_row(
    row: &FormationRow,
    odds: u32,
    rng: &mut impl Rng,
    enemy_bullets: &mut Vec<Projectile>,
) -> usize {
    let mut fired = 0;
    for alien in row.aliens.iter().filter(|a| a.alive) {
        if rng.gen_range(0..odds) == 0 {
            enemy_bullets.push(enemy_bullet_from(alien));
            fired += 1;
        }
    }
    fired
}

pub fn fire_all(state: &mut GameState, rng: &mut impl Rng) -> usize {
    let odds = state.fire_odds.max(1);
    let mut fired = 0;
    for row in &state.rows {
        fired += fire_from_row(row, odds, rng, &mut state.enemy_bullets);
    }
    fired
}

// ── Queries ──────────────────────────────────────────────────────────────────

/// True only when no alien in any row is alive, wherever it is.
pub fn all_rows_defeated(rows: &[FormationRow]) -> bool {
    rows.iter().all(FormationRow::is_defeated)
}
