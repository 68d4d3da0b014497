//! Projectile spawning and the two per-step projectile passes.
//!
//! Both passes walk their collection from the back so that removing the
//! current element never shifts one that has not been visited yet.

use crate::collision;
use crate::entities::{
    Entity, GameState, Projectile, ProjectileOwner, BOARD_HEIGHT, BULLET_HEIGHT, BULLET_WIDTH,
};
use crate::scheduler::Scheduler;

impl Projectile {
    pub fn new(x: f32, y: f32, owner: ProjectileOwner) -> Self {
        Self {
            body: Entity::new(x, y, BULLET_WIDTH, BULLET_HEIGHT, None),
            owner,
        }
    }

    pub fn velocity(&self) -> f32 {
        self.owner.velocity()
    }

    pub fn advance(&mut self) {
        self.body.y += self.velocity();
    }
}

/// A player bullet leaving the middle of the ship's nose.
pub fn player_bullet_from(ship: &Entity) -> Projectile {
    Projectile::new(ship.center_x() - BULLET_WIDTH / 2.0, ship.y, ProjectileOwner::Player)
}

/// An enemy bullet dropping from the middle of an alien's underside.
pub fn enemy_bullet_from(alien: &Entity) -> Projectile {
    Projectile::new(
        alien.center_x() - BULLET_WIDTH / 2.0,
        alien.bottom(),
        ProjectileOwner::Enemy,
    )
}

/// Move player bullets up, score any hits, and drop bullets that hit
/// something or left the top of the board.
pub fn step_player_bullets(state: &mut GameState) {
    for i in (0..state.player_bullets.len()).rev() {
        state.player_bullets[i].advance();
        collision::strike_formation(state, i);

        let bullet = &state.player_bullets[i].body;
        if bullet.y < 0.0 || bullet.consumed {
            state.player_bullets.remove(i);
        }
    }
}

/// Move enemy bullets down and check them against the ship.
///
/// A hit ends the pass: `collision::ship_hit` empties both projectile
/// collections, so there is nothing left to walk.
pub fn step_enemy_bullets(state: &mut GameState, scheduler: &mut Scheduler) {
    for i in (0..state.enemy_bullets.len()).rev() {
        state.enemy_bullets[i].advance();

        if collision::collides(&state.enemy_bullets[i].body, &state.ship) {
            collision::ship_hit(state, scheduler);
            break;
        }

        if state.enemy_bullets[i].body.y > BOARD_HEIGHT {
            state.enemy_bullets.remove(i);
        }
    }
}
