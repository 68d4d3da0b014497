//! All game entity types and the master game state — pure data, no rules.

use crate::assets::{Sprite, SpriteSet};
use crate::audio::Cue;

// ── Board geometry ───────────────────────────────────────────────────────────

pub const TILE_SIZE: f32 = 32.0;
/// 16 tiles × 32 px.
pub const BOARD_WIDTH: f32 = 512.0;
/// 16 tiles × 32 px.
pub const BOARD_HEIGHT: f32 = 512.0;

// ── Ship ─────────────────────────────────────────────────────────────────────

pub const SHIP_WIDTH: f32 = TILE_SIZE * 2.0;
pub const SHIP_HEIGHT: f32 = TILE_SIZE;
pub const SHIP_START_X: f32 = BOARD_WIDTH / 2.0 - TILE_SIZE;
pub const SHIP_START_Y: f32 = BOARD_HEIGHT - TILE_SIZE * 2.0;
/// Horizontal distance covered by one move key event.
pub const SHIP_STEP: f32 = TILE_SIZE;
/// Where the ship is parked (below the board) once the game is over.
pub const SHIP_PARKED_Y: f32 = 575.0;

// ── Formation ────────────────────────────────────────────────────────────────

pub const ALIENS_PER_ROW: usize = 5;
pub const ALIEN_WIDTH: f32 = TILE_SIZE * 2.0;
pub const ALIEN_HEIGHT: f32 = TILE_SIZE;
pub const ROW_START_X: f32 = TILE_SIZE;
pub const INITIAL_ROW_VELOCITY: f32 = 1.0;

// ── Projectiles ──────────────────────────────────────────────────────────────

pub const BULLET_WIDTH: f32 = TILE_SIZE / 8.0;
pub const BULLET_HEIGHT: f32 = TILE_SIZE / 2.0;
pub const PLAYER_BULLET_VELOCITY: f32 = -15.0;
pub const ENEMY_BULLET_VELOCITY: f32 = 8.0;

// ── Rules ────────────────────────────────────────────────────────────────────

pub const STARTING_LIVES: u32 = 3;
pub const EXTRA_LIFE_STEP: u32 = 10_000;
/// One live alien fires when a draw from `[0, odds)` comes up zero.
pub const DEFAULT_FIRE_ODDS: u32 = 200;

// ── Entities ─────────────────────────────────────────────────────────────────

/// A simulated rectangle.  `x`/`y` is the top-left corner in board pixels.
///
/// Dead entities stay in their collection until the next round so indices
/// remain stable; they are skipped by movement, collision and rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub alive: bool,
    /// Set on a projectile that hit something; it is dropped at the end of
    /// its pass.
    pub consumed: bool,
    /// Shared sprite, or `None` when the asset could not be loaded.
    pub visual: Option<Sprite>,
}

impl Entity {
    pub fn new(x: f32, y: f32, width: f32, height: f32, visual: Option<Sprite>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            alive: true,
            consumed: false,
            visual,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectileOwner {
    Player,
    Enemy,
}

impl ProjectileOwner {
    /// Signed vertical speed in px per tick (negative = upward).
    pub fn velocity(self) -> f32 {
        match self {
            ProjectileOwner::Player => PLAYER_BULLET_VELOCITY,
            ProjectileOwner::Enemy => ENEMY_BULLET_VELOCITY,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub body: Entity,
    pub owner: ProjectileOwner,
}

// ── Formation rows ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowKind {
    Flagship,
    Red,
    Pink,
    Cyan,
}

impl RowKind {
    /// Rows in the order they are advanced, hit-tested and drawn.
    pub const ALL: [RowKind; 4] = [RowKind::Flagship, RowKind::Red, RowKind::Pink, RowKind::Cyan];

    /// Score awarded per alien destroyed.
    pub fn score_value(self) -> u32 {
        match self {
            RowKind::Flagship => 60,
            RowKind::Red => 50,
            RowKind::Pink => 40,
            RowKind::Cyan => 30,
        }
    }

    pub fn start_y(self) -> f32 {
        match self {
            RowKind::Flagship => TILE_SIZE,
            RowKind::Red => TILE_SIZE * 2.0,
            RowKind::Pink => TILE_SIZE * 3.0,
            RowKind::Cyan => TILE_SIZE * 4.0,
        }
    }

    pub fn explosion_cue(self) -> Cue {
        match self {
            RowKind::Flagship => Cue::ExplosionBoss,
            _ => Cue::ExplosionSmall,
        }
    }

    /// Logical asset name used by the sprite loader.
    pub fn asset_name(self) -> &'static str {
        match self {
            RowKind::Flagship => "flagship",
            RowKind::Red => "red",
            RowKind::Pink => "pink",
            RowKind::Cyan => "cyan",
        }
    }
}

/// A fixed-size, ordered group of aliens sharing one horizontal velocity.
#[derive(Clone, Debug, PartialEq)]
pub struct FormationRow {
    pub kind: RowKind,
    pub aliens: Vec<Entity>,
}

impl FormationRow {
    pub fn live_count(&self) -> usize {
        self.aliens.iter().filter(|a| a.alive).count()
    }

    pub fn is_defeated(&self) -> bool {
        self.aliens.iter().all(|a| !a.alive)
    }
}

// ── Status ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// What a visible entity is, so the renderer can pick glyphs and colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Ship,
    Alien(RowKind),
    PlayerBullet,
    EnemyBullet,
}

// ── Master game state ────────────────────────────────────────────────────────

/// The entire game state, owned by the simulation loop and handed to each
/// sub-step by mutable reference.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub ship: Entity,
    /// Always four rows, in `RowKind::ALL` order.
    pub rows: [FormationRow; 4],
    pub player_bullets: Vec<Projectile>,
    pub enemy_bullets: Vec<Projectile>,
    pub flagship_velocity: f32,
    /// Shared by the red, pink and cyan rows.
    pub alien_velocity: f32,
    pub score: u32,
    /// The highest score seen so far (updated live during play).
    pub high_score: u32,
    pub lives: u32,
    pub round: u32,
    pub next_life_threshold: u32,
    pub status: GameStatus,
    pub frame: u64,
    pub fire_odds: u32,
    pub sprites: SpriteSet,
    /// Audio cues raised since the frontend last drained them.
    pub cues: Vec<Cue>,
}

impl GameState {
    pub fn row(&self, kind: RowKind) -> &FormationRow {
        &self.rows[row_index(kind)]
    }

    pub fn row_mut(&mut self, kind: RowKind) -> &mut FormationRow {
        &mut self.rows[row_index(kind)]
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn emit(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    pub fn drain_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }

    pub fn clear_projectiles(&mut self) {
        self.player_bullets.clear();
        self.enemy_bullets.clear();
    }

    /// Every live entity the renderer should draw, ship first, then the rows
    /// in order, then player and enemy projectiles.
    pub fn visible_entities(&self) -> impl Iterator<Item = (EntityKind, &Entity)> + '_ {
        let ship = std::iter::once((EntityKind::Ship, &self.ship));
        let aliens = self
            .rows
            .iter()
            .flat_map(|row| row.aliens.iter().map(move |a| (EntityKind::Alien(row.kind), a)));
        let player = self
            .player_bullets
            .iter()
            .map(|b| (EntityKind::PlayerBullet, &b.body));
        let enemy = self
            .enemy_bullets
            .iter()
            .map(|b| (EntityKind::EnemyBullet, &b.body));

        ship.chain(aliens)
            .chain(player)
            .chain(enemy)
            .filter(|(_, e)| e.alive)
    }
}

fn row_index(kind: RowKind) -> usize {
    match kind {
        RowKind::Flagship => 0,
        RowKind::Red => 1,
        RowKind::Pink => 2,
        RowKind::Cyan => 3,
    }
}
