//! Galaxian-style fixed-timestep arcade shooter.
//!
//! The simulation (`entities`, `formation`, `projectiles`, `collision`,
//! `compute`) is free of terminal I/O.  The collaborators it talks to (audio
//! cues, sprites, HUD text, key mapping, configuration, the saved high score)
//! each live in a small module next to it.

pub mod assets;
pub mod audio;
pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod formation;
pub mod highscore;
pub mod hud;
pub mod input;
pub mod projectiles;
pub mod scheduler;
