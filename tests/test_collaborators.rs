mod common;

use std::fs;
use std::path::PathBuf;

use common::make_state;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use galaxian::assets::{AssetLoader, SHIP_ASSET};
use galaxian::audio::{AudioSink, Cue, LogAudio, SilentAudio};
use galaxian::config::GameConfig;
use galaxian::entities::{GameStatus, RowKind};
use galaxian::highscore::HighScoreStore;
use galaxian::hud::HudText;
use galaxian::input::{command_for, Command};

// ── assets ────────────────────────────────────────────────────────────────────

#[test]
fn sprite_loads_and_trims_trailing_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("red.txt"), " {o##o}  \n /\\  /\\\n\n\n").unwrap();

    let sprite = AssetLoader::new(dir.path()).load("red").unwrap();

    assert_eq!(sprite.name(), "red");
    assert_eq!(sprite.lines(), &[" {o##o}".to_string(), " /\\  /\\".to_string()]);
}

#[test]
fn missing_or_empty_sprite_is_none() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("pink.txt"), "\n  \n").unwrap();
    let loader = AssetLoader::new(dir.path());

    assert!(loader.load("cyan").is_none());
    assert!(loader.load("pink").is_none());
}

#[test]
fn load_all_degrades_per_asset() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("ship.txt"), "/\\\n").unwrap();
    fs::write(dir.path().join("flagship.txt"), "<@@>\n").unwrap();

    let set = AssetLoader::new(dir.path()).load_all();

    assert_eq!(set.ship.as_ref().map(|s| s.name()), Some(SHIP_ASSET));
    assert!(set.for_row(RowKind::Flagship).is_some());
    assert!(set.red.is_none());
    assert!(set.pink.is_none());
    assert!(set.cyan.is_none());
}

#[test]
fn bundled_assets_are_all_present() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets");
    let set = AssetLoader::new(dir).load_all();
    assert!(set.ship.is_some());
    for kind in RowKind::ALL {
        assert!(set.for_row(kind).is_some(), "{:?}", kind);
    }
}

// ── audio ─────────────────────────────────────────────────────────────────────

#[test]
fn log_audio_tracks_background_loop() {
    let mut audio = LogAudio::new();
    audio.play_all([Cue::Start, Cue::BackgroundLoop, Cue::Shoot]);
    assert!(audio.background_playing());
    audio.play(Cue::BackgroundStop);
    assert!(!audio.background_playing());
    assert_eq!(audio.played(), 4);
}

#[test]
fn silent_audio_accepts_everything() {
    let mut audio = SilentAudio;
    audio.play_all([Cue::ExplosionBoss, Cue::ExtraLife, Cue::ShipLoss]);
}

#[test]
fn cue_names() {
    assert_eq!(Cue::ExplosionSmall.as_str(), "explosion-small");
    assert_eq!(Cue::BackgroundStop.as_str(), "background-stop");
}

// ── config ────────────────────────────────────────────────────────────────────

#[test]
fn config_defaults() {
    let c = GameConfig::default();
    assert_eq!(c.tick_rate_hz, 60.0);
    assert_eq!(c.fire_odds, 200);
    assert_eq!(c.asset_dir, PathBuf::from("assets"));
    assert!(c.high_score_file.is_none());
    assert!(c.validate().is_ok());
}

#[test]
fn config_partial_file_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.json");
    fs::write(&path, r#"{ "fire_odds": 50, "high_score_file": "/tmp/hs" }"#).unwrap();

    let c = GameConfig::load(&path).unwrap();

    assert_eq!(c.fire_odds, 50);
    assert_eq!(c.high_score_file, Some(PathBuf::from("/tmp/hs")));
    assert_eq!(c.tick_rate_hz, 60.0);
}

#[test]
fn config_rejects_bad_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.json");
    fs::write(&path, r#"{ "fire_odds": 0 }"#).unwrap();
    assert!(GameConfig::load(&path).is_err());

    let c = GameConfig {
        tick_rate_hz: 0.0,
        ..GameConfig::default()
    };
    assert!(c.validate().is_err());
}

#[test]
fn config_errors_name_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();
    let err = GameConfig::load(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("broken.json"));

    assert!(GameConfig::load(&dir.path().join("absent.json")).is_err());
}

#[test]
fn bundled_example_config_parses() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("galaxian.example.json");
    let c = GameConfig::load(&path).unwrap();
    assert_eq!(c, GameConfig::default());
}

// ── high score ────────────────────────────────────────────────────────────────

#[test]
fn high_score_missing_file_is_zero() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = HighScoreStore::new(dir.path().join("score"));
    assert_eq!(store.load(), 0);
}

#[test]
fn high_score_only_saves_improvements() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("score");
    let mut store = HighScoreStore::new(&path);
    store.load();

    assert!(store.record(1_200));
    assert!(!store.record(900));
    assert!(!store.record(1_200));
    assert_eq!(fs::read_to_string(&path).unwrap(), "1200");

    let mut reopened = HighScoreStore::new(&path);
    assert_eq!(reopened.load(), 1_200);
}

#[test]
fn high_score_garbage_reads_as_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("score");
    fs::write(&path, "lots").unwrap();
    assert_eq!(HighScoreStore::new(&path).load(), 0);
}

#[test]
fn high_score_unwritable_path_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = HighScoreStore::new(dir.path().join("missing-dir").join("score"));
    assert!(!store.record(10));
}

// ── HUD ───────────────────────────────────────────────────────────────────────

#[test]
fn hud_strings() {
    let mut s = make_state();
    s.score = 150;
    s.lives = 2;
    s.round = 4;
    s.high_score = 900;
    let hud = HudText::from_state(&s);
    assert_eq!(hud.score, "SCORE: 150");
    assert_eq!(hud.lives, "LIVES: 2");
    assert_eq!(hud.round, "ROUND 4");
    assert_eq!(hud.high_score, "HI: 900");
}

// ── input ─────────────────────────────────────────────────────────────────────

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn playing_keys() {
    let p = GameStatus::Playing;
    assert_eq!(command_for(&key(KeyCode::Left), p), Some(Command::MoveLeft));
    assert_eq!(command_for(&key(KeyCode::Char('a')), p), Some(Command::MoveLeft));
    assert_eq!(command_for(&key(KeyCode::Right), p), Some(Command::MoveRight));
    assert_eq!(command_for(&key(KeyCode::Char('D')), p), Some(Command::MoveRight));
    assert_eq!(command_for(&key(KeyCode::Char(' ')), p), Some(Command::Fire));
    assert_eq!(command_for(&key(KeyCode::Char('r')), p), None);
}

#[test]
fn game_over_keys() {
    let g = GameStatus::GameOver;
    assert_eq!(command_for(&key(KeyCode::Char(' ')), g), Some(Command::Restart));
    assert_eq!(command_for(&key(KeyCode::Char('R')), g), Some(Command::Restart));
    assert_eq!(command_for(&key(KeyCode::Left), g), None);
}

#[test]
fn quit_keys_work_in_any_state() {
    for status in [GameStatus::Playing, GameStatus::GameOver] {
        assert_eq!(command_for(&key(KeyCode::Esc), status), Some(Command::Quit));
        assert_eq!(command_for(&key(KeyCode::Char('q')), status), Some(Command::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for(&ctrl_c, status), Some(Command::Quit));
    }
}

#[test]
fn key_releases_are_ignored() {
    let release = KeyEvent {
        code: KeyCode::Char(' '),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert_eq!(command_for(&release, GameStatus::Playing), None);
}
