/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands.  The 512×512 px board is drawn at one
/// terminal cell per 8×16 px, i.e. 64 columns by 32 rows.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use galaxian::entities::{
    Entity, EntityKind, GameState, RowKind, BOARD_HEIGHT, BOARD_WIDTH,
};
use galaxian::hud::HudText;

// ── Layout ────────────────────────────────────────────────────────────────────

const PX_PER_COL: f32 = 8.0;
const PX_PER_ROW: f32 = 16.0;
const BOARD_COLS: u16 = (BOARD_WIDTH / PX_PER_COL) as u16;
const BOARD_ROWS: u16 = (BOARD_HEIGHT / PX_PER_ROW) as u16;
/// Terminal column of the first board cell (column 0 is the left wall).
const BOARD_LEFT: u16 = 1;
/// Terminal row of the first board cell (row 0 is the HUD, row 1 the top wall).
const BOARD_TOP: u16 = 2;

/// Smallest terminal that shows the whole board, HUD and hint line.
pub const MIN_COLS: u16 = BOARD_COLS + 2;
pub const MIN_ROWS: u16 = BOARD_ROWS + 4;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_ROUND: Color = Color::White;
const C_HUD_LIVES: Color = Color::Red;
const C_SHIP: Color = Color::White;
const C_FLAGSHIP: Color = Color::Yellow;
const C_RED: Color = Color::Red;
const C_PINK: Color = Color::Magenta;
const C_CYAN: Color = Color::Cyan;
const C_PLACEHOLDER: Color = Color::Grey;
const C_BULLET_PLAYER: Color = Color::Yellow;
const C_BULLET_ENEMY: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

const PLACEHOLDER: char = '▒';

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out)?;
    draw_hud(out, &HudText::from_state(state))?;

    for (kind, entity) in state.visible_entities() {
        draw_entity(out, kind, entity)?;
    }

    draw_controls_hint(out)?;

    if state.is_game_over() {
        draw_game_over(out, state)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, MIN_ROWS))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W) -> std::io::Result<()> {
    let w = BOARD_COLS as usize;
    let bottom = BOARD_TOP + BOARD_ROWS;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, BOARD_TOP - 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;

    out.queue(cursor::MoveTo(0, bottom))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w))))?;

    for row in BOARD_TOP..bottom {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(BOARD_LEFT + BOARD_COLS, row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, hud: &HudText) -> std::io::Result<()> {
    // Score and high score — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("{}  {}", hud.score, hud.high_score)))?;

    // Round — centre
    let rx = (MIN_COLS / 2).saturating_sub(hud.round.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_ROUND))?;
    out.queue(Print(&hud.round))?;

    // Lives — right
    let lx = MIN_COLS.saturating_sub(hud.lives.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&hud.lives))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn colour_for(kind: EntityKind) -> Color {
    match kind {
        EntityKind::Ship => C_SHIP,
        EntityKind::Alien(RowKind::Flagship) => C_FLAGSHIP,
        EntityKind::Alien(RowKind::Red) => C_RED,
        EntityKind::Alien(RowKind::Pink) => C_PINK,
        EntityKind::Alien(RowKind::Cyan) => C_CYAN,
        EntityKind::PlayerBullet => C_BULLET_PLAYER,
        EntityKind::EnemyBullet => C_BULLET_ENEMY,
    }
}

/// Draw an entity as a block of cells covering its box.  Ships and aliens use
/// their sprite when one was loaded and a grey placeholder fill otherwise;
/// bullets are a single glyph.
fn draw_entity<W: Write>(out: &mut W, kind: EntityKind, e: &Entity) -> std::io::Result<()> {
    let cols = (e.width / PX_PER_COL).ceil().max(1.0) as usize;
    let rows = (e.height / PX_PER_ROW).ceil().max(1.0) as usize;

    let bullet_glyph = match kind {
        EntityKind::PlayerBullet => Some('║'),
        EntityKind::EnemyBullet => Some('↓'),
        _ => None,
    };

    let colour = match (bullet_glyph, &e.visual) {
        (None, None) => C_PLACEHOLDER,
        _ => colour_for(kind),
    };
    out.queue(style::SetForegroundColor(colour))?;

    for r in 0..rows {
        let line: String = match (bullet_glyph, &e.visual) {
            (Some(glyph), _) => glyph.to_string(),
            (None, Some(sprite)) => {
                let art = sprite.lines().get(r).map(String::as_str).unwrap_or("");
                format!("{:<cols$.cols$}", art, cols = cols)
            }
            (None, None) => PLACEHOLDER.to_string().repeat(cols),
        };
        put_cells(out, e.x, e.y + r as f32 * PX_PER_ROW, &line)?;
    }
    Ok(())
}

/// Print `text` starting at board pixel (`x`, `y`), skipping every character
/// that would fall outside the board.
fn put_cells<W: Write>(out: &mut W, x: f32, y: f32, text: &str) -> std::io::Result<()> {
    let row = (y / PX_PER_ROW).floor();
    if row < 0.0 || row >= BOARD_ROWS as f32 {
        return Ok(());
    }
    let first_col = (x / PX_PER_COL).floor() as i32;

    for (i, ch) in text.chars().enumerate() {
        let col = first_col + i as i32;
        if col < 0 || col >= BOARD_COLS as i32 {
            continue;
        }
        out.queue(cursor::MoveTo(BOARD_LEFT + col as u16, BOARD_TOP + row as u16))?;
        out.queue(Print(ch))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, BOARD_TOP + BOARD_ROWS + 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>6}", state.score);
    let new_best = state.score >= state.high_score && state.score > 0;
    let best_line = if new_best {
        format!("★ NEW BEST: {:>6} ★", state.high_score)
    } else {
        format!("Best Score:  {:>6}", state.high_score)
    };

    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::Red),
        ("║    GAME  OVER      ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
    ];
    let best_color = if new_best { Color::Yellow } else { Color::DarkGrey };

    let cx = BOARD_LEFT + BOARD_COLS / 2;
    let total_rows = lines.len() + 3; // 3 box lines + score + best + hint
    let start_row = (BOARD_TOP + BOARD_ROWS / 2).saturating_sub(total_rows as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    let rest: [(&str, Color); 3] = [
        (&score_line, Color::Yellow),
        (&best_line, best_color),
        ("SPACE / R - Play Again  Q - Quit", Color::White),
    ];
    for (i, (msg, color)) in rest.iter().enumerate() {
        let row = start_row + (lines.len() + i) as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
