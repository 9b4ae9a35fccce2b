/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands.  Logical 800×600 coordinates are scaled
/// onto whatever cell grid the terminal currently has.

use std::io::Write;
use std::time::Duration;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::consts::*;
use crate::entities::{GameState, GameStatus};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PLAYER: Color = Color::Blue;
const C_BULLET: Color = Color::Red;
const C_ENEMY_BULLET: Color = Color::Yellow;
const C_ENEMY: Color = Color::Green;
const C_HUD: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.  `now` is the session clock, used for the
/// remaining-time readout.  The player is painted last so it stays on top.
pub fn render<W: Write>(out: &mut W, state: &GameState, now: Duration) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for bullet in &state.bullets {
        fill_rect(out, bullet.x, bullet.y, BULLET_W, BULLET_H, C_BULLET, cols, rows)?;
    }
    for bullet in &state.enemy_bullets {
        fill_rect(
            out,
            bullet.x,
            bullet.y,
            BULLET_W,
            BULLET_H,
            C_ENEMY_BULLET,
            cols,
            rows,
        )?;
    }
    for enemy in &state.enemies {
        fill_rect(out, enemy.x, enemy.y, ENEMY_W, ENEMY_H, C_ENEMY, cols, rows)?;
    }

    draw_hud(out, state, now, cols)?;
    fill_rect(
        out,
        state.player.x,
        state.player.y,
        PLAYER_W,
        PLAYER_H,
        C_PLAYER,
        cols,
        rows,
    )?;
    draw_controls_hint(out, rows)?;

    match state.status {
        GameStatus::PlayerHit => draw_defeat(out, cols, rows)?,
        GameStatus::TimeExpired => draw_time_up(out, state, cols, rows)?,
        GameStatus::Running => {}
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Rectangle fill ────────────────────────────────────────────────────────────

/// Fill one logical rectangle with block glyphs.  The rectangle is scaled
/// from viewport units to terminal cells; anything off the grid is clipped,
/// and an on-screen rectangle smaller than one cell still paints one.
#[allow(clippy::too_many_arguments)]
fn fill_rect<W: Write>(
    out: &mut W,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    color: Color,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let sx = cols as f32 / VIEW_W;
    let sy = rows as f32 / VIEW_H;

    let left = (x * sx).floor() as i32;
    let top = (y * sy).floor() as i32;
    let right = (((x + w) * sx).ceil() as i32).max(left + 1);
    let bottom = (((y + h) * sy).ceil() as i32).max(top + 1);

    out.queue(style::SetForegroundColor(color))?;
    for row in top.max(0)..bottom.min(rows as i32) {
        let l = left.max(0);
        let r = right.min(cols as i32);
        if l >= r {
            continue;
        }
        out.queue(cursor::MoveTo(l as u16, row as u16))?;
        out.queue(Print("█".repeat((r - l) as usize)))?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(
    out: &mut W,
    state: &GameState,
    now: Duration,
    cols: u16,
) -> std::io::Result<()> {
    // Kills — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!("Kills: {}", state.kills)))?;

    // Remaining time — right, whole seconds, floored at zero
    let remaining = GAME_DURATION.as_secs().saturating_sub(now.as_secs());
    let time_text = format!("Time: {}s", remaining);
    let tx = cols.saturating_sub(time_text.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(tx, 0))?;
    out.queue(Print(&time_text))?;

    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, rows: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Terminal overlays ─────────────────────────────────────────────────────────

fn draw_defeat<W: Write>(out: &mut W, cols: u16, rows: u16) -> std::io::Result<()> {
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    GAME  OVER    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        ("You were shot down!", Color::White),
        ("R - Play Again  Q - Quit", Color::White),
    ];
    draw_overlay(out, lines, cols, rows)
}

fn draw_time_up<W: Write>(
    out: &mut W,
    state: &GameState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let kills_line = format!("You destroyed {} enemies.", state.kills);
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Yellow),
        ("║    TIME'S  UP    ║", Color::Yellow),
        ("╚══════════════════╝", Color::Yellow),
        (&kills_line, Color::White),
        ("R - Play Again  Q - Quit", Color::White),
    ];
    draw_overlay(out, lines, cols, rows)
}

fn draw_overlay<W: Write>(
    out: &mut W,
    lines: &[(&str, Color)],
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let cx = cols / 2;
    let start_row = (rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
