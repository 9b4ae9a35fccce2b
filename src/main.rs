use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal,
    ExecutableCommand,
};
use log::info;
use rand::thread_rng;

use sky_raid::compute::{
    enemy_fire_due, init_state, player_shoot, spawn_due, steer_left, steer_right, steer_stop,
    tick,
};
use sky_raid::display;
use sky_raid::entities::GameStatus;

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

// ── Held-key tracking ─────────────────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 4 frames (≈133 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 4;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Run one full session.  Returns `true` → quit program,  `false` → the
/// player asked for a fresh session.
///
/// Input model: a `key_frame` map records the frame number of the last
/// press/repeat event for every key.  Each frame the currently-live
/// direction keys set the player's velocity (press steers, release stops),
/// while Space fires on every press and every OS key-repeat event.
///
/// The two wall-clock spawner steps (global enemy spawn, per-enemy volleys)
/// run between frames on this same thread, so they interleave with ticks at
/// tick boundaries only.
fn game_loop<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<bool> {
    let mut rng = thread_rng();
    let mut state = init_state();
    let started = Instant::now();

    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    info!("session started");

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                // Press and repeat both refresh the held-key map; one-shot
                // actions fire on either, since a held Space must keep
                // shooting at the platform key-repeat rate.
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    key_frame.insert(code.clone(), frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(true);
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(true);
                        }
                        KeyCode::Char('r') | KeyCode::Char('R')
                            if state.status != GameStatus::Running =>
                        {
                            return Ok(false);
                        }
                        KeyCode::Char(' ') if state.status == GameStatus::Running => {
                            state = player_shoot(&state);
                        }
                        _ => {}
                    }
                }
                // Release: remove key immediately (keyboard-enhancement path)
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        if state.status == GameStatus::Running {
            // ── Steering: velocity follows the currently-held direction keys ──
            let left = is_held(&key_frame, &KeyCode::Left, frame)
                || is_held(&key_frame, &KeyCode::Char('a'), frame)
                || is_held(&key_frame, &KeyCode::Char('A'), frame);
            let right = is_held(&key_frame, &KeyCode::Right, frame)
                || is_held(&key_frame, &KeyCode::Char('d'), frame)
                || is_held(&key_frame, &KeyCode::Char('D'), frame);

            state = if left && !right {
                steer_left(&state)
            } else if right && !left {
                steer_right(&state)
            } else {
                steer_stop(&state)
            };

            // ── Spawner steps, then the frame tick ────────────────────────────
            let now = started.elapsed();
            state = spawn_due(&state, now, &mut rng);
            state = enemy_fire_due(&state, now);
            state = tick(&state, now);

            match state.status {
                GameStatus::PlayerHit => {
                    info!("session over: player hit after {} kills", state.kills);
                }
                GameStatus::TimeExpired => {
                    info!("session over: time expired with {} kills", state.kills);
                }
                GameStatus::Running => {}
            }
        }

        display::render(out, &state, started.elapsed())?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    env_logger::init();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    loop {
        // Each pass is one full session; a fresh state and a fresh start
        // instant are the only way out of a terminal status.
        if game_loop(out, rx)? {
            break;
        }
    }
    Ok(())
}
