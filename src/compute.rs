/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (plus, where needed, the session clock and an RNG handle) and
/// returns a brand-new `GameState`.  Side effects are limited to the injected
/// RNG; time always arrives as a `Duration` since session start, so callers
/// control determinism (useful for tests with a seeded RNG and fixed clocks).

use std::time::Duration;

use rand::Rng;

use crate::consts::*;
use crate::entities::{Bullet, Enemy, GameState, GameStatus, Player};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the state of a fresh session: player centered at the bottom edge,
/// empty collections, first enemy spawn due one interval in.
pub fn init_state() -> GameState {
    GameState {
        player: Player {
            x: VIEW_W / 2.0 - PLAYER_W / 2.0,
            y: PLAYER_Y,
            dx: 0.0,
        },
        bullets: Vec::new(),
        enemy_bullets: Vec::new(),
        enemies: Vec::new(),
        kills: 0,
        status: GameStatus::Running,
        next_spawn: SPAWN_INTERVAL,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn steer_left(state: &GameState) -> GameState {
    GameState {
        player: Player {
            dx: -PLAYER_SPEED,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

pub fn steer_right(state: &GameState) -> GameState {
    GameState {
        player: Player {
            dx: PLAYER_SPEED,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

pub fn steer_stop(state: &GameState) -> GameState {
    GameState {
        player: Player {
            dx: 0.0,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

/// Fire one bullet centered under the player's horizontal midpoint.
/// No bullet cap and no repeat suppression: every key press fires.
pub fn player_shoot(state: &GameState) -> GameState {
    let new_bullet = Bullet {
        x: state.player.x + PLAYER_W / 2.0 - BULLET_W / 2.0,
        y: state.player.y,
    };
    let mut bullets = state.bullets.clone();
    bullets.push(new_bullet);
    GameState {
        bullets,
        ..state.clone()
    }
}

// ── Spawner (wall-clock-periodic, independent of the frame rate) ────────────

/// Insert every enemy whose spawn deadline has passed.  A late frame fires
/// all missed deadlines, so the cadence stays wall-clock-periodic rather
/// than frame-locked.  Each enemy's first volley is due one fire interval
/// after its own creation time.
pub fn spawn_due(state: &GameState, now: Duration, rng: &mut impl Rng) -> GameState {
    let mut enemies = state.enemies.clone();
    let mut next_spawn = state.next_spawn;
    while next_spawn <= now {
        enemies.push(Enemy {
            x: rng.gen_range(0.0..VIEW_W - ENEMY_W),
            y: -ENEMY_H,
            next_fire: next_spawn + FIRE_INTERVAL,
        });
        next_spawn += SPAWN_INTERVAL;
    }
    GameState {
        enemies,
        next_spawn,
        ..state.clone()
    }
}

/// Emit a volley for every enemy whose fire deadline has passed.  Bullets
/// start centered under the enemy's current position.  A removed enemy takes
/// its deadline with it, so no volley ever outlives its enemy.
pub fn enemy_fire_due(state: &GameState, now: Duration) -> GameState {
    let mut enemies = state.enemies.clone();
    let mut enemy_bullets = state.enemy_bullets.clone();
    for enemy in &mut enemies {
        while enemy.next_fire <= now {
            enemy_bullets.push(Bullet {
                x: enemy.x + ENEMY_W / 2.0 - BULLET_W / 2.0,
                y: enemy.y + ENEMY_H,
            });
            enemy.next_fire += FIRE_INTERVAL;
        }
    }
    GameState {
        enemies,
        enemy_bullets,
        ..state.clone()
    }
}

// ── Geometry ────────────────────────────────────────────────────────────────

/// Axis-aligned box overlap, strict on all four half-planes: boxes that
/// merely touch edge-to-edge do not collide.
#[allow(clippy::too_many_arguments)]
pub fn boxes_overlap(
    ax: f32,
    ay: f32,
    aw: f32,
    ah: f32,
    bx: f32,
    by: f32,
    bw: f32,
    bh: f32,
) -> bool {
    ax < bx + bw && ax + aw > bx && ay < by + bh && ay + ah > by
}

// ── Per-frame tick (pure) ───────────────────────────────────────────────────

/// Advance the simulation by one frame.
///
/// Order per frame: player velocity, bullet and enemy movement with
/// off-screen culling, bullet↔enemy collisions, enemy-bullet↔player
/// collisions, then the session-clock check.  Every surviving collection is
/// rebuilt into a fresh `Vec` rather than edited in place mid-scan.
pub fn tick(state: &GameState, now: Duration) -> GameState {
    // ── 1. Apply player velocity (horizontal only) ───────────────────────────
    let player = Player {
        x: state.player.x + state.player.dx,
        ..state.player.clone()
    };

    // ── 2. Move player bullets up; cull once fully above the top edge ────────
    let bullets: Vec<Bullet> = state
        .bullets
        .iter()
        .filter_map(|b| {
            let y = b.y - BULLET_SPEED;
            if y + BULLET_H < 0.0 {
                None
            } else {
                Some(Bullet { y, ..b.clone() })
            }
        })
        .collect();

    // ── 3. Move enemy bullets down; cull once past the bottom edge ───────────
    let enemy_bullets: Vec<Bullet> = state
        .enemy_bullets
        .iter()
        .filter_map(|b| {
            let y = b.y + ENEMY_BULLET_SPEED;
            if y > VIEW_H {
                None
            } else {
                Some(Bullet { y, ..b.clone() })
            }
        })
        .collect();

    // ── 4. Move enemies down; cull once past the bottom edge ─────────────────
    let enemies: Vec<Enemy> = state
        .enemies
        .iter()
        .filter_map(|e| {
            let y = e.y + ENEMY_SPEED;
            if y > VIEW_H {
                None
            } else {
                Some(Enemy { y, ..e.clone() })
            }
        })
        .collect();

    // ── 5. Collision: player bullets ↔ enemies ───────────────────────────────
    // A bullet is consumed once but may destroy every enemy it overlaps in
    // the same frame.  An enemy already destroyed this frame cannot be hit
    // again.  Destroyed enemies leave the collection immediately, volley
    // deadline and all.
    let mut killed: Vec<usize> = Vec::new();
    let mut spent: Vec<usize> = Vec::new();

    for (bi, bullet) in bullets.iter().enumerate() {
        for (ei, enemy) in enemies.iter().enumerate() {
            if killed.contains(&ei) {
                continue;
            }
            if boxes_overlap(
                bullet.x, bullet.y, BULLET_W, BULLET_H, enemy.x, enemy.y, ENEMY_W, ENEMY_H,
            ) {
                killed.push(ei);
                if !spent.contains(&bi) {
                    spent.push(bi);
                }
            }
        }
    }

    let kills = state.kills + killed.len() as u32;

    let enemies: Vec<Enemy> = enemies
        .iter()
        .enumerate()
        .filter(|(i, _)| !killed.contains(i))
        .map(|(_, e)| e.clone())
        .collect();

    let bullets: Vec<Bullet> = bullets
        .iter()
        .enumerate()
        .filter(|(i, _)| !spent.contains(i))
        .map(|(_, b)| b.clone())
        .collect();

    // ── 6. Collision: enemy bullets ↔ player ─────────────────────────────────
    // Every overlapping bullet is consumed, but the status transition fires
    // at most once per frame.
    let mut player_hit = false;
    let enemy_bullets: Vec<Bullet> = enemy_bullets
        .into_iter()
        .filter(|b| {
            let hit = boxes_overlap(
                b.x, b.y, BULLET_W, BULLET_H, player.x, player.y, PLAYER_W, PLAYER_H,
            );
            if hit {
                player_hit = true;
            }
            !hit
        })
        .collect();

    // ── 7. Terminal transitions: a hit beats the clock in the same frame ─────
    let status = if player_hit {
        GameStatus::PlayerHit
    } else if now >= GAME_DURATION {
        GameStatus::TimeExpired
    } else {
        GameStatus::Running
    };

    GameState {
        player,
        bullets,
        enemy_bullets,
        enemies,
        kills,
        status,
        ..state.clone()
    }
}
