/// All game entity types — pure data, no logic.

use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Running,
    /// An enemy bullet reached the player. Terminal.
    PlayerHit,
    /// The session clock ran out. Terminal.
    TimeExpired,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    /// Horizontal velocity. Set by input, applied once per tick.
    pub dx: f32,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// A projectile. Travel direction is implied by the collection it lives in:
/// `GameState::bullets` move up, `GameState::enemy_bullets` move down.
#[derive(Clone, Debug)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    /// Session-relative deadline of this enemy's next volley. The timer is
    /// owned by the enemy record, so removing the enemy cancels it.
    pub next_fire: Duration,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire session state. Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    /// Player-fired bullets, travelling up.
    pub bullets: Vec<Bullet>,
    /// Enemy-fired bullets, travelling down.
    pub enemy_bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    /// Enemies destroyed this session. Only ever increases.
    pub kills: u32,
    pub status: GameStatus,
    /// Session-relative deadline of the next enemy spawn.
    pub next_spawn: Duration,
}
