//! Sky Raid - a single-screen terminal arcade shooter.
//!
//! Core modules:
//! - `entities`: pure data types for the session world
//! - `compute`: pure simulation logic (input transitions, spawner, per-frame tick)
//! - `display`: crossterm rendering layer

pub mod compute;
pub mod display;
pub mod entities;

/// Game configuration constants.
pub mod consts {
    use std::time::Duration;

    /// Logical viewport width. All entity positions live in this space;
    /// the display layer scales to the actual terminal grid.
    pub const VIEW_W: f32 = 800.0;
    /// Logical viewport height.
    pub const VIEW_H: f32 = 600.0;

    /// Player sprite size.
    pub const PLAYER_W: f32 = 50.0;
    pub const PLAYER_H: f32 = 50.0;
    /// Horizontal player speed, units per frame.
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Fixed vertical resting position: 60 units above the bottom edge.
    pub const PLAYER_Y: f32 = VIEW_H - 60.0;

    /// Bullet size (both sides fire the same shape; direction comes from
    /// the collection a bullet lives in).
    pub const BULLET_W: f32 = 5.0;
    pub const BULLET_H: f32 = 10.0;
    /// Upward player-bullet speed, units per frame.
    pub const BULLET_SPEED: f32 = 7.0;
    /// Downward enemy-bullet speed, units per frame.
    pub const ENEMY_BULLET_SPEED: f32 = 4.0;

    /// Enemy sprite size.
    pub const ENEMY_W: f32 = 50.0;
    pub const ENEMY_H: f32 = 50.0;
    /// Downward enemy speed, units per frame.
    pub const ENEMY_SPEED: f32 = 2.0;

    /// Wall-clock cadence of the global enemy spawner.
    pub const SPAWN_INTERVAL: Duration = Duration::from_millis(2000);
    /// Wall-clock cadence of each enemy's volley, anchored to its creation.
    pub const FIRE_INTERVAL: Duration = Duration::from_millis(3000);
    /// Session length; reaching it ends the session.
    pub const GAME_DURATION: Duration = Duration::from_secs(60);
}
