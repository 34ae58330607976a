//! Froggy - a single-screen arcade game
//!
//! Core modules:
//! - `sim`: Game simulation (entities, wandering AI, physics, collision rules, game loop)
//! - `highscores`: Top-10 leaderboard
//! - `score`: Current score plus leaderboard persistence
//! - `persistence`: Key/value storage backends with load-or-default semantics
//! - `settings`: Data-driven game tuning
//! - `ui`: Message display, control help and the leaderboard window
//! - `platform`: Keyboard input model

pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod score;
pub mod settings;
pub mod sim;
pub mod ui;

pub use highscores::HighScores;
pub use score::ScoreTracker;
pub use settings::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Field dimensions (centered on the origin, Y up)
    pub const FIELD_WIDTH: f32 = 950.0;
    pub const FIELD_HEIGHT: f32 = 800.0;

    /// Player movement speed while a direction key is held
    pub const PLAYER_SPEED: f32 = 500.0;
    /// Gravity applied on movement key events
    pub const GRAVITY_Y: f32 = -800.0;

    /// Speed of every wandering entity
    pub const WANDER_SPEED: f32 = 200.0;

    /// Collectible spawn band (min inclusive, max exclusive)
    pub const SPAWN_MIN_Y: i32 = 100;
    pub const SPAWN_MAX_Y: i32 = 500;

    /// Collectibles of each kind on the field at round start
    pub const COLLECTIBLES_PER_KIND: usize = 5;

    /// How long instruction messages stay on screen
    pub const MESSAGE_TIME_SECS: f32 = 10.0;

    /// Asset names (loading is the host's job)
    pub const BACKGROUND_IMAGE: &str = "tausta.jpg";
    pub const BACKGROUND_MUSIC: &str = "taustaAani.wav";
}

/// Unit vector for an angle in radians
#[inline]
pub fn direction(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Facing angle of a vector, in radians
#[inline]
pub fn heading(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}
