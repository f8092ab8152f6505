//! Game settings and tuning
//!
//! Supplied by the host at startup (JSON), never written back.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting: {0}")]
    Invalid(String),
}

/// Numeric gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub arena_width: f32,
    pub arena_height: f32,

    pub ball_radius: f32,
    pub ball_max_speed: f32,
    pub ball_smooth_factor: f32,
    pub ball_shake_decay: f32,
    pub wall_shake: f32,

    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_bottom_gap: f32,
    pub paddle_shake_decay: f32,
    pub paddle_contact_shake: f32,

    pub follow_factor: f32,
    pub launch_speed: f32,
    pub lives: u8,

    pub brick_rows: usize,
    pub brick_columns: usize,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_offset_top: f32,
    pub brick_offset_left: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            ball_radius: BALL_RADIUS,
            ball_max_speed: BALL_MAX_SPEED,
            ball_smooth_factor: BALL_SMOOTH_FACTOR,
            ball_shake_decay: BALL_SHAKE_DECAY,
            wall_shake: WALL_SHAKE,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_gap: PADDLE_BOTTOM_GAP,
            paddle_shake_decay: PADDLE_SHAKE_DECAY,
            paddle_contact_shake: PADDLE_CONTACT_SHAKE,

            follow_factor: FOLLOW_FACTOR,
            launch_speed: LAUNCH_SPEED,
            lives: STARTING_LIVES,

            brick_rows: BRICK_ROWS,
            brick_columns: BRICK_COLUMNS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_offset_top: BRICK_OFFSET_TOP,
            brick_offset_left: BRICK_OFFSET_LEFT,
        }
    }
}

impl Tuning {
    /// Check ranges the simulation relies on
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn positive(name: &str, value: f32) -> Result<(), SettingsError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SettingsError::Invalid(format!("{name} must be positive, got {value}")))
            }
        }

        fn unit_open(name: &str, value: f32) -> Result<(), SettingsError> {
            if value > 0.0 && value < 1.0 {
                Ok(())
            } else {
                Err(SettingsError::Invalid(format!("{name} must be in (0, 1), got {value}")))
            }
        }

        fn unit_half_open(name: &str, value: f32) -> Result<(), SettingsError> {
            if value > 0.0 && value <= 1.0 {
                Ok(())
            } else {
                Err(SettingsError::Invalid(format!("{name} must be in (0, 1], got {value}")))
            }
        }

        positive("arena_width", self.arena_width)?;
        positive("arena_height", self.arena_height)?;
        positive("ball_radius", self.ball_radius)?;
        positive("ball_max_speed", self.ball_max_speed)?;
        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("launch_speed", self.launch_speed)?;
        positive("brick_width", self.brick_width)?;
        positive("brick_height", self.brick_height)?;

        unit_half_open("ball_smooth_factor", self.ball_smooth_factor)?;
        unit_half_open("follow_factor", self.follow_factor)?;
        unit_open("ball_shake_decay", self.ball_shake_decay)?;
        unit_open("paddle_shake_decay", self.paddle_shake_decay)?;

        if self.paddle_width > self.arena_width {
            return Err(SettingsError::Invalid(
                "paddle_width exceeds arena_width".to_string(),
            ));
        }
        if self.lives == 0 {
            return Err(SettingsError::Invalid("lives must be at least 1".to_string()));
        }
        if self.brick_rows == 0 || self.brick_columns == 0 {
            return Err(SettingsError::Invalid("brick grid is empty".to_string()));
        }

        let grid_right = self.brick_offset_left
            + self.brick_columns as f32 * (self.brick_width + self.brick_padding)
            - self.brick_padding;
        let grid_bottom = self.brick_offset_top
            + self.brick_rows as f32 * (self.brick_height + self.brick_padding)
            - self.brick_padding;
        if grid_right > self.arena_width || grid_bottom > self.paddle_y() {
            return Err(SettingsError::Invalid(format!(
                "brick grid ({grid_right}x{grid_bottom}) does not fit above the paddle"
            )));
        }

        Ok(())
    }

    /// Top edge of the paddle
    pub fn paddle_y(&self) -> f32 {
        self.arena_height - self.paddle_height - self.paddle_bottom_gap
    }
}

/// Host-supplied settings: display preferences plus gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Suppress shake offsets and wobble at draw time
    pub reduced_motion: bool,
    /// Draw the aim line while the ball rides the paddle
    pub launch_preview: bool,
    /// Draw score and lives
    pub show_hud: bool,
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            launch_preview: true,
            show_hud: true,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Environment variable naming a JSON settings file (native host)
    pub const ENV_VAR: &'static str = "BRICK_BREAKER_SETTINGS";

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.tuning.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Settings from an optional JSON source, falling back to defaults
    pub fn load_or_default(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(settings)) => {
                log::info!("Loaded settings");
                settings
            }
            Some(Err(e)) => {
                log::warn!("Ignoring settings: {e}");
                Self::default()
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Effective shake rendering (respects reduced_motion)
    pub fn effective_shake(&self) -> bool {
        !self.reduced_motion
    }
}
