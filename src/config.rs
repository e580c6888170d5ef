use crate::engine::types::{Color, Difficulty};

/// Runtime configuration parsed from environment variables.
#[derive(Debug, Clone, Copy)]
pub struct AppConfig {
    /// Side played by the computer.
    pub ai_color: Color,
    /// Search depth ladder for the computer opponent.
    pub ai_difficulty: Difficulty,
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    pub fn from_env() -> Self {
        AppConfig {
            ai_color: std::env::var("DRAUGHTS_AI_COLOR")
                .ok()
                .and_then(|v| Color::from_str_loose(&v))
                .unwrap_or(Color::Black),
            ai_difficulty: std::env::var("DRAUGHTS_AI_DIFFICULTY")
                .ok()
                .and_then(|v| Difficulty::from_str_loose(&v))
                .unwrap_or(Difficulty::Medium),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            ai_color: Color::Black,
            ai_difficulty: Difficulty::Medium,
        }
    }
}
