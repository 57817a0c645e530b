//! Session configuration.

use super::constants::*;
use super::error::GameError;
use std::time::Duration;

/// Configuration for one game session. The viewport is fixed for the
/// lifetime of the game built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Viewport width in world units
    pub width: u32,

    /// Viewport height in world units
    pub height: u32,

    /// Random seed for gap placement (None = seeded from entropy)
    pub seed: Option<u64>,

    /// Sleep between loop iterations
    pub tick_interval_ms: u64,

    /// Horizontal pipe movement per tick
    pub pipe_speed: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
            seed: None,
            tick_interval_ms: TICK_INTERVAL_MS,
            pipe_speed: PIPE_SPEED,
        }
    }
}

impl GameConfig {
    /// Config for a specific viewport with default tuning.
    pub fn with_viewport(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Reproducible config, used by tests and replays.
    pub fn seeded(width: u32, height: u32, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::with_viewport(width, height)
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Reject configs that would produce degenerate geometry or a stalled game.
    pub fn validate(&self) -> Result<(), GameError> {
        if !(MIN_VIEWPORT_WIDTH..=MAX_VIEWPORT_WIDTH).contains(&self.width)
            || !(MIN_VIEWPORT_HEIGHT..=MAX_VIEWPORT_HEIGHT).contains(&self.height)
        {
            return Err(GameError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        if self.pipe_speed <= 0 {
            return Err(GameError::InvalidConfig(format!(
                "pipe speed must be positive, got {}",
                self.pipe_speed
            )));
        }
        // A pipe may not jump more than one viewport per tick; this also keeps
        // `x - speed` inside i32.
        if self.pipe_speed as u32 > self.width {
            return Err(GameError::InvalidConfig(format!(
                "pipe speed {} exceeds viewport width {}",
                self.pipe_speed, self.width
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(GameError::InvalidConfig(
                "tick interval must be at least 1ms".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tick_interval(), Duration::from_millis(17));
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_zero_viewport_rejected() {
        let config = GameConfig::with_viewport(0, 800);
        assert_eq!(
            config.validate(),
            Err(GameError::InvalidViewport {
                width: 0,
                height: 800
            })
        );
        assert!(GameConfig::with_viewport(400, 0).validate().is_err());
    }

    #[test]
    fn test_tiny_viewport_rejected() {
        assert!(GameConfig::with_viewport(MIN_VIEWPORT_WIDTH - 1, 800)
            .validate()
            .is_err());
        assert!(GameConfig::with_viewport(400, MIN_VIEWPORT_HEIGHT - 1)
            .validate()
            .is_err());
        assert!(GameConfig::with_viewport(MIN_VIEWPORT_WIDTH, MIN_VIEWPORT_HEIGHT)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_huge_viewport_rejected() {
        assert!(GameConfig::with_viewport(MAX_VIEWPORT_WIDTH, MAX_VIEWPORT_HEIGHT)
            .validate()
            .is_ok());
        assert_eq!(
            GameConfig::with_viewport(MAX_VIEWPORT_WIDTH + 1, 800).validate(),
            Err(GameError::InvalidViewport {
                width: MAX_VIEWPORT_WIDTH + 1,
                height: 800
            })
        );
        assert!(GameConfig::with_viewport(400, MAX_VIEWPORT_HEIGHT + 1)
            .validate()
            .is_err());
        assert!(GameConfig::with_viewport(u32::MAX, u32::MAX)
            .validate()
            .is_err());
    }

    #[test]
    fn test_speed_above_width_rejected() {
        let config = GameConfig {
            pipe_speed: 401,
            ..GameConfig::with_viewport(400, 800)
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));

        let config = GameConfig {
            pipe_speed: 400,
            ..GameConfig::with_viewport(400, 800)
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_positive_speed_rejected() {
        let config = GameConfig {
            pipe_speed: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_tick_interval_rejected() {
        let config = GameConfig {
            tick_interval_ms: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_seeded_keeps_defaults() {
        let config = GameConfig::seeded(400, 800, 7);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.pipe_speed, PIPE_SPEED);
        assert_eq!(config.tick_interval_ms, TICK_INTERVAL_MS);
    }
}
