use std::{fs, path::Path, time::Duration};

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::render::{MAX_GRID_HEIGHT, MAX_GRID_WIDTH};

pub type Rgb = (u8, u8, u8);

/// Colours used to paint the playfield.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgb,
    pub border: Rgb,
    pub food: Rgb,
    pub snake: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: (0, 0, 0),
            border: (93, 216, 228),
            food: (255, 0, 0),
            snake: (0, 255, 0),
        }
    }
}

/// Game settings. Sizes are in pixels; `grid_size` pixels make one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub grid_size: u32,
    /// Ticks per second
    pub speed: u32,
    pub title: String,
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            screen_width: 640,
            screen_height: 480,
            grid_size: 20,
            speed: 2,
            title: "Snake".to_string(),
            palette: Palette::default(),
        }
    }
}

impl GameConfig {
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml_ng::from_str(text).context("Invalid game configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.grid_size > 0, "grid_size must be positive");
        ensure!(
            self.screen_width % self.grid_size == 0 && self.screen_height % self.grid_size == 0,
            "grid_size {} does not evenly divide the {}x{} playfield",
            self.grid_size, self.screen_width, self.screen_height
        );
        ensure!(
            self.screen_width >= self.grid_size && self.screen_height >= self.grid_size,
            "playfield {}x{} is smaller than one cell",
            self.screen_width, self.screen_height
        );
        ensure!(
            self.screen_width / self.grid_size <= MAX_GRID_WIDTH as u32
                && self.screen_height / self.grid_size <= MAX_GRID_HEIGHT as u32,
            "playfield {}x{} has too many cells, at most {}x{} fit on a terminal",
            self.screen_width, self.screen_height, MAX_GRID_WIDTH, MAX_GRID_HEIGHT
        );
        ensure!(self.speed > 0, "speed must be at least one tick per second");
        Ok(())
    }

    /// Only meaningful on a validated config.
    pub fn grid(&self) -> Grid {
        Grid::new(
            (self.screen_width / self.grid_size) as u16,
            (self.screen_height / self.grid_size) as u16,
        )
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.speed.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid(), Grid::new(32, 24));
        assert_eq!(config.tick_interval(), Duration::from_millis(500));
        assert_eq!(config.palette.border, (93, 216, 228));
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = GameConfig::from_yaml("grid_size: 40\nspeed: 8\npalette:\n  snake: [0, 128, 0]\n").unwrap();
        assert_eq!(config.grid_size, 40);
        assert_eq!(config.speed, 8);
        assert_eq!(config.screen_width, 640);
        assert_eq!(config.palette.snake, (0, 128, 0));
        assert_eq!(config.palette.food, (255, 0, 0));
        assert_eq!(config.grid(), Grid::new(16, 12));
    }

    #[test]
    fn unknown_yaml_shape_is_an_error() {
        assert!(GameConfig::from_yaml("speed: fast").is_err());
    }

    #[test]
    fn grid_size_must_divide_playfield() {
        let config = GameConfig { grid_size: 30, ..Default::default() };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("does not evenly divide"));
    }

    #[test]
    fn zero_values_are_rejected() {
        assert!(GameConfig { grid_size: 0, ..Default::default() }.validate().is_err());
        assert!(GameConfig { speed: 0, ..Default::default() }.validate().is_err());
        assert!(GameConfig { screen_width: 0, ..Default::default() }.validate().is_err());
    }

    #[test]
    fn oversized_grid_is_rejected() {
        let wide = GameConfig { screen_width: 40000, screen_height: 10, grid_size: 1, ..Default::default() };
        let err = wide.validate().unwrap_err();
        assert!(err.to_string().contains("too many cells"));

        let tall = GameConfig { screen_width: 10, screen_height: 65534, grid_size: 1, ..Default::default() };
        assert!(tall.validate().is_err());

        let largest = GameConfig {
            screen_width: MAX_GRID_WIDTH as u32,
            screen_height: MAX_GRID_HEIGHT as u32,
            grid_size: 1,
            ..Default::default()
        };
        assert!(largest.validate().is_ok());
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(GameConfig::load(Path::new("/nonexistent/snake.yaml")).is_err());
    }
}
