use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use simplelog::LevelFilter;

use torus_snake::game::SnakeGame;
use torus_snake::logging::init_logger;
use torus_snake::GameConfig;

#[derive(Parser)]
#[command(name = "torus_snake")]
#[command(version, about = "Snake on a wrap-around grid, in the terminal")]
struct Cli {
    /// YAML file with game settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Playfield width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Playfield height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Pixels per grid cell; must divide width and height
    #[arg(long)]
    grid_size: Option<u32>,

    /// Ticks per second
    #[arg(long)]
    speed: Option<u32>,

    /// Seed for food placement and respawn directions
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = "snake.log")]
    log_file: PathBuf,

    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(w) = self.width { config.screen_width = w; }
        if let Some(h) = self.height { config.screen_height = h; }
        if let Some(g) = self.grid_size { config.grid_size = g; }
        if let Some(s) = self.speed { config.speed = s; }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(&cli.log_file, cli.log_level)?;

    let config = cli.game_config()?;
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!("Starting with {:?} (seed {:?})", config, cli.seed);

    let mut game = SnakeGame::new(config, rng)?;
    game.run()
}
