use std::time::Instant;

use anyhow::{Context, Result, bail};
use log::{error, info};
use rand::Rng;

use crate::config::GameConfig;
use crate::grid::Direction;
use crate::input::{KeyAction, map_key};
use crate::render::Renderer;
use crate::round::RoundController;
use crate::term::TermManager;

const CONTROLS: &str = "arrows/WASD move  p pause  r restart  q quit";

/// The driver: owns the terminal and the pacing clock and feeds one tick per
/// interval into the round.
pub struct SnakeGame<R: Rng> {
    config: GameConfig,
    paused: bool,
    term: TermManager,
    renderer: Renderer,
    round: RoundController<R>,
}

impl<R: Rng> SnakeGame<R> {
    pub fn new(config: GameConfig, rng: R) -> Result<Self> {
        config.validate()?;

        let grid = config.grid();
        let term = TermManager::new().context("Failed to read terminal size")?;
        let renderer = Renderer::new(grid, &config.palette);
        let round = RoundController::new(grid, rng);

        Ok(SnakeGame { config, paused: false, term, renderer, round })
    }

    /// Plays until the user quits. Raw mode and the alternate screen are
    /// undone even when the game fails.
    pub fn run(&mut self) -> Result<()> {
        let (needed_w, needed_h) = self.renderer.required_size();
        let (w, h) = self.term.get_terminal_size();
        if w < needed_w || h < needed_h {
            bail!("Terminal is {}x{} but the playfield needs {}x{}", w, h, needed_w, needed_h);
        }

        self.term.setup(&self.config.title).context("Failed to set up the terminal")?;
        let res = self.play();

        if let Err(e) = self.term.restore() {
            error!("Failed to restore the terminal: {}", e);
            return res.and(Err(e).context("Failed to restore the terminal"));
        }

        res
    }

    ///////////////////////////////////////////////////////////////////////////

    fn play(&mut self) -> Result<()> {
        let tick_interval = self.config.tick_interval();
        let mut next_tick = Instant::now() + tick_interval;
        let mut dir_change: Option<Direction> = None;

        self.renderer.draw_full(&mut self.term, &self.round.snapshot())?;
        self.draw_status()?;

        loop {
            let timeout = next_tick.saturating_duration_since(Instant::now());

            for key_ev in self.term.read_key_events(timeout)? {
                match map_key(&key_ev) {
                    KeyAction::Turn(dir) => dir_change = Some(dir),
                    KeyAction::TogglePause => self.toggle_pause()?,
                    KeyAction::Restart => {
                        self.paused = false;
                        dir_change = None;
                        self.round.restart();
                        self.renderer.draw_full(&mut self.term, &self.round.snapshot())?;
                        self.draw_status()?;
                    },
                    KeyAction::Quit => {
                        info!("Quit after {} round(s)", self.round.rounds_played());
                        return Ok(());
                    },
                    KeyAction::None => {},
                }
            }

            let now = Instant::now();
            if now < next_tick { continue; }
            next_tick = now + tick_interval;

            if self.paused { continue; }

            let snap = self.round.tick(dir_change.take());
            self.renderer.draw(&mut self.term, &snap)?;
            self.draw_status()?;
        }
    }

    fn draw_status(&mut self) -> Result<()> {
        let status = format!("Length {}  Round {}   {}",
                             self.round.snake().body().len(), self.round.rounds_played(), CONTROLS);
        self.renderer.draw_status(&mut self.term, &status)?;
        Ok(())
    }

    fn toggle_pause(&mut self) -> Result<()> {
        if !self.paused {
            info!("Paused");
            self.term.show_message(&["Paused", "Press Esc or p to resume", "or q to quit"])?;
        } else {
            info!("Resumed");
            self.term.hide_message()?;
        }

        self.paused = !self.paused;
        Ok(())
    }
}
