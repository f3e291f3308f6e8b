// main.rs - Interactive Conway's Game of Life

use std::time::{Duration, Instant};

use eframe::egui;
use egui::Color32;
use log::{debug, info};

mod grid;
mod ui;

use grid::{Cell, Grid};

/// Delay between simulation ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Fraction of cells seeded alive by Random.
pub const RANDOM_ALIVE_PROBABILITY: f64 = 0.2;

/// Grid size bounds exposed on the slider. Size changes only apply while
/// the simulation is stopped.
pub const MIN_GRID_SIZE: usize = 30;
pub const MAX_GRID_SIZE: usize = 64;
pub const DEFAULT_GRID_SIZE: usize = 30;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 920.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(LifeApp::default())),
    )
}

/// The owned simulation state: one grid, one running flag, one timer.
///
/// Ticks are driven by the repaint loop: each frame checks whether the
/// tick interval has elapsed since the last step. User input (toggles,
/// buttons, the size slider) interleaves with ticks on the same
/// single-threaded event loop, so no locking is needed.
pub struct LifeApp {
    grid: Grid,
    generation: u32,
    running: bool,
    last_tick: Instant,
    size: usize,
    live_color: Color32,
    dead_color: Color32,
}

impl Default for LifeApp {
    fn default() -> Self {
        Self {
            grid: Grid::new(DEFAULT_GRID_SIZE, Cell::Dead),
            generation: 0,
            running: false,
            last_tick: Instant::now(),
            size: DEFAULT_GRID_SIZE,
            live_color: Color32::from_rgb(232, 62, 140),
            dead_color: Color32::from_rgb(40, 40, 40),
        }
    }
}

impl LifeApp {
    /// Advances one tick if the interval has elapsed. The running flag is
    /// checked at the top, so a stop request takes effect no later than
    /// the start of the next tick.
    fn maybe_tick(&mut self, now: Instant) {
        if !self.running {
            return;
        }
        if now.duration_since(self.last_tick) < TICK_INTERVAL {
            return;
        }
        self.step();
        self.last_tick = now;
    }

    /// One simulation step: replace the grid with its next generation.
    fn step(&mut self) {
        self.grid = self.grid.next_generation();
        self.generation += 1;
    }

    fn start(&mut self) {
        self.running = true;
        self.last_tick = Instant::now();
        info!("simulation started at generation {}", self.generation);
    }

    fn stop(&mut self) {
        self.running = false;
        info!("simulation stopped at generation {}", self.generation);
    }

    /// Kills every cell and resets the generation counter.
    fn clear(&mut self) {
        self.grid = Grid::new(self.size, Cell::Dead);
        self.generation = 0;
        debug!("grid cleared");
    }

    /// Reseeds the grid randomly and resets the generation counter.
    fn randomize(&mut self) {
        self.grid = Grid::random(self.size, RANDOM_ALIVE_PROBABILITY, &mut rand::thread_rng());
        self.generation = 0;
        debug!("grid randomized, population {}", self.grid.population());
    }

    /// Applies a new grid size. Prior cell contents are discarded and the
    /// generation counter resets to 0.
    fn resize(&mut self, size: usize) {
        self.size = size;
        self.grid = Grid::new(size, Cell::Dead);
        self.generation = 0;
        debug!("grid resized to {size}x{size}");
    }

    /// Flips a single cell. A toggle landing between two ticks simply
    /// changes the grid value the next tick will read.
    fn toggle_cell(&mut self, row: usize, col: usize) {
        let value = self.grid.get(row, col).toggled();
        self.grid = self.grid.with_cell(row, col, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elapsed_instant() -> Instant {
        Instant::now() - TICK_INTERVAL
    }

    #[test]
    fn step_increments_generation() {
        let mut app = LifeApp::default();
        app.step();
        app.step();
        assert_eq!(app.generation, 2);
    }

    #[test]
    fn tick_is_ignored_while_stopped() {
        let mut app = LifeApp::default();
        app.toggle_cell(1, 1);
        app.last_tick = elapsed_instant();
        app.maybe_tick(Instant::now());
        assert_eq!(app.generation, 0);
        assert!(app.grid.get(1, 1).is_alive());
    }

    #[test]
    fn tick_steps_once_interval_elapses() {
        let mut app = LifeApp::default();
        app.start();
        app.last_tick = elapsed_instant();
        app.maybe_tick(Instant::now());
        assert_eq!(app.generation, 1);
    }

    #[test]
    fn tick_waits_for_interval() {
        let mut app = LifeApp::default();
        app.start();
        let now = app.last_tick;
        app.maybe_tick(now);
        assert_eq!(app.generation, 0);
    }

    #[test]
    fn stop_halts_the_generation_counter() {
        let mut app = LifeApp::default();
        app.start();
        app.last_tick = elapsed_instant();
        app.maybe_tick(Instant::now());
        app.stop();
        app.last_tick = elapsed_instant();
        app.maybe_tick(Instant::now());
        assert_eq!(app.generation, 1);
    }

    #[test]
    fn resize_clears_cells_and_resets_generation() {
        let mut app = LifeApp::default();
        app.toggle_cell(0, 0);
        app.toggle_cell(5, 5);
        app.step();

        app.resize(40);
        assert_eq!(app.grid.size(), 40);
        assert_eq!(app.grid.population(), 0);
        assert_eq!(app.generation, 0);
    }

    #[test]
    fn clear_resets_grid_and_generation() {
        let mut app = LifeApp::default();
        app.randomize();
        app.step();
        app.clear();
        assert_eq!(app.grid.population(), 0);
        assert_eq!(app.generation, 0);
        assert_eq!(app.grid.size(), DEFAULT_GRID_SIZE);
    }

    #[test]
    fn toggle_twice_restores_cell() {
        let mut app = LifeApp::default();
        app.toggle_cell(3, 4);
        assert!(app.grid.get(3, 4).is_alive());
        app.toggle_cell(3, 4);
        assert!(!app.grid.get(3, 4).is_alive());
    }
}
