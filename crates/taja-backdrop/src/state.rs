//! Backdrop state management.

use ratatui::{
    Frame,
    text::{Line, Span},
    widgets::Paragraph,
};
use taja_core::BackdropSettings;

use crate::animations::{leaves, stars};

/// Backdrop state: the star field plus the live leaf drift.
///
/// Layer toggles are captured once at construction; a layer disabled
/// there never starts, and nothing re-checks while the app runs.
#[derive(Debug)]
pub struct BackdropState {
    /// Layer toggles and star count.
    settings: BackdropSettings,
    /// Scattered stars, built on the first advance and kept for good.
    stars: Vec<stars::Star>,
    /// Whether the star field has been built.
    stars_built: bool,
    /// Currently live leaves.
    leaves: Vec<leaves::Leaf>,
    /// Number of leaves spawned so far.
    leaf_ordinal: usize,
    /// Elapsed-time stamp of the most recent leaf spawn slot.
    last_spawn_ms: u64,
    /// Seed captured at initialization for randomness.
    init_seed: u64,
}

impl BackdropState {
    /// Create a backdrop seeded from the system clock.
    pub fn new(settings: BackdropSettings) -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        let init_seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);

        Self::with_seed(settings, init_seed)
    }

    /// Create a backdrop with a fixed seed.
    pub fn with_seed(settings: BackdropSettings, init_seed: u64) -> Self {
        Self {
            settings,
            stars: Vec::new(),
            stars_built: false,
            leaves: Vec::new(),
            leaf_ordinal: 0,
            last_spawn_ms: 0,
            init_seed,
        }
    }

    /// Advance the backdrop to the given elapsed time: build the star
    /// field on the first call, spawn due leaves, expire dead ones.
    ///
    /// Spawn slots derive from elapsed time (one leaf per full interval),
    /// so a stalled frame catches up instead of dropping spawns.
    pub fn advance(&mut self, elapsed_ms: u64) {
        if self.settings.stars && !self.stars_built {
            self.stars = stars::init_field(self.settings.star_count, self.init_seed);
            self.stars_built = true;
        }

        if self.settings.leaves {
            while elapsed_ms.saturating_sub(self.last_spawn_ms) >= leaves::SPAWN_INTERVAL_MS {
                self.last_spawn_ms += leaves::SPAWN_INTERVAL_MS;
                self.leaves.push(leaves::spawn(
                    self.init_seed,
                    self.leaf_ordinal,
                    self.last_spawn_ms,
                ));
                self.leaf_ordinal += 1;
            }
        }

        leaves::expire(&mut self.leaves, elapsed_ms);
    }

    /// Render the backdrop across the whole frame.
    pub fn render(&mut self, frame: &mut Frame, elapsed_ms: u64) {
        self.advance(elapsed_ms);

        let area = frame.area();
        let (width, height) = (area.width, area.height);
        if width == 0 || height == 0 {
            return;
        }

        let mut grid: Vec<Vec<Span>> =
            vec![vec![Span::raw(" "); width as usize]; height as usize];

        for star in &self.stars {
            if let Some((x, y, span)) = stars::plot(star, elapsed_ms, width, height) {
                grid[y as usize][x as usize] = span;
            }
        }
        // Leaves drift in front of the stars
        for leaf in &self.leaves {
            if let Some((x, y, span)) = leaves::plot(leaf, elapsed_ms, width, height) {
                grid[y as usize][x as usize] = span;
            }
        }

        let lines: Vec<Line> = grid.into_iter().map(Line::from).collect();
        frame.render_widget(Paragraph::new(lines), area);
    }
}
