//! Falling-leaf drift (stateful).
//!
//! A leaf spawns on a fixed interval, falls the height of the area over
//! its own randomized duration, and is removed after a fixed lifetime
//! whether or not the fall has finished.

use ratatui::{
    style::{Color, Style},
    text::Span,
};

use crate::chars::LEAF_CHARS;
use crate::seed::{range_f32, unit};

/// Milliseconds between leaf spawns.
pub const SPAWN_INTERVAL_MS: u64 = 2000;
/// Milliseconds a leaf lives before it is removed, fallen or not.
pub const LIFETIME_MS: u64 = 10_000;
/// Shortest fall duration, top edge to bottom edge.
pub const FALL_MS_MIN: u64 = 7000;
/// Longest fall duration (exclusive).
pub const FALL_MS_MAX: u64 = 10_000;

/// Horizontal sway period.
const SWAY_PERIOD_MS: f32 = 3000.0;

/// State for a single drifting leaf.
#[derive(Debug, Clone)]
pub struct Leaf {
    /// Horizontal position as a percentage of the area width.
    pub x_pct: f32,
    /// Total fall duration, top edge to bottom edge.
    pub fall_ms: u64,
    /// Elapsed-time stamp at which this leaf appeared.
    pub spawned_at_ms: u64,
    /// Phase offset for the horizontal sway.
    pub sway_phase: f32,
    /// Seed for character and tint selection.
    pub char_seed: usize,
}

/// Create a leaf whose attributes derive from the init seed and the
/// spawn ordinal.
pub fn spawn(init_seed: u64, ordinal: usize, spawned_at_ms: u64) -> Leaf {
    let seed = (init_seed as usize).wrapping_add(ordinal.wrapping_mul(31));
    Leaf {
        x_pct: range_f32(seed, 7, 0.0, 100.0),
        fall_ms: range_f32(seed, 11, FALL_MS_MIN as f32, FALL_MS_MAX as f32) as u64,
        spawned_at_ms,
        sway_phase: unit(seed, 13),
        char_seed: seed.wrapping_mul(19),
    }
}

/// Drop every leaf that has outlived the fixed lifetime.
pub fn expire(leaves: &mut Vec<Leaf>, elapsed_ms: u64) {
    leaves.retain(|leaf| elapsed_ms.saturating_sub(leaf.spawned_at_ms) < LIFETIME_MS);
}

/// The cell and styled character for a leaf at this frame, or `None`
/// once its fall has carried it past the bottom edge.
pub fn plot(
    leaf: &Leaf,
    elapsed_ms: u64,
    width: u16,
    height: u16,
) -> Option<(u16, u16, Span<'static>)> {
    if width == 0 || height == 0 {
        return None;
    }

    let age = elapsed_ms.saturating_sub(leaf.spawned_at_ms);
    let progress = age as f32 / leaf.fall_ms.max(1) as f32;
    if progress >= 1.0 {
        return None;
    }

    // Sway around the spawn column while falling
    let sway = ((elapsed_ms as f32 / SWAY_PERIOD_MS + leaf.sway_phase)
        * 2.0
        * std::f32::consts::PI)
        .sin()
        * 1.5;

    let x = (leaf.x_pct / 100.0 * width as f32 + sway).clamp(0.0, (width - 1) as f32) as u16;
    let y = (progress * height as f32) as u16;
    if y >= height {
        return None;
    }

    let ch = LEAF_CHARS[leaf.char_seed % LEAF_CHARS.len()];

    // Tint per leaf: late-summer green, olive, autumn gold
    let color = match leaf.char_seed % 3 {
        0 => Color::Rgb(95, 160, 70),
        1 => Color::Rgb(150, 160, 60),
        _ => Color::Rgb(200, 150, 50),
    };

    Some((x, y, Span::styled(ch.to_string(), Style::new().fg(color))))
}
