//! Star field (built once, never torn down).
//!
//! Stars are scattered at fractional positions so a terminal resize
//! rescales the same field instead of regenerating it. Each star holds
//! at the dimmest tier until its start delay has elapsed, then steps
//! through brightness tiers on a fixed twinkle period.

use ratatui::{
    style::{Color, Style},
    text::Span,
};

use crate::chars::STAR_CHARS;
use crate::seed::range_f32;

/// Upper bound (exclusive) for a star's twinkle start delay.
pub const MAX_DELAY_MS: u64 = 4000;
/// Period of one twinkle step.
pub const TWINKLE_PERIOD_MS: u64 = 2000;

/// A single scattered star.
#[derive(Debug, Clone)]
pub struct Star {
    /// Horizontal position as a percentage of the area width.
    pub x_pct: f32,
    /// Vertical position as a percentage of the area height.
    pub y_pct: f32,
    /// Delay before the twinkle cycle starts.
    pub delay_ms: u64,
    /// Seed for character and brightness selection.
    pub char_seed: usize,
}

/// Scatter the star field. Runs exactly once per backdrop.
pub fn init_field(count: u16, init_seed: u64) -> Vec<Star> {
    (0..count)
        .map(|i| {
            let seed = (init_seed as usize).wrapping_add((i as usize).wrapping_mul(31));
            Star {
                x_pct: range_f32(seed, 3, 0.0, 100.0),
                y_pct: range_f32(seed, 5, 0.0, 100.0),
                delay_ms: range_f32(seed, 9, 0.0, MAX_DELAY_MS as f32) as u64,
                char_seed: seed.wrapping_mul(17),
            }
        })
        .collect()
}

/// The cell and styled character for a star at this frame.
pub fn plot(
    star: &Star,
    elapsed_ms: u64,
    width: u16,
    height: u16,
) -> Option<(u16, u16, Span<'static>)> {
    if width == 0 || height == 0 {
        return None;
    }

    let x = ((star.x_pct / 100.0 * width as f32) as u16).min(width - 1);
    let y = ((star.y_pct / 100.0 * height as f32) as u16).min(height - 1);

    let ch = STAR_CHARS[star.char_seed % STAR_CHARS.len()];

    let color = if elapsed_ms < star.delay_ms {
        Color::Rgb(60, 60, 80)
    } else {
        let frame_num = (elapsed_ms - star.delay_ms) / TWINKLE_PERIOD_MS;
        match star.char_seed.wrapping_add(frame_num as usize) % 3 {
            0 => Color::Rgb(60, 60, 80),    // Dim
            1 => Color::Rgb(100, 100, 140), // Medium
            _ => Color::Rgb(150, 150, 200), // Bright
        }
    };

    Some((x, y, Span::styled(ch.to_string(), Style::new().fg(color))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_has_requested_count() {
        assert_eq!(init_field(100, 1).len(), 100);
        assert_eq!(init_field(0, 1).len(), 0);
        assert_eq!(init_field(500, 99).len(), 500);
    }

    #[test]
    fn test_star_attributes_stay_in_range() {
        for star in init_field(500, 0xBEEF) {
            assert!((0.0..100.0).contains(&star.x_pct));
            assert!((0.0..100.0).contains(&star.y_pct));
            assert!(star.delay_ms < MAX_DELAY_MS);
        }
    }

    #[test]
    fn test_field_is_deterministic_per_seed() {
        let a = init_field(50, 1234);
        let b = init_field(50, 1234);
        for (left, right) in a.iter().zip(&b) {
            assert_eq!(left.x_pct, right.x_pct);
            assert_eq!(left.y_pct, right.y_pct);
            assert_eq!(left.delay_ms, right.delay_ms);
        }
    }

    #[test]
    fn test_plot_stays_in_area() {
        for star in init_field(200, 7) {
            for elapsed in [0, 1000, 5000, 60_000] {
                let (x, y, _) = plot(&star, elapsed, 120, 40).unwrap();
                assert!(x < 120);
                assert!(y < 40);
            }
        }
    }

    #[test]
    fn test_plot_empty_area_draws_nothing() {
        let field = init_field(1, 7);
        assert!(plot(&field[0], 0, 0, 40).is_none());
        assert!(plot(&field[0], 0, 120, 0).is_none());
    }
}
