//! Typewriter state machine for the banner's rotating role line.
//!
//! The machine owns the role list and the cursor state, and advances by
//! exactly one character per tick. It never sleeps and never schedules:
//! `tick` returns the delay until the next tick and the caller owns the
//! timing, so the transition logic runs under test without real timers.

use std::time::Duration;

/// Delay between characters while typing.
pub const TYPE_DELAY: Duration = Duration::from_millis(100);
/// Delay between characters while deleting.
pub const DELETE_DELAY: Duration = Duration::from_millis(50);
/// Hold time once a role is fully typed.
pub const FULL_PAUSE: Duration = Duration::from_millis(2000);
/// Hold time once the line is empty, before the next role types in.
pub const EMPTY_PAUSE: Duration = Duration::from_millis(500);

/// State for the rotating role line.
///
/// Roles are visited in order, wrapping around indefinitely. The
/// character index counts `char`s, never bytes, so roles containing
/// emoji stay on character boundaries.
#[derive(Debug, Clone)]
pub struct Typewriter {
    /// Roles displayed in order, cyclically.
    roles: Vec<String>,
    /// Index of the role currently being typed or deleted.
    role_idx: usize,
    /// Number of characters of the current role on display.
    char_idx: usize,
    /// Direction flag: deleting when true, typing when false.
    deleting: bool,
    /// The currently displayed prefix of the current role.
    text: String,
}

impl Typewriter {
    /// Create a typewriter over the given roles, starting empty on role 0.
    pub fn new(roles: Vec<String>) -> Self {
        Self {
            roles,
            role_idx: 0,
            char_idx: 0,
            deleting: false,
            text: String::new(),
        }
    }

    /// The currently displayed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Advance by exactly one character in the current direction and
    /// return the delay until the next tick.
    ///
    /// With an empty role list the state is left untouched and the
    /// full-text pause is returned.
    pub fn tick(&mut self) -> Duration {
        let Some(role) = self.roles.get(self.role_idx) else {
            return FULL_PAUSE;
        };
        let len = role.chars().count();

        if self.deleting {
            self.char_idx = self.char_idx.saturating_sub(1);
        } else {
            self.char_idx = (self.char_idx + 1).min(len);
        }
        self.text = role.chars().take(self.char_idx).collect();

        if !self.deleting && self.char_idx == len {
            self.deleting = true;
            FULL_PAUSE
        } else if self.deleting && self.char_idx == 0 {
            self.deleting = false;
            self.role_idx = (self.role_idx + 1) % self.roles.len();
            EMPTY_PAUSE
        } else if self.deleting {
            DELETE_DELAY
        } else {
            TYPE_DELAY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typewriter(roles: &[&str]) -> Typewriter {
        Typewriter::new(roles.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_two_role_cycle() {
        let mut tw = typewriter(&["A", "BB"]);

        // "A" types in one tick, then holds
        assert_eq!(tw.tick(), FULL_PAUSE);
        assert_eq!(tw.text(), "A");

        // one tick deletes it and advances to the next role
        assert_eq!(tw.tick(), EMPTY_PAUSE);
        assert_eq!(tw.text(), "");

        // "BB" types in two ticks
        assert_eq!(tw.tick(), TYPE_DELAY);
        assert_eq!(tw.text(), "B");
        assert_eq!(tw.tick(), FULL_PAUSE);
        assert_eq!(tw.text(), "BB");

        // and deletes in two
        assert_eq!(tw.tick(), DELETE_DELAY);
        assert_eq!(tw.text(), "B");
        assert_eq!(tw.tick(), EMPTY_PAUSE);
        assert_eq!(tw.text(), "");

        // role index wrapped back to the first role
        assert_eq!(tw.tick(), FULL_PAUSE);
        assert_eq!(tw.text(), "A");
    }

    #[test]
    fn test_roles_visited_in_order() {
        let mut tw = typewriter(&["alpha", "beta", "gamma"]);
        let mut completed = Vec::new();

        while completed.len() < 5 {
            if tw.tick() == FULL_PAUSE {
                completed.push(tw.text().to_string());
            }
        }

        assert_eq!(completed, ["alpha", "beta", "gamma", "alpha", "beta"]);
    }

    #[test]
    fn test_length_monotonic_per_direction() {
        let mut tw = typewriter(&["monotonic"]);
        let len = "monotonic".len();

        let mut prev = 0;
        loop {
            let delay = tw.tick();
            let shown = tw.text().chars().count();
            assert!(shown >= prev);
            assert!(shown <= len);
            prev = shown;
            if delay == FULL_PAUSE {
                break;
            }
        }
        assert_eq!(prev, len);

        // exactly `len` strictly-decreasing ticks back to empty
        for expected in (0..len).rev() {
            tw.tick();
            assert_eq!(tw.text().chars().count(), expected);
        }
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_char_boundaries_with_emoji() {
        let role = "AI & ML 🤖";
        let chars = role.chars().count();
        let mut tw = typewriter(&[role]);

        for shown in 1..=chars {
            tw.tick();
            let expected: String = role.chars().take(shown).collect();
            assert_eq!(tw.text(), expected);
        }
        assert_eq!(tw.text(), role);
    }

    #[test]
    fn test_per_character_delays() {
        let mut tw = typewriter(&["abc"]);
        assert_eq!(tw.tick(), TYPE_DELAY);
        assert_eq!(tw.tick(), TYPE_DELAY);
        assert_eq!(tw.tick(), FULL_PAUSE);
        assert_eq!(tw.tick(), DELETE_DELAY);
        assert_eq!(tw.tick(), DELETE_DELAY);
        assert_eq!(tw.tick(), EMPTY_PAUSE);
    }

    #[test]
    fn test_empty_role_list_is_a_no_op() {
        let mut tw = typewriter(&[]);
        assert_eq!(tw.tick(), FULL_PAUSE);
        assert_eq!(tw.tick(), FULL_PAUSE);
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_single_role_loops() {
        let mut tw = typewriter(&["hi"]);
        for _ in 0..3 {
            assert_eq!(tw.tick(), TYPE_DELAY);
            assert_eq!(tw.tick(), FULL_PAUSE);
            assert_eq!(tw.text(), "hi");
            assert_eq!(tw.tick(), DELETE_DELAY);
            assert_eq!(tw.tick(), EMPTY_PAUSE);
            assert_eq!(tw.text(), "");
        }
    }
}
