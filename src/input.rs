//! Terminal input: raw key events to per-tick input snapshots
//!
//! The simulation only ever sees three booleans. This tracker owns the
//! translation from crossterm key events, including the terminal quirk that
//! most terminals report key repeats rather than releases: each press or
//! repeat arms a control for a short window of ticks, and repeats keep it
//! armed while the key stays down. Terminals that do report releases
//! (kitty protocol) clear the window immediately.

use crossterm::event::{Event, KeyCode, KeyEventKind};

use crate::sim::InputSnapshot;

/// Ticks a control stays armed after a press/repeat event
pub const HOLD_TICKS: u8 = 6;

/// Accumulates key events between ticks and samples them once per tick
#[derive(Debug, Default)]
pub struct KeyTracker {
    left: u8,
    right: u8,
    jump: u8,
    quit: bool,
    toggle_autopilot: bool,
}

impl KeyTracker {
    /// Fold one terminal event into the tracker. Unrecognized keys and
    /// non-key events are ignored.
    pub fn handle(&mut self, event: &Event) {
        let Event::Key(key) = event else { return };
        let armed = match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => HOLD_TICKS,
            KeyEventKind::Release => 0,
        };
        match key.code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => self.left = armed,
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => self.right = armed,
            KeyCode::Up | KeyCode::Char(' ') | KeyCode::Char('w') | KeyCode::Char('W') => {
                self.jump = armed
            }
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                if key.kind != KeyEventKind::Release {
                    self.quit = true;
                }
            }
            KeyCode::Char('i') | KeyCode::Char('I') => {
                if key.kind != KeyEventKind::Release {
                    self.toggle_autopilot = true;
                }
            }
            _ => {}
        }
    }

    /// Sample the controls for one tick and decay the hold windows
    pub fn sample(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot {
            left: self.left > 0,
            right: self.right > 0,
            jump: self.jump > 0,
        };
        self.left = self.left.saturating_sub(1);
        self.right = self.right.saturating_sub(1);
        self.jump = self.jump.saturating_sub(1);
        snapshot
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Consume a pending autopilot toggle
    pub fn take_autopilot_toggle(&mut self) -> bool {
        std::mem::take(&mut self.toggle_autopilot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn release(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new_with_kind(
            code,
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ))
    }

    #[test]
    fn test_press_arms_for_hold_window() {
        let mut keys = KeyTracker::default();
        keys.handle(&press(KeyCode::Left));

        for _ in 0..HOLD_TICKS {
            assert!(keys.sample().left);
        }
        assert!(!keys.sample().left);
    }

    #[test]
    fn test_repeat_refreshes_the_window() {
        let mut keys = KeyTracker::default();
        keys.handle(&press(KeyCode::Right));
        for _ in 0..3 {
            keys.sample();
        }
        keys.handle(&press(KeyCode::Right));
        for _ in 0..HOLD_TICKS {
            assert!(keys.sample().right);
        }
        assert!(!keys.sample().right);
    }

    #[test]
    fn test_release_clears_immediately() {
        let mut keys = KeyTracker::default();
        keys.handle(&press(KeyCode::Char(' ')));
        assert!(keys.sample().jump);
        keys.handle(&release(KeyCode::Char(' ')));
        assert!(!keys.sample().jump);
    }

    #[test]
    fn test_unrecognized_keys_are_ignored() {
        let mut keys = KeyTracker::default();
        keys.handle(&press(KeyCode::Char('z')));
        keys.handle(&press(KeyCode::Tab));
        assert_eq!(keys.sample(), InputSnapshot::default());
        assert!(!keys.quit_requested());
    }

    #[test]
    fn test_quit_and_autopilot_toggle() {
        let mut keys = KeyTracker::default();
        keys.handle(&press(KeyCode::Char('i')));
        assert!(keys.take_autopilot_toggle());
        assert!(!keys.take_autopilot_toggle());

        keys.handle(&press(KeyCode::Char('q')));
        assert!(keys.quit_requested());
    }
}
